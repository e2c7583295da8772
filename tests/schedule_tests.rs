use chrono::NaiveTime;
use wedplanner::core::calculator::schedule::{
    SlotEdit, TimeSlot, duration_minutes, end_time_from, format_duration, parse_duration,
    parse_duration_input,
};

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[test]
fn test_end_from_duration_inverts_duration_for_every_pair() {
    // every quarter hour against every quarter hour, 96 × 96 pairs
    let times: Vec<NaiveTime> = (0..96)
        .map(|q| NaiveTime::from_hms_opt(q / 4, (q % 4) * 15, 0).unwrap())
        .collect();

    for &start in &times {
        for &end in &times {
            let d = duration_minutes(start, end);
            assert!((0..1440).contains(&d), "{start} → {end} gave {d}");
            assert_eq!(end_time_from(start, d), end, "{start} → {end}");
        }
    }
}

#[test]
fn test_overnight_duration() {
    let d = duration_minutes(t("23:00"), t("01:00"));
    assert_eq!(d, 120);
    assert_eq!(format_duration(d), "2h 0m");
}

#[test]
fn test_same_start_and_end_is_zero() {
    assert_eq!(duration_minutes(t("14:30"), t("14:30")), 0);
    assert_eq!(format_duration(0), "0h 0m");
}

#[test]
fn test_end_from_duration() {
    assert_eq!(end_time_from(t("09:00"), 90), t("10:30"));
    assert_eq!(end_time_from(t("22:30"), 120), t("00:30"));
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(90), "1h 30m");
    assert_eq!(format_duration(45), "0h 45m");
    assert_eq!(format_duration(1439), "23h 59m");
}

#[test]
fn test_parse_duration_forms() {
    assert_eq!(parse_duration("2h 0m"), Some(120));
    assert_eq!(parse_duration("1h 30m"), Some(90));
    assert_eq!(parse_duration("90 mins"), Some(90));
    assert_eq!(parse_duration("45mins"), Some(45));
    assert_eq!(parse_duration("3h"), Some(180));
    assert_eq!(parse_duration("15m"), Some(15));
    assert_eq!(parse_duration("75"), Some(75));

    assert_eq!(parse_duration(""), None);
    assert_eq!(parse_duration("h"), None);
    assert_eq!(parse_duration("soon"), None);
    assert_eq!(parse_duration("-5"), None);
}

#[test]
fn test_parse_duration_input_rejects_a_full_day() {
    assert_eq!(parse_duration_input("23h 59m").unwrap(), 1439);
    assert!(parse_duration_input("24h").is_err());
    assert!(parse_duration_input("1500").is_err());
}

#[test]
fn test_slot_edits_recompute_the_dependent_field() {
    let slot = TimeSlot::from_duration(t("09:00"), 60).unwrap();
    assert_eq!(slot.end, t("10:00"));

    let by_end = slot.apply(SlotEdit::End(t("11:15"))).unwrap();
    assert_eq!(by_end.start, t("09:00"));
    assert_eq!(by_end.duration, 135);

    let by_duration = slot.apply(SlotEdit::Duration(90)).unwrap();
    assert_eq!(by_duration.end, t("10:30"));

    let by_start = slot.apply(SlotEdit::Start(t("23:30"))).unwrap();
    assert_eq!(by_start.duration, 60);
    assert_eq!(by_start.end, t("00:30"));
    assert!(by_start.crosses_midnight());

    for s in [by_end, by_duration, by_start] {
        assert!(s.is_consistent(), "{s:?}");
    }
}

#[test]
fn test_slot_edit_with_invalid_duration_fails() {
    let slot = TimeSlot::from_end(t("20:00"), t("21:00"));
    assert!(slot.apply(SlotEdit::Duration(1440)).is_err());
    assert!(slot.apply(SlotEdit::Duration(-1)).is_err());
}
