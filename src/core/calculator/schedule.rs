//! Time arithmetic for timeline events.
//!
//! A timeline slot is the triple (start, end, duration) with the invariant
//! `end = start + duration (mod 24h)`. Editing one field recomputes the
//! dependent one; an end earlier than the start means the slot crosses
//! midnight.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::OnceLock;

pub const MINUTES_PER_DAY: i64 = 1440;

/// Minutes elapsed since midnight (seconds are ignored).
pub fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

fn time_from_minute_of_day(minutes: i64) -> NaiveTime {
    let m = minutes.rem_euclid(MINUTES_PER_DAY) as u32;
    // m < 1440, so hour < 24 and minute < 60
    NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Elapsed minutes from `start` to `end`, wrapping over midnight.
///
/// `23:00 → 01:00` is 120 minutes; equal times give 0.
pub fn duration_minutes(start: NaiveTime, end: NaiveTime) -> i64 {
    (minute_of_day(end) - minute_of_day(start) + MINUTES_PER_DAY) % MINUTES_PER_DAY
}

/// End time reached `minutes` after `start`, wrapping over midnight.
pub fn end_time_from(start: NaiveTime, minutes: i64) -> NaiveTime {
    time_from_minute_of_day(minute_of_day(start) + minutes)
}

/// Canonical display form: `"2h 0m"`, `"1h 30m"`, `"0h 45m"`.
pub fn format_duration(minutes: i64) -> String {
    let m = minutes.max(0);
    format!("{}h {}m", m / 60, m % 60)
}

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(?P<h>\d+)\s*h)?\s*(?:(?P<m>\d+)\s*(?:m|min|mins|minutes)?)?$")
            .expect("static duration pattern")
    })
}

/// Parse a duration in minutes.
///
/// Accepts the canonical `"Xh Ym"`, the older `"N mins"` / `"Nmins"` form,
/// `"Nh"`, `"Nm"` and a bare number of minutes.
pub fn parse_duration(input: &str) -> Option<i64> {
    let s = input.trim().to_ascii_lowercase();
    if s.is_empty() {
        return None;
    }

    let caps = duration_regex().captures(&s)?;
    let hours = caps.name("h").map(|h| h.as_str().parse::<i64>());
    let mins = caps.name("m").map(|m| m.as_str().parse::<i64>());

    match (hours, mins) {
        (None, None) => None,
        (h, m) => {
            let h = h.transpose().ok()?.unwrap_or(0);
            let m = m.transpose().ok()?.unwrap_or(0);
            h.checked_mul(60)?.checked_add(m)
        }
    }
}

/// Reject durations that cannot be represented inside one day.
pub fn validate_duration(minutes: i64) -> AppResult<i64> {
    if (0..MINUTES_PER_DAY).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(AppError::InvalidDuration(format!(
            "{} minutes (must be between 0 and {})",
            minutes,
            MINUTES_PER_DAY - 1
        )))
    }
}

/// Parse and validate a duration given on the command line.
pub fn parse_duration_input(input: &str) -> AppResult<i64> {
    let minutes =
        parse_duration(input).ok_or_else(|| AppError::InvalidDuration(input.to_string()))?;
    validate_duration(minutes)
}

/// One edited field of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotEdit {
    Start(NaiveTime),
    End(NaiveTime),
    Duration(i64),
}

/// A consistent (start, end, duration) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration: i64,
}

impl TimeSlot {
    pub fn from_end(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end,
            duration: duration_minutes(start, end),
        }
    }

    pub fn from_duration(start: NaiveTime, minutes: i64) -> AppResult<Self> {
        let duration = validate_duration(minutes)?;
        Ok(Self {
            start,
            end: end_time_from(start, duration),
            duration,
        })
    }

    /// Apply one edit and recompute the dependent field.
    ///
    /// - end edited → duration recomputed, start untouched
    /// - duration edited → end recomputed, start untouched
    /// - start edited → end shifted so the duration is kept
    pub fn apply(self, edit: SlotEdit) -> AppResult<Self> {
        match edit {
            SlotEdit::End(end) => Ok(Self::from_end(self.start, end)),
            SlotEdit::Duration(minutes) => Self::from_duration(self.start, minutes),
            SlotEdit::Start(start) => Self::from_duration(start, self.duration),
        }
    }

    pub fn is_consistent(&self) -> bool {
        (0..MINUTES_PER_DAY).contains(&self.duration)
            && end_time_from(self.start, self.duration) == self.end
    }

    pub fn crosses_midnight(&self) -> bool {
        minute_of_day(self.start) + self.duration >= MINUTES_PER_DAY
    }
}
