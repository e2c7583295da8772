mod common;
use common::open_pool;
use wedplanner::core::guests::{GuestFilter, GuestLogic};
use wedplanner::core::seating::SeatingLogic;
use wedplanner::db::queries::guests::get_guest;
use wedplanner::db::queries::tables::get_table;

const OWNER: &str = "tester";

#[test]
fn test_delete_table_unassigns_its_guests() {
    let mut pool = open_pool("seating_delete_table");
    GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap();

    let anna = GuestLogic::add(&mut pool, OWNER, "Anna", "Family").unwrap();
    let marco = GuestLogic::add(&mut pool, OWNER, "Marco", "Friends").unwrap();
    let sara = GuestLogic::add(&mut pool, OWNER, "Sara", "Friends").unwrap();

    let t1 = SeatingLogic::add_table(&mut pool, OWNER, "Table 1").unwrap();
    let t2 = SeatingLogic::add_table(&mut pool, OWNER, "Table 2").unwrap();

    SeatingLogic::assign_guest(&mut pool, OWNER, anna.id, t1.id).unwrap();
    SeatingLogic::assign_guest(&mut pool, OWNER, marco.id, t1.id).unwrap();
    SeatingLogic::assign_guest(&mut pool, OWNER, sara.id, t2.id).unwrap();

    let (deleted, mut unseated) = SeatingLogic::delete_table(&mut pool, OWNER, t1.id).unwrap();
    unseated.sort();

    assert_eq!(deleted.name, "Table 1");
    assert_eq!(unseated, vec![anna.id, marco.id]);
    assert!(get_table(&pool.conn, t1.id, OWNER).unwrap().is_none());

    for id in [anna.id, marco.id] {
        let g = get_guest(&pool.conn, id, OWNER).unwrap().unwrap();
        assert_eq!(g.table_id, None);
    }
    let sara = get_guest(&pool.conn, sara.id, OWNER).unwrap().unwrap();
    assert_eq!(sara.table_id, Some(t2.id));
}

#[test]
fn test_assign_missing_guest_is_rejected_and_changes_nothing() {
    let mut pool = open_pool("seating_assign_missing_guest");
    GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap();

    let anna = GuestLogic::add(&mut pool, OWNER, "Anna", "Family").unwrap();
    let t1 = SeatingLogic::add_table(&mut pool, OWNER, "Table 1").unwrap();

    let err = SeatingLogic::assign_guest(&mut pool, OWNER, 999, t1.id).unwrap_err();
    assert!(err.to_string().contains("Guest #999 not found"), "{err}");

    let err = SeatingLogic::assign_guest(&mut pool, OWNER, anna.id, 999).unwrap_err();
    assert!(err.to_string().contains("Table #999 not found"), "{err}");

    let (plan, unassigned) = SeatingLogic::plan(&pool, OWNER).unwrap();
    assert_eq!(plan.len(), 1);
    assert!(plan[0].guests.is_empty());
    assert_eq!(unassigned.len(), 1);
    assert_eq!(unassigned[0].id, anna.id);
}

#[test]
fn test_assign_then_remove_guest() {
    let mut pool = open_pool("seating_assign_remove");
    GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap();

    let luca = GuestLogic::add(&mut pool, OWNER, "Luca", "Colleagues").unwrap();
    let table = SeatingLogic::add_table(&mut pool, OWNER, "  Garden  ").unwrap();
    assert_eq!(table.name, "Garden");

    let (g, t) = SeatingLogic::assign_guest(&mut pool, OWNER, luca.id, table.id).unwrap();
    assert_eq!(g.table_id, Some(t.id));

    let seated = GuestLogic::list(
        &pool,
        OWNER,
        &GuestFilter {
            table_id: Some(table.id),
            ..GuestFilter::default()
        },
    )
    .unwrap();
    assert_eq!(seated.len(), 1);

    let g = SeatingLogic::remove_guest(&mut pool, OWNER, luca.id).unwrap();
    assert_eq!(g.table_id, None);

    let unassigned = GuestLogic::list(
        &pool,
        OWNER,
        &GuestFilter {
            unassigned: true,
            ..GuestFilter::default()
        },
    )
    .unwrap();
    assert_eq!(unassigned.len(), 1);
}

#[test]
fn test_table_name_is_required() {
    let mut pool = open_pool("seating_table_name_required");

    let err = SeatingLogic::add_table(&mut pool, OWNER, "   ").unwrap_err();
    assert_eq!(err.to_string(), "Table name is required");

    let t = SeatingLogic::add_table(&mut pool, OWNER, "Head table").unwrap();
    assert!(SeatingLogic::rename_table(&mut pool, OWNER, t.id, "").is_err());

    let renamed = SeatingLogic::rename_table(&mut pool, OWNER, t.id, "Sweetheart").unwrap();
    assert_eq!(renamed.name, "Sweetheart");
}

#[test]
fn test_tables_of_other_owners_are_invisible() {
    let mut pool = open_pool("seating_owner_scope");
    let t = SeatingLogic::add_table(&mut pool, "someone_else", "Theirs").unwrap();

    assert!(SeatingLogic::list_tables(&pool, OWNER).unwrap().is_empty());
    assert!(SeatingLogic::delete_table(&mut pool, OWNER, t.id).is_err());
}
