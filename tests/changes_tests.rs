mod common;
use common::open_pool;
use wedplanner::core::guests::GuestLogic;
use wedplanner::core::seating::SeatingLogic;
use wedplanner::db::changes::{Change, ChangeFeed, ChangeFilter, ChangeKind};

const OWNER: &str = "tester";

#[test]
fn test_feed_filters_by_table_and_row() {
    let mut feed = ChangeFeed::default();
    let (_, all_guests) = feed.subscribe(ChangeFilter::table("guests"));
    let (_, guest_7) = feed.subscribe(ChangeFilter::row("guests", 7));
    let (_, tables) = feed.subscribe(ChangeFilter::table("tables"));

    assert_eq!(feed.publish(Change::new("guests", 7, ChangeKind::Update)), 2);
    assert_eq!(feed.publish(Change::new("guests", 8, ChangeKind::Delete)), 1);

    assert_eq!(all_guests.try_iter().count(), 2);
    let only = guest_7.try_recv().unwrap();
    assert_eq!(only.row_id, "7");
    assert_eq!(only.kind, ChangeKind::Update);
    assert!(guest_7.try_recv().is_err());
    assert!(tables.try_recv().is_err());
}

#[test]
fn test_unsubscribe_and_dropped_receivers() {
    let mut feed = ChangeFeed::default();
    let (id, _rx) = feed.subscribe(ChangeFilter::table("events"));
    let (_, dropped) = feed.subscribe(ChangeFilter::table("events"));
    drop(dropped);

    assert_eq!(feed.subscriber_count(), 2);
    assert_eq!(feed.publish(Change::new("events", 1, ChangeKind::Insert)), 1);
    assert_eq!(feed.subscriber_count(), 1);

    assert!(feed.unsubscribe(id));
    assert!(!feed.unsubscribe(id));
    assert_eq!(feed.subscriber_count(), 0);
}

#[test]
fn test_mutations_publish_changes() {
    let mut pool = open_pool("changes_mutations");
    GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap();

    let (_, guests_rx) = pool.changes.subscribe(ChangeFilter::table("guests"));
    let (_, tables_rx) = pool.changes.subscribe(ChangeFilter::table("tables"));

    let g = GuestLogic::add(&mut pool, OWNER, "Anna", "Family").unwrap();
    let t = SeatingLogic::add_table(&mut pool, OWNER, "Table 1").unwrap();
    SeatingLogic::assign_guest(&mut pool, OWNER, g.id, t.id).unwrap();
    SeatingLogic::delete_table(&mut pool, OWNER, t.id).unwrap();

    let guest_kinds: Vec<ChangeKind> = guests_rx.try_iter().map(|c| c.kind).collect();
    // insert, assign, unassign on table delete
    assert_eq!(
        guest_kinds,
        vec![ChangeKind::Insert, ChangeKind::Update, ChangeKind::Update]
    );

    let table_kinds: Vec<ChangeKind> = tables_rx.try_iter().map(|c| c.kind).collect();
    assert_eq!(table_kinds, vec![ChangeKind::Insert, ChangeKind::Delete]);
}
