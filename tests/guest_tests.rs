mod common;
use common::open_pool;
use wedplanner::core::guests::{GuestFilter, GuestLogic};

const OWNER: &str = "tester";

#[test]
fn test_default_categories_are_seeded_once() {
    let mut pool = open_pool("guests_seed_categories");

    assert_eq!(GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap(), 3);
    assert_eq!(GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap(), 0);

    let names: Vec<String> = GuestLogic::list_categories(&pool, OWNER)
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    for expected in ["Family", "Friends", "Colleagues"] {
        assert!(names.iter().any(|n| n == expected), "{names:?}");
    }
}

#[test]
fn test_guest_validation_messages() {
    let mut pool = open_pool("guests_validation");
    GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap();

    let err = GuestLogic::add(&mut pool, OWNER, "   ", "Family").unwrap_err();
    assert_eq!(err.to_string(), "Guest name cannot be empty");

    let err = GuestLogic::add(&mut pool, OWNER, "Anna", "").unwrap_err();
    assert_eq!(err.to_string(), "Please select a category");

    assert!(GuestLogic::add(&mut pool, OWNER, "Anna", "Neighbours").is_err());

    let anna = GuestLogic::add(&mut pool, OWNER, " Anna ", "family").unwrap();
    assert_eq!(anna.name, "Anna");
    assert_eq!(anna.category.as_deref(), Some("Family"));

    let err = GuestLogic::edit(&mut pool, OWNER, anna.id, Some(""), None).unwrap_err();
    assert_eq!(err.to_string(), "Guest name cannot be empty");
}

#[test]
fn test_edit_guest_category_by_id() {
    let mut pool = open_pool("guests_edit_category");
    GuestLogic::seed_default_categories(&mut pool, OWNER).unwrap();

    let friends = GuestLogic::resolve_category(&pool, OWNER, "Friends").unwrap();
    let g = GuestLogic::add(&mut pool, OWNER, "Marco", "Family").unwrap();

    let edited =
        GuestLogic::edit(&mut pool, OWNER, g.id, None, Some(&friends.id.to_string())).unwrap();
    assert_eq!(edited.category_id, friends.id);

    let listed = GuestLogic::list(
        &pool,
        OWNER,
        &GuestFilter {
            category_id: Some(friends.id),
            ..GuestFilter::default()
        },
    )
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category.as_deref(), Some("Friends"));
}

#[test]
fn test_category_in_use_cannot_be_deleted() {
    let mut pool = open_pool("guests_category_in_use");

    let cat = GuestLogic::add_category(&mut pool, OWNER, "Neighbours").unwrap();
    assert!(GuestLogic::add_category(&mut pool, OWNER, "neighbours").is_err());

    let g = GuestLogic::add(&mut pool, OWNER, "Paola", "Neighbours").unwrap();
    let err = GuestLogic::delete_category(&mut pool, OWNER, cat.id).unwrap_err();
    assert!(err.to_string().contains("used by 1 guest"), "{err}");

    GuestLogic::delete(&mut pool, OWNER, g.id).unwrap();
    GuestLogic::delete_category(&mut pool, OWNER, cat.id).unwrap();
    assert!(GuestLogic::list_categories(&pool, OWNER).unwrap().is_empty());
}
