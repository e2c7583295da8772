use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GuestCategory {
    pub id: i64,
    pub name: String,
    pub owner: String,
}

/// Categories seeded for a new owner.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Family", "Friends", "Colleagues"];
