use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    /// Joined from `guest_categories.name` when listing.
    pub category: Option<String>,
    pub table_id: Option<i64>,
    pub owner: String,
    pub created_at: String,
}

impl Guest {
    pub fn is_seated(&self) -> bool {
        self.table_id.is_some()
    }
}
