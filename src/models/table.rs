use serde::Serialize;

/// A seating table. Assigned guests are derived from `guests.table_id`.
#[derive(Debug, Clone, Serialize)]
pub struct SeatingTable {
    pub id: i64,
    pub name: String,
    pub owner: String,
    pub created_at: String,
}
