use super::timeline_event::TimelineEvent;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub wedding_date: Option<NaiveDate>,
    pub owner: String,
    pub created_at: String,
    /// Filled only when loaded with its timeline.
    pub events: Vec<TimelineEvent>,
}

impl Project {
    pub fn wedding_date_str(&self) -> Option<String> {
        self.wedding_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}
