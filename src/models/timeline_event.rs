use super::event_category::EventCategory;
use crate::core::calculator::schedule::{TimeSlot, format_duration};
use crate::utils::time::format_time;
use chrono::{Local, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TimelineEvent {
    pub id: i64,
    pub project_id: i64,
    pub start_time: NaiveTime,     // ⇔ events.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,       // ⇔ events.end_time (TEXT "HH:MM")
    pub duration_minutes: i64,     // ⇔ events.duration (INT, 0..1440)
    pub title: String,
    pub description: Option<String>,
    pub category: EventCategory,   // ⇔ events.category ('Ceremony', ...)
    pub location: Option<String>,
    pub owner: String,
    pub created_at: String,        // ⇔ events.created_at (TEXT, ISO8601)
}

impl TimelineEvent {
    /// Build a new, not yet persisted event (`id = 0`) from a consistent slot.
    pub fn new(project_id: i64, slot: TimeSlot, title: &str, owner: &str) -> Self {
        Self {
            id: 0,
            project_id,
            start_time: slot.start,
            end_time: slot.end,
            duration_minutes: slot.duration,
            title: title.to_string(),
            description: None,
            category: EventCategory::default(),
            location: None,
            owner: owner.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot {
            start: self.start_time,
            end: self.end_time,
            duration: self.duration_minutes,
        }
    }

    pub fn set_slot(&mut self, slot: TimeSlot) {
        self.start_time = slot.start;
        self.end_time = slot.end;
        self.duration_minutes = slot.duration;
    }

    pub fn start_str(&self) -> String {
        format_time(self.start_time)
    }

    pub fn end_str(&self) -> String {
        format_time(self.end_time)
    }

    pub fn duration_str(&self) -> String {
        format_duration(self.duration_minutes)
    }
}
