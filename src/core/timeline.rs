use crate::core::calculator::schedule::{SlotEdit, TimeSlot};
use crate::db::changes::{Change, ChangeKind};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::events::{
    delete_event, get_event, insert_event, load_events_by_project, update_event,
};
use crate::errors::{AppError, AppResult};
use crate::models::{EventCategory, TimelineEvent};
use chrono::NaiveTime;

/// Input for a new timeline event. Exactly one of `end` / `duration`
/// must be given; the other one is derived.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub duration: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<EventCategory>,
    pub location: Option<String>,
}

/// Changes to an existing event. At most one slot field per edit.
#[derive(Debug, Clone, Default)]
pub struct EventEdit {
    pub slot: Option<SlotEdit>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<EventCategory>,
    pub location: Option<String>,
}

impl EventEdit {
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.location.is_none()
    }
}

/// Blank optional text clears the field.
fn optional_text(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required_title(title: &str) -> AppResult<String> {
    let t = title.trim();
    if t.is_empty() {
        return Err(AppError::Validation("Event title cannot be empty".into()));
    }
    Ok(t.to_string())
}

/// High-level business logic for the timeline editor.
pub struct TimelineLogic;

impl TimelineLogic {
    pub fn add(
        pool: &mut DbPool,
        project_id: i64,
        owner: &str,
        input: NewEvent,
    ) -> AppResult<TimelineEvent> {
        let start = input
            .start
            .ok_or_else(|| AppError::InvalidTime("Missing start time (--start HH:MM)".into()))?;

        let slot = match (input.end, input.duration) {
            (Some(end), None) => TimeSlot::from_end(start, end),
            (None, Some(minutes)) => TimeSlot::from_duration(start, minutes)?,
            (None, None) => {
                return Err(AppError::Validation(
                    "Specify either an end time (--end) or a duration (--duration)".into(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(AppError::Validation(
                    "Use either --end or --duration, not both: one is derived from the other"
                        .into(),
                ));
            }
        };

        let title = required_title(&input.title)?;

        let mut ev = TimelineEvent::new(project_id, slot, &title, owner);
        ev.description = optional_text(input.description);
        ev.category = input.category.unwrap_or_default();
        ev.location = optional_text(input.location);

        ev.id = insert_event(&pool.conn, &ev)?;

        audit(
            &pool.conn,
            "add",
            &format!("event #{}", ev.id),
            &format!(
                "{} {}-{} ({})",
                ev.title,
                ev.start_str(),
                ev.end_str(),
                ev.duration_str()
            ),
        )?;
        pool.notify(Change::new("events", ev.id, ChangeKind::Insert));

        Ok(ev)
    }

    /// Apply an edit in memory, then commit it with a single UPDATE.
    pub fn edit(
        pool: &mut DbPool,
        owner: &str,
        id: i64,
        edit: EventEdit,
    ) -> AppResult<TimelineEvent> {
        if edit.is_empty() {
            return Err(AppError::Validation("Nothing to edit".into()));
        }

        let mut ev = get_event(&pool.conn, id, owner)?
            .ok_or_else(|| AppError::not_found("Event", id))?;

        if let Some(slot_edit) = edit.slot {
            let slot = ev.slot().apply(slot_edit)?;
            ev.set_slot(slot);
        }
        if let Some(title) = edit.title {
            ev.title = required_title(&title)?;
        }
        if edit.description.is_some() {
            ev.description = optional_text(edit.description);
        }
        if let Some(category) = edit.category {
            ev.category = category;
        }
        if edit.location.is_some() {
            ev.location = optional_text(edit.location);
        }

        update_event(&pool.conn, &ev)?;

        audit(
            &pool.conn,
            "edit",
            &format!("event #{}", ev.id),
            &format!(
                "{} {}-{} ({})",
                ev.title,
                ev.start_str(),
                ev.end_str(),
                ev.duration_str()
            ),
        )?;
        pool.notify(Change::new("events", ev.id, ChangeKind::Update));

        Ok(ev)
    }

    pub fn delete(pool: &mut DbPool, owner: &str, id: i64) -> AppResult<TimelineEvent> {
        let ev = get_event(&pool.conn, id, owner)?
            .ok_or_else(|| AppError::not_found("Event", id))?;

        delete_event(&pool.conn, id)?;

        audit(&pool.conn, "del", &format!("event #{id}"), &ev.title)?;
        pool.notify(Change::new("events", id, ChangeKind::Delete));

        Ok(ev)
    }

    pub fn list(pool: &DbPool, project_id: i64) -> AppResult<Vec<TimelineEvent>> {
        load_events_by_project(&pool.conn, project_id)
    }
}
