use crate::cli::parser::{Commands, EventAction, EventFields, SlotArgs};
use crate::config::Config;
use crate::core::calculator::schedule::{SlotEdit, parse_duration_input};
use crate::core::context::current_project;
use crate::core::timeline::{EventEdit, NewEvent, TimelineLogic};
use crate::db::pool::DbPool;
use crate::errors::{ActionContext, AppError, AppResult};
use crate::models::TimelineEvent;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, MAGENTA, RESET};
use crate::utils::formatting::{bold, italic};
use crate::utils::time::{parse_optional_time, parse_required_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Event { action } = cmd {
        let mut pool = DbPool::open_initialized(&cfg.database)?;
        let owner = cfg.owner.as_str();

        match action {
            EventAction::Add { slot, fields } => {
                let project = current_project(&pool, cfg)?;
                let input = build_new(slot, fields).failed_to("add event")?;

                let ev = TimelineLogic::add(&mut pool, project.id, owner, input)
                    .failed_to("add event")?;
                success(format!(
                    "Event #{} added: {} {} → {} ({})",
                    ev.id,
                    ev.title,
                    ev.start_str(),
                    ev.end_str(),
                    ev.duration_str()
                ));
            }

            EventAction::Edit { id, slot, fields } => {
                let edit = build_edit(slot, fields).failed_to("update event")?;
                let ev = TimelineLogic::edit(&mut pool, owner, *id, edit)
                    .failed_to("update event")?;
                success(format!(
                    "Event #{} updated: {} {} → {} ({})",
                    ev.id,
                    ev.title,
                    ev.start_str(),
                    ev.end_str(),
                    ev.duration_str()
                ));
            }

            EventAction::Del { id } => {
                let ev = TimelineLogic::delete(&mut pool, owner, *id).failed_to("delete event")?;
                success(format!("Event '{}' deleted successfully", ev.title));
            }

            EventAction::List => {
                let project = current_project(&pool, cfg)?;
                let events = TimelineLogic::list(&pool, project.id)?;

                header(format!("Timeline · {}", project.name));
                if events.is_empty() {
                    info("No events yet: add one with `wedplanner event add`.");
                    return Ok(());
                }
                for ev in &events {
                    print_event(ev);
                }
            }
        }
    }

    Ok(())
}

fn build_new(slot: &SlotArgs, fields: &EventFields) -> AppResult<NewEvent> {
    Ok(NewEvent {
        start: parse_optional_time(slot.start.as_ref())?,
        end: parse_optional_time(slot.end.as_ref())?,
        duration: slot.duration.as_deref().map(parse_duration_input).transpose()?,
        title: fields.title.clone().unwrap_or_default(),
        description: fields.description.clone(),
        category: fields.category,
        location: fields.location.clone(),
    })
}

/// Only one of start / end / duration may change per edit.
fn build_edit(slot: &SlotArgs, fields: &EventFields) -> AppResult<EventEdit> {
    let given = [slot.start.is_some(), slot.end.is_some(), slot.duration.is_some()]
        .iter()
        .filter(|b| **b)
        .count();
    if given > 1 {
        return Err(AppError::Validation(
            "Edit one of --start, --end or --duration at a time".into(),
        ));
    }

    let slot_edit = if let Some(s) = &slot.start {
        Some(SlotEdit::Start(parse_required_time(s)?))
    } else if let Some(e) = &slot.end {
        Some(SlotEdit::End(parse_required_time(e)?))
    } else if let Some(d) = &slot.duration {
        Some(SlotEdit::Duration(parse_duration_input(d)?))
    } else {
        None
    };

    Ok(EventEdit {
        slot: slot_edit,
        title: fields.title.clone(),
        description: fields.description.clone(),
        category: fields.category,
        location: fields.location.clone(),
    })
}

fn print_event(ev: &TimelineEvent) {
    let overnight = if ev.slot().crosses_midnight() { " 🌙" } else { "" };
    println!(
        "#{:<3} {} → {}  {}({}){}{}",
        ev.id,
        ev.start_str(),
        ev.end_str(),
        GREY,
        ev.duration_str(),
        RESET,
        overnight
    );
    println!("     {}  {}[{}]{}", bold(&ev.title), MAGENTA, ev.category.label(), RESET);
    match &ev.description {
        Some(d) => println!("     {}", d),
        None => println!("     {}", italic("Add description...")),
    }
    if let Some(loc) = &ev.location {
        println!("     📍 {}", loc);
    }
    println!();
}
