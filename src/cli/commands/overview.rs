use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::current_project;
use crate::core::profile::ProfileLogic;
use crate::core::projects::ProjectLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, MAGENTA, RESET, color_for_countdown};
use crate::utils::date::{days_between, format_long, today};
use crate::utils::formatting::{bold, italic};

/// Sections of the planner and the route each one lives at.
pub const SECTIONS: [(&str, &str); 5] = [
    ("Overview", "/"),
    ("Guest List", "/guests"),
    ("Vendors", "/vendors"),
    ("Budget", "/budget"),
    ("Sitting Plan", "/sitting-plan"),
];

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overview = cmd {
        let pool = DbPool::open_initialized(&cfg.database)?;

        let project = current_project(&pool, cfg)?;
        let project = ProjectLogic::with_events(&pool, project)?;
        let profile = ProfileLogic::load(&pool, &cfg.owner)?;

        println!("{}Wedding Planning Of{}", GREY, RESET);
        println!("{}{}{}", MAGENTA, bold(&profile.couple()), RESET);
        println!();

        match project.wedding_date {
            Some(date) => {
                let days = days_between(today(), date);
                let countdown = match days {
                    0 => "today!".to_string(),
                    d if d < 0 => format!("{} days ago", -d),
                    1 => "1 day to go".to_string(),
                    d => format!("{d} days to go"),
                };
                println!(
                    "📅 {}  {}{}{}",
                    format_long(date),
                    color_for_countdown(days),
                    countdown,
                    RESET
                );
            }
            None => println!("📅 {}", italic("Wedding date not set")),
        }
        println!(
            "📁 {} {}#{}{}  ·  {} timeline events",
            project.name,
            GREY,
            project.id,
            RESET,
            project.events.len()
        );
        println!();

        for (name, route) in SECTIONS {
            println!("  {:<14} {}{}{}", name, GREY, route, RESET);
        }
    }

    Ok(())
}
