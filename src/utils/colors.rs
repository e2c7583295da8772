/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey out empty values and the "-" placeholder, leave everything else as is.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Days-to-go colour for the overview: red when the date has passed,
/// yellow in the last month, green otherwise.
pub fn color_for_countdown(days: i64) -> &'static str {
    if days < 0 {
        RED
    } else if days <= 30 {
        YELLOW
    } else {
        GREEN
    }
}
