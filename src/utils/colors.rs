/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Segment status colour:
/// valid → green, missing dates → grey, anything else → red
pub fn color_for_status(status: &str) -> &'static str {
    match status {
        "valid" => GREEN,
        "missing_dates" => GREY,
        _ => RED,
    }
}

/// Coverage colour:
/// complete → green, partial → yellow, insufficient → red
pub fn color_for_coverage(status: &str) -> &'static str {
    match status {
        "complete" => GREEN,
        "partial" => YELLOW,
        _ => RED,
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out placeholders, leave real values alone.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" || value.trim() == "0" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
