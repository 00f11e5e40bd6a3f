//! Formatting utilities used for CLI and export outputs.

/// Days as years/months/days, using 365-day years and 30-day months.
///
/// `731` → `2y 00m 01d`, short form → `2y 00m`
pub fn days2readable(days: i64, short: bool) -> String {
    let sign = if days < 0 { "-" } else { "" };
    let d = days.abs();

    let years = d / 365;
    let months = (d % 365) / 30;
    let rest = (d % 365) % 30;

    if short {
        format!("{}{}y {:02}m", sign, years, months)
    } else {
        format!("{}{}y {:02}m {:02}d", sign, years, months, rest)
    }
}

/// Label and ANSI colour for a segment role.
pub fn describe_role(role: &str) -> (String, &'static str) {
    match role {
        "current" => ("Current".into(), "\x1b[36m"),
        "previous" => ("Previous".into(), "\x1b[34m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}

/// Truncate to `width` display columns, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
