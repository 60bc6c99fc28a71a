//! Relative-time formatting for activity columns.

use time::OffsetDateTime;
use time::macros::format_description;

/// "Just now", "5 minutes ago", ... falling back to a calendar date once
/// the distance exceeds a week.
pub fn relative(when: OffsetDateTime, now: OffsetDateTime) -> String {
    let seconds = (now - when).whole_seconds();
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return plural(hours, "hour");
    }
    let days = hours / 24;
    if days < 7 {
        return plural(days, "day");
    }
    calendar(when)
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

fn calendar(when: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year]");
    when.format(&format)
        .unwrap_or_else(|_| "Invalid Date".to_string())
}
