//! Formatting utilities used for CLI and export outputs.

use crate::models::{MaintenanceObject, PendingItem};
use chrono::NaiveDateTime;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Format an optional timestamp, `--` when absent.
pub fn fmt_optional_datetime(dt: Option<NaiveDateTime>, fmt: &str) -> String {
    dt.map(|d| d.format(fmt).to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Human readable urgency of a pending item.
///
/// Examples: "never done", "overdue by 5 days", "due today", "due in 3 days".
pub fn describe_due(item: &PendingItem, now: NaiveDateTime) -> String {
    match item.days_until_due(now) {
        None => "never done".to_string(),
        Some(d) if d < 0 => format!("overdue by {} {}", -d, plural_days(-d)),
        Some(0) if item.is_overdue(now) => "overdue today".to_string(),
        Some(0) => "due today".to_string(),
        Some(d) => format!("due in {} {}", d, plural_days(d)),
    }
}

fn plural_days(n: i64) -> &'static str {
    if n == 1 { "day" } else { "days" }
}

/// `Root › Building › Printer`
pub fn breadcrumb_line(trail: &[MaintenanceObject]) -> String {
    trail
        .iter()
        .map(|o| o.title.as_str())
        .collect::<Vec<_>>()
        .join(" › ")
}
