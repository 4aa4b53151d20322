//! Terminal rendering shared by the listing commands.

use crate::models::{EventDetails, MaintenanceObject, PendingItem};
use crate::ui::messages::{empty, header};
use crate::utils::colors::{RESET, color_for_due, colorize_optional};
use crate::utils::formatting::{bold, breadcrumb_line, describe_due, fmt_optional_datetime};
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

const COMMENT_WIDTH: usize = 48;

pub fn print_breadcrumbs(trail: &[MaintenanceObject]) {
    if trail.is_empty() {
        println!("📍 {}", bold("(top level)"));
    } else {
        println!("📍 {}", bold(&breadcrumb_line(trail)));
    }
}

pub fn print_pending(title: &str, items: &[PendingItem], now: NaiveDateTime, date_fmt: &str) {
    header(title);
    if items.is_empty() {
        empty("nothing pending");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("OBJ", 4),
        Column::new("OBJECT", 16),
        Column::new("TYPE", 16),
        Column::new("EVERY", 6),
        Column::new("LAST DONE", 16),
        Column::new("DUE", 16),
        Column::new("STATUS", 12),
    ]);

    for item in items {
        let color = color_for_due(item.is_overdue(now));
        table.add_row(vec![
            item.object.id.to_string(),
            item.object.title.clone(),
            item.maintenance_type.title.clone(),
            format!("{}d", item.periodicity),
            colorize_optional(&fmt_optional_datetime(item.last_performed, date_fmt)),
            colorize_optional(&fmt_optional_datetime(item.due_date, date_fmt)),
            format!("{color}{}{RESET}", describe_due(item, now)),
        ]);
    }

    print!("{}", table.render());
}

pub fn print_events(title: &str, events: &[EventDetails], date_fmt: &str) {
    header(title);
    if events.is_empty() {
        empty("no events recorded");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("DATE", 16),
        Column::new("OBJECT", 16),
        Column::new("TYPE", 16),
        Column::new("COMMENT", 8),
    ]);

    for e in events {
        // First wrapped line only
        let lines = textwrap::wrap(&e.event.comment, COMMENT_WIDTH);
        let comment = match lines.as_slice() {
            [] => String::new(),
            [only] => only.to_string(),
            [first, ..] => format!("{first}…"),
        };

        table.add_row(vec![
            e.event.id.to_string(),
            e.event.date.format(date_fmt).to_string(),
            e.object_title.clone(),
            e.type_title.clone(),
            comment,
        ]);
    }

    print!("{}", table.render());
}

pub fn print_objects(title: &str, objects: &[MaintenanceObject]) {
    header(title);
    if objects.is_empty() {
        empty("no objects");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("TITLE", 20),
        Column::new("DESCRIPTION", 11),
    ]);
    for o in objects {
        table.add_row(vec![o.id.to_string(), o.title.clone(), o.description.clone()]);
    }

    print!("{}", table.render());
}
