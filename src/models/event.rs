use crate::utils::date::DB_DATETIME_FORMAT;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A performed maintenance action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceEvent {
    pub id: i64,
    pub object_id: i64,      // ⇔ maintenance_events.maintenance_object_id
    pub type_id: i64,        // ⇔ maintenance_events.maintenance_type_id
    pub date: NaiveDateTime, // ⇔ maintenance_events.maintenance_date (TEXT "YYYY-MM-DD HH:MM:SS")
    pub comment: String,     // ⇔ maintenance_events.comment (default '')
}

impl MaintenanceEvent {
    /// Build an event that has not been stored yet (`id = 0`).
    pub fn new(object_id: i64, type_id: i64, date: NaiveDateTime, comment: &str) -> Self {
        Self {
            id: 0,
            object_id,
            type_id,
            date,
            comment: comment.to_string(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DB_DATETIME_FORMAT).to_string()
    }
}

/// Event joined with the titles needed to display it.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: MaintenanceEvent,
    pub object_title: String,
    pub type_title: String,
}
