// src/export/model.rs

use crate::models::{EventDetails, PendingItem};
use crate::utils::date::to_db_str;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Flat row for a pending item.
#[derive(Serialize, Clone, Debug)]
pub struct PendingExport {
    pub object_id: i64,
    pub object: String,
    pub type_id: i64,
    pub maintenance_type: String,
    pub periodicity: i64,
    pub last_performed: String,
    pub due_date: String,
    pub overdue: bool,
}

impl PendingExport {
    pub fn from_item(item: &PendingItem, now: NaiveDateTime) -> Self {
        Self {
            object_id: item.object.id,
            object: item.object.title.clone(),
            type_id: item.maintenance_type.id,
            maintenance_type: item.maintenance_type.title.clone(),
            periodicity: item.periodicity,
            last_performed: item.last_performed.map(|d| to_db_str(&d)).unwrap_or_default(),
            due_date: item.due_date.map(|d| to_db_str(&d)).unwrap_or_default(),
            overdue: item.is_overdue(now),
        }
    }
}

/// Flat row for an event.
#[derive(Serialize, Clone, Debug)]
pub struct EventExport {
    pub id: i64,
    pub date: String,
    pub object_id: i64,
    pub object: String,
    pub type_id: i64,
    pub maintenance_type: String,
    pub comment: String,
}

impl From<&EventDetails> for EventExport {
    fn from(e: &EventDetails) -> Self {
        Self {
            id: e.event.id,
            date: e.event.date_str(),
            object_id: e.event.object_id,
            object: e.object_title.clone(),
            type_id: e.event.type_id,
            maintenance_type: e.type_title.clone(),
            comment: e.event.comment.clone(),
        }
    }
}
