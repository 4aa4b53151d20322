use super::{maintenance_type::MaintenanceType, object::MaintenanceObject};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One (object, type) pair that needs attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingItem {
    pub object: MaintenanceObject,
    pub maintenance_type: MaintenanceType,
    pub periodicity: i64,
    /// Latest event for the pair, `None` when it was never performed.
    pub last_performed: Option<NaiveDateTime>,
    /// `last_performed + periodicity`, `None` when it was never performed.
    pub due_date: Option<NaiveDateTime>,
}

impl PendingItem {
    pub fn key(&self) -> (i64, i64) {
        (self.object.id, self.maintenance_type.id)
    }

    /// Never performed, or the due date has already been reached.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        match self.due_date {
            None => true,
            Some(due) => due <= now,
        }
    }

    /// Whole days until the due date (negative once overdue).
    pub fn days_until_due(&self, now: NaiveDateTime) -> Option<i64> {
        self.due_date.map(|due| (due - now).num_days())
    }
}
