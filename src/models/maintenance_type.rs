use serde::Serialize;
use std::fmt;

/// A kind of maintenance action (cleaning, battery replacement, ...).
///
/// Types may be grouped under a parent type; the grouping is organisational
/// only and never walked when computing what is due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceType {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub parent_id: Option<i64>,
}

impl MaintenanceType {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            parent_id: None,
        }
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
