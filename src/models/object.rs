use serde::Serialize;
use std::fmt;

/// Something that can be maintained (a server, a printer, a whole building).
///
/// Objects form a forest through `parent_id`; titles are free and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceObject {
    pub id: i64,                // ⇔ maintenance_objects.id
    pub title: String,          // ⇔ maintenance_objects.title
    pub description: String,    // ⇔ maintenance_objects.description (default '')
    pub parent_id: Option<i64>, // ⇔ maintenance_objects.parent_id (NULL for roots)
}

impl MaintenanceObject {
    pub fn new(id: i64, title: &str, parent_id: Option<i64>) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            parent_id,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl fmt::Display for MaintenanceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
