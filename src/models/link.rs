use super::{maintenance_type::MaintenanceType, object::MaintenanceObject};
use serde::Serialize;

/// Declares that a maintenance type applies to an object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceLink {
    pub id: i64,
    pub object_id: i64,           // ⇔ maintenance_links.maintenance_object_id
    pub type_id: i64,             // ⇔ maintenance_links.maintenance_type_id
    pub periodicity: Option<i64>, // days; NULL = informational only
}

impl MaintenanceLink {
    pub fn new(object_id: i64, type_id: i64, periodicity: Option<i64>) -> Self {
        Self {
            id: 0,
            object_id,
            type_id,
            periodicity,
        }
    }

    pub fn key(&self) -> (i64, i64) {
        (self.object_id, self.type_id)
    }
}

/// A link resolved together with its object and type, as loaded for the
/// pending computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDetails {
    pub link: MaintenanceLink,
    pub object: MaintenanceObject,
    pub maintenance_type: MaintenanceType,
}
