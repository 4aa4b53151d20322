//! Plain journal records shared by the store, the engine and the CLI.

pub mod event;
pub mod link;
pub mod maintenance_type;
pub mod object;
pub mod pending;

pub use event::{EventDetails, MaintenanceEvent};
pub use link::{LinkDetails, MaintenanceLink};
pub use maintenance_type::MaintenanceType;
pub use object::MaintenanceObject;
pub use pending::PendingItem;
