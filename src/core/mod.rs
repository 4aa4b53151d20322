pub mod event;
pub mod hierarchy;
pub mod log;
pub mod pending;
pub mod records;
pub mod summary;
