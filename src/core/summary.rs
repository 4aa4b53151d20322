//! Object-scoped views: summary, nested listing and event history.

use crate::config::Config;
use crate::core::hierarchy::Forest;
use crate::core::pending::{PendingEngine, PendingQuery};
use crate::db::queries::{
    load_children, load_events_for_objects, load_last_performed, load_scheduled_links,
};
use crate::errors::AppResult;
use crate::models::{EventDetails, MaintenanceObject, PendingItem};
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Everything shown for a single object.
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    pub object: MaintenanceObject,
    /// Root first, ending with `object`.
    pub breadcrumbs: Vec<MaintenanceObject>,
    pub nested: Vec<MaintenanceObject>,
    pub recent_events: Vec<EventDetails>,
    pub pending: Vec<PendingItem>,
}

/// One level of the object tree.
#[derive(Debug, Clone)]
pub struct ObjectListing {
    pub parent: Option<MaintenanceObject>,
    pub breadcrumbs: Vec<MaintenanceObject>,
    pub objects: Vec<MaintenanceObject>,
}

/// Events of an object and of everything below it.
#[derive(Debug, Clone)]
pub struct EventHistory {
    pub object: MaintenanceObject,
    pub breadcrumbs: Vec<MaintenanceObject>,
    pub events: Vec<EventDetails>,
}

pub struct SummaryLogic;

impl SummaryLogic {
    pub fn object_summary(
        conn: &Connection,
        cfg: &Config,
        object_id: i64,
        now: NaiveDateTime,
    ) -> AppResult<ObjectSummary> {
        let forest = Forest::load(conn)?;
        let object = forest.get(object_id)?.clone();
        let breadcrumbs = forest.breadcrumbs(object_id)?;

        let nested = load_children(conn, Some(object_id), Some(cfg.nested_limit))?;

        let subtree = forest.subtree_ids(object_id)?;
        let recent_events =
            load_events_for_objects(conn, &subtree, Some(cfg.summary_events_limit))?;

        let query = PendingQuery::object_summary(cfg, object_id);
        let links = load_scheduled_links(conn)?;
        let stamps = load_last_performed(conn)?;
        let pending = PendingEngine::new(&forest).compute(&query, &links, stamps, now)?;

        Ok(ObjectSummary {
            object,
            breadcrumbs,
            nested,
            recent_events,
            pending,
        })
    }

    /// Roots when `parent_id` is `None`, otherwise the direct children.
    pub fn list_objects(conn: &Connection, parent_id: Option<i64>) -> AppResult<ObjectListing> {
        let forest = Forest::load(conn)?;

        let (parent, breadcrumbs) = match parent_id {
            Some(id) => (Some(forest.get(id)?.clone()), forest.breadcrumbs(id)?),
            None => (None, Vec::new()),
        };
        let objects = load_children(conn, parent_id, None)?;

        Ok(ObjectListing {
            parent,
            breadcrumbs,
            objects,
        })
    }

    pub fn events_for(
        conn: &Connection,
        object_id: i64,
        limit: Option<usize>,
    ) -> AppResult<EventHistory> {
        let forest = Forest::load(conn)?;
        let object = forest.get(object_id)?.clone();
        let breadcrumbs = forest.breadcrumbs(object_id)?;
        let events = load_events_for_objects(conn, &forest.subtree_ids(object_id)?, limit)?;

        Ok(EventHistory {
            object,
            breadcrumbs,
            events,
        })
    }
}
