use crate::db::log::audit;
use crate::db::queries::{delete_event, get_event, get_object, get_type, find_link, insert_event, update_event};
use crate::errors::{AppError, AppResult};
use crate::models::MaintenanceEvent;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Fields that `event edit` may change. `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EventChanges {
    pub type_id: Option<i64>,
    pub date: Option<NaiveDateTime>,
    pub comment: Option<String>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.type_id.is_none() && self.date.is_none() && self.comment.is_none()
    }
}

/// High-level business logic for recording maintenance events.
pub struct EventLogic;

/// Only types linked to the object may be recorded against it.
fn ensure_linked(conn: &Connection, object_id: i64, type_id: i64) -> AppResult<()> {
    let object = get_object(conn, object_id)?;
    let mtype = get_type(conn, type_id)?;

    if find_link(conn, object_id, type_id)?.is_none() {
        return Err(AppError::Validation(format!(
            "'{}' (#{}) is not applicable to '{}' (#{})",
            mtype.title, type_id, object.title, object_id
        )));
    }
    Ok(())
}

impl EventLogic {
    /// Record a new event and return it with its id.
    pub fn add(
        conn: &Connection,
        object_id: i64,
        type_id: i64,
        date: NaiveDateTime,
        comment: &str,
    ) -> AppResult<MaintenanceEvent> {
        ensure_linked(conn, object_id, type_id)?;

        let mut ev = MaintenanceEvent::new(object_id, type_id, date, comment);
        ev.id = insert_event(conn, &ev)?;

        audit(
            conn,
            "add",
            &format!("event #{}", ev.id),
            &format!("object #{} type #{} at {}", object_id, type_id, ev.date_str()),
        )?;

        Ok(ev)
    }

    /// Apply field changes to an existing event. The object never changes.
    pub fn edit(conn: &Connection, event_id: i64, changes: &EventChanges) -> AppResult<MaintenanceEvent> {
        let mut ev = get_event(conn, event_id)?;

        if changes.is_empty() {
            return Err(AppError::Validation(
                "nothing to change: pass --type, --date or --comment".into(),
            ));
        }

        if let Some(type_id) = changes.type_id {
            ensure_linked(conn, ev.object_id, type_id)?;
            ev.type_id = type_id;
        }
        if let Some(date) = changes.date {
            ev.date = date;
        }
        if let Some(comment) = &changes.comment {
            ev.comment = comment.clone();
        }

        update_event(conn, &ev)?;

        audit(
            conn,
            "edit",
            &format!("event #{}", ev.id),
            &format!("type #{} at {}", ev.type_id, ev.date_str()),
        )?;

        Ok(ev)
    }

    pub fn delete(conn: &Connection, event_id: i64) -> AppResult<MaintenanceEvent> {
        let ev = get_event(conn, event_id)?;
        delete_event(conn, event_id)?;

        audit(
            conn,
            "del",
            &format!("event #{}", ev.id),
            &format!("object #{} type #{} at {}", ev.object_id, ev.type_id, ev.date_str()),
        )?;

        Ok(ev)
    }
}
