//! Plain record operations for objects, types and links.

use crate::db::log::audit;
use crate::db::queries::{
    delete_link, find_link, get_object, get_type, insert_link, insert_object, insert_type,
};
use crate::errors::{AppError, AppResult};
use crate::models::{MaintenanceLink, MaintenanceObject, MaintenanceType};
use rusqlite::Connection;

pub struct RecordLogic;

fn require_title(title: &str) -> AppResult<&str> {
    let t = title.trim();
    if t.is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    Ok(t)
}

impl RecordLogic {
    pub fn add_object(
        conn: &Connection,
        title: &str,
        description: &str,
        parent_id: Option<i64>,
    ) -> AppResult<MaintenanceObject> {
        let title = require_title(title)?;
        if let Some(pid) = parent_id {
            get_object(conn, pid)?;
        }

        let id = insert_object(conn, title, description, parent_id)?;
        audit(conn, "add", &format!("object #{id}"), title)?;
        get_object(conn, id)
    }

    pub fn add_type(
        conn: &Connection,
        title: &str,
        description: &str,
        parent_id: Option<i64>,
    ) -> AppResult<MaintenanceType> {
        let title = require_title(title)?;
        if let Some(pid) = parent_id {
            get_type(conn, pid)?;
        }

        let id = insert_type(conn, title, description, parent_id)?;
        audit(conn, "add", &format!("type #{id}"), title)?;
        get_type(conn, id)
    }

    pub fn add_link(
        conn: &Connection,
        object_id: i64,
        type_id: i64,
        periodicity: Option<i64>,
    ) -> AppResult<MaintenanceLink> {
        if let Some(days) = periodicity
            && days <= 0
        {
            return Err(AppError::Validation(format!(
                "periodicity must be a positive number of days, got {days}"
            )));
        }

        let object = get_object(conn, object_id)?;
        let mtype = get_type(conn, type_id)?;

        if find_link(conn, object_id, type_id)?.is_some() {
            return Err(AppError::AlreadyExists(format!(
                "'{}' is already applicable to '{}'",
                mtype.title, object.title
            )));
        }

        let mut link = MaintenanceLink::new(object_id, type_id, periodicity);
        link.id = insert_link(conn, &link)?;

        let every = periodicity
            .map(|d| format!("every {d} days"))
            .unwrap_or_else(|| "unscheduled".to_string());
        audit(
            conn,
            "add",
            &format!("link #{}", link.id),
            &format!("{} → {} ({})", mtype.title, object.title, every),
        )?;

        Ok(link)
    }

    pub fn remove_link(conn: &Connection, object_id: i64, type_id: i64) -> AppResult<()> {
        if delete_link(conn, object_id, type_id)? == 0 {
            return Err(AppError::NotFound(format!(
                "link between object #{object_id} and type #{type_id}"
            )));
        }

        audit(
            conn,
            "del",
            "link",
            &format!("object #{object_id} type #{type_id}"),
        )?;
        Ok(())
    }
}
