//! Record queries for objects, types, links and events.
//!
//! Every statement is parameterised. Id lists are expanded into `?`
//! placeholders, never into literal values, and split into chunks that stay
//! below SQLite's bound-variable limit.

use crate::errors::{AppError, AppResult};
use crate::models::{
    EventDetails, LinkDetails, MaintenanceEvent, MaintenanceLink, MaintenanceObject,
    MaintenanceType,
};
use crate::utils::date::{parse_db_datetime, to_db_str};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, ToSql, params, params_from_iter};

/// Ids bound per `IN (...)` statement; SQLite's default limit is 32766.
const MAX_IDS_PER_QUERY: usize = 500;

/// `?,?,?` for an `IN (...)` clause.
fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

/// SQLite treats a negative LIMIT as "no limit"; oversized limits saturate.
pub fn sql_limit(limit: Option<usize>) -> i64 {
    limit
        .map(|l| i64::try_from(l).unwrap_or(i64::MAX))
        .unwrap_or(-1)
}

fn parse_stored_date(raw: String, col: usize) -> Result<NaiveDateTime> {
    parse_db_datetime(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            col,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

// ---------------------------
// Objects
// ---------------------------

const OBJECT_COLUMNS: &str = "id, title, description, parent_id";

pub fn map_object(row: &Row) -> Result<MaintenanceObject> {
    Ok(MaintenanceObject {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        parent_id: row.get("parent_id")?,
    })
}

pub fn load_objects(conn: &Connection) -> AppResult<Vec<MaintenanceObject>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {OBJECT_COLUMNS} FROM maintenance_objects ORDER BY id ASC"
    ))?;
    let rows = stmt.query_map([], map_object)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn find_object(conn: &Connection, id: i64) -> AppResult<Option<MaintenanceObject>> {
    let obj = conn
        .query_row(
            &format!("SELECT {OBJECT_COLUMNS} FROM maintenance_objects WHERE id = ?1"),
            [id],
            map_object,
        )
        .optional()?;
    Ok(obj)
}

pub fn get_object(conn: &Connection, id: i64) -> AppResult<MaintenanceObject> {
    find_object(conn, id)?.ok_or_else(|| AppError::object_not_found(id))
}

/// Direct children of `parent` (roots when `None`), ascending id.
pub fn load_children(
    conn: &Connection,
    parent: Option<i64>,
    limit: Option<usize>,
) -> AppResult<Vec<MaintenanceObject>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {OBJECT_COLUMNS} FROM maintenance_objects
         WHERE parent_id IS ?1
         ORDER BY id ASC
         LIMIT ?2"
    ))?;
    let rows = stmt.query_map(params![parent, sql_limit(limit)], map_object)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn insert_object(
    conn: &Connection,
    title: &str,
    description: &str,
    parent_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO maintenance_objects (title, description, parent_id) VALUES (?1, ?2, ?3)",
        params![title, description, parent_id],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Types
// ---------------------------

const TYPE_COLUMNS: &str = "id, title, description, parent_id";

pub fn map_type(row: &Row) -> Result<MaintenanceType> {
    Ok(MaintenanceType {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        parent_id: row.get("parent_id")?,
    })
}

pub fn load_types(conn: &Connection) -> AppResult<Vec<MaintenanceType>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {TYPE_COLUMNS} FROM maintenance_types ORDER BY id ASC"
    ))?;
    let rows = stmt.query_map([], map_type)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

pub fn find_type(conn: &Connection, id: i64) -> AppResult<Option<MaintenanceType>> {
    let t = conn
        .query_row(
            &format!("SELECT {TYPE_COLUMNS} FROM maintenance_types WHERE id = ?1"),
            [id],
            map_type,
        )
        .optional()?;
    Ok(t)
}

pub fn get_type(conn: &Connection, id: i64) -> AppResult<MaintenanceType> {
    find_type(conn, id)?.ok_or_else(|| AppError::type_not_found(id))
}

pub fn insert_type(
    conn: &Connection,
    title: &str,
    description: &str,
    parent_id: Option<i64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO maintenance_types (title, description, parent_id) VALUES (?1, ?2, ?3)",
        params![title, description, parent_id],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------
// Links
// ---------------------------

pub fn map_link(row: &Row) -> Result<MaintenanceLink> {
    Ok(MaintenanceLink {
        id: row.get("id")?,
        object_id: row.get("maintenance_object_id")?,
        type_id: row.get("maintenance_type_id")?,
        periodicity: row.get("periodicity")?,
    })
}

/// Link row joined with object (`o_*`) and type (`t_*`) columns.
fn map_link_details(row: &Row) -> Result<LinkDetails> {
    Ok(LinkDetails {
        link: map_link(row)?,
        object: MaintenanceObject {
            id: row.get("o_id")?,
            title: row.get("o_title")?,
            description: row.get("o_description")?,
            parent_id: row.get("o_parent_id")?,
        },
        maintenance_type: MaintenanceType {
            id: row.get("t_id")?,
            title: row.get("t_title")?,
            description: row.get("t_description")?,
            parent_id: row.get("t_parent_id")?,
        },
    })
}

const LINK_DETAILS_SELECT: &str = "
    SELECT links.id AS id,
           links.maintenance_object_id AS maintenance_object_id,
           links.maintenance_type_id AS maintenance_type_id,
           links.periodicity AS periodicity,
           objects.id AS o_id, objects.title AS o_title,
           objects.description AS o_description, objects.parent_id AS o_parent_id,
           types.id AS t_id, types.title AS t_title,
           types.description AS t_description, types.parent_id AS t_parent_id
    FROM maintenance_links AS links
    INNER JOIN maintenance_objects AS objects ON links.maintenance_object_id = objects.id
    INNER JOIN maintenance_types AS types ON links.maintenance_type_id = types.id";

pub fn find_link(conn: &Connection, object_id: i64, type_id: i64) -> AppResult<Option<MaintenanceLink>> {
    let link = conn
        .query_row(
            "SELECT id, maintenance_object_id, maintenance_type_id, periodicity
             FROM maintenance_links
             WHERE maintenance_object_id = ?1 AND maintenance_type_id = ?2",
            [object_id, type_id],
            map_link,
        )
        .optional()?;
    Ok(link)
}

pub fn insert_link(conn: &Connection, link: &MaintenanceLink) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO maintenance_links (maintenance_object_id, maintenance_type_id, periodicity)
         VALUES (?1, ?2, ?3)",
        params![link.object_id, link.type_id, link.periodicity],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_link(conn: &Connection, object_id: i64, type_id: i64) -> AppResult<usize> {
    let n = conn.execute(
        "DELETE FROM maintenance_links
         WHERE maintenance_object_id = ?1 AND maintenance_type_id = ?2",
        [object_id, type_id],
    )?;
    Ok(n)
}

/// All links of one object, scheduled or not, ordered by type.
pub fn links_for_object(conn: &Connection, object_id: i64) -> AppResult<Vec<LinkDetails>> {
    let mut stmt = conn.prepare(&format!(
        "{LINK_DETAILS_SELECT}
         WHERE links.maintenance_object_id = ?1
         ORDER BY types.id ASC"
    ))?;
    let rows = stmt.query_map([object_id], map_link_details)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

/// Every link with a periodicity, ordered by (object, type).
///
/// Scoping to a subtree happens in memory, see `PendingEngine::compute`.
pub fn load_scheduled_links(conn: &Connection) -> AppResult<Vec<LinkDetails>> {
    let mut stmt = conn.prepare(&format!(
        "{LINK_DETAILS_SELECT}
         WHERE links.periodicity IS NOT NULL
         ORDER BY links.maintenance_object_id, links.maintenance_type_id"
    ))?;
    let rows = stmt.query_map([], map_link_details)?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

// ---------------------------
// Events
// ---------------------------

const EVENT_COLUMNS: &str =
    "id, maintenance_object_id, maintenance_type_id, maintenance_date, comment";

pub fn map_event(row: &Row) -> Result<MaintenanceEvent> {
    let raw: String = row.get("maintenance_date")?;
    Ok(MaintenanceEvent {
        id: row.get("id")?,
        object_id: row.get("maintenance_object_id")?,
        type_id: row.get("maintenance_type_id")?,
        date: parse_stored_date(raw, 3)?,
        comment: row.get("comment")?,
    })
}

pub fn find_event(conn: &Connection, id: i64) -> AppResult<Option<MaintenanceEvent>> {
    let ev = conn
        .query_row(
            &format!("SELECT {EVENT_COLUMNS} FROM maintenance_events WHERE id = ?1"),
            [id],
            map_event,
        )
        .optional()?;
    Ok(ev)
}

pub fn get_event(conn: &Connection, id: i64) -> AppResult<MaintenanceEvent> {
    find_event(conn, id)?.ok_or_else(|| AppError::event_not_found(id))
}

pub fn insert_event(conn: &Connection, ev: &MaintenanceEvent) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO maintenance_events (maintenance_object_id, maintenance_type_id, maintenance_date, comment)
         VALUES (?1, ?2, ?3, ?4)",
        params![ev.object_id, ev.type_id, to_db_str(&ev.date), ev.comment],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_event(conn: &Connection, ev: &MaintenanceEvent) -> AppResult<()> {
    let n = conn.execute(
        "UPDATE maintenance_events
         SET maintenance_type_id = ?1, maintenance_date = ?2, comment = ?3
         WHERE id = ?4",
        params![ev.type_id, to_db_str(&ev.date), ev.comment, ev.id],
    )?;
    if n == 0 {
        return Err(AppError::event_not_found(ev.id));
    }
    Ok(())
}

pub fn delete_event(conn: &Connection, id: i64) -> AppResult<()> {
    let n = conn.execute("DELETE FROM maintenance_events WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::event_not_found(id));
    }
    Ok(())
}

/// Events of the given objects, newest first.
///
/// Large id lists are queried chunk by chunk; each chunk is limited on its
/// own and the merged result is sorted and truncated again.
pub fn load_events_for_objects(
    conn: &Connection,
    object_ids: &[i64],
    limit: Option<usize>,
) -> AppResult<Vec<EventDetails>> {
    let mut events = Vec::new();
    for chunk in object_ids.chunks(MAX_IDS_PER_QUERY) {
        events.extend(load_events_chunk(conn, chunk, limit)?);
    }

    events.sort_by(|a, b| {
        b.event
            .date
            .cmp(&a.event.date)
            .then_with(|| b.event.id.cmp(&a.event.id))
    });
    if let Some(limit) = limit {
        events.truncate(limit);
    }
    Ok(events)
}

fn load_events_chunk(
    conn: &Connection,
    object_ids: &[i64],
    limit: Option<usize>,
) -> AppResult<Vec<EventDetails>> {
    let sql = format!(
        "SELECT events.id AS id,
                events.maintenance_object_id AS maintenance_object_id,
                events.maintenance_type_id AS maintenance_type_id,
                events.maintenance_date AS maintenance_date,
                events.comment AS comment,
                objects.title AS object_title, types.title AS type_title
         FROM maintenance_events AS events
         INNER JOIN maintenance_objects AS objects ON events.maintenance_object_id = objects.id
         INNER JOIN maintenance_types AS types ON events.maintenance_type_id = types.id
         WHERE events.maintenance_object_id IN ({})
         ORDER BY events.maintenance_date DESC, events.id DESC
         LIMIT ?",
        placeholders(object_ids.len())
    );

    let limit = sql_limit(limit);
    let mut args: Vec<&dyn ToSql> = object_ids.iter().map(|id| id as &dyn ToSql).collect();
    args.push(&limit);

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(args), |row| {
        Ok(EventDetails {
            event: map_event(row)?,
            object_title: row.get("object_title")?,
            type_title: row.get("type_title")?,
        })
    })?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}

/// Latest event date per (object, type), aggregated by the store.
pub fn load_last_performed(conn: &Connection) -> AppResult<Vec<(i64, i64, NaiveDateTime)>> {
    let mut stmt = conn.prepare(
        "SELECT maintenance_object_id, maintenance_type_id, MAX(maintenance_date) AS last_date
         FROM maintenance_events
         GROUP BY maintenance_object_id, maintenance_type_id",
    )?;
    let rows = stmt.query_map([], |row| {
        let object_id: i64 = row.get(0)?;
        let type_id: i64 = row.get(1)?;
        let raw: String = row.get(2)?;
        Ok((object_id, type_id, parse_stored_date(raw, 2)?))
    })?;
    Ok(rows.collect::<Result<Vec<_>>>()?)
}
