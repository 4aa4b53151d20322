// src/export/logic.rs

use crate::core::pending::{PendingQuery, pending};
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::{EventExport, PendingExport};
use crate::ui::messages::warning;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::Path;

/// What to export.
#[derive(Debug, Clone, Copy)]
pub enum ExportSource {
    /// Pending list, optionally scoped to an object subtree.
    Pending(PendingQuery),
    /// Event history of an object subtree.
    Events { object_id: i64 },
}

pub struct ExportLogic;

fn write<T: Serialize>(format: ExportFormat, rows: &[T], path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}

impl ExportLogic {
    pub fn export(
        pool: &DbPool,
        source: ExportSource,
        format: ExportFormat,
        file: &str,
        force: bool,
        now: NaiveDateTime,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let written = match source {
            ExportSource::Pending(query) => {
                let rows: Vec<PendingExport> = pending(&pool.conn, &query, now)?
                    .iter()
                    .map(|item| PendingExport::from_item(item, now))
                    .collect();
                if rows.is_empty() {
                    warning("Nothing pending: exporting an empty list.");
                }
                write(format, &rows, path)?;
                rows.len()
            }
            ExportSource::Events { object_id } => {
                let history = SummaryLogic::events_for(&pool.conn, object_id, None)?;
                let rows: Vec<EventExport> =
                    history.events.iter().map(EventExport::from).collect();
                if rows.is_empty() {
                    warning(format!("No events recorded for '{}'.", history.object.title));
                }
                write(format, &rows, path)?;
                rows.len()
            }
        };

        Ok(written)
    }
}
