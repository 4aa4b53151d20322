use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pending::PendingQuery;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportSource};
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        events,
        object,
        limit,
        horizon,
        force,
    } = cmd
    {
        let source = match (*events, *object) {
            (true, Some(object_id)) => ExportSource::Events { object_id },
            _ => ExportSource::Pending(PendingQuery::resolve(cfg, *object, *limit, *horizon)),
        };

        let pool = open(cfg)?;
        ExportLogic::export(&pool, source, *format, file, *force, now)?;
    }
    Ok(())
}
