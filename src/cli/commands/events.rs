use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::cli::render::{print_breadcrumbs, print_events};
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Events { object_id, limit } = cmd {
        let pool = open(cfg)?;
        let history = SummaryLogic::events_for(&pool.conn, *object_id, *limit)?;

        print_breadcrumbs(&history.breadcrumbs);
        print_events(
            &format!("Events for {} and nested objects", history.object.title),
            &history.events,
            &cfg.date_format,
        );
    }

    Ok(())
}
