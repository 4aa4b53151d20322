use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::cli::render::{print_breadcrumbs, print_pending};
use crate::config::Config;
use crate::core::hierarchy::Forest;
use crate::core::pending::{PendingQuery, pending};
use crate::errors::AppResult;
use chrono::NaiveDateTime;

/// `dashboard` and `pending`
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let (object, limit, horizon) = match cmd {
        Commands::Dashboard { limit, horizon } => (None, *limit, *horizon),
        Commands::Pending {
            object,
            limit,
            horizon,
        } => (*object, *limit, *horizon),
        _ => return Ok(()),
    };

    let pool = open(cfg)?;
    let query = PendingQuery::resolve(cfg, object, limit, horizon);
    let items = pending(&pool.conn, &query, now)?;

    let title = match object {
        Some(id) => {
            print_breadcrumbs(&Forest::load(&pool.conn)?.breadcrumbs(id)?);
            format!("Pending maintenance (next {} days)", query.horizon_days)
        }
        None => format!("Dashboard: pending maintenance (next {} days)", query.horizon_days),
    };

    print_pending(&title, &items, now, &cfg.date_format);
    Ok(())
}
