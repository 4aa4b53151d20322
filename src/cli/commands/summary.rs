use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::cli::render::{print_breadcrumbs, print_events, print_objects, print_pending};
use crate::config::Config;
use crate::core::hierarchy::Forest;
use crate::core::summary::SummaryLogic;
use crate::errors::AppResult;
use crate::utils::formatting::bold;
use chrono::NaiveDateTime;

/// `summary` and `path`
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    match cmd {
        Commands::Summary { object_id } => {
            let pool = open(cfg)?;
            let s = SummaryLogic::object_summary(&pool.conn, cfg, *object_id, now)?;

            print_breadcrumbs(&s.breadcrumbs);
            println!("{} (#{})", bold(&s.object.title), s.object.id);
            if !s.object.description.is_empty() {
                println!("{}", s.object.description);
            }

            print_objects("Nested objects", &s.nested);
            print_events("Recent events", &s.recent_events, &cfg.date_format);
            print_pending(
                &format!("Pending maintenance (next {} days)", cfg.summary_horizon_days),
                &s.pending,
                now,
                &cfg.date_format,
            );
        }
        Commands::Path { object_id } => {
            let pool = open(cfg)?;
            let forest = Forest::load(&pool.conn)?;
            for (depth, obj) in forest.breadcrumbs(*object_id)?.iter().enumerate() {
                println!("{}{} (#{})", "  ".repeat(depth), obj.title, obj.id);
            }
        }
        _ => {}
    }

    Ok(())
}
