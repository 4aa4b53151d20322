use crate::cli::commands::open;
use crate::cli::parser::{Commands, EventAction};
use crate::config::Config;
use crate::core::event::{EventChanges, EventLogic};
use crate::db::queries::{get_event, get_object};
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use crate::utils::date::parse_optional_datetime;
use chrono::NaiveDateTime;

pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    let Commands::Event { action } = cmd else {
        return Ok(());
    };
    let pool = open(cfg)?;

    match action {
        EventAction::Add {
            object_id,
            type_id,
            date,
            comment,
        } => {
            let when = parse_optional_datetime(date.as_ref())?.unwrap_or(now);
            let ev = EventLogic::add(&pool.conn, *object_id, *type_id, when, comment)?;
            success(format!(
                "Event #{} recorded at {}",
                ev.id,
                ev.date.format(&cfg.date_format)
            ));
        }
        EventAction::Edit {
            event_id,
            type_id,
            date,
            comment,
        } => {
            let changes = EventChanges {
                type_id: *type_id,
                date: parse_optional_datetime(date.as_ref())?,
                comment: comment.clone(),
            };
            let ev = EventLogic::edit(&pool.conn, *event_id, &changes)?;
            success(format!(
                "Event #{} updated ({})",
                ev.id,
                ev.date.format(&cfg.date_format)
            ));
        }
        EventAction::Del { event_id, yes } => {
            // Resolve first so a missing id fails before prompting
            let ev = get_event(&pool.conn, *event_id)?;
            let object = get_object(&pool.conn, ev.object_id)?;

            let prompt = format!(
                "Delete event #{} on '{}' at {}? This action is irreversible.",
                ev.id,
                object.title,
                ev.date.format(&cfg.date_format)
            );
            if !*yes && !confirm(&prompt)? {
                info("Operation cancelled.");
                return Ok(());
            }

            EventLogic::delete(&pool.conn, *event_id)?;
            success(format!("Event #{} has been deleted.", event_id));
        }
    }

    Ok(())
}
