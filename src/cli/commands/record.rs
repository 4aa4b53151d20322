use crate::cli::commands::open;
use crate::cli::parser::{Commands, LinkAction, ObjectAction, TypeAction};
use crate::config::Config;
use crate::core::records::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// `object add`, `type add`, `link add|del`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = open(cfg)?;

    match cmd {
        Commands::Object {
            action:
                ObjectAction::Add {
                    title,
                    description,
                    parent,
                },
        } => {
            let obj = RecordLogic::add_object(&pool.conn, title, description, *parent)?;
            success(format!("Object #{} '{}' created", obj.id, obj.title));
        }
        Commands::Type {
            action:
                TypeAction::Add {
                    title,
                    description,
                    parent,
                },
        } => {
            let t = RecordLogic::add_type(&pool.conn, title, description, *parent)?;
            success(format!("Type #{} '{}' created", t.id, t.title));
        }
        Commands::Link {
            action:
                LinkAction::Add {
                    object_id,
                    type_id,
                    every,
                },
        } => {
            let link = RecordLogic::add_link(&pool.conn, *object_id, *type_id, *every)?;
            success(format!("Link #{} created", link.id));
        }
        Commands::Link {
            action: LinkAction::Del { object_id, type_id },
        } => {
            RecordLogic::remove_link(&pool.conn, *object_id, *type_id)?;
            success(format!(
                "Link between object #{} and type #{} removed",
                object_id, type_id
            ));
        }
        _ => {}
    }

    Ok(())
}
