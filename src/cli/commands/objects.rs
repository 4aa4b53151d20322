use crate::cli::commands::open;
use crate::cli::parser::Commands;
use crate::cli::render::{print_breadcrumbs, print_objects};
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::queries::{get_object, links_for_object, load_types};
use crate::errors::AppResult;
use crate::ui::messages::{empty, header};
use crate::utils::table::{Column, Table};

/// `objects`, `types` and `links`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Objects { parent } => {
            let pool = open(cfg)?;
            let listing = SummaryLogic::list_objects(&pool.conn, *parent)?;

            print_breadcrumbs(&listing.breadcrumbs);
            let title = match &listing.parent {
                Some(p) => format!("Objects in {}", p.title),
                None => "Top-level objects".to_string(),
            };
            print_objects(&title, &listing.objects);
        }
        Commands::Types => {
            let pool = open(cfg)?;
            let types = load_types(&pool.conn)?;

            header("Maintenance types");
            if types.is_empty() {
                empty("no types");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 4),
                Column::new("TITLE", 20),
                Column::new("PARENT", 6),
                Column::new("DESCRIPTION", 11),
            ]);
            for t in &types {
                table.add_row(vec![
                    t.id.to_string(),
                    t.title.clone(),
                    t.parent_id.map(|p| p.to_string()).unwrap_or_else(|| "--".into()),
                    t.description.clone(),
                ]);
            }
            print!("{}", table.render());
        }
        Commands::Links { object_id } => {
            let pool = open(cfg)?;
            let object = get_object(&pool.conn, *object_id)?;
            let links = links_for_object(&pool.conn, *object_id)?;

            header(format!("Maintenance applicable to {}", object.title));
            if links.is_empty() {
                empty("no links");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("TYPE", 4),
                Column::new("TITLE", 20),
                Column::new("EVERY", 11),
            ]);
            for l in &links {
                table.add_row(vec![
                    l.maintenance_type.id.to_string(),
                    l.maintenance_type.title.clone(),
                    l.link
                        .periodicity
                        .map(|d| format!("{d} days"))
                        .unwrap_or_else(|| "unscheduled".into()),
                ]);
            }
            print!("{}", table.render());
        }
        _ => {}
    }

    Ok(())
}
