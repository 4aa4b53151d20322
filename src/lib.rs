//! mjournal library root.
//! Exposes the CLI parser, the `run()` entry point and the journal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Dashboard { .. } | Commands::Pending { .. } => {
            commands::pending::handle(&cli.command, cfg, now)
        }
        Commands::Summary { .. } | Commands::Path { .. } => {
            commands::summary::handle(&cli.command, cfg, now)
        }
        Commands::Objects { .. } | Commands::Types | Commands::Links { .. } => {
            commands::objects::handle(&cli.command, cfg)
        }
        Commands::Events { .. } => commands::events::handle(&cli.command, cfg),
        Commands::Event { .. } => commands::event::handle(&cli.command, cfg, now),
        Commands::Object { .. } | Commands::Type { .. } | Commands::Link { .. } => {
            commands::record::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg, now),
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();

    // Config is loaded once and handed down
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let now = utils::date::parse_optional_datetime(cli.now.as_ref())?
        .unwrap_or_else(utils::date::now);
    tracing::debug!(database = %cfg.database, %now, "starting");

    dispatch(&cli, &cfg, now)
}
