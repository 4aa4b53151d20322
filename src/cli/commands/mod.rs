pub mod config;
pub mod db;
pub mod event;
pub mod events;
pub mod export;
pub mod init;
pub mod log;
pub mod objects;
pub mod pending;
pub mod record;
pub mod summary;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured journal database.
pub(crate) fn open(cfg: &Config) -> AppResult<DbPool> {
    DbPool::new(&cfg.database)
}
