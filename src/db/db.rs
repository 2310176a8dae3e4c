use super::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::env;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "ticklist.db";

/// Overrides the database location when set.
pub const DB_PATH_ENV: &str = "TICKLIST_DB";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database and applies pending migrations.
    pub fn new() -> Result<Db> {
        Self::open(Self::default_path()?)
    }

    /// Opens the database at `path` and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// A migrated in-memory database, gone when dropped.
    pub fn in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// A raw connection to the application database, migrations not applied.
    pub fn new_without_migrations() -> Result<Connection> {
        Ok(Connection::open(Self::default_path()?)?)
    }

    pub fn default_path() -> Result<PathBuf> {
        match env::var(DB_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
