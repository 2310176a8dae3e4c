//! Versioned schema migrations.
//!
//! Migrations are plain SQL batches listed in [`MIGRATIONS`] in ascending
//! version order. Pending ones run together in one transaction when a
//! database is opened, and each applied version is recorded in
//! `schema_migrations` together with its name and timestamp.
//!
//! ```rust,no_run
//! use ticklist::db::migrations::{init_with_migrations, get_db_version};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("ticklist.db")?;
//! init_with_migrations(&mut conn)?;
//! println!("schema v{}", get_db_version(&conn)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_MIGRATIONS: &str = "CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    applied_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)";
const SELECT_VERSION: &str = "SELECT MAX(version) FROM schema_migrations";
const RECORD_MIGRATION: &str = "INSERT INTO schema_migrations (version, name) VALUES (?1, ?2)";
const SELECT_APPLIED: &str = "SELECT 1 FROM schema_migrations WHERE version = ?1";
const SELECT_HISTORY: &str = "SELECT version, name, applied_at FROM schema_migrations ORDER BY version";

#[derive(Debug)]
pub struct Migration {
    pub version: u32,
    pub name: &'static str,
    sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_todos",
        sql: "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            value TEXT NOT NULL,
            checked BOOLEAN NOT NULL DEFAULT FALSE,
            removed BOOLEAN NOT NULL DEFAULT FALSE,
            completed_at TIMESTAMP
        );",
    },
    Migration {
        version: 2,
        name: "index_todos_removed",
        sql: "CREATE INDEX IF NOT EXISTS idx_todos_removed ON todos(removed);",
    },
];

/// One applied migration: version, name and when it ran.
pub type HistoryEntry = (u32, String, String);

pub struct MigrationManager {
    migrations: &'static [Migration],
}

impl MigrationManager {
    pub fn new() -> Self {
        Self { migrations: MIGRATIONS }
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.iter().map(|m| m.version).max().unwrap_or(0)
    }

    /// Brings `conn` up to [`latest_version`](Self::latest_version). Either
    /// every pending migration is applied or none is.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(SCHEMA_MIGRATIONS, [])?;
        let current = self.current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current).collect();
        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }
        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            if let Err(e) = tx.execute_batch(migration.sql) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e.into());
            }
            tx.execute(RECORD_MIGRATION, params![migration.version, migration.name])?;

            msg_debug!(Message::MigrationCompleted(migration.version));
        }
        tx.commit()?;

        msg_debug!(Message::AllMigrationsCompleted);
        Ok(())
    }

    /// Highest applied version; 0 for a database that was never migrated.
    pub fn current_version(&self, conn: &Connection) -> Result<u32> {
        if !Self::has_history(conn)? {
            return Ok(0);
        }
        let version: Option<u32> = conn.query_row(SELECT_VERSION, [], |row| row.get(0))?;

        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        if !Self::has_history(conn)? {
            return Ok(false);
        }
        let found = conn.query_row(SELECT_APPLIED, params![version], |_| Ok(())).optional()?;

        Ok(found.is_some())
    }

    /// Applied migrations, oldest first. Empty for a database that was never migrated.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<HistoryEntry>> {
        if !Self::has_history(conn)? {
            return Ok(Vec::new());
        }
        let mut stmt = conn.prepare(SELECT_HISTORY)?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?;

        let mut history = Vec::new();
        for entry in rows {
            history.push(entry?);
        }
        Ok(history)
    }

    fn has_history(conn: &Connection) -> Result<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations'",
                [],
                |_| Ok(()),
            )
            .optional()?;

        Ok(found.is_some())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().current_version(conn)
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.current_version(conn)? < manager.latest_version())
}
