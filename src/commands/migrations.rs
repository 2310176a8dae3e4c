use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::messages::Message,
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use rusqlite::Connection;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: Option<MigrationsCommand>,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

/// Without a subcommand prints the schema version followed by the history.
pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let conn = Db::new_without_migrations()?;

    match args.command {
        Some(MigrationsCommand::Status) => status(&conn)?,
        Some(MigrationsCommand::History) => history(&conn)?,
        None => {
            status(&conn)?;
            history(&conn)?;
        }
    }

    Ok(())
}

fn status(conn: &Connection) -> Result<()> {
    msg_print!(Message::DatabaseVersion(get_db_version(conn)?));
    if needs_migration(conn)? {
        msg_info!(Message::DatabaseNeedsUpdate);
    } else {
        msg_info!(Message::DatabaseUpToDate);
    }
    Ok(())
}

fn history(conn: &Connection) -> Result<()> {
    let history = MigrationManager::new().get_migration_history(conn)?;

    msg_print!(Message::MigrationHistory, true);
    for (version, name, applied_at) in history {
        println!("  v{}: {} (applied: {})", version, name, applied_at);
    }
    Ok(())
}
