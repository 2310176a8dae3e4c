//! Command-line interface for ticklist.
//!
//! `serve` runs the HTTP API over the local SQLite store. Every other todo
//! command is a client: it hydrates a [`TodoStore`] from the configured API,
//! applies one action and flushes pending writes before exiting.

pub mod add;
pub mod check;
pub mod date;
pub mod edit;
pub mod empty;
pub mod init;
pub mod list;
pub mod migrations;
pub mod remove;
pub mod serve;

use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::store::TodoStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP API")]
    Serve(serve::ServeArgs),
    #[command(about = "Show todos")]
    List(list::ListArgs),
    #[command(about = "Add a todo", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Toggle a todo done / not done", arg_required_else_help = true)]
    Check(check::CheckArgs),
    #[command(about = "Change the text of a todo", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Set or clear the date of a todo", arg_required_else_help = true)]
    Date(date::DateArgs),
    #[command(about = "Move a todo to the trash, or restore it", arg_required_else_help = true)]
    Remove(remove::RemoveArgs),
    #[command(about = "Permanently delete every todo in the trash")]
    Empty,
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Show database schema version and migration history")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Check(args) => check::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Date(args) => date::cmd(args).await,
            Commands::Remove(args) => remove::cmd(args).await,
            Commands::Empty => empty::cmd().await,
            Commands::Init => init::cmd(),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}

/// A store hydrated from the API named in the configuration.
pub(crate) async fn open_store() -> Result<TodoStore<ApiClient>> {
    let client = Config::load()?.client();
    let mut store = TodoStore::new(Arc::new(ApiClient::new(&client.api_url)), client.debounce());
    store.hydrate().await?;

    Ok(store)
}
