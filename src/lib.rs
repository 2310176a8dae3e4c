//! # ticklist
//!
//! A single-user todo list: an HTTP/JSON API over SQLite and a command-line
//! client that talks to it.
//!
//! ## Features
//!
//! - **API**: list, create, overwrite and bulk-delete todos over `/todos`
//! - **Client state**: optimistic local edits mirrored by debounced remote writes
//! - **Filters**: all, completed, current and trash views
//! - **Trash**: soft delete, restore and permanent purge
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ticklist::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
