//! SQLite persistence for ticklist.
//!
//! ```rust,no_run
//! use ticklist::db::todos::Todos;
//! use ticklist::libs::todo::Todo;
//!
//! let mut todos = Todos::new()?;
//! let created = todos.create(&Todo::new("buy milk", None))?;
//! assert!(created.id.is_some());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management and database location.
pub mod db;

/// Versioned schema migrations applied when a database is opened.
pub mod migrations;

/// The todo store: find-all, create, update-by-id, delete-by-ids.
pub mod todos;
