//! Core library modules for ticklist.
//!
//! - **Model**: the todo record, typed edits and filter modes
//! - **Client state**: the optimistic store and its debounced remote writes
//! - **Infrastructure**: configuration, data storage, logging, messages
//! - **Presentation**: terminal table rendering
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ticklist::api::ApiClient;
//! use ticklist::libs::{debounce::DEFAULT_DEBOUNCE, store::TodoStore, todo::TodoUpdate};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut store = TodoStore::new(Arc::new(ApiClient::new("http://127.0.0.1:3000")), DEFAULT_DEBOUNCE);
//! store.hydrate().await?;
//! store.apply(1, TodoUpdate::Checked(true))?;
//! store.flush().await;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod debounce;
pub mod filter;
pub mod logging;
pub mod messages;
pub mod store;
pub mod todo;
pub mod view;
