//! The HTTP/JSON surface of ticklist and the client that talks to it.
//!
//! | Method | Path     | Body                  | Response            |
//! |--------|----------|-----------------------|---------------------|
//! | GET    | /todos   |                       | `[Todo]`            |
//! | POST   | /todos   | `{input: Todo}`        | created `Todo`      |
//! | PATCH  | /todos   | `{input: Todo}`        | updated `Todo`      |
//! | DELETE | /todos   | `{ids: [int]}`         | `{count: n}`        |
//! | GET    | /health  |                       | `{status: "ok"}`    |
//!
//! ```rust,no_run
//! use ticklist::api::{router, AppState};
//! use ticklist::db::{db::Db, todos::Todos};
//!
//! let state = AppState::new(Todos::from_db(Db::in_memory()?));
//! let app = router(state);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::todos::Todos;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod client;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod server;

pub use client::{ApiClient, ClientError, TodoRemote};
pub use error::ApiError;

/// Shared handler state: the one store connection.
#[derive(Clone)]
pub struct AppState {
    pub todos: Arc<Mutex<Todos>>,
}

impl AppState {
    pub fn new(todos: Todos) -> Self {
        Self {
            todos: Arc::new(Mutex::new(todos)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/todos",
            get(handlers::list_todos)
                .post(handlers::create_todo)
                .patch(handlers::update_todo)
                .delete(handlers::delete_todos),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
