//! HTTP handlers for `/todos`.
//!
//! Each handler makes exactly one store call. Store failures become 500
//! responses through [`ApiError`]; nothing is retried.

use super::dto::{DeleteRequest, DeleteSummary, HealthResponse, TodoPayload};
use super::error::ApiError;
use super::AppState;
use crate::libs::messages::Message;
use crate::libs::todo::Todo;
use axum::{extract::State, Json};

/// `GET /todos`: the whole collection, in insertion order.
pub async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.lock().find_all()?;
    tracing::debug!(count = todos.len(), "Fetched todos");

    Ok(Json(todos))
}

/// `POST /todos`: inserts `input` and returns it with the assigned id.
pub async fn create_todo(State(state): State<AppState>, Json(payload): Json<TodoPayload>) -> Result<Json<Todo>, ApiError> {
    let created = state.todos.lock().create(&payload.input)?;
    tracing::info!(id = ?created.id, "Created todo");

    Ok(Json(created))
}

/// `PATCH /todos`: overwrites value, checked, removed and completedAt of `input.id`.
pub async fn update_todo(State(state): State<AppState>, Json(payload): Json<TodoPayload>) -> Result<Json<Todo>, ApiError> {
    let updated = state.todos.lock().update(&payload.input)?;
    tracing::info!(id = ?updated.id, "Updated todo");

    Ok(Json(updated))
}

/// `DELETE /todos`: deletes every record listed in `ids`.
///
/// An absent list is rejected with 400; an empty one deletes nothing.
pub async fn delete_todos(State(state): State<AppState>, Json(request): Json<DeleteRequest>) -> Result<Json<DeleteSummary>, ApiError> {
    let Some(ids) = request.ids else {
        return Err(ApiError::Validation(Message::IdsRequired.to_string()));
    };

    let count = state.todos.lock().delete_many(&ids)?;
    tracing::info!(requested = ids.len(), count, "Deleted todos");

    Ok(Json(DeleteSummary { count }))
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok".to_string() })
}
