//! Error responses of the HTTP API.
//!
//! Two outcomes exist: a validation failure answered with 400 and the message
//! as `{"error": "<message>"}`, and a store failure answered with 500 and the
//! raw store error wrapped as `{"error": {"error": "<message>"}}`.

use crate::db::todos::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(message) => json!({ "error": message }),
            ApiError::Store(error) => {
                tracing::error!(%error, "Store operation failed");
                json!({ "error": { "error": error.to_string() } })
            }
        };
        (status, Json(body)).into_response()
    }
}
