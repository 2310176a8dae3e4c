//! Request and response bodies of the `/todos` endpoints.

use crate::libs::todo::Todo;
use serde::{Deserialize, Serialize};

/// `{ "input": Todo }`, the body of create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoPayload {
    pub input: Todo,
}

/// `{ "ids": [..] }`, the body of bulk delete. A missing or `null` list is kept
/// as `None` so it can be told apart from an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub ids: Option<Vec<i64>>,
}

/// Number of records a bulk delete removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSummary {
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
