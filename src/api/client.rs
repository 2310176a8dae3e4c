//! HTTP client for the ticklist API.
//!
//! [`TodoRemote`] is the seam the client state talks through; [`ApiClient`]
//! implements it with `reqwest` against a running `ticklist serve`.

use crate::api::dto::{DeleteRequest, DeleteSummary, TodoPayload};
use crate::libs::todo::Todo;
use reqwest::{Client, Response};
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },
}

/// The four remote operations on the todo collection.
pub trait TodoRemote: Send + Sync + 'static {
    fn list(&self) -> impl Future<Output = Result<Vec<Todo>, ClientError>> + Send;

    fn create(&self, todo: Todo) -> impl Future<Output = Result<Todo, ClientError>> + Send;

    fn update(&self, todo: Todo) -> impl Future<Output = Result<Todo, ClientError>> + Send;

    fn delete_many(&self, ids: Vec<i64>) -> impl Future<Output = Result<DeleteSummary, ClientError>> + Send;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    async fn check(res: Response) -> Result<Response, ClientError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        Err(ClientError::Status { status: status.as_u16(), body })
    }
}

impl TodoRemote for ApiClient {
    async fn list(&self) -> Result<Vec<Todo>, ClientError> {
        let res = self.client.get(self.todos_url()).send().await?;
        Ok(Self::check(res).await?.json().await?)
    }

    async fn create(&self, mut todo: Todo) -> Result<Todo, ClientError> {
        todo.id = None;
        let res = self.client.post(self.todos_url()).json(&TodoPayload { input: todo }).send().await?;
        Ok(Self::check(res).await?.json().await?)
    }

    async fn update(&self, todo: Todo) -> Result<Todo, ClientError> {
        let res = self.client.patch(self.todos_url()).json(&TodoPayload { input: todo }).send().await?;
        Ok(Self::check(res).await?.json().await?)
    }

    async fn delete_many(&self, ids: Vec<i64>) -> Result<DeleteSummary, ClientError> {
        let res = self.client.delete(self.todos_url()).json(&DeleteRequest { ids: Some(ids) }).send().await?;
        Ok(Self::check(res).await?.json().await?)
    }
}
