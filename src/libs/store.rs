//! Client-side state container for the todo collection.
//!
//! [`TodoStore`] owns the local copy of every todo and is the only place it
//! is mutated. Edits are applied locally first and mirrored to the remote
//! through a [`Debouncer`] keyed by `(id, field)`. Remote responses only feed
//! back into local state on [`TodoStore::hydrate`] and [`TodoStore::submit`].

use crate::api::client::{ClientError, TodoRemote};
use crate::libs::debounce::Debouncer;
use crate::libs::filter::TodoFilter;
use crate::libs::messages::Message;
use crate::libs::todo::{Todo, TodoField, TodoUpdate};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;

/// Why a local edit was refused.
#[derive(Error, Debug, PartialEq)]
pub enum EditError {
    #[error("{}", Message::TodoNotFound(*.0))]
    NotFound(i64),
    #[error("{}", Message::TodoIsDone(*.0))]
    Done(i64),
    #[error("{}", Message::TodoInTrash(*.0))]
    InTrash(i64),
}

/// The text and date fields of the creation form.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftInput {
    pub text: String,
    pub date: Option<DateTime<Utc>>,
}

impl DraftInput {
    pub fn new(text: &str, date: Option<DateTime<Utc>>) -> Self {
        Self {
            text: text.to_string(),
            date,
        }
    }

    /// Empty text, date set to now.
    pub fn reset(&mut self) {
        self.text.clear();
        self.date = Some(Utc::now());
    }
}

impl Default for DraftInput {
    fn default() -> Self {
        Self::new("", Some(Utc::now()))
    }
}

pub struct TodoStore<R: TodoRemote> {
    remote: Arc<R>,
    todos: Vec<Todo>,
    filter: TodoFilter,
    debouncer: Debouncer<(i64, TodoField)>,
}

impl<R: TodoRemote> TodoStore<R> {
    /// An empty store; call [`hydrate`](Self::hydrate) to load the collection.
    pub fn new(remote: Arc<R>, debounce: Duration) -> Self {
        Self {
            remote,
            todos: Vec::new(),
            filter: TodoFilter::default(),
            debouncer: Debouncer::new(debounce),
        }
    }

    /// Replaces local state with the remote collection.
    pub async fn hydrate(&mut self) -> Result<(), ClientError> {
        self.todos = self.remote.list().await?;
        tracing::debug!(count = self.todos.len(), "Hydrated todo store");
        Ok(())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn find(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == Some(id))
    }

    pub fn filter(&self) -> TodoFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TodoFilter) {
        self.filter = filter;
    }

    /// The todos matching the active filter, in collection order.
    pub fn visible(&self) -> Vec<&Todo> {
        self.filter.apply(&self.todos)
    }

    /// Applies `update` to the todo with `id` and schedules the remote write.
    ///
    /// Fails without touching anything when no local todo has that id or the
    /// field is locked (see [`Todo::is_editable`]). A later edit of the same
    /// field of the same todo within the debounce window replaces the pending
    /// write. Edits of different fields are sent independently.
    pub fn apply(&mut self, id: i64, update: TodoUpdate) -> Result<(), EditError> {
        let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == Some(id)) else {
            tracing::debug!(id, "No local todo to update");
            return Err(EditError::NotFound(id));
        };

        if !todo.is_editable(update.field()) {
            tracing::debug!(id, field = ?update.field(), "Todo field is locked");
            return Err(if todo.removed { EditError::InTrash(id) } else { EditError::Done(id) });
        }

        todo.apply(&update);
        let snapshot = todo.clone();
        let remote = self.remote.clone();

        self.debouncer.schedule((id, update.field()), async move {
            if let Err(error) = remote.update(snapshot).await {
                tracing::warn!("{}", Message::RemoteUpdateFailed(id, error.to_string()));
            }
        });

        Ok(())
    }

    /// Creates a todo from `value` and `date` and appends the stored record.
    ///
    /// Empty text or a missing date is a silent no-op returning `Ok(None)`.
    pub async fn submit(&mut self, value: &str, date: Option<DateTime<Utc>>) -> Result<Option<Todo>, ClientError> {
        if value.is_empty() {
            return Ok(None);
        }
        let Some(date) = date else {
            return Ok(None);
        };

        let created = self.remote.create(Todo::new(value, Some(date))).await?;
        self.todos.push(created.clone());

        Ok(Some(created))
    }

    /// Submits the draft, resetting it as soon as the request is initiated.
    ///
    /// The draft is cleared before the response arrives, so a failed create
    /// leaves it empty too.
    pub async fn submit_draft(&mut self, draft: &mut DraftInput) -> Result<Option<Todo>, ClientError> {
        if draft.text.is_empty() || draft.date.is_none() {
            return Ok(None);
        }

        let (text, date) = (draft.text.clone(), draft.date);
        draft.reset();

        self.submit(&text, date).await
    }

    /// Permanently deletes every removed todo.
    ///
    /// Only acts under [`TodoFilter::Removed`]. Removed todos are dropped
    /// locally right away and the bulk delete runs in the background; the
    /// returned handle can be awaited by callers that must outlive it.
    pub fn empty_trash(&mut self) -> Option<JoinHandle<()>> {
        if self.filter != TodoFilter::Removed {
            return None;
        }

        let ids: Vec<i64> = self.todos.iter().filter(|todo| todo.removed).filter_map(|todo| todo.id).collect();
        self.todos.retain(|todo| !todo.removed);

        let remote = self.remote.clone();
        Some(tokio::spawn(async move {
            match remote.delete_many(ids).await {
                Ok(summary) => tracing::debug!(count = summary.count, "Emptied trash"),
                Err(error) => tracing::debug!("{}", Message::RemoteDeleteFailed(error.to_string())),
            }
        }))
    }

    /// Number of remote writes still waiting for their window.
    pub fn pending_writes(&self) -> usize {
        self.debouncer.pending_count()
    }

    /// Sends every pending write now and waits for them.
    pub async fn flush(&mut self) {
        self.debouncer.flush().await;
    }

    pub fn cancel_pending(&mut self) {
        self.debouncer.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_reset_clears_text_and_sets_date() {
        let mut draft = DraftInput::new("buy milk", None);
        draft.reset();
        assert!(draft.text.is_empty());
        assert!(draft.date.is_some());
    }
}
