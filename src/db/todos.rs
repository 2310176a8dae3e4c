//! Persistent storage of todo records.
//!
//! The store exposes exactly the four operations the API needs: find-all,
//! create, update-by-id and delete-where-id-in. Ids are assigned by SQLite
//! on insert and rows come back in insertion order.

use super::db::Db;
use crate::libs::todo::Todo;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use thiserror::Error;

const INSERT_TODO: &str = "INSERT INTO todos (value, checked, removed, completed_at) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TODO: &str = "UPDATE todos SET value = ?2, checked = ?3, removed = ?4, completed_at = ?5 WHERE id = ?1";
const SELECT_TODOS: &str = "SELECT id, value, checked, removed, completed_at FROM todos ORDER BY id";
const SELECT_TODO_BY_ID: &str = "SELECT id, value, checked, removed, completed_at FROM todos WHERE id = ?1";
const DELETE_WHERE_ID: &str = "DELETE FROM todos WHERE id IN";

/// Ids bound per DELETE statement, well under SQLite's host parameter limit.
const DELETE_CHUNK: usize = 500;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
    #[error("Record to update not found: {0}")]
    NotFound(i64),
    #[error("Record id is required for an update")]
    MissingId,
}

pub type StoreResult<T> = Result<T, StoreError>;

pub struct Todos {
    pub conn: Connection,
}

impl Todos {
    /// Opens the application database, running pending migrations.
    pub fn new() -> anyhow::Result<Todos> {
        Ok(Self::from_db(Db::new()?))
    }

    /// Wraps an opened, migrated database.
    pub fn from_db(db: Db) -> Todos {
        Todos { conn: db.conn }
    }

    /// Every record, in insertion order.
    pub fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let mut stmt = self.conn.prepare(SELECT_TODOS)?;
        let todo_iter = stmt.query_map([], Self::map_row)?;

        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }
        Ok(todos)
    }

    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Todo>> {
        Ok(self.conn.query_row(SELECT_TODO_BY_ID, params![id], Self::map_row).optional()?)
    }

    /// Inserts a new record and returns it with its assigned id. Any id on
    /// `todo` is ignored.
    pub fn create(&mut self, todo: &Todo) -> StoreResult<Todo> {
        self.conn.execute(INSERT_TODO, params![todo.value, todo.checked, todo.removed, todo.completed_at])?;
        let id = self.conn.last_insert_rowid();

        self.get_by_id(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Overwrites all four mutable fields of the record with `todo.id`.
    pub fn update(&mut self, todo: &Todo) -> StoreResult<Todo> {
        let id = todo.id.ok_or(StoreError::MissingId)?;
        let affected = self.conn.execute(UPDATE_TODO, params![id, todo.value, todo.checked, todo.removed, todo.completed_at])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        self.get_by_id(id)?.ok_or(StoreError::NotFound(id))
    }

    /// Deletes every record whose id is in `ids`. Unknown ids are ignored.
    ///
    /// Large id sets are deleted in chunks inside one transaction, so the
    /// call removes either all matching records or none.
    pub fn delete_many(&mut self, ids: &[i64]) -> StoreResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let tx = self.conn.transaction()?;
        let mut deleted = 0;
        for chunk in ids.chunks(DELETE_CHUNK) {
            let sql = format!("{} ({})", DELETE_WHERE_ID, vec!["?"; chunk.len()].join(", "));
            deleted += tx.execute(&sql, params_from_iter(chunk.iter()))?;
        }
        tx.commit()?;

        Ok(deleted)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
        Ok(Todo {
            id: row.get(0)?,
            value: row.get(1)?,
            checked: row.get(2)?,
            removed: row.get(3)?,
            completed_at: row.get(4)?,
        })
    }
}
