//! The to-do record and the typed single-field edits applied to it.
//!
//! A [`Todo`] is serialized with the wire names the HTTP API uses
//! (`id`, `value`, `checked`, `removed`, `completedAt`). The completion date
//! accepts either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which is
//! read as midnight UTC.

use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Store-assigned identifier, `None` until the record is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub removed: bool,
    /// Target or completion date. Missing, `null` and `""` all read as `None`.
    #[serde(default, deserialize_with = "deserialize_completed_at")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Todo {
    /// A new, unchecked, not-removed todo without an id.
    pub fn new(value: &str, completed_at: Option<DateTime<Utc>>) -> Self {
        Todo {
            id: None,
            value: value.to_string(),
            checked: false,
            removed: false,
            completed_at,
        }
    }

    /// Whether `field` may be edited in the todo's current state.
    ///
    /// A removed todo only accepts restoring. A checked todo keeps its text
    /// and date until it is unchecked.
    pub fn is_editable(&self, field: TodoField) -> bool {
        match field {
            TodoField::Removed => true,
            TodoField::Checked => !self.removed,
            TodoField::Value | TodoField::CompletedAt => !self.removed && !self.checked,
        }
    }

    /// Overwrites the one field named by `update`.
    pub fn apply(&mut self, update: &TodoUpdate) {
        match update {
            TodoUpdate::Checked(checked) => self.checked = *checked,
            TodoUpdate::Value(value) => self.value = value.clone(),
            TodoUpdate::CompletedAt(completed_at) => self.completed_at = *completed_at,
            TodoUpdate::Removed(removed) => self.removed = *removed,
        }
    }
}

/// Names a mutable field of a [`Todo`]; used to key pending remote writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoField {
    Checked,
    Value,
    CompletedAt,
    Removed,
}

/// A single-field edit carrying a value of the field's own type.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoUpdate {
    Checked(bool),
    Value(String),
    CompletedAt(Option<DateTime<Utc>>),
    Removed(bool),
}

impl TodoUpdate {
    pub fn field(&self) -> TodoField {
        match self {
            TodoUpdate::Checked(_) => TodoField::Checked,
            TodoUpdate::Value(_) => TodoField::Value,
            TodoUpdate::CompletedAt(_) => TodoField::CompletedAt,
            TodoUpdate::Removed(_) => TodoField::Removed,
        }
    }
}

/// Parses `YYYY-MM-DD` or an RFC 3339 timestamp into a UTC instant.
pub fn parse_date(input: &str) -> anyhow::Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(input) {
        return Ok(date_time.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
        .map_err(|_| msg_error_anyhow!(Message::InvalidDate(input.to_string())))
}

/// Formats the date part the way the date input shows it.
pub fn format_date(date: &Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn deserialize_completed_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_date(s).map(Some).map_err(serde::de::Error::custom),
    }
}
