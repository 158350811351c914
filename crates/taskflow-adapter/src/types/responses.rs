/*
[INPUT]:  Backend JSON responses with loosely typed records
[OUTPUT]: Raw TaskRecord wire type and its mapping onto the domain Task
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new fallback rules are needed
*/

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{Priority, TaskStatus};
use super::models::Task;

/// Every backend response wraps its payload under `data`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Record identifier; the backend emits numbers but strings are accepted too
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(value) => write!(f, "{value}"),
            RecordId::Text(value) => f.write_str(value),
        }
    }
}

/// Task record exactly as the backend returns it; every column may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "Id", default)]
    pub id: Option<RecordId>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "dueDate", default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "CreatedOn", default)]
    pub created_on: Option<String>,
    #[serde(rename = "ModifiedOn", default)]
    pub modified_on: Option<String>,
}

impl TaskRecord {
    /// Map onto a domain task. Returns `None` only when the record has no id.
    pub fn into_task(self) -> Option<Task> {
        let id = self.id?.to_string();

        let title = non_empty(self.title)
            .or_else(|| non_empty(self.name))
            .unwrap_or_default();

        let created = self.created_on.as_deref().and_then(parse_timestamp);
        let modified = self.modified_on.as_deref().and_then(parse_timestamp);
        let created_at = created.or(modified).unwrap_or_else(Utc::now);
        let updated_at = modified.unwrap_or(created_at).max(created_at);

        Some(Task {
            id,
            title,
            description: self.description.unwrap_or_default(),
            due_date: self.due_date.as_deref().and_then(parse_due_date),
            priority: Priority::from_wire(self.priority.as_deref()),
            status: TaskStatus::from_wire(self.status.as_deref()),
            created_at,
            updated_at,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Accepts `YYYY-MM-DD` or a full timestamp (date part kept)
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw).map(|ts| ts.date_naive()))
}

/// RFC 3339, or a naive ISO timestamp interpreted as UTC
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
