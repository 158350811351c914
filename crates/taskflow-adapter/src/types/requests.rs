/*
[INPUT]:  TaskInput / partial updates and fetch parameters
[OUTPUT]: Typed request bodies for record query and write endpoints
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Priority, TaskStatus};
use super::models::TaskInput;

/// Fields projected by a task fetch
pub const TASK_FIELDS: [&str; 9] = [
    "Id",
    "Name",
    "title",
    "description",
    "dueDate",
    "priority",
    "status",
    "CreatedOn",
    "ModifiedOn",
];

/// Partial task update; unset fields are left untouched by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Patch changing only the status
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

impl From<&TaskInput> for TaskPatch {
    fn from(input: &TaskInput) -> Self {
        Self {
            title: Some(input.title.clone()),
            description: Some(input.description.clone()),
            due_date: Some(input.due_date),
            priority: Some(input.priority),
            status: Some(input.status),
        }
    }
}

/// Backend record payload. `Name` mirrors `title` for the generic name column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecordWrite {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Empty string clears the due date
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl From<&TaskPatch> for TaskRecordWrite {
    fn from(patch: &TaskPatch) -> Self {
        Self {
            name: patch.title.clone(),
            title: patch.title.clone(),
            description: patch.description.clone(),
            due_date: patch.due_date.map(|date| {
                date.map(|value| value.format("%Y-%m-%d").to_string())
                    .unwrap_or_default()
            }),
            priority: patch.priority,
            status: patch.status,
        }
    }
}

impl From<&TaskInput> for TaskRecordWrite {
    fn from(input: &TaskInput) -> Self {
        Self::from(&TaskPatch::from(input))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordWriteRequest {
    pub record: TaskRecordWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagingInfo {
    pub limit: u32,
    pub offset: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecordsRequest {
    pub fields: Vec<String>,
    #[serde(rename = "pagingInfo")]
    pub paging_info: PagingInfo,
    #[serde(rename = "orderBy")]
    pub order_by: Vec<OrderBy>,
}

impl QueryRecordsRequest {
    /// Newest-modified-first query for the first `limit` tasks
    pub fn recent_tasks(limit: u32) -> Self {
        Self {
            fields: TASK_FIELDS.iter().map(|field| field.to_string()).collect(),
            paging_info: PagingInfo { limit, offset: 0 },
            order_by: vec![OrderBy {
                field: "ModifiedOn".to_string(),
                direction: SortDirection::Desc,
            }],
        }
    }
}
