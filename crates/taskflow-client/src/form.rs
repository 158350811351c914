/*
[INPUT]:  Field edits from the view, tasks selected for editing
[OUTPUT]: Shared create/edit draft, field-level validation errors, edit binding
[POS]:    Form layer - single task form controller
[UPDATE]: When editable task fields or validation rules change
*/

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Local, NaiveDate};
use taskflow_adapter::{Priority, Task, TaskInput, TaskStatus, parse_due_date};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const DUE_DATE_IN_PAST: &str = "Due date cannot be in the past";
pub const DUE_DATE_INVALID: &str = "Due date is not a valid date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    Title,
    Description,
    DueDate,
    Priority,
    Status,
}

impl TaskField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskField::Title => "title",
            TaskField::Description => "description",
            TaskField::DueDate => "dueDate",
            TaskField::Priority => "priority",
            TaskField::Status => "status",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress form contents. The due date is kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::Pending,
        }
    }
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task
                .due_date
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            priority: task.priority,
            status: task.status,
        }
    }

    /// Convert to the create payload. Call after `validate` passes; an
    /// unparseable due date is dropped here.
    pub fn to_input(&self) -> TaskInput {
        TaskInput {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            due_date: parse_due_date(&self.due_date),
            priority: self.priority,
            status: self.status,
        }
    }
}

/// One field edit coming from the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Description(String),
    DueDate(String),
    Priority(Priority),
    Status(TaskStatus),
}

impl FieldUpdate {
    pub fn field(&self) -> TaskField {
        match self {
            FieldUpdate::Title(_) => TaskField::Title,
            FieldUpdate::Description(_) => TaskField::Description,
            FieldUpdate::DueDate(_) => TaskField::DueDate,
            FieldUpdate::Priority(_) => TaskField::Priority,
            FieldUpdate::Status(_) => TaskField::Status,
        }
    }
}

/// Field → message mapping; empty means the draft is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<TaskField, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: TaskField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: TaskField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn insert(&mut self, field: TaskField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: TaskField) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Start of the current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check a draft against `today`. Pure; the caller decides where errors go.
pub fn validate(draft: &TaskDraft, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if draft.title.trim().is_empty() {
        errors.insert(TaskField::Title, TITLE_REQUIRED);
    }

    let due = draft.due_date.trim();
    if !due.is_empty() {
        match parse_due_date(due) {
            Some(date) if date < today => errors.insert(TaskField::DueDate, DUE_DATE_IN_PAST),
            Some(_) => {}
            None => errors.insert(TaskField::DueDate, DUE_DATE_INVALID),
        }
    }

    errors
}

/// Owner of the single shared form
#[derive(Debug, Clone, Default)]
pub struct FormController {
    draft: TaskDraft,
    editing_id: Option<String>,
    errors: ValidationErrors,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing_id.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn is_bound_to(&self, id: &str) -> bool {
        self.editing_id.as_deref() == Some(id)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error(&self, field: TaskField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Apply one field edit and clear that field's error
    pub fn set_field(&mut self, update: FieldUpdate) {
        self.errors.remove(update.field());
        match update {
            FieldUpdate::Title(value) => self.draft.title = value,
            FieldUpdate::Description(value) => self.draft.description = value,
            FieldUpdate::DueDate(value) => self.draft.due_date = value,
            FieldUpdate::Priority(value) => self.draft.priority = value,
            FieldUpdate::Status(value) => self.draft.status = value,
        }
    }

    /// Validate the current draft against today and keep the resulting errors
    pub fn validate(&mut self) -> bool {
        self.validate_on(today())
    }

    pub fn validate_on(&mut self, today: NaiveDate) -> bool {
        self.errors = validate(&self.draft, today);
        self.errors.is_empty()
    }

    pub(crate) fn set_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    /// Load a task into the form and bind the form to its id
    pub fn begin_edit(&mut self, task: &Task) {
        self.draft = TaskDraft::from_task(task);
        self.editing_id = Some(task.id.clone());
        self.errors = ValidationErrors::default();
        tracing::debug!(task_id = %task.id, "form bound for edit");
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn reset_after_submit(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.draft = TaskDraft::default();
        self.editing_id = None;
        self.errors = ValidationErrors::default();
    }
}
