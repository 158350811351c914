/*
[INPUT]:  TaskApi implementation, Notifier handle, form submissions
[OUTPUT]: Authoritative session task list, derived views, outcome notifications
[POS]:    State layer - task synchronization against the remote API
[UPDATE]: When adding task operations or changing reconciliation rules
*/

use taskflow_adapter::{DeleteReceipt, RemoteError, Task, TaskApi, TaskPatch, TaskStatus};
use thiserror::Error;

use crate::filter::{self, FilterCriteria};
use crate::form::{self, FormController, TaskDraft, ValidationErrors};
use crate::notify::Notifier;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Draft rejected locally; nothing was sent
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("task not found: {0}")]
    NotFound(String),
}

/// Per-status tallies of the full collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// Owner of the session's task collection.
///
/// Mutations take `&mut self`, so at most one remote mutation is in flight per
/// store. Remote failures leave the collection at its last known good state
/// and are reported through the notifier.
#[derive(Debug)]
pub struct TaskStore<A: TaskApi> {
    api: A,
    tasks: Vec<Task>,
    load_error: Option<RemoteError>,
    loaded: bool,
    form: FormController,
    notifier: Notifier,
}

impl<A: TaskApi> TaskStore<A> {
    pub fn new(api: A, notifier: Notifier) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            load_error: None,
            loaded: false,
            form: FormController::new(),
            notifier,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Error from the last `load`, if it failed
    pub fn load_error(&self) -> Option<&RemoteError> {
        self.load_error.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn into_api(self) -> A {
        self.api
    }

    /// Replace the collection with the backend's current list
    pub async fn load(&mut self) {
        match self.api.fetch_all().await {
            Ok(tasks) => {
                tracing::info!(count = tasks.len(), "tasks loaded");
                self.tasks = tasks;
                self.load_error = None;
            }
            Err(err) => {
                tracing::error!(error = %err, status = err.status(), "failed to load tasks");
                self.notifier
                    .error(format!("Failed to load tasks: {}", err.message()));
                self.tasks.clear();
                self.load_error = Some(err);
            }
        }
        self.loaded = true;
    }

    /// Create (`editing_id` absent) or update a task from a draft.
    ///
    /// The store owns the one form, so `submit` always reports into it:
    /// validation errors land on the form, and a successful write resets it,
    /// whichever draft was passed. A remote failure leaves the form untouched.
    pub async fn submit(
        &mut self,
        draft: &TaskDraft,
        editing_id: Option<&str>,
    ) -> Result<Task, StoreError> {
        let errors = form::validate(draft, form::today());
        if !errors.is_empty() {
            tracing::debug!(%errors, "draft rejected by validation");
            self.form.set_errors(errors.clone());
            return Err(StoreError::Validation(errors));
        }

        let input = draft.to_input();
        let (result, verb) = match editing_id {
            Some(id) => (self.api.update(id, &TaskPatch::from(&input)).await, "update"),
            None => (self.api.create(&input).await, "create"),
        };

        match result {
            Ok(task) => {
                self.upsert(task.clone());
                self.form.reset_after_submit();
                let message = if editing_id.is_some() {
                    "Task updated successfully"
                } else {
                    "Task created successfully"
                };
                self.notifier.success(message);
                Ok(task)
            }
            Err(err) => {
                tracing::error!(error = %err, verb, "task submit failed");
                self.notifier
                    .error(format!("Failed to {verb} task: {}", err.message()));
                Err(err.into())
            }
        }
    }

    /// Submit whatever the form currently holds, honouring its edit binding
    pub async fn submit_form(&mut self) -> Result<Task, StoreError> {
        let draft = self.form.draft().clone();
        let editing_id = self.form.editing_id().map(str::to_string);
        self.submit(&draft, editing_id.as_deref()).await
    }

    /// Bind the form to a task in the collection
    pub fn begin_edit(&mut self, id: &str) -> Result<(), StoreError> {
        let task = self
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.form.begin_edit(&task);
        Ok(())
    }

    pub async fn remove(&mut self, id: &str) -> Result<DeleteReceipt, StoreError> {
        match self.api.delete(id).await {
            Ok(receipt) => {
                self.tasks.retain(|task| task.id != id);
                if self.form.is_bound_to(id) {
                    self.form.cancel();
                }
                self.notifier.success("Task deleted");
                Ok(receipt)
            }
            Err(err) => {
                tracing::error!(task_id = %id, error = %err, "task delete failed");
                self.notifier
                    .error(format!("Failed to delete task: {}", err.message()));
                Err(err.into())
            }
        }
    }

    /// Flip between `completed` and `pending`; `in-progress` goes to `completed`
    pub async fn toggle_completion(&mut self, id: &str) -> Result<Task, StoreError> {
        let next = self
            .get(id)
            .map(|task| task.status.toggled())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        match self.api.update(id, &TaskPatch::status(next)).await {
            Ok(task) => {
                self.upsert(task.clone());
                let message = if task.status == TaskStatus::Completed {
                    "Task marked as completed"
                } else {
                    "Task marked as pending"
                };
                self.notifier.success(message);
                Ok(task)
            }
            Err(err) => {
                tracing::error!(task_id = %id, error = %err, "completion toggle failed");
                self.notifier
                    .error(format!("Failed to update task: {}", err.message()));
                Err(err.into())
            }
        }
    }

    /// Filtered view of the collection; never mutates it
    pub fn derive(&self, criteria: &FilterCriteria) -> Vec<Task> {
        filter::derive(&self.tasks, criteria)
    }

    pub fn counts(&self) -> StatusCounts {
        self.tasks
            .iter()
            .fold(StatusCounts::default(), |mut counts, task| {
                counts.total += 1;
                match task.status {
                    TaskStatus::Pending => counts.pending += 1,
                    TaskStatus::InProgress => counts.in_progress += 1,
                    TaskStatus::Completed => counts.completed += 1,
                }
                counts
            })
    }

    /// Replace by id in place, or prepend when the id is new
    fn upsert(&mut self, task: Task) {
        match self.tasks.iter().position(|existing| existing.id == task.id) {
            Some(index) => self.tasks[index] = task,
            None => self.tasks.insert(0, task),
        }
    }
}
