/*
[INPUT]:  Task CRUD requests from the application layer
[OUTPUT]: TaskApi trait - the seam between task state and transport
[POS]:    HTTP layer - abstract remote task contract
[UPDATE]: When task operations are added or their contract changes
*/

use async_trait::async_trait;

use crate::http::Result;
use crate::types::{DeleteReceipt, Task, TaskInput, TaskPatch};

/// Remote task operations. Implementations keep no task state between calls
/// and never retry.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Tasks ordered newest-modified-first, capped at the configured page size
    async fn fetch_all(&self) -> Result<Vec<Task>>;

    /// Create a task; the backend assigns id and timestamps
    async fn create(&self, input: &TaskInput) -> Result<Task>;

    /// Apply a partial update and return the merged task
    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task>;

    /// Remove a task
    async fn delete(&self, id: &str) -> Result<DeleteReceipt>;
}
