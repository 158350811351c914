/*
[INPUT]:  TaskInput / TaskPatch values and record ids
[OUTPUT]: Domain tasks mapped from record API responses
[POS]:    HTTP layer - task record endpoints (require client id, bearer token)
[UPDATE]: When record endpoints or the wire mapping change
*/

// ### Record Endpoints

use async_trait::async_trait;
use reqwest::Method;

use crate::http::{RemoteError, Result, TaskApi, TaskflowClient};
use crate::types::{
    DataEnvelope, DeleteReceipt, QueryRecordsRequest, RecordWriteRequest, Task, TaskInput,
    TaskPatch, TaskRecord, TaskRecordWrite,
};

impl TaskflowClient {
    fn records_endpoint(&self) -> String {
        format!("/api/v1/tables/{}/records", self.task_table())
    }

    /// Query task records
    ///
    /// POST /api/v1/tables/{table}/records/query
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let query = QueryRecordsRequest::recent_tasks(self.page_size());
        let endpoint = format!("{}/query", self.records_endpoint());
        let builder = self.request(Method::POST, &endpoint)?.json(&query);
        let envelope: DataEnvelope<Vec<TaskRecord>> = self.send_json(builder).await?;

        let total = envelope.data.len();
        let tasks: Vec<Task> = envelope
            .data
            .into_iter()
            .filter_map(TaskRecord::into_task)
            .collect();
        if tasks.len() < total {
            tracing::warn!(
                skipped = total - tasks.len(),
                "dropped task records without an id"
            );
        }
        tracing::debug!(count = tasks.len(), "fetched tasks");
        Ok(tasks)
    }

    /// Create a task record
    ///
    /// POST /api/v1/tables/{table}/records
    pub async fn create_task(&self, input: &TaskInput) -> Result<Task> {
        let body = RecordWriteRequest {
            record: TaskRecordWrite::from(input),
        };
        let builder = self
            .request(Method::POST, &self.records_endpoint())?
            .json(&body);
        let task = self.send_record(builder).await?;
        tracing::info!(task_id = %task.id, "task created");
        Ok(task)
    }

    /// Update a task record
    ///
    /// PUT /api/v1/tables/{table}/records/{id}
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        let body = RecordWriteRequest {
            record: TaskRecordWrite::from(patch),
        };
        let builder = self
            .request_segment(Method::PUT, &self.records_endpoint(), id)?
            .json(&body);
        let task = self.send_record(builder).await?;
        tracing::info!(task_id = %task.id, "task updated");
        Ok(task)
    }

    /// Delete a task record
    ///
    /// DELETE /api/v1/tables/{table}/records/{id}
    pub async fn delete_task(&self, id: &str) -> Result<DeleteReceipt> {
        let builder = self.request_segment(Method::DELETE, &self.records_endpoint(), id)?;
        self.send(builder).await?;
        tracing::info!(task_id = %id, "task deleted");
        Ok(DeleteReceipt { id: id.to_string() })
    }

    async fn send_record(&self, builder: reqwest::RequestBuilder) -> Result<Task> {
        let envelope: DataEnvelope<TaskRecord> = self.send_json(builder).await?;
        envelope
            .data
            .into_task()
            .ok_or_else(|| RemoteError::InvalidResponse("task record without Id".to_string()))
    }
}

#[async_trait]
impl TaskApi for TaskflowClient {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        self.fetch_tasks().await
    }

    async fn create(&self, input: &TaskInput) -> Result<Task> {
        self.create_task(input).await
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        self.update_task(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<DeleteReceipt> {
        self.delete_task(id).await
    }
}
