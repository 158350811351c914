/*
[INPUT]:  Test scenarios needing a task backend
[OUTPUT]: In-memory TaskApi fake, task fixtures, mock-server client
[POS]:    Test infrastructure - shared across client integration tests
[UPDATE]: When TaskApi changes or new fixtures are needed
*/

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use taskflow_adapter::{
    ClientConfig, DeleteReceipt, Priority, RemoteError, Result, Task, TaskApi, TaskInput,
    TaskPatch, TaskStatus, TaskflowClient,
};
use wiremock::MockServer;

/// One recorded call against the fake backend
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchAll,
    Create(TaskInput),
    Update(String, TaskPatch),
    Delete(String),
}

#[derive(Debug, Default)]
struct FakeState {
    tasks: Vec<Task>,
    calls: Vec<Call>,
    next_id: u64,
    fail_with: Option<(u16, String)>,
}

/// In-memory backend. Clones share state so a test can inspect calls after
/// handing one copy to the store.
#[derive(Debug, Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let api = Self::default();
        {
            let mut state = api.state.lock().unwrap();
            state.next_id = 100;
            state.tasks = tasks;
        }
        api
    }

    /// Every following call fails with the given status and message
    pub fn fail_with(&self, status: u16, message: &str) {
        self.state.lock().unwrap().fail_with = Some((status, message.to_string()));
    }

    pub fn recover(&self) {
        self.state.lock().unwrap().fail_with = None;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutation_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| !matches!(call, Call::FetchAll))
            .count()
    }

    fn record(&self, call: Call) -> Result<std::sync::MutexGuard<'_, FakeState>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some((status, message)) = state.fail_with.clone() {
            return Err(RemoteError::Api {
                status,
                message,
                details: None,
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl TaskApi for FakeApi {
    async fn fetch_all(&self) -> Result<Vec<Task>> {
        let state = self.record(Call::FetchAll)?;
        Ok(state.tasks.clone())
    }

    async fn create(&self, input: &TaskInput) -> Result<Task> {
        let mut state = self.record(Call::Create(input.clone()))?;
        state.next_id += 1;
        let task = Task {
            id: state.next_id.to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            due_date: input.due_date,
            priority: input.priority,
            status: input.status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        state.tasks.insert(0, task.clone());
        Ok(task)
    }

    async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        let mut state = self.record(Call::Update(id.to_string(), patch.clone()))?;
        let Some(task) = state.tasks.iter_mut().find(|task| task.id == id) else {
            return Err(RemoteError::Api {
                status: 404,
                message: "Not Found".to_string(),
                details: None,
            });
        };
        if let Some(title) = &patch.title {
            task.title = title.clone();
        }
        if let Some(description) = &patch.description {
            task.description = description.clone();
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(status) = patch.status {
            task.status = status;
        }
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn delete(&self, id: &str) -> Result<DeleteReceipt> {
        let mut state = self.record(Call::Delete(id.to_string()))?;
        state.tasks.retain(|task| task.id != id);
        Ok(DeleteReceipt { id: id.to_string() })
    }
}

pub fn task(id: &str, title: &str, status: TaskStatus, priority: Priority) -> Task {
    let at = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        due_date: None,
        priority,
        status,
        created_at: at,
        updated_at: at,
    }
}

/// Three tasks covering every status
pub fn sample_tasks() -> Vec<Task> {
    vec![
        task("1", "Write report", TaskStatus::Pending, Priority::High),
        task("2", "Buy milk", TaskStatus::Completed, Priority::Low),
        task("3", "Report bug", TaskStatus::InProgress, Priority::Medium),
    ]
}

pub fn client_for(server: &MockServer) -> TaskflowClient {
    TaskflowClient::with_config(ClientConfig {
        base_url: server.uri(),
        client_id: "test-canvas".to_string(),
        ..ClientConfig::default()
    })
    .expect("client init")
}
