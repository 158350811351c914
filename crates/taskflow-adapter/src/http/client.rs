/*
[INPUT]:  HTTP configuration (base URL, collection, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for record API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::{RemoteError, Result};

/// Default backend base URL
pub const DEFAULT_BASE_URL: &str = "https://api.apper.io";

/// Collection holding task records
pub const DEFAULT_TASK_TABLE: &str = "task17";

/// Maximum number of tasks fetched in one call
pub const DEFAULT_PAGE_SIZE: u32 = 100;

const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub client_id: String,
    pub task_table: String,
    pub page_size: u32,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: String::new(),
            task_table: DEFAULT_TASK_TABLE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone)]
pub struct Credentials {
    pub token: String,
}

/// Main HTTP client for the record backend
#[derive(Debug, Clone)]
pub struct TaskflowClient {
    http_client: Client,
    base_url: Url,
    client_id: String,
    task_table: String,
    page_size: u32,
    credentials: Option<Credentials>,
}

impl TaskflowClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.task_table.trim().is_empty() {
            return Err(RemoteError::Config("task table name is empty".to_string()));
        }
        if config.page_size == 0 {
            return Err(RemoteError::Config("page size must be positive".to_string()));
        }

        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        // join() drops the last path segment unless the base ends with '/'
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            http_client,
            base_url: Url::parse(&base)?,
            client_id: config.client_id,
            task_table: config.task_table,
            page_size: config.page_size,
            credentials: None,
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.credentials = Some(credentials);
    }

    /// Drop credentials, e.g. after logout
    pub fn clear_credentials(&mut self) {
        self.credentials = None;
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn task_table(&self) -> &str {
        &self.task_table
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Build full URL for an endpoint relative to the base URL
    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder with client id and bearer token headers
    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.authorize(self.http_client.request(method, url)))
    }

    /// Like `request`, with `segment` appended as a single escaped path segment.
    /// `/`, `?` and `#` inside the segment never leave it.
    pub(crate) fn request_segment(
        &self,
        method: Method,
        endpoint: &str,
        segment: &str,
    ) -> Result<RequestBuilder> {
        if matches!(segment, "" | "." | "..") {
            return Err(RemoteError::InvalidRecordId(segment.to_string()));
        }
        let mut url = self.url(endpoint)?;
        url.path_segments_mut()
            .map_err(|_| RemoteError::Config(format!("base URL {} has no path", self.base_url)))?
            .pop_if_empty()
            .push(segment);
        Ok(self.authorize(self.http_client.request(method, url)))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(CLIENT_ID_HEADER, &self.client_id);
        match &self.credentials {
            Some(credentials) => builder.bearer_auth(&credentials.token),
            None => builder,
        }
    }

    /// Send a request and decode a JSON body
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send(builder).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request, mapping non-success statuses onto `RemoteError::Api`
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: Option<serde_json::Value> = serde_json::from_str(&body).ok();
        let message = parsed
            .as_ref()
            .and_then(|value| value.get("message"))
            .and_then(|value| value.as_str())
            .map(str::to_string)
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "An unexpected error occurred".to_string());
        let details = parsed
            .as_ref()
            .and_then(|value| value.get("details"))
            .cloned();

        tracing::warn!(status = status.as_u16(), %message, "backend rejected request");
        Err(RemoteError::Api {
            status: status.as_u16(),
            message,
            details,
        })
    }
}
