/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed client settings and derived adapter configuration
[POS]:    Configuration layer - backend endpoint and session setup
[UPDATE]: When adding new configuration options
*/

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use taskflow_adapter::{ClientConfig, UserProfile};
use taskflow_adapter::http::client::{DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TASK_TABLE};

/// Top-level configuration for the task client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientSettings {
    /// Backend base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Application id sent with every request
    #[serde(default)]
    pub client_id: String,
    /// Record collection holding tasks
    #[serde(default = "default_table")]
    pub table: String,
    /// Maximum tasks fetched at session start
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Session token issued by the sign-in provider
    #[serde(default)]
    pub token: Option<String>,
    /// Profile of the signed-in user
    #[serde(default)]
    pub profile: UserProfile,
    /// Overrides the platform data directory location
    #[serde(default)]
    pub preferences_path: Option<PathBuf>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            client_id: String::new(),
            table: default_table(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            token: None,
            profile: UserProfile::default(),
            preferences_path: None,
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_table() -> String {
    DEFAULT_TASK_TABLE.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl ClientSettings {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let settings: Self = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_base_url.clone(),
            client_id: self.client_id.clone(),
            task_table: self.table.clone(),
            page_size: self.page_size,
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}
