/*
[INPUT]:  HTTP client configuration and record API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod records;

pub use api::TaskApi;
pub use error::{RemoteError, Result};

pub use client::{ClientConfig, Credentials, TaskflowClient};
