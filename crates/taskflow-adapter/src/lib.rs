/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public TaskFlow adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{AuthError, Authenticated, Authenticator, StaticAuthenticator, UserProfile};

// Re-export commonly used types from http
pub use http::{ClientConfig, Credentials, RemoteError, Result, TaskApi, TaskflowClient};

// Re-export all types
pub use types::*;
