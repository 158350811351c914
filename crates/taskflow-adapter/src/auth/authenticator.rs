/*
[INPUT]:  Sign-in provider (external widget, token from configuration)
[OUTPUT]: Authenticated (profile + credentials) or AuthError
[POS]:    Auth layer - single awaited sign-in contract
[UPDATE]: When adding sign-in providers
*/

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::UserProfile;
use crate::http::{Credentials, RemoteError};

/// Successful sign-in outcome
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub profile: UserProfile,
    pub credentials: Credentials,
}

#[derive(Error, Debug)]
pub enum AuthError {
    /// Provider refused the sign-in
    #[error("Authentication failed: {message}")]
    Rejected { message: String },

    /// Provider could not be reached
    #[error("Authentication provider unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// A sign-in provider resolved to a single result instead of callbacks
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self) -> Result<Authenticated, AuthError>;
}

/// Sign-in backed by a pre-issued token and a known profile
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    token: Option<String>,
    profile: UserProfile,
}

impl StaticAuthenticator {
    pub fn new(token: Option<String>, profile: UserProfile) -> Self {
        Self { token, profile }
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self) -> Result<Authenticated, AuthError> {
        let token = self
            .token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AuthError::Rejected {
                message: "no session token configured".to_string(),
            })?;

        tracing::debug!(user = %self.profile.display_name(), "signed in with static token");
        Ok(Authenticated {
            profile: self.profile.clone(),
            credentials: Credentials {
                token: token.to_string(),
            },
        })
    }
}
