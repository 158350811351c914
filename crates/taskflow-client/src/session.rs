/*
[INPUT]:  Authentication outcome, TaskApi implementation, Notifier
[OUTPUT]: Session owning the task store from sign-in to logout
[POS]:    Lifecycle layer - explicit replacement for a global store
[UPDATE]: When session start/teardown steps change
*/

use taskflow_adapter::{
    AuthError, Authenticated, Authenticator, TaskApi, TaskflowClient, UserProfile,
};

use crate::notify::Notifier;
use crate::store::TaskStore;

/// An authenticated user's working session
#[derive(Debug)]
pub struct Session<A: TaskApi> {
    profile: UserProfile,
    store: TaskStore<A>,
}

impl<A: TaskApi> Session<A> {
    /// Start a session for an already signed-in user with an empty store
    pub fn start(profile: UserProfile, api: A, notifier: Notifier) -> Self {
        tracing::info!(user = %profile.display_name(), "session started");
        Self {
            profile,
            store: TaskStore::new(api, notifier),
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Greeting line shown in the header
    pub fn greeting(&self) -> String {
        format!("Hello, {}", self.profile.display_name())
    }

    pub fn store(&self) -> &TaskStore<A> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore<A> {
        &mut self.store
    }

    /// Tear the session down, handing back the API client
    pub fn close(self) -> A {
        tracing::info!(user = %self.profile.display_name(), "session closed");
        self.store.into_api()
    }
}

impl Session<TaskflowClient> {
    /// Resolve the sign-in, attach its credentials to `client` and start a session
    pub async fn sign_in(
        authenticator: &dyn Authenticator,
        mut client: TaskflowClient,
        notifier: Notifier,
    ) -> Result<Self, AuthError> {
        let Authenticated {
            profile,
            credentials,
        } = authenticator.authenticate().await.map_err(|err| {
            tracing::error!(error = %err, "authentication failed");
            err
        })?;
        client.set_credentials(credentials);
        Ok(Self::start(profile, client, notifier))
    }

    /// Log out on the backend and drop the store. A failed logout is logged;
    /// local credentials are discarded either way.
    pub async fn end(self) {
        let mut client = self.close();
        if let Err(err) = client.logout().await {
            tracing::warn!(error = %err, "backend logout failed");
        }
    }
}
