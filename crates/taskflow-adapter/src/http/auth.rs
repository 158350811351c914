/*
[INPUT]:  Active credentials
[OUTPUT]: Backend session termination
[POS]:    HTTP layer - session endpoints
[UPDATE]: When session endpoints change
*/

use reqwest::Method;

use crate::http::{Result, TaskflowClient};

impl TaskflowClient {
    /// End the backend session and forget local credentials
    ///
    /// POST /api/v1/auth/logout
    pub async fn logout(&mut self) -> Result<()> {
        let builder = self.request(Method::POST, "/api/v1/auth/logout")?;
        let outcome = self.send(builder).await.map(|_| ());
        // credentials are dropped even when the backend call fails
        self.clear_credentials();
        outcome
    }
}
