use crate::domain::model::Session;
use crate::domain::ports::SessionSource;
use crate::utils::error::{FinderError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the session snapshot from the portal's sessions endpoint, which
/// serves the full list (with program and partner included) as a JSON array.
pub struct HttpSessionSource {
    client: Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpSessionSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: None,
        }
    }

    /// Bounds each fetch; a slow endpoint becomes an error instead of a hang.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            timeout: Some(timeout),
        }
    }
}

#[async_trait]
impl SessionSource for HttpSessionSource {
    async fn fetch_sessions(&self) -> Result<Vec<Session>> {
        tracing::debug!("Fetching sessions from: {}", self.endpoint);
        let mut request = self.client.get(&self.endpoint);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        tracing::debug!("Sessions response status: {}", response.status());
        if !response.status().is_success() {
            return Err(FinderError::SourceError {
                message: format!(
                    "session endpoint returned status {} for {}",
                    response.status(),
                    self.endpoint
                ),
            });
        }

        let sessions: Vec<Session> = response.json().await?;
        tracing::debug!("Fetched {} sessions", sessions.len());
        Ok(sessions)
    }
}
