//! Synopsis client for fetching dataset column metadata
//!
//! The synopsis service occasionally answers with a gateway error, so each
//! fetch is attempted a bounded number of times in sequence before the last
//! failure is handed back to the caller.

use std::time::Duration;
use log::{debug, info, warn};
use reqwest::{Client, Response};
use filter_builder_core::{ClientConfig, SynopsisResponse};

use crate::error::{FetchError, Result};

/// Default number of attempts per fetch
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Client for the synopsis endpoint
#[derive(Debug, Clone)]
pub struct SynopsisClient {
    /// Synopsis endpoint URL
    url: String,

    /// HTTP client
    client: Client,

    /// Timeout for each request
    timeout: Duration,

    /// Total attempts per fetch
    max_attempts: u32,
}

impl SynopsisClient {
    /// Create a new synopsis client for an endpoint
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            client: Client::new(),
            timeout: Duration::from_secs(30),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create a synopsis client from configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.synopsis_url)
            .with_timeout(config.request_timeout())
            .with_max_attempts(config.max_attempts)
    }

    /// Set the timeout for each request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the total number of attempts per fetch (at least one)
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Total attempts per fetch
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fetch the synopsis.
    ///
    /// Transport failures and non-success statuses are retried immediately
    /// until `max_attempts` is reached; the last failure is returned. The
    /// body of the first successful attempt is parsed as either synopsis
    /// data or a structured error, and a body that parses as neither is a
    /// [`FetchError::Json`].
    pub async fn fetch_synopsis(&self, token: &str) -> Result<SynopsisResponse> {
        let response = self.send_with_retry(token).await?;
        let body = response.text().await?;
        let parsed: SynopsisResponse = serde_json::from_str(&body)?;

        if !parsed.is_success() {
            debug!("Synopsis service answered with a structured error");
        }

        Ok(parsed)
    }

    async fn send_with_retry(&self, token: &str) -> Result<Response> {
        let mut attempt = 1;

        loop {
            match self.send_once(token).await {
                Ok(response) => {
                    if attempt > 1 {
                        info!("Synopsis fetch succeeded on attempt {}", attempt);
                    }
                    return Ok(response);
                }
                Err(err) if err.is_retryable() && attempt < self.max_attempts => {
                    warn!(
                        "Synopsis fetch attempt {}/{} failed: {}",
                        attempt, self.max_attempts, err
                    );
                    attempt += 1;
                }
                Err(err) => {
                    warn!("Synopsis fetch failed after {} attempt(s): {}", attempt, err);
                    return Err(err);
                }
            }
        }
    }

    async fn send_once(&self, token: &str) -> Result<Response> {
        debug!("Fetching synopsis from {}", self.url);

        let response = self.client
            .get(&self.url)
            .bearer_auth(token)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        Ok(response)
    }
}
