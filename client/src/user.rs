//! Current user lookup

use std::time::Duration;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use filter_builder_core::{ClientConfig, User};

use crate::error::{FetchError, Result};

/// Response envelope of the account API
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Client for the account API
#[derive(Debug, Clone)]
pub struct UserClient {
    /// Current-user endpoint URL
    url: String,

    /// HTTP client
    client: Client,

    /// Timeout for requests
    timeout: Duration,
}

impl UserClient {
    /// Create a client for an account API base URL
    pub fn new(api_base: &str) -> Self {
        Self {
            url: format!("{}/current-user", api_base.trim_end_matches('/')),
            client: Client::new(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            url: config.current_user_url(),
            client: Client::new(),
            timeout: config.request_timeout(),
        }
    }

    /// Current-user endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the signed-in user. Not retried.
    pub async fn current_user(&self, token: &str) -> Result<User> {
        debug!("Fetching current user from {}", self.url);

        let response = self.client
            .get(&self.url)
            .bearer_auth(token)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(FetchError::Status {
                status,
                body: format!("An error has occurred: {}", status),
            });
        }

        let body = response.text().await?;
        let envelope: DataEnvelope<User> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url() {
        assert_eq!(
            UserClient::new("https://api.example.com/").url(),
            "https://api.example.com/current-user"
        );
    }
}
