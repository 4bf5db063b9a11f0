//! Access tokens for authorized requests

use std::future::Future;

use crate::error::{FetchError, Result};

/// Source of bearer tokens, e.g. a silent token refresh against an identity provider
pub trait TokenProvider {
    /// Obtain a current access token
    fn access_token(&self) -> impl Future<Output = Result<String>> + Send;
}

/// A fixed token supplied up front
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap a token
    pub fn new(token: impl Into<String>) -> Self {
        StaticToken(token.into())
    }
}

impl TokenProvider for StaticToken {
    async fn access_token(&self) -> Result<String> {
        if self.0.trim().is_empty() {
            return Err(FetchError::Token("no access token configured".to_string()));
        }
        Ok(self.0.clone())
    }
}
