//! On-demand revalidation of the frontend's page cache.
//!
//! When a global changes, the pages that render it must be regenerated.
//! [`HttpRevalidator`] forwards each request to the frontend's revalidation
//! endpoint as a JSON POST; [`LogOnlyRevalidator`] is used when no endpoint
//! is configured and only records what would have been invalidated.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::RevalidateConfig;

/// Header carrying the shared secret on every revalidation request.
pub const SECRET_HEADER: &str = "x-revalidate-secret";

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum RevalidateError {
    /// Network, DNS, or timeout failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The frontend answered with a non-2xx status.
    #[error("Revalidation endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Invalidates cached pages, either by cache tag or by route path.
#[async_trait]
pub trait Revalidator: Send + Sync {
    async fn revalidate_tag(&self, tag: &str) -> Result<(), RevalidateError>;

    async fn revalidate_path(&self, path: &str) -> Result<(), RevalidateError>;
}

/// Pick the implementation for the given configuration.
pub fn from_config(config: &RevalidateConfig) -> Result<Box<dyn Revalidator>, RevalidateError> {
    match &config.url {
        Some(url) => Ok(Box::new(HttpRevalidator::new(
            url.clone(),
            config.secret.clone(),
            Duration::from_secs(config.timeout_secs),
        )?)),
        None => Ok(Box::new(LogOnlyRevalidator)),
    }
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

/// Posts `{"tag": ..}` or `{"path": ..}` to the frontend.
pub struct HttpRevalidator {
    client: reqwest::Client,
    url: String,
    secret: Option<String>,
}

impl HttpRevalidator {
    pub fn new(
        url: String,
        secret: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RevalidateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url,
            secret,
        })
    }

    async fn send(&self, payload: serde_json::Value) -> Result<(), RevalidateError> {
        let mut request = self.client.post(&self.url).json(&payload);
        if let Some(secret) = &self.secret {
            request = request.header(SECRET_HEADER, secret);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(RevalidateError::HttpStatus(status.as_u16()))
        }
    }
}

#[async_trait]
impl Revalidator for HttpRevalidator {
    async fn revalidate_tag(&self, tag: &str) -> Result<(), RevalidateError> {
        self.send(serde_json::json!({ "tag": tag })).await?;
        tracing::info!(tag, "Revalidated cache tag");
        Ok(())
    }

    async fn revalidate_path(&self, path: &str) -> Result<(), RevalidateError> {
        self.send(serde_json::json!({ "path": path })).await?;
        tracing::info!(path, "Revalidated path");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Log only
// ---------------------------------------------------------------------------

/// Used when `REVALIDATE_URL` is unset. Never fails.
pub struct LogOnlyRevalidator;

#[async_trait]
impl Revalidator for LogOnlyRevalidator {
    async fn revalidate_tag(&self, tag: &str) -> Result<(), RevalidateError> {
        tracing::info!(tag, "No revalidation endpoint configured, skipping tag");
        Ok(())
    }

    async fn revalidate_path(&self, path: &str) -> Result<(), RevalidateError> {
        tracing::info!(path, "No revalidation endpoint configured, skipping path");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
