use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::{draft::ContactMessage, status::DELIVERY_ERROR_TEXT};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where submissions go, decided once at startup from settings and fixed
/// for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryRoute {
    Remote(Url),
    Mailto,
}

impl DeliveryRoute {
    /// A configured endpoint selects the remote route; anything else falls
    /// back to the mail client. A present-but-unparsable endpoint is a
    /// configuration error, reported at startup rather than on submit.
    pub fn from_endpoint(endpoint: Option<&str>) -> Result<Self, url::ParseError> {
        match endpoint.map(str::trim) {
            Some(raw) if !raw.is_empty() => Ok(Self::Remote(Url::parse(raw)?)),
            _ => Ok(Self::Mailto),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("form endpoint returned status {0}")]
    Status(StatusCode),
    #[error("form endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DeliveryError {
    /// Fixed status-line text; the cause is only distinguished in logs.
    pub fn user_text(&self) -> &'static str {
        DELIVERY_ERROR_TEXT
    }
}

/// HTTP client for the form-relay endpoint.
pub struct FormRelay {
    http: Client,
}

impl FormRelay {
    pub fn new() -> reqwest::Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http })
    }

    /// POSTs the message as JSON. Success is any 2xx status; everything
    /// else, including timeouts, is the same delivery failure.
    pub async fn deliver(
        &self,
        endpoint: &Url,
        message: &ContactMessage,
    ) -> Result<(), DeliveryError> {
        let response = self.http.post(endpoint.clone()).json(message).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "form endpoint rejected submission");
            return Err(DeliveryError::Status(status));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/delivery_tests.rs"]
mod tests;
