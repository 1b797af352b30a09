use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::TransportError;

/// A single network read of a resource locator.
///
/// Implementations make exactly one attempt per call: no retry and no
/// backoff. A non-2xx answer is a [`TransportKind::RemoteFailure`] and an
/// exceeded deadline is a [`TransportKind::Timeout`].
///
/// [`TransportKind::RemoteFailure`]: crate::error::TransportKind::RemoteFailure
/// [`TransportKind::Timeout`]: crate::error::TransportKind::Timeout
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, TransportError>;
}

/// [`Fetcher`] backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a client whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::remote("<client>", e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, TransportError> {
        let response = self
            .client
            .get(locator)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(locator, e))?;

        let response = match response.error_for_status() {
            Ok(valid_response) => valid_response,
            Err(err) => return Err(TransportError::remote(locator, err.to_string())),
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(locator, e))?;

        Ok(body.to_vec())
    }
}
