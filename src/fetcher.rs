//! Page retrieval over HTTP.
//!
//! The [`PageFetcher`] trait is the seam between the feed and the network:
//! production code uses [`HttpFetcher`], tests swap in canned responses.
//!
//! # Behaviour
//!
//! - Plain `GET`, no extra headers, redirects followed by `reqwest` defaults
//! - Every request is bounded by the configured timeout
//! - Non-2xx answers become [`FetchError::Status`]; nothing is retried

use crate::error::FetchError;
use crate::utils::truncate_for_log;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Timeout applied when the caller does not configure one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can turn a URL into the page's HTML text.
#[async_trait]
pub trait PageFetcher: Send + Sync + fmt::Debug {
    /// Retrieve `url` and return the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// [`PageFetcher`] backed by a shared `reqwest` client.
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher whose requests give up after `timeout`.
    ///
    /// # Arguments
    ///
    /// * `timeout` - Upper bound for connect, send and body read combined
    ///
    /// # Returns
    ///
    /// The fetcher, or the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher")
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip_all, fields(%url))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let t0 = Instant::now();
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = match self.client.get(url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!(
                    elapsed_ms = t0.elapsed().as_millis() as u64,
                    timeout = e.is_timeout(),
                    error = %e,
                    "Request failed"
                );
                return Err(transport(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                "Upstream answered with an error status"
            );
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(transport)?;
        info!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );
        debug!(preview = %truncate_for_log(&body, 300), "Page body");
        Ok(body)
    }
}
