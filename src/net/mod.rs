//! Network utilities for HTTP requests and content parsing.
//!
//! - **HTTP Client**: A global, configured HTTP client with connection pooling
//! - **Per-client headers**: Each [`HttpClient`] sends its own fixed header set
//! - **Content Parsing**: HTML helpers in [`html`]
//!
//! There is no retry or rate limiting layer: a failing request
//! fails the one operation that issued it.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mangaclient::net::HttpClient;
//!
//! # async fn example() -> mangaclient::Result<()> {
//! let client = HttpClient::new("my_client")
//!     .with_header("User-Agent", "Mozilla/5.0");
//!
//! let html = client.get_text("https://example.com").await?;
//! let json: serde_json::Value = client.get_json("https://api.example.com").await?;
//! # Ok(())
//! # }
//! ```

use bytes::Bytes;
use once_cell::sync::Lazy;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use std::time::Duration;

pub mod html;

/// Global HTTP client instance.
///
/// This client is configured with:
/// - 30-second timeout
/// - Connection pooling (10 idle connections per host)
/// - Compression support (gzip, brotli)
///
/// The client is created lazily on first use and reused across all HTTP operations.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("mangaclient/", env!("CARGO_PKG_VERSION")))
        .pool_max_idle_per_host(10)
        .gzip(true)
        .brotli(true)
        .build()
        .expect("Failed to build HTTP client")
});

/// HTTP client wrapper bound to one manga client and its header set.
///
/// # Examples
///
/// ```rust,no_run
/// use mangaclient::net::HttpClient;
///
/// # async fn example() -> mangaclient::Result<()> {
/// let client = HttpClient::new("readmanga")
///     .with_header("User-Agent", "Mozilla/5.0 (X11; Linux x86_64)");
///
/// let html = client.get_text("https://readmanga.live/").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    source_id: String,
    headers: HeaderMap,
}

impl HttpClient {
    /// Creates a new HTTP client for the specified manga client.
    ///
    /// # Parameters
    ///
    /// * `source_id` - Identifier of the owning client (used in errors and logs)
    pub fn new(source_id: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Adds a header sent with every request made by this client.
    ///
    /// Invalid header names or values are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mangaclient::net::HttpClient;
    ///
    /// let client = HttpClient::new("source")
    ///     .with_header("User-Agent", "MyBot/1.0")
    ///     .with_header("Referer", "https://example.com");
    ///
    /// assert_eq!(client.headers().len(), 2);
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (name.parse::<HeaderName>(), value.parse::<HeaderValue>()) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(source = %self.source_id, header = name, "ignoring invalid header"),
        }
        self
    }

    /// Headers attached to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Performs a GET request and returns the full response body.
    ///
    /// # Errors
    ///
    /// * [`Error::Source`](crate::Error::Source) - For HTTP errors (4xx, 5xx)
    /// * [`Error::Network`](crate::Error::Network) - For network/connection errors
    pub async fn get(&self, url: &str) -> crate::Result<Bytes> {
        tracing::debug!(source = %self.source_id, url, "GET");

        let response = CLIENT.get(url).headers(self.headers.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            tracing::debug!(source = %self.source_id, url, %status, "request failed");
            return Err(crate::Error::source(
                &self.source_id,
                format!("HTTP {} for {}", status, url),
            ));
        }

        let body = response.bytes().await?;
        tracing::trace!(source = %self.source_id, url, bytes = body.len(), "response read");
        Ok(body)
    }

    /// Performs a GET request and returns the response as a string.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the
    /// whole page.
    ///
    /// # Errors
    ///
    /// * All errors from [`get()`](HttpClient::get)
    pub async fn get_text(&self, url: &str) -> crate::Result<String> {
        let bytes = self.get(url).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Performs a GET request and deserializes the response as JSON.
    ///
    /// # Errors
    ///
    /// * All errors from [`get()`](HttpClient::get)
    /// * [`Error::Json`](crate::Error::Json) - If JSON parsing fails
    pub async fn get_json<T>(&self, url: &str) -> crate::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let bytes = self.get(url).await?;
        serde_json::from_slice(&bytes).map_err(Into::into)
    }
}
