//! Error types and result handling for manga client operations.
//!
//! All operations return a [`Result<T>`] which is a type alias for
//! `std::result::Result<T, Error>`.
//!
//! # Error Categories
//!
//! - **Network Errors**: Connection issues, timeouts, transport failures
//! - **Parse Errors**: Markup or script that no longer has the expected shape
//! - **Source Errors**: Site-specific failures such as non-2xx responses
//! - **Not Found**: A container the site is expected to render is missing
//! - **JSON Errors**: Payloads that do not match the typed records
//! - **URL Errors**: Links that cannot be resolved against the base URL
//!
//! A layout change on the remote site surfaces as one of these errors; there is
//! no fallback parsing. Callers aggregating several clients are expected to log
//! and skip a failing client.
//!
//! # Examples
//!
//! ```rust
//! use mangaclient::error::{Error, Result};
//!
//! fn describe(result: Result<Vec<String>>) -> String {
//!     match result {
//!         Ok(items) => format!("{} items", items.len()),
//!         Err(Error::NotFound(msg)) => format!("missing: {}", msg),
//!         Err(Error::Network(e)) => format!("network: {}", e),
//!         Err(e) => format!("other: {}", e),
//!     }
//! }
//!
//! assert_eq!(describe(Err(Error::not_found("chapter list"))), "missing: chapter list");
//! ```

use thiserror::Error;

/// Type alias for Results with the crate's [`enum@Error`].
///
/// # Examples
///
/// ```rust
/// use mangaclient::{Error, Result};
///
/// fn example_with_error() -> Result<()> {
///     Err(Error::parse("Something went wrong"))
/// }
///
/// assert!(example_with_error().is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all manga client operations.
///
/// # Variants
///
/// * [`Network`](Error::Network) - HTTP client and connection errors
/// * [`Parse`](Error::Parse) - Data parsing and format errors
/// * [`Source`](Error::Source) - Site-specific errors with context
/// * [`NotFound`](Error::NotFound) - Missing page containers
/// * [`Json`](Error::Json) - JSON deserialization errors
/// * [`Url`](Error::Url) - URL resolution errors
#[derive(Error, Debug)]
pub enum Error {
    /// Network-related errors from HTTP operations.
    ///
    /// Wraps errors from the underlying HTTP client (reqwest) unmodified:
    /// connection failures, DNS resolution, TLS errors and transport timeouts.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Markup or script data that could not be parsed as expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mangaclient::Error;
    ///
    /// let error = Error::parse("Invalid selector");
    /// assert_eq!(error.to_string(), "Parse error: Invalid selector");
    /// ```
    #[error("Parse error: {0}")]
    Parse(String),

    /// Client-specific errors with contextual information.
    ///
    /// * `src` - The identifier of the client that encountered the error
    /// * `message` - Descriptive error message explaining what went wrong
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mangaclient::Error;
    ///
    /// let error = Error::source("readmanga", "HTTP 503 Service Unavailable");
    /// assert_eq!(
    ///     error.to_string(),
    ///     "Source error [readmanga]: HTTP 503 Service Unavailable"
    /// );
    /// ```
    #[error("Source error [{src}]: {message}")]
    Source { src: String, message: String },

    /// An element the site is expected to render could not be found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mangaclient::Error;
    ///
    /// let error = Error::not_found("div.chapters on https://readmanga.live/abc");
    /// ```
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON deserialization errors.
    ///
    /// Raised when a JSON payload is malformed or lacks a field the typed
    /// record requires.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A link could not be resolved into an absolute URL.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Creates a parse error with the given message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mangaclient::Error;
    ///
    /// let error = Error::parse(format!("Expected {} links, found {}", 2, 1));
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates a client-specific error with client ID and message.
    pub fn source(src: impl Into<String>, msg: impl Into<String>) -> Self {
        Error::Source {
            src: src.into(),
            message: msg.into(),
        }
    }

    /// Creates a not found error with the given message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Error::NotFound(msg.into())
    }
}
