//! # mangaclient - async manga site clients
//!
//! Each client adapts one manga website to a common interface: search through
//! the site's own endpoint, fetch chapter lists, resolve the image manifest of
//! a chapter, and tell which followed manga received new chapters.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mangaclient::prelude::*;
//! use mangaclient::error::Result;
//! use mangaclient::clients::ReadMangaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ReadMangaClient::new();
//!
//!     let results = client.search("berserk", 1).await?;
//!     println!("Found {} results", results.len());
//!
//!     if let Some(card) = results.into_iter().next() {
//!         let card = client.set_chapters(card).await?;
//!         println!("{} has {} chapters", card.name, card.chapters.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Update checks
//!
//! ```rust,no_run
//! use mangaclient::prelude::*;
//! # use mangaclient::error::Result;
//!
//! # async fn example(client: &dyn MangaClient) -> Result<()> {
//! let followed = vec![LastChapter::new(
//!     "https://readmanga.live/berserk",
//!     "https://readmanga.live/berserk/vol41/364",
//! )];
//!
//! let report = client.check_updated_urls(&followed).await?;
//! for url in &report.updated {
//!     println!("new chapter for {}", url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`client`]: The [`MangaClient`] trait and the [`Clients`] collection
//! - [`clients`]: Site implementations
//! - [`types`]: Cards, chapters and update records
//! - [`net`]: HTTP client and HTML helpers
//! - [`error`]: Error handling
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (requests at `debug`, missing page
//! manifests at `warn`) and never installs a subscriber itself.

pub mod client;
pub mod clients;
pub mod error;
pub mod net;
pub mod types;

/// Prelude module for convenient imports.
///
/// ```rust
/// use mangaclient::prelude::*;
///
/// // Now you have access to:
/// // - Clients, MangaClient trait
/// // - MangaCard, MangaChapter, LastChapter, UpdateReport
/// ```
pub mod prelude {
    pub use crate::{
        client::{Clients, MangaClient},
        types::{LastChapter, MangaCard, MangaChapter, MangaRef, UpdateReport},
    };
}

// Re-export main types at crate root for direct access
pub use client::{Clients, MangaClient};
pub use error::{Error, Result};
pub use types::{LastChapter, MangaCard, MangaChapter, MangaRef, UpdateReport};
