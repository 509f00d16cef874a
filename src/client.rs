//! Client trait and collection for manga sites.
//!
//! This module defines the [`MangaClient`] trait every site adapter implements,
//! and the [`Clients`] collection that routes a URL to the adapter owning it.
//!
//! # Examples
//!
//! ```rust
//! use mangaclient::prelude::*;
//! use mangaclient::clients::ReadMangaClient;
//!
//! let mut clients = Clients::new();
//! clients.add(ReadMangaClient::new());
//!
//! let client = clients.for_url("https://readmanga.live/berserk").unwrap();
//! assert_eq!(client.id(), "readmanga");
//! ```

use async_trait::async_trait;
use futures::stream::BoxStream;
use std::collections::HashMap;

use crate::{
    error::Result,
    types::{LastChapter, MangaCard, MangaChapter, UpdateReport},
};

/// Trait that all manga site clients must implement.
///
/// Every network operation is a single fetch-then-parse transaction: no
/// retries, no rate limiting, no caching. Errors from the transport and from
/// parsing propagate unchanged; callers aggregating several clients are
/// expected to log and skip a failing one.
///
/// # Required Methods
///
/// * [`id()`](MangaClient::id) - Unique identifier for the client
/// * [`name()`](MangaClient::name) - Human-readable name
/// * [`base_url()`](MangaClient::base_url) - Site origin, with trailing slash
/// * [`search()`](MangaClient::search) - Search for manga
/// * [`set_chapters()`](MangaClient::set_chapters) - Fill a card's chapter list
/// * [`iter_chapters()`](MangaClient::iter_chapters) - Stream a manga's chapters
/// * [`set_pictures()`](MangaClient::set_pictures) - Fill a chapter's page images
/// * [`check_updated_urls()`](MangaClient::check_updated_urls) - Detect new chapters
#[async_trait]
pub trait MangaClient: Send + Sync {
    /// Returns the unique identifier for this client.
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of this client.
    fn name(&self) -> &'static str;

    /// Returns the site origin every URL of this client starts with.
    fn base_url(&self) -> &str;

    /// Searches the site and returns the 1-indexed `page` of results.
    ///
    /// Returned cards have empty chapter lists.
    async fn search(&self, query: &str, page: usize) -> Result<Vec<MangaCard>>;

    /// Fetches the manga page and replaces `card.chapters` with its chapter list.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFound`](crate::Error::NotFound) - If the page has no chapter list
    /// * [`Error::Network`](crate::Error::Network) - For network/connection issues
    async fn set_chapters(&self, card: MangaCard) -> Result<MangaCard>;

    /// Streams the chapters of a manga without materializing a card first.
    ///
    /// Nothing happens until the stream is first polled; every call fetches
    /// the page again. A fetch or parse failure is yielded as the single item.
    fn iter_chapters<'a>(
        &'a self,
        manga_url: &'a str,
        manga_name: &'a str,
    ) -> BoxStream<'a, Result<MangaChapter>>;

    /// Fetches the chapter reader and fills `chapter.pictures`.
    async fn set_pictures(&self, chapter: MangaChapter) -> Result<MangaChapter>;

    /// Returns `true` if `url` belongs to this client's site.
    fn contains_url(&self, url: &str) -> bool {
        url.starts_with(self.base_url())
    }

    /// Compares the caller's last known chapters against the site's update feed.
    async fn check_updated_urls(&self, last_chapters: &[LastChapter]) -> Result<UpdateReport>;
}

/// A collection of manga clients indexed by ID.
///
/// # Examples
///
/// ```rust
/// use mangaclient::prelude::*;
///
/// let clients = Clients::new();
/// assert!(clients.is_empty());
/// assert!(clients.for_url("https://example.com/").is_none());
/// ```
pub struct Clients {
    clients: Vec<Box<dyn MangaClient>>,
    by_id: HashMap<String, usize>,
}

impl Clients {
    /// Creates a new empty client collection.
    pub fn new() -> Self {
        Self {
            clients: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Adds a client to the collection.
    ///
    /// A client with an ID already present replaces the lookup entry of the
    /// earlier one.
    pub fn add(&mut self, client: impl MangaClient + 'static) -> &mut Self {
        let id = client.id().to_string();
        let index = self.clients.len();
        self.clients.push(Box::new(client));
        self.by_id.insert(id, index);
        self
    }

    /// Retrieves a client by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn MangaClient> {
        self.by_id
            .get(id)
            .and_then(|&index| self.clients.get(index))
            .map(|c| c.as_ref())
    }

    /// Returns the first client whose site contains `url`.
    pub fn for_url(&self, url: &str) -> Option<&dyn MangaClient> {
        self.clients
            .iter()
            .find(|c| c.contains_url(url))
            .map(|c| c.as_ref())
    }

    /// Returns the IDs of all registered clients, in insertion order.
    pub fn list_ids(&self) -> Vec<&'static str> {
        self.clients.iter().map(|c| c.id()).collect()
    }

    /// Returns the number of clients in the collection.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns `true` if the collection contains no clients.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl Default for Clients {
    fn default() -> Self {
        Self::new()
    }
}
