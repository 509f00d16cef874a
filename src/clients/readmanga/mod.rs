//! ReadManga (`readmanga.live`) client.
//!
//! Search goes through the site's JSON autocomplete endpoint; chapter lists,
//! the update feed and page manifests are scraped from HTML.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mangaclient::prelude::*;
//! use mangaclient::clients::ReadMangaClient;
//!
//! # async fn example() -> mangaclient::Result<()> {
//! let client = ReadMangaClient::new();
//!
//! let results = client.search("berserk", 1).await?;
//! let card = client.set_chapters(results[0].clone()).await?;
//! let chapter = client.set_pictures(card.chapters[0].clone()).await?;
//!
//! println!("{} pages", chapter.pictures.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use futures::{
    StreamExt, TryStreamExt,
    stream::{self, BoxStream},
};

use crate::{
    client::MangaClient,
    error::Result,
    net::HttpClient,
    types::{LastChapter, MangaCard, MangaChapter, UpdateReport},
};

mod config;
pub mod manifest;
pub mod parser;

pub use config::{ReadMangaConfig, USER_AGENT};

/// Client for the ReadManga site.
pub struct ReadMangaClient {
    config: ReadMangaConfig,
    client: HttpClient,
}

impl ReadMangaClient {
    /// Creates a client for the public site.
    pub fn new() -> Self {
        Self::with_config(ReadMangaConfig::default())
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: ReadMangaConfig) -> Self {
        let mut client = HttpClient::new(config.id).with_header("User-Agent", &config.user_agent);

        if let Some(headers) = &config.headers {
            for (key, value) in headers {
                client = client.with_header(key, value);
            }
        }

        Self { config, client }
    }

    pub fn config(&self) -> &ReadMangaConfig {
        &self.config
    }

    /// URL of the suggestion request for `query`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mangaclient::clients::ReadMangaClient;
    ///
    /// let client = ReadMangaClient::new();
    /// assert_eq!(client.search_url(""), "https://readmanga.live/search/suggestion");
    /// assert_eq!(
    ///     client.search_url("vinland saga"),
    ///     "https://readmanga.live/search/suggestion?query=vinland%20saga&types[]=CREATION"
    /// );
    /// ```
    pub fn search_url(&self, query: &str) -> String {
        let mut url = self.config.search_url();
        if !query.is_empty() {
            url.push_str(&format!(
                "?{}={}&types[]={}",
                self.config.search_param,
                urlencoding::encode(query),
                self.config.search_types
            ));
        }
        url
    }

    async fn chapters_of(&self, manga: &MangaCard) -> Result<Vec<MangaChapter>> {
        let page = self.client.get_text(&manga.url).await?;
        parser::chapters_from_page(self.config.id, &self.config.base_url, &page, manga)
    }
}

impl Default for ReadMangaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MangaClient for ReadMangaClient {
    fn id(&self) -> &'static str {
        self.config.id
    }

    fn name(&self) -> &'static str {
        self.config.name
    }

    fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn search(&self, query: &str, page: usize) -> Result<Vec<MangaCard>> {
        let url = self.search_url(query);
        let response: parser::SuggestionResponse = self.client.get_json(&url).await?;

        let cards = parser::cards_from_suggestions(self.config.id, &self.config.base_url, response)?;
        tracing::debug!(query, page, total = cards.len(), "search suggestions");

        Ok(parser::page_slice(cards, page))
    }

    async fn set_chapters(&self, mut card: MangaCard) -> Result<MangaCard> {
        card.chapters = self.chapters_of(&card).await?;
        Ok(card)
    }

    fn iter_chapters<'a>(
        &'a self,
        manga_url: &'a str,
        manga_name: &'a str,
    ) -> BoxStream<'a, Result<MangaChapter>> {
        stream::once(async move {
            let card = MangaCard::new(self.config.id, manga_name, manga_url, "", "");
            self.chapters_of(&card).await
        })
        .map_ok(|chapters| stream::iter(chapters.into_iter().map(Ok::<_, crate::Error>)))
        .try_flatten()
        .boxed()
    }

    async fn set_pictures(&self, mut chapter: MangaChapter) -> Result<MangaChapter> {
        let url = format!("{}?mtr=true", chapter.url);
        let body = self.client.get(&url).await?;

        chapter.pictures = match manifest::pictures_from_chapter(&body) {
            Some(pictures) => pictures,
            None => {
                tracing::warn!(chapter = %chapter.url, "no image manifest in reader page");
                Vec::new()
            }
        };

        Ok(chapter)
    }

    async fn check_updated_urls(&self, last_chapters: &[LastChapter]) -> Result<UpdateReport> {
        let page = self.client.get_text(&self.config.base_url).await?;
        let updates = parser::updates_from_page(&self.config.base_url, &page)?;

        let report = parser::partition_updates(last_chapters, &updates);
        tracing::debug!(
            updated = report.updated.len(),
            not_updated = report.not_updated.len(),
            "checked updates"
        );

        Ok(report)
    }
}
