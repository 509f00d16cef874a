//! Core data types shared by every manga client.
//!
//! - [`MangaCard`] - A search result or manga summary, optionally with its chapters
//! - [`MangaChapter`] - A single chapter, optionally with its page image URLs
//! - [`MangaRef`] - The back-reference a chapter keeps to its parent manga
//! - [`LastChapter`] - The last chapter a caller has seen for a manga
//! - [`UpdateReport`] - The outcome of an update check
//!
//! # Examples
//!
//! ```rust
//! use mangaclient::types::*;
//!
//! let card = MangaCard::new(
//!     "readmanga",
//!     "Berserk",
//!     "https://readmanga.live/berserk",
//!     "https://staticrm.rmr.rocks/uploads/pics/berserk.jpg",
//!     "Kentaro Miura",
//! );
//!
//! let chapter = MangaChapter::new(
//!     "readmanga",
//!     "Vol 1. Ch 1",
//!     "https://readmanga.live/berserk/vol1/1",
//!     &card,
//! );
//!
//! assert!(card.chapters.is_empty());
//! assert_eq!(chapter.manga.url, card.url);
//! ```

use serde::{Deserialize, Serialize};

/// A manga summary as returned by search, optionally carrying its chapter list.
///
/// Cards are built fresh for every request and are never cached by a client.
///
/// # Fields
///
/// * `source_id` - Identifier of the client that produced this card
/// * `name` - Display name
/// * `url` - Absolute URL of the manga page
/// * `picture_url` - Thumbnail image URL
/// * `additional` - Free text the site attaches to the entry (authors, alt names)
/// * `chapters` - Ordered chapter list, empty until `set_chapters` runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaCard {
    /// Client identifier this card came from
    pub source_id: String,

    /// Display name
    pub name: String,

    /// Absolute manga page URL
    pub url: String,

    /// Thumbnail URL
    pub picture_url: String,

    /// Free-text extra information
    #[serde(default)]
    pub additional: String,

    /// Chapters in site order
    #[serde(default)]
    pub chapters: Vec<MangaChapter>,
}

impl MangaCard {
    /// Creates a card with an empty chapter list.
    pub fn new(
        source_id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        picture_url: impl Into<String>,
        additional: impl Into<String>,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            name: name.into(),
            url: url.into(),
            picture_url: picture_url.into(),
            additional: additional.into(),
            chapters: Vec::new(),
        }
    }

    /// Returns the lightweight reference chapters keep to this card.
    pub fn to_ref(&self) -> MangaRef {
        MangaRef {
            name: self.name.clone(),
            url: self.url.clone(),
        }
    }
}

/// Reference from a chapter back to the manga it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaRef {
    pub name: String,
    pub url: String,
}

/// A single chapter of a manga.
///
/// `pictures` is populated lazily, only when a caller asks for the page
/// manifest through `set_pictures`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MangaChapter {
    /// Client identifier
    pub source_id: String,

    /// Chapter title as displayed by the site
    pub name: String,

    /// Absolute chapter URL
    pub url: String,

    /// Parent manga
    pub manga: MangaRef,

    /// Page image URLs in reading order
    #[serde(default)]
    pub pictures: Vec<String>,
}

impl MangaChapter {
    /// Creates a chapter with no pictures, pointing back at `manga`.
    pub fn new(
        source_id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        manga: &MangaCard,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            name: name.into(),
            url: url.into(),
            manga: manga.to_ref(),
            pictures: Vec::new(),
        }
    }
}

/// The last chapter a caller knows about for one manga.
///
/// Only ever an input to update checks; clients never construct these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastChapter {
    /// Manga page URL
    pub url: String,

    /// URL of the newest chapter the caller has recorded
    pub chapter_url: String,
}

impl LastChapter {
    pub fn new(url: impl Into<String>, chapter_url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            chapter_url: chapter_url.into(),
        }
    }
}

/// Manga URLs partitioned by whether a newer chapter was published.
///
/// Both lists keep the order of the [`LastChapter`] input they were built from.
///
/// # Examples
///
/// ```rust
/// use mangaclient::types::UpdateReport;
///
/// let report = UpdateReport {
///     updated: vec!["https://readmanga.live/b".to_string()],
///     not_updated: vec!["https://readmanga.live/a".to_string()],
/// };
///
/// let (updated, not_updated): (Vec<String>, Vec<String>) = report.into();
/// assert_eq!(updated.len(), 1);
/// assert_eq!(not_updated.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateReport {
    /// Manga whose newest chapter differs from the recorded one
    pub updated: Vec<String>,

    /// Manga absent from the listing or with an unchanged newest chapter
    pub not_updated: Vec<String>,
}

impl From<UpdateReport> for (Vec<String>, Vec<String>) {
    fn from(report: UpdateReport) -> Self {
        (report.updated, report.not_updated)
    }
}
