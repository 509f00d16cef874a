//! Response parsers for ReadManga pages.
//!
//! Every function here is pure: it takes a response body that has already been
//! fetched and maps it to the shared records. All links are resolved against
//! the client's base URL before they leave this module.

use serde::Deserialize;
use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    net::html,
    types::{LastChapter, MangaCard, MangaChapter, UpdateReport},
};

/// Number of search results per page.
pub const PAGE_SIZE: usize = 20;

/// Body of the `search/suggestion` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionResponse {
    pub suggestions: Vec<Suggestion>,
}

/// One autocomplete match.
#[derive(Debug, Clone, Deserialize)]
pub struct Suggestion {
    /// Display name
    pub value: String,
    /// Manga link, usually relative to the site root
    pub link: String,
    pub thumbnail: String,
    pub additional: String,
}

/// Maps suggestions to manga cards with empty chapter lists.
///
/// # Examples
///
/// ```rust
/// use mangaclient::clients::readmanga::parser::{self, SuggestionResponse};
///
/// let payload: SuggestionResponse = serde_json::from_str(r#"{"suggestions": [
///     {"value": "Berserk", "link": " /berserk ", "thumbnail": "https://cdn.example/b.jpg", "additional": "Miura"}
/// ]}"#).unwrap();
///
/// let cards = parser::cards_from_suggestions("readmanga", "https://readmanga.live/", payload).unwrap();
/// assert_eq!(cards[0].url, "https://readmanga.live/berserk");
/// assert!(cards[0].chapters.is_empty());
/// ```
pub fn cards_from_suggestions(
    source_id: &str,
    base_url: &str,
    response: SuggestionResponse,
) -> Result<Vec<MangaCard>> {
    response
        .suggestions
        .into_iter()
        .map(|suggestion| {
            let url = html::resolve(base_url, &suggestion.link)?;
            let picture_url = if suggestion.thumbnail.trim().is_empty() {
                String::new()
            } else {
                html::resolve(base_url, &suggestion.thumbnail)?
            };

            Ok(MangaCard::new(
                source_id,
                suggestion.value,
                url,
                picture_url,
                suggestion.additional,
            ))
        })
        .collect()
}

/// Returns the 1-indexed `page` of `items`, [`PAGE_SIZE`] entries at most.
///
/// Page 0 and pages past the end are empty.
///
/// # Examples
///
/// ```rust
/// use mangaclient::clients::readmanga::parser::page_slice;
///
/// let items: Vec<u32> = (0..45).collect();
/// assert_eq!(page_slice(items.clone(), 1), (0..20).collect::<Vec<_>>());
/// assert_eq!(page_slice(items.clone(), 3), (40..45).collect::<Vec<_>>());
/// assert!(page_slice(items.clone(), 4).is_empty());
/// assert!(page_slice(items, 0).is_empty());
/// ```
pub fn page_slice<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let Some(start) = page.checked_sub(1).map(|p| p.saturating_mul(PAGE_SIZE)) else {
        return Vec::new();
    };

    items.into_iter().skip(start).take(PAGE_SIZE).collect()
}

/// Extracts the chapter list of a manga page, in document order.
///
/// # Errors
///
/// * [`Error::NotFound`] - If the page has no `div.chapters` container
pub fn chapters_from_page(
    source_id: &str,
    base_url: &str,
    page: &str,
    manga: &MangaCard,
) -> Result<Vec<MangaChapter>> {
    let document = html::parse(page);
    let container_sel = html::selector("div.chapters")?;
    let link_sel = html::selector("a.chapter-link")?;

    let container = document
        .select(&container_sel)
        .next()
        .ok_or_else(|| Error::not_found(format!("chapter list on {}", manga.url)))?;

    let mut chapters = Vec::new();
    for item in container.select(&link_sel) {
        let Some(href) = item.value().attr("href") else {
            tracing::debug!(manga = %manga.url, "skipping chapter link without href");
            continue;
        };

        let url = html::resolve(base_url, href)?;
        let name = html::first_text(item).unwrap_or_default();
        chapters.push(MangaChapter::new(source_id, name, url, manga));
    }

    tracing::debug!(manga = %manga.url, count = chapters.len(), "parsed chapter list");
    Ok(chapters)
}

/// Extracts the "last updates" listing of the front page.
///
/// Maps each manga URL to the URL of its newest chapter. When the same manga
/// appears in several tiles the later tile wins.
///
/// # Errors
///
/// * [`Error::NotFound`] - If the page has no `#last-updates` container
/// * [`Error::Parse`] - If a tile in the listing lacks its manga or chapter link
pub fn updates_from_page(base_url: &str, page: &str) -> Result<HashMap<String, String>> {
    let document = html::parse(page);
    let container_sel = html::selector("div#last-updates")?;
    let tile_sel = html::selector("div.tile")?;
    let manga_sel = html::selector("div.desc a")?;
    let chapter_sel = html::selector("div.chapters-text strong a")?;

    let container = document
        .select(&container_sel)
        .next()
        .ok_or_else(|| Error::not_found("last updates listing on front page"))?;

    let mut updates = HashMap::new();
    for tile in container.select(&tile_sel) {
        let (Some(manga_href), Some(chapter_href)) = (
            html::element_attr(tile, &manga_sel, "href"),
            html::element_attr(tile, &chapter_sel, "href"),
        ) else {
            return Err(Error::parse(
                "update tile without manga or chapter link on front page",
            ));
        };

        updates.insert(
            html::resolve(base_url, &manga_href)?,
            html::resolve(base_url, &chapter_href)?,
        );
    }

    tracing::debug!(count = updates.len(), "parsed update listing");
    Ok(updates)
}

/// Splits `last_chapters` into updated and not updated manga URLs.
///
/// A manga is updated when the listing has it with a chapter URL different
/// from the recorded one. Input order is kept in both lists.
///
/// # Examples
///
/// ```rust
/// use mangaclient::clients::readmanga::parser::partition_updates;
/// use mangaclient::types::LastChapter;
/// use std::collections::HashMap;
///
/// let last = vec![LastChapter::new("A", "c1"), LastChapter::new("B", "c2")];
/// let scraped = HashMap::from([
///     ("A".to_string(), "c1".to_string()),
///     ("B".to_string(), "c3".to_string()),
///     ("C".to_string(), "c4".to_string()),
/// ]);
///
/// let report = partition_updates(&last, &scraped);
/// assert_eq!(report.updated, vec!["B"]);
/// assert_eq!(report.not_updated, vec!["A"]);
/// ```
pub fn partition_updates(
    last_chapters: &[LastChapter],
    updates: &HashMap<String, String>,
) -> UpdateReport {
    let mut report = UpdateReport::default();

    for last in last_chapters {
        match updates.get(&last.url) {
            Some(newest) if !newest.is_empty() && *newest != last.chapter_url => {
                report.updated.push(last.url.clone())
            }
            _ => report.not_updated.push(last.url.clone()),
        }
    }

    report
}
