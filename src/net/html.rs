//! HTML parsing utilities for manga clients.
//!
//! Thin helpers over the `scraper` crate for CSS selector-based extraction, plus
//! URL resolution so every link leaving a parser is absolute.
//!
//! # Examples
//!
//! ```rust
//! use mangaclient::net::html;
//!
//! let document = html::parse(r#"
//!     <div class="manga-item">
//!         <h3 class="title">One Piece</h3>
//!         <a href="/one-piece">Read</a>
//!     </div>
//! "#);
//!
//! let item = html::selector("div.manga-item").unwrap();
//! let link = html::selector("a").unwrap();
//!
//! let element = document.select(&item).next().unwrap();
//! let href = html::element_attr(element, &link, "href").unwrap();
//! assert_eq!(
//!     html::resolve("https://example.com/", &href).unwrap(),
//!     "https://example.com/one-piece"
//! );
//! assert_eq!(html::first_text(element), Some("One Piece".to_string()));
//! ```

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Parses an HTML document from a string.
pub fn parse(html: &str) -> Html {
    Html::parse_document(html)
}

/// Compiles a CSS selector, reporting invalid selectors as parse errors.
///
/// # Examples
///
/// ```rust
/// use mangaclient::net::html;
///
/// assert!(html::selector("div.chapters a.chapter-link").is_ok());
/// assert!(html::selector("div[").is_err());
/// ```
pub fn selector(css: &str) -> crate::Result<Selector> {
    Selector::parse(css).map_err(|e| crate::Error::parse(format!("Invalid selector {}: {}", css, e)))
}

/// Attribute of the first descendant of `element` matching `selector`.
pub fn element_attr(element: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    element
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(|value| value.trim().to_string())
}

/// First non-blank text node of an element, trimmed.
///
/// Chapter anchors often hold the title followed by badges (`<sup>new</sup>`,
/// translator names); only the leading text is the title.
///
/// # Examples
///
/// ```rust
/// use mangaclient::net::html;
/// use scraper::Selector;
///
/// let document = html::parse("<a>\n  Vol 1. Ch 3 <sup>new</sup>\n</a>");
/// let anchor = document.select(&Selector::parse("a").unwrap()).next().unwrap();
/// assert_eq!(html::first_text(anchor), Some("Vol 1. Ch 3".to_string()));
/// ```
pub fn first_text(element: ElementRef<'_>) -> Option<String> {
    element
        .text()
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(String::from)
}

/// Resolves `href` against `base`, returning an absolute URL.
///
/// Absolute links are returned unchanged (normalized); relative and
/// protocol-relative links are joined with RFC 3986 semantics.
///
/// # Examples
///
/// ```rust
/// use mangaclient::net::html;
///
/// assert_eq!(
///     html::resolve("https://readmanga.live/", "/berserk/vol1/1").unwrap(),
///     "https://readmanga.live/berserk/vol1/1"
/// );
/// assert_eq!(
///     html::resolve("https://readmanga.live/", "https://cdn.example.com/a.jpg").unwrap(),
///     "https://cdn.example.com/a.jpg"
/// );
/// ```
pub fn resolve(base: &str, href: &str) -> crate::Result<String> {
    let base = Url::parse(base)?;
    Ok(base.join(href.trim())?.to_string())
}
