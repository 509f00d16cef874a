//! Page manifest extraction for the ReadManga reader.
//!
//! With `?mtr=true` the chapter page embeds its image list in a single script
//! line calling `rm_h.readerDoInit(...)`. Every page is an array literal
//! `[prefix, suffix, width, height]`; older reader builds insert an empty
//! string between prefix and suffix (`[prefix, '', suffix, width, height]`).
//! Both shapes are accepted. The body is scanned as bytes, never as markup.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Marker identifying the manifest line.
pub const READER_INIT: &[u8] = b"rm_h.readerDoInit";

static IMAGE_ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\[['"](.*?)['"],(?:['"]['"],)?['"](.*?)['"],\d+,\d+\]"#)
        .expect("image entry pattern is valid")
});

/// Extracts page image URLs from a chapter reader body.
///
/// Returns `None` when no line contains [`READER_INIT`]. Only the first such
/// line is considered.
///
/// # Examples
///
/// ```rust
/// use mangaclient::clients::readmanga::manifest;
///
/// let body = br#"<script>
/// rm_h.readerDoInit([["http://x/","1.jpg",800,1200],["http://x/","2.jpg",800,1200]], false);
/// </script>"#;
///
/// assert_eq!(
///     manifest::pictures_from_chapter(body),
///     Some(vec!["http://x/1.jpg".to_string(), "http://x/2.jpg".to_string()])
/// );
/// assert_eq!(manifest::pictures_from_chapter(b"<html></html>"), None);
/// ```
pub fn pictures_from_chapter(body: &[u8]) -> Option<Vec<String>> {
    body.split(|&b| b == b'\n')
        .find(|line| contains(line, READER_INIT))
        .map(images_from_line)
}

/// Extracts every `prefix + suffix` pair from one manifest line, in order.
pub fn images_from_line(line: &[u8]) -> Vec<String> {
    IMAGE_ENTRY
        .captures_iter(line)
        .map(|caps| {
            let prefix = caps.get(1).map_or(&b""[..], |m| m.as_bytes());
            let suffix = caps.get(2).map_or(&b""[..], |m| m.as_bytes());
            format!(
                "{}{}",
                String::from_utf8_lossy(prefix),
                String::from_utf8_lossy(suffix)
            )
        })
        .collect()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_element_entries() {
        let line = br#"rm_h.readerDoInit([['https://h1.example/auto/','01.png',720,1024]], true);"#;
        assert_eq!(
            images_from_line(line),
            vec!["https://h1.example/auto/01.png".to_string()]
        );
    }

    #[test]
    fn test_five_element_entries() {
        let line = br#"rm_h.readerDoInit([['https://one.example/','',"/manga/b/01.jpg_res.jpg",900,1300],['https://two.example/','',"/manga/b/02.jpg_res.jpg",900,1300]]);"#;
        assert_eq!(
            images_from_line(line),
            vec![
                "https://one.example//manga/b/01.jpg_res.jpg".to_string(),
                "https://two.example//manga/b/02.jpg_res.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_only_first_marker_line_is_used() {
        let body = b"var a = 1;\nrm_h.readerDoInit([[\"http://x/\",\"1.jpg\",1,1]]);\nrm_h.readerDoInit([[\"http://y/\",\"2.jpg\",1,1]]);";
        assert_eq!(
            pictures_from_chapter(body),
            Some(vec!["http://x/1.jpg".to_string()])
        );
    }

    #[test]
    fn test_marker_without_entries() {
        assert_eq!(
            pictures_from_chapter(b"rm_h.readerDoInit([], false);"),
            Some(vec![])
        );
    }

    #[test]
    fn test_non_utf8_bytes_are_tolerated() {
        let body = b"\xff\xfe junk\nrm_h.readerDoInit([[\"http://x/\",\"a.jpg\",2,3]]);";
        assert_eq!(
            pictures_from_chapter(body),
            Some(vec!["http://x/a.jpg".to_string()])
        );
    }
}
