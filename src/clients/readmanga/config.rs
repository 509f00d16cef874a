use std::collections::HashMap;

/// Browser User-Agent sent with every request; the site rejects default agents.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:97.0) Gecko/20100101 Firefox/97.0";

/// Static configuration of a [`ReadMangaClient`](super::ReadMangaClient).
///
/// The defaults target the public site. `base_url` can be pointed at a mirror;
/// it must end with `/` so relative paths join under it.
///
/// # Examples
///
/// ```rust
/// use mangaclient::clients::readmanga::ReadMangaConfig;
///
/// let config = ReadMangaConfig::default().with_base_url("https://mirror.example/");
/// assert_eq!(config.search_url(), "https://mirror.example/search/suggestion");
/// ```
#[derive(Debug, Clone)]
pub struct ReadMangaConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub base_url: String,
    pub search_path: String,
    pub search_param: String,
    /// Value of the `types[]` filter added to non-empty searches
    pub search_types: String,
    pub user_agent: String,
    pub headers: Option<HashMap<String, String>>,
}

impl Default for ReadMangaConfig {
    fn default() -> Self {
        Self {
            id: "readmanga",
            name: "ReadManga",
            base_url: "https://readmanga.live/".to_string(),
            search_path: "search/suggestion".to_string(),
            search_param: "query".to_string(),
            search_types: "CREATION".to_string(),
            user_agent: USER_AGENT.to_string(),
            headers: None,
        }
    }
}

impl ReadMangaConfig {
    /// Replaces the site origin. A trailing `/` is added when missing.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Adds an extra header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Absolute URL of the suggestion endpoint.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, self.search_path.trim_start_matches('/'))
    }
}
