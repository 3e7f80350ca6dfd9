use std::fmt;
use url::Url;

use crate::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Where the news API lives and how to authenticate against it.
#[derive(Clone)]
pub struct NewsApiSettings {
    base_url: Url,
    api_key: String,
}

impl NewsApiSettings {
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "news API base URL must be http or https, got {}",
                base_url.scheme()
            )));
        }
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!("news API base URL {} cannot be a base", base_url)));
        }

        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("news API key cannot be empty".to_string()));
        }

        Ok(Self { base_url, api_key })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// `{base_url}/top-headlines`, tolerating a trailing slash on the base.
    pub fn top_headlines_url(&self) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}/top-headlines", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url.set_query(None);
        url
    }
}

impl fmt::Debug for NewsApiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSettings")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregatorSettings {
    /// Upper bound on pages fetched for one request.
    pub max_pages: u32,
}

impl AggregatorSettings {
    pub fn new(max_pages: u32) -> Result<Self> {
        if max_pages == 0 {
            return Err(Error::Config("max pages must be at least 1".to_string()));
        }
        Ok(Self { max_pages })
    }
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_headlines_url() {
        let settings = NewsApiSettings::new("https://newsapi.org/v2", "key").unwrap();
        assert_eq!(settings.top_headlines_url().as_str(), "https://newsapi.org/v2/top-headlines");

        let settings = NewsApiSettings::new("https://newsapi.org/v2/", "key").unwrap();
        assert_eq!(settings.top_headlines_url().as_str(), "https://newsapi.org/v2/top-headlines");

        let settings = NewsApiSettings::new("http://127.0.0.1:9000", "key").unwrap();
        assert_eq!(settings.top_headlines_url().as_str(), "http://127.0.0.1:9000/top-headlines");
    }

    #[test]
    fn test_settings_validation() {
        assert!(matches!(NewsApiSettings::new("not a url", "key"), Err(Error::InvalidUrl(_))));
        assert!(matches!(NewsApiSettings::new("ftp://newsapi.org", "key"), Err(Error::Config(_))));
        assert!(matches!(NewsApiSettings::new("https://newsapi.org/v2", "  "), Err(Error::Config(_))));

        assert!(AggregatorSettings::new(0).is_err());
        assert_eq!(AggregatorSettings::new(3).unwrap().max_pages, 3);
        assert_eq!(AggregatorSettings::default().max_pages, DEFAULT_MAX_PAGES);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = NewsApiSettings::new("https://newsapi.org/v2", "super-secret").unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
