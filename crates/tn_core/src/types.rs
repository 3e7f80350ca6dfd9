use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Selection criteria for one aggregation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Category { category: String, country: String },
    Genre { genre: String, country: String },
}

impl Filter {
    pub fn category(category: impl Into<String>, country: impl Into<String>) -> Self {
        Filter::Category {
            category: category.into(),
            country: country.into(),
        }
    }

    pub fn genre(genre: impl Into<String>, country: impl Into<String>) -> Self {
        Filter::Genre {
            genre: genre.into(),
            country: country.into(),
        }
    }

    /// Name of the primary field as the caller knows it.
    pub fn field(&self) -> &'static str {
        match self {
            Filter::Category { .. } => "category",
            Filter::Genre { .. } => "genre",
        }
    }

    /// Query parameter the news API expects for the primary field.
    pub fn query_key(&self) -> &'static str {
        match self {
            Filter::Category { .. } => "category",
            Filter::Genre { .. } => "q",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Filter::Category { category, .. } => category,
            Filter::Genre { genre, .. } => genre,
        }
    }

    /// An empty country means no country restriction.
    pub fn country(&self) -> &str {
        match self {
            Filter::Category { country, .. } | Filter::Genre { country, .. } => country,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.value().is_empty() {
            return Err(Error::InvalidFilter { field: self.field() });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// One article as the news API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub source: Option<ArticleSource>,
    pub author: Option<String>,
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: String,
    pub content: Option<String>,
}

/// One page of results. `total_results` is the grand total across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamPage {
    pub status: String,
    pub total_results: u64,
    pub articles: Vec<ArticleRecord>,
}

/// Articles from every fetched page, in page order then within-page order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AggregatedResult {
    articles: Vec<ArticleRecord>,
}

impl AggregatedResult {
    pub fn new(articles: Vec<ArticleRecord>) -> Self {
        Self { articles }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }

    pub fn into_articles(self) -> Vec<ArticleRecord> {
        self.articles
    }
}

/// Storage-side article shape with a parsed timestamp. Nothing persists it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredArticle {
    pub id: String,
    pub genre: String,
    pub category: String,
    pub source: String,
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: DateTime<Utc>,
    pub content: String,
}

impl StoredArticle {
    /// Builds a stored article from an upstream record. Identity and
    /// classification are supplied by the caller.
    pub fn from_record(
        record: &ArticleRecord,
        id: impl Into<String>,
        genre: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self> {
        let published_at = DateTime::parse_from_rfc3339(&record.published_at)
            .map_err(|e| Error::InvalidTimestamp(format!("{}: {}", record.published_at, e)))?
            .with_timezone(&Utc);

        Ok(Self {
            id: id.into(),
            genre: genre.into(),
            category: category.into(),
            source: record
                .source
                .as_ref()
                .and_then(|s| s.name.clone())
                .unwrap_or_default(),
            author: record.author.clone().unwrap_or_default(),
            title: record.title.clone(),
            description: record.description.clone(),
            url: record.url.clone(),
            url_to_image: record.url_to_image.clone(),
            published_at,
            content: record.content.clone().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn record() -> ArticleRecord {
        ArticleRecord {
            source: Some(ArticleSource {
                id: Some("the-verge".to_string()),
                name: Some("The Verge".to_string()),
            }),
            author: None,
            title: "Chips get smaller".to_string(),
            description: "A short description".to_string(),
            url: "https://example.com/chips".to_string(),
            url_to_image: "https://example.com/chips.png".to_string(),
            published_at: "2024-03-01T12:30:00Z".to_string(),
            content: None,
        }
    }

    #[test]
    fn test_filter_accessors() {
        let filter = Filter::category("technology", "us");
        assert_eq!(filter.field(), "category");
        assert_eq!(filter.query_key(), "category");
        assert_eq!(filter.value(), "technology");
        assert_eq!(filter.country(), "us");

        let filter = Filter::genre("rust", "");
        assert_eq!(filter.field(), "genre");
        assert_eq!(filter.query_key(), "q");
        assert_eq!(filter.value(), "rust");
        assert_eq!(filter.country(), "");
    }

    #[test]
    fn test_filter_validation() {
        assert!(Filter::category("technology", "").validate().is_ok());
        assert!(Filter::genre("ai", "gb").validate().is_ok());

        let err = Filter::category("", "us").validate().unwrap_err();
        assert!(matches!(err, Error::InvalidFilter { field: "category" }));

        let err = Filter::genre("", "us").validate().unwrap_err();
        assert_eq!(err.to_string(), "genre cannot be empty");
    }

    #[test]
    fn test_page_decodes_upstream_envelope() {
        let body = json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": null, "name": "Wired" },
                    "author": "Jane Doe",
                    "title": "First",
                    "description": "d1",
                    "url": "https://example.com/1",
                    "urlToImage": "https://example.com/1.png",
                    "publishedAt": "2024-03-01T12:30:00Z",
                    "content": "body"
                },
                {
                    "title": "Second",
                    "description": "d2",
                    "url": "https://example.com/2",
                    "urlToImage": "https://example.com/2.png",
                    "publishedAt": "2024-03-01T13:00:00Z"
                }
            ]
        });

        let page: UpstreamPage = serde_json::from_value(body).unwrap();
        assert_eq!(page.status, "ok");
        assert_eq!(page.total_results, 2);
        assert_eq!(page.articles.len(), 2);
        assert_eq!(page.articles[0].author.as_deref(), Some("Jane Doe"));
        assert_eq!(page.articles[1].source, None);
        assert_eq!(page.articles[1].content, None);
    }

    #[test]
    fn test_page_rejects_missing_required_fields() {
        let missing_total = json!({ "status": "ok", "articles": [] });
        assert!(serde_json::from_value::<UpstreamPage>(missing_total).is_err());

        let negative_total = json!({ "status": "ok", "totalResults": -1, "articles": [] });
        assert!(serde_json::from_value::<UpstreamPage>(negative_total).is_err());

        let missing_title = json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "description": "d",
                "url": "https://example.com",
                "urlToImage": "https://example.com/i.png",
                "publishedAt": "2024-03-01T12:30:00Z"
            }]
        });
        assert!(serde_json::from_value::<UpstreamPage>(missing_title).is_err());
    }

    #[test]
    fn test_aggregated_result_serializes_as_array_with_upstream_names() {
        let result = AggregatedResult::new(vec![record()]);
        let value = serde_json::to_value(&result).unwrap();

        let articles = value.as_array().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0]["urlToImage"], "https://example.com/chips.png");
        assert_eq!(articles[0]["publishedAt"], "2024-03-01T12:30:00Z");
        assert!(articles[0]["author"].is_null());
    }

    #[test]
    fn test_stored_article_from_record() {
        let stored = StoredArticle::from_record(&record(), "a-1", "hardware", "technology").unwrap();
        assert_eq!(stored.id, "a-1");
        assert_eq!(stored.genre, "hardware");
        assert_eq!(stored.category, "technology");
        assert_eq!(stored.source, "The Verge");
        assert_eq!(stored.author, "");
        assert_eq!(stored.content, "");
        assert_eq!(
            stored.published_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_stored_article_rejects_bad_timestamp() {
        let mut bad = record();
        bad.published_at = "yesterday".to_string();
        let err = StoredArticle::from_record(&bad, "a-1", "", "").unwrap_err();
        assert!(matches!(err, Error::InvalidTimestamp(_)));
    }
}
