use tn_core::{Filter, NewsApiSettings};
use url::Url;

/// Builds `GET {base}/top-headlines?{category|q}=..&country=..&apiKey=..&page=n`.
pub fn page_url(settings: &NewsApiSettings, filter: &Filter, page: u32) -> Url {
    let mut url = settings.top_headlines_url();
    url.query_pairs_mut()
        .append_pair(filter.query_key(), filter.value())
        .append_pair("country", filter.country())
        .append_pair("apiKey", settings.api_key())
        .append_pair("page", &page.to_string());
    url
}

/// Renders a request URL for logs with the API key masked.
pub fn redact(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apiKey" { "<redacted>".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    if pairs.is_empty() {
        return masked.to_string();
    }
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
