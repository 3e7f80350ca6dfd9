use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tn_core::{Error, PageSource, Result, UpstreamPage};
use tracing::{debug, warn};
use url::Url;

use crate::request::redact;

/// Body the news API sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorEnvelope {
    code: Option<String>,
    message: Option<String>,
}

/// Fetches one page of results per call over HTTP. Holds no state between calls.
#[derive(Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("tn/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| Error::from(e).redacted())?;
        Ok(Self { client })
    }
}

impl fmt::Debug for UpstreamClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamClient")
            .field("client", &"<reqwest::Client>")
            .finish()
    }
}

fn status_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { code: Some(code), message: Some(message) }) => format!("{}: {}", code, message),
        Ok(ErrorEnvelope { code: None, message: Some(message) }) => message,
        _ => status.canonical_reason().unwrap_or("unknown status").to_string(),
    }
}

#[async_trait]
impl PageSource for UpstreamClient {
    async fn fetch_page(&self, url: &Url) -> Result<UpstreamPage> {
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            let e = e.without_url();
            warn!(url = %redact(url), error = %e, "request to news API failed");
            Error::Http(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| Error::from(e).redacted())?;
        debug!(url = %redact(url), status = status.as_u16(), bytes = body.len(), "news API responded");

        if !status.is_success() {
            let message = status_message(status, &body);
            warn!(status = status.as_u16(), %message, "news API returned an error status");
            return Err(Error::Status { status: status.as_u16(), message });
        }

        if body.trim().is_empty() {
            warn!(url = %redact(url), "news API returned an empty body");
            return Err(Error::EmptyBody);
        }

        let page: UpstreamPage = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "news API response did not match the expected envelope");
            Error::Decode(e)
        })?;

        Ok(page)
    }
}
