use async_trait::async_trait;
use url::Url;

use crate::types::UpstreamPage;
use crate::Result;

#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and decode a single page from a fully-formed request URL
    async fn fetch_page(&self, url: &Url) -> Result<UpstreamPage>;
}
