use std::fmt;
use std::sync::Arc;

use tn_core::{AggregatedResult, AggregatorSettings, Error, Filter, NewsApiSettings, PageSource, Result};
use tracing::{debug, info, instrument, warn};

use crate::request::page_url;

/// Drives the pagination loop for one filter at a time.
///
/// Every call to [`Aggregator::collect_all`] owns its accumulator and counters,
/// so a single instance can serve any number of concurrent requests.
pub struct Aggregator {
    source: Arc<dyn PageSource>,
    api: NewsApiSettings,
    settings: AggregatorSettings,
}

impl Aggregator {
    pub fn new(source: Arc<dyn PageSource>, api: NewsApiSettings, settings: AggregatorSettings) -> Self {
        Self { source, api, settings }
    }

    pub async fn collect_by_category(&self, category: &str, country: &str) -> Result<AggregatedResult> {
        self.collect_all(&Filter::category(category, country)).await
    }

    pub async fn collect_by_genre(&self, genre: &str, country: &str) -> Result<AggregatedResult> {
        self.collect_all(&Filter::genre(genre, country)).await
    }

    /// Fetches pages 1, 2, .. until the articles seen reach the reported total.
    ///
    /// Any failed page discards everything collected so far. A page that adds
    /// nothing while results are still outstanding, or running past
    /// `max_pages`, ends the request with an error instead of looping.
    #[instrument(
        level = "info",
        skip_all,
        fields(field = filter.field(), value = %filter.value(), country = %filter.country())
    )]
    pub async fn collect_all(&self, filter: &Filter) -> Result<AggregatedResult> {
        filter.validate()?;

        let mut articles = Vec::new();
        let mut processed: u64 = 0;
        let mut page: u32 = 1;

        loop {
            let url = page_url(&self.api, filter, page);
            let fetched = self.source.fetch_page(&url).await.map_err(|e| {
                warn!(page, error = %e, "page fetch failed; abandoning aggregation");
                Error::UpstreamFetch {
                    field: filter.field(),
                    value: filter.value().to_string(),
                    page,
                    source: Box::new(e.redacted()),
                }
            })?;

            let total = fetched.total_results;
            let count = fetched.articles.len() as u64;
            processed += count;
            articles.extend(fetched.articles);
            debug!(page, count, processed, total, "page accumulated");

            if processed >= total {
                break;
            }
            if count == 0 {
                warn!(page, processed, total, "empty page with results outstanding");
                return Err(Error::StalledPagination { page, processed, total });
            }
            if page >= self.settings.max_pages {
                warn!(page, processed, total, "page limit reached");
                return Err(Error::PageLimitExceeded {
                    limit: self.settings.max_pages,
                    processed,
                    total,
                });
            }
            page += 1;
        }

        info!(pages = page, articles = articles.len(), "aggregation complete");
        Ok(AggregatedResult::new(articles))
    }
}

impl fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aggregator")
            .field("api", &self.api)
            .field("settings", &self.settings)
            .finish()
    }
}
