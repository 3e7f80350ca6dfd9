pub mod aggregator;
pub mod client;
pub mod request;

pub use aggregator::Aggregator;
pub use client::UpstreamClient;

pub mod prelude {
    pub use super::aggregator::Aggregator;
    pub use super::client::UpstreamClient;
    pub use tn_core::{AggregatedResult, Error, Filter, PageSource, Result};
}
