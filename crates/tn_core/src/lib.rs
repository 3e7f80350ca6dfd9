pub mod error;
pub mod settings;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use settings::{AggregatorSettings, NewsApiSettings};
pub use source::PageSource;
pub use types::{AggregatedResult, ArticleRecord, ArticleSource, Filter, StoredArticle, UpstreamPage};

pub mod prelude {
    pub use super::{AggregatedResult, ArticleRecord, Error, Filter, PageSource, Result, UpstreamPage};
}
