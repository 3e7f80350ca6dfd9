use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{field} cannot be empty")]
    InvalidFilter { field: &'static str },

    #[error("Invalid request body: {0}")]
    InvalidRequest(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("news API responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("received empty response from the news API")]
    EmptyBody,

    #[error("failed to decode news API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("error fetching {field}: {value} (page {page}), resulting in: {source}")]
    UpstreamFetch {
        field: &'static str,
        value: String,
        page: u32,
        #[source]
        source: Box<Error>,
    },

    #[error("pagination stalled on page {page}: no articles returned with {processed} of {total} processed")]
    StalledPagination { page: u32, processed: u64, total: u64 },

    #[error("page limit of {limit} reached with {processed} of {total} articles processed")]
    PageLimitExceeded { limit: u32, processed: u64, total: u64 },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True when the caller sent a bad request; everything else is a server-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidFilter { .. } | Error::InvalidRequest(_))
    }

    /// Stable machine-readable code for API error bodies.
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::InvalidFilter { .. } => "invalid_filter",
            Error::InvalidRequest(_) => "invalid_request",
            Error::Http(_) => "transport_error",
            Error::Status { .. } => "upstream_status",
            Error::EmptyBody => "empty_body",
            Error::Decode(_) => "decode_error",
            Error::UpstreamFetch { .. } => "upstream_fetch",
            Error::StalledPagination { .. } => "stalled_pagination",
            Error::PageLimitExceeded { .. } => "page_limit_exceeded",
            Error::InvalidTimestamp(_) => "invalid_timestamp",
            Error::InvalidUrl(_) => "invalid_url",
            Error::Config(_) => "config_error",
        }
    }

    /// Strips the request URL from transport errors, since it carries the API key.
    pub fn redacted(self) -> Self {
        match self {
            Error::Http(e) => Error::Http(e.without_url()),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
