use std::sync::Arc;
use tn_newsapi::Aggregator;

pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}
