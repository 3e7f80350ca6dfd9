use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod extract;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use extract::ApiJson;
pub use state::AppState;

/// Routes:
/// - `POST /newsapi/bycategory` with `{"category", "country"}`
/// - `POST /newsapi/bygenre` with `{"genre", "country"}`
/// - `GET /health`
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/newsapi/bycategory", post(handlers::articles_by_category))
        .route("/newsapi/bygenre", post(handlers::articles_by_genre))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(Arc::new(state))
}

pub mod prelude {
    pub use crate::{create_app, ApiError, AppState};
    pub use tn_core::{AggregatedResult, Error, Result};
}
