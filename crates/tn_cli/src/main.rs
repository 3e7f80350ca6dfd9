use anyhow::bail;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tn_core::settings::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES};
use tn_core::{AggregatorSettings, NewsApiSettings};
use tn_newsapi::{Aggregator, UpstreamClient};
use tn_web::AppState;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod duration;

use duration::HumanDuration;

#[derive(Parser, Debug)]
#[command(author, version, about = "Aggregates paginated news API headlines into one response", long_about = None)]
pub struct Cli {
    /// Base URL of the news API
    #[arg(long, env = "NEWSAPI_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    base_url: String,

    /// API key sent with every upstream request
    #[arg(long, env = "NEWSAPI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Maximum number of pages fetched for a single request
    #[arg(long, env = "TN_MAX_PAGES", default_value_t = DEFAULT_MAX_PAGES, global = true)]
    max_pages: u32,

    /// Timeout for each upstream HTTP call (e.g. 30s, 2m). 0 disables it.
    #[arg(long, env = "TN_REQUEST_TIMEOUT", default_value = "30s", global = true)]
    request_timeout: HumanDuration,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the aggregation API over HTTP
    Serve {
        #[arg(long, env = "TN_BIND", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
    /// Run one aggregation and print the articles as JSON
    Fetch {
        /// Top-headlines category (e.g. technology)
        #[arg(long, conflicts_with = "genre", required_unless_present = "genre")]
        category: Option<String>,
        /// Free-text keyword
        #[arg(long)]
        genre: Option<String>,
        /// Two-letter country code; empty means no restriction
        #[arg(long, default_value = "")]
        country: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn build_aggregator(cli: &Cli) -> tn_core::Result<Aggregator> {
    let api = NewsApiSettings::new(&cli.base_url, cli.api_key.clone().unwrap_or_default())?;
    let settings = AggregatorSettings::new(cli.max_pages)?;
    let timeout = Some(cli.request_timeout.0).filter(|t| !t.is_zero());
    let client = UpstreamClient::new(timeout)?;

    info!(?api, max_pages = settings.max_pages, ?timeout, "🗞️ News API client configured");
    Ok(Aggregator::new(Arc::new(client), api, settings))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}

async fn serve(aggregator: Aggregator, bind: SocketAddr) -> anyhow::Result<()> {
    let state = AppState {
        aggregator: Arc::new(aggregator),
    };
    let app = tn_web::create_app(state);

    let listener = TcpListener::bind(bind).await?;
    info!("🚀 Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let aggregator = build_aggregator(&cli)?;

    match cli.command {
        Commands::Serve { bind } => serve(aggregator, bind).await?,
        Commands::Fetch { category, genre, country } => {
            let result = match (category, genre) {
                (Some(category), _) => aggregator.collect_by_category(&category, &country).await?,
                (None, Some(genre)) => aggregator.collect_by_genre(&genre, &country).await?,
                (None, None) => bail!("either --category or --genre is required"),
            };
            info!("✨ Collected {} articles", result.len());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
