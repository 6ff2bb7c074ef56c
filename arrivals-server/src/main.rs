use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use arrivals_server::cache::CachedFeed;
use arrivals_server::config::ServerConfig;
use arrivals_server::designated::DesignatedStop;
use arrivals_server::feed::{FeedSource, FileFeedSource, HttpFeedSource};
use arrivals_server::stations::StationNames;
use arrivals_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    // Pick the feed source: a local snapshot if configured, else HTTP
    let source: Arc<dyn FeedSource> = match &config.feed_file {
        Some(path) => {
            warn!(path = %path.display(), "serving feed from file");
            Arc::new(FileFeedSource::new(path))
        }
        None => {
            info!(url = %config.feed.url, timeout = ?config.feed.timeout, "using HTTP feed");
            Arc::new(HttpFeedSource::new(config.feed.clone())?)
        }
    };
    let feed = CachedFeed::new(source, &config.cache);

    // Load station names (fail fast if unavailable)
    let station_names = StationNames::from_csv_path(&config.stations_csv)?;
    info!(
        count = station_names.len(),
        path = %config.stations_csv.display(),
        "loaded station names"
    );

    let designated = DesignatedStop::new(config.default_stop.clone());
    info!(stop_id = %config.default_stop, "designated stop seeded");

    let state = AppState::new(feed, station_names, designated);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "arrivals server listening");
    info!("  GET  /health          - Health check");
    info!("  GET  /train/:stop_id  - Upcoming arrivals at a stop");
    info!("  GET  /train/getStop   - Upcoming arrivals at the designated stop");
    info!("  POST /train/setStop   - Change the designated stop");

    axum::serve(listener, app).await?;
    Ok(())
}
