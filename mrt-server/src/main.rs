use std::sync::Arc;

use mrt_server::clock::ZonedClock;
use mrt_server::config::ServerConfig;
use mrt_server::feed::{FeedClient, FeedSource, StaticFeed};
use mrt_server::service::StationService;
use mrt_server::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Offline mode serves a saved copy of the feed
    let feed: Arc<dyn FeedSource> = match &config.feed_file {
        Some(path) => {
            info!(path = %path.display(), "serving station feed from file");
            Arc::new(StaticFeed::from_file(path).expect("Failed to load feed file"))
        }
        None => {
            info!(url = %config.feed.url, "using upstream station feed");
            Arc::new(FeedClient::new(config.feed.clone()).expect("Failed to create feed client"))
        }
    };

    let clock = ZonedClock::new(config.timezone);
    info!(timezone = %config.timezone, "schedule clock configured");

    let state = AppState::new(StationService::new(feed, Arc::new(clock)));
    let app = create_router(state);

    let addr = config.bind_addr;
    info!("MRT schedules listening on http://{addr}");
    info!("  GET /v1/api/stations      - List stations");
    info!("  GET /v1/api/stations/:id  - Upcoming departures");
    info!("  GET /health               - Health check");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
