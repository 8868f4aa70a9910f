use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cartfeed_receiver::api::{create_router, AppState};
use cartfeed_receiver::config::ReceiverConfig;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Cartfeed datafeed HTTP receiver")]
struct Args {
    /// TCP port to listen on
    #[clap(short, long, env = "FEED_PORT")]
    port: Option<u16>,

    /// Shared secret key for the inbound datafeed
    #[clap(long, env = "FEED_KEY")]
    key: Option<String>,

    /// Directory where captures are written
    #[clap(long, env = "FEED_CAPTURE_DIR")]
    capture_dir: Option<PathBuf>,

    /// Base name of the capture files
    #[clap(long, env = "FEED_CAPTURE_NAME")]
    capture_name: Option<String>,

    /// Allow a capture to overwrite an earlier one
    #[clap(long, env = "FEED_ALLOW_OVERWRITE")]
    allow_overwrite: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let mut config = ReceiverConfig::new();

    // Override config with command-line arguments
    if let Some(port) = args.port {
        config.listen_port = port;
    }
    if let Some(key) = args.key {
        config.feed_key = key;
    }
    if let Some(capture_dir) = args.capture_dir {
        config.capture_dir = capture_dir;
    }
    if let Some(capture_name) = args.capture_name {
        config.capture_name = capture_name;
    }
    config.allow_overwrite = args.allow_overwrite;

    // An empty feed key must fail at startup, not per-request
    config.validate()?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.listen_port));
    let state = Arc::new(AppState { config });
    let app = create_router(state).layer(TraceLayer::new_for_http());

    tracing::info!("Starting datafeed receiver on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
