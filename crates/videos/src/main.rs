mod app;
mod config;
mod handler;
mod handlers;
mod lambda;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use videos_core::VIDEOS_TABLE;

use crate::{
    app::create_app,
    config::StoreConfig,
    handler::VideoListHandler,
    state::AppState,
    storage::{DynamoDbVideoStore, MisconfiguredStore},
};

/// Videos - list every item in the videos table
///
/// Runs as an AWS Lambda function when started by the Lambda runtime,
/// otherwise serves `GET /videos` locally.
#[derive(Parser, Debug)]
#[command(name = "videos")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the local server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port for the local server
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let in_lambda = lambda::is_lambda_environment();

    init_tracing(in_lambda);

    let handler = build_handler().await;

    if in_lambda {
        tracing::info!(table = handler.table_name(), "Starting Lambda runtime");
        return lambda::run(Arc::new(handler))
            .await
            .map_err(|e| anyhow::anyhow!(e));
    }

    let cli = Cli::parse();
    serve(cli, handler).await
}

/// Initialize the tracing subscriber.
///
/// Under Lambda, logs are one JSON object per line without timestamps;
/// CloudWatch adds its own.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "videos=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().without_time())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Build the handler from environment configuration.
///
/// Invalid configuration does not stop the process: the handler is built on a
/// store that fails every scan, so each request gets the standard 500.
async fn build_handler() -> VideoListHandler {
    match StoreConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                region = %config.region,
                table = %config.table_name,
                endpoint = ?config.endpoint_url,
                "Configured DynamoDB store"
            );
            let store = DynamoDbVideoStore::from_config(&config).await;
            VideoListHandler::new(Arc::new(store), config.table_name)
        }
        Err(error) => {
            tracing::error!(%error, "Invalid store configuration, every request will fail");
            VideoListHandler::new(Arc::new(MisconfiguredStore::new(&error)), VIDEOS_TABLE)
        }
    }
}

/// Run the local HTTP server until Ctrl+C or SIGTERM.
async fn serve(cli: Cli, handler: VideoListHandler) -> Result<()> {
    let app = create_app(AppState::new(handler));

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
