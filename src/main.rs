//! Gateway entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::info;

use galaxy_gateway::backend::GrpcGalaxy;
use galaxy_gateway::config::Config;
use galaxy_gateway::handlers::AppState;
use galaxy_gateway::routes;
use galaxy_gateway::telemetry::{init_metrics, setup_telemetry};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init()?;
    setup_telemetry(&config);
    let metrics_handle = init_metrics();

    info!(
        version = VERSION,
        http_address = %config.http_address,
        backend = %config.grpc_address,
        pid = std::process::id(),
        "Starting galaxy-gateway"
    );

    // Lazy connect: the gateway starts even if the backend is down and
    // surfaces per-request failures until it comes up.
    let channel = tonic::transport::Endpoint::from_shared(config.grpc_address.clone())?
        .connect_lazy();
    let state = AppState::new(Arc::new(GrpcGalaxy::new(channel)));

    let app = routes::app(
        state,
        config.cors_allow_origins.as_deref(),
        config.request_timeout(),
        Some(metrics_handle),
    );

    let addr: SocketAddr = config.http_address.parse()?;
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
