//! # esg-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for PulseESG on `0.0.0.0:$PORT`
//! (default 8080).

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = esg_api::bootstrap::config_from_env().map_err(|e| {
        tracing::error!("Configuration error: {e}");
        e
    })?;
    let port = config.port;

    let state = esg_api::bootstrap::bootstrap(config).map_err(|e| {
        tracing::error!("Bootstrap failed: {e}");
        e
    })?;

    let app = esg_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("PulseESG API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
