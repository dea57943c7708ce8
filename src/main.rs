//! Match Compass server entrypoint.

use tracing::info;
use tracing_subscriber::EnvFilter;

use match_compass::adapters::http::app_router;
use match_compass::config::AppConfig;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server.log_level);

    let app = app_router(&config.server);
    let addr = config.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, environment = ?config.server.environment, "match compass API ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(log_level: &str) {
    // RUST_LOG wins over the configured default filter.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
