use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ledger_core::MockResponder;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use xem_dashboard::{AppState, Args, Config, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("xem_dashboard=info,ledger_core=info,warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let config = Config::from_env().with_args(&args);
    info!(
        "Starting xem-dashboard v{} (cache ttl {:?})",
        env!("CARGO_PKG_VERSION"),
        config.cache_ttl
    );
    warn!("serving mock data only; no connection to a real XEM node is made");

    let state = AppState::new(
        Arc::new(MockResponder::new()),
        config.cache_ttl,
        &config.node_url,
    );
    let app = router(state);

    let addr = config
        .socket_addr()
        .with_context(|| format!("invalid bind address {}:{}", config.bind, config.port))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Dashboard listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
