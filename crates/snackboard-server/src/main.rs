use std::env;
use std::sync::Arc;

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use snackboard_server::{build_router, AppState};
use snackboard_store::memory::MemoryStore;
use snackboard_store::store::SharedStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_tracing();

    let bind = env::var("SNACKBOARD_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let store: SharedStore = Arc::new(MemoryStore::new());
    let state = AppState::new(store);
    let app = build_router(state);

    tracing::info!(%bind, "starting snackboard");
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).compact().init();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
