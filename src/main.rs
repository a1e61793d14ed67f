use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use guardia_swap::modules::shifts::adapters::outbound::shift_store_in_memory::InMemoryShiftStore;
use guardia_swap::shell::config::Config;
use guardia_swap::shell::graphql::GRAPHQL_PATH;
use guardia_swap::shell::http::app;
use guardia_swap::shell::state::AppState;
use guardia_swap::shell::workers::spawn_projection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let addr = config.addr;

    // In-memory store for now
    let store = Arc::new(InMemoryShiftStore::new());
    let state = AppState::new(config, store);
    let _projection = spawn_projection(&state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST endpoint: http://{}/shifts", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
