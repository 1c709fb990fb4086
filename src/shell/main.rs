use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use time_clock::modules::time_entries::adapters::outbound::time_entry_store::TimeEntryStore;
use time_clock::modules::time_entries::adapters::outbound::time_entry_store_in_memory::InMemoryTimeEntryStore;
use time_clock::modules::time_entries::adapters::outbound::time_entry_store_sqlite::SqliteTimeEntryStore;
use time_clock::shared::core::clock::SystemClock;
use time_clock::shared::infrastructure::identity::in_memory::InMemoryIdentityResolver;
use time_clock::shell::config::Config;
use time_clock::shell::http::router;
use time_clock::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    let config = Config::from_env().context("invalid configuration")?;

    let store: Arc<dyn TimeEntryStore> = match &config.database {
        Some(path) => {
            tracing::info!(path = %path.display(), "using sqlite time entry store");
            Arc::new(
                SqliteTimeEntryStore::open(path)
                    .with_context(|| format!("failed to open database {}", path.display()))?,
            )
        }
        None => {
            tracing::warn!("TIME_CLOCK_DATABASE unset, entries are kept in memory only");
            Arc::new(InMemoryTimeEntryStore::new())
        }
    };

    let identities = InMemoryIdentityResolver::from_tokens(config.tokens.clone());
    if identities.is_empty() {
        tracing::warn!("TIME_CLOCK_TOKENS unset, every authenticated route will answer 401");
    }

    let state = AppState::new(store, Arc::new(SystemClock), Arc::new(identities));
    let app = router(state).layer(TraceLayer::new_for_http());

    tracing::info!("HTTP endpoint: http://{}", config.addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
