mod config;
mod db;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::pg_store::PgPaletteStore;
use services::store::{MemoryPaletteStore, PaletteStore};

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::info!(path = %path.display(), "loaded environment file");
    }

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    let store: Arc<dyn PaletteStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections)
                .await
                .expect("database init failed");
            tracing::info!(max_connections = config.db_max_connections, "using postgres palette store");
            Arc::new(PgPaletteStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, saved palettes live in memory only");
            Arc::new(MemoryPaletteStore::new())
        }
    };

    services::presets::seed_if_empty(store.as_ref())
        .await
        .expect("preset seeding failed");

    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN not set, preset admin routes disabled");
    }

    let port = config.port;
    let state = state::AppState::new(store, config.admin_token, config.default_plan);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, default_plan = %config.default_plan, "palette-painter listening");
    axum::serve(listener, app).await.expect("server failed");
}
