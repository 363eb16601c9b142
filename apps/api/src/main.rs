mod config;
mod db;
mod errors;
mod models;
mod resources;
mod routes;
mod seed;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{bail, Result};
use axum::http::HeaderValue;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, CorsOrigins, StoreBackend};
use crate::db::create_pool;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{DocumentStore, MemoryStore, PostgresStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    let store = build_store(&config).await?;

    let command = std::env::args().nth(1);
    match command.as_deref() {
        None | Some("serve") => serve(config, store).await,
        Some("seed") => {
            let result = seed::seed_database(store.as_ref()).await;
            store.close().await;
            result?;
            info!("Database seeded successfully");
            Ok(())
        }
        Some(other) => {
            store.close().await;
            bail!("Unknown command '{other}' (expected 'serve' or 'seed')")
        }
    }
}

async fn serve(config: Config, store: Arc<dyn DocumentStore>) -> Result<()> {
    let state = AppState {
        store: store.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config.cors_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, releasing store");
    store.close().await;
    Ok(())
}

/// Constructs the document store selected by `STORE_BACKEND`.
async fn build_store(config: &Config) -> Result<Arc<dyn DocumentStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let Some(url) = config.database_url.as_deref() else {
                bail!("DATABASE_URL is required for the postgres store backend");
            };
            let pool = create_pool(url, config.database_max_connections).await?;
            Ok(Arc::new(PostgresStore::new(pool)))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn build_cors(origins: &CorsOrigins) -> Result<CorsLayer> {
    let origins = match origins {
        CorsOrigins::Any => return Ok(CorsLayer::permissive()),
        CorsOrigins::List(origins) => origins,
    };
    if origins.is_empty() {
        warn!("CORS_ORIGINS is blank; cross-origin requests will be refused");
    }
    let origins = origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
