//! Hero data service.
//!
//! Serves two read-only JSON endpoints: a built-in static record set on
//! `/static` and hero rows fetched live from PostgreSQL on `/dynamic`.

mod db;
mod handlers;
mod routes;
mod service;
mod state;

use std::net::SocketAddr;

use axum::{middleware, Router};
use common::config::AppConfig;
use common::middleware::request_id::request_id_middleware;
use routes::Endpoint;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SERVICE_NAME: &str = "hero-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present) before anything reads the environment
    load_dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Fails fast when DB_URL is absent; the service cannot run without it
    let config = AppConfig::from_env()?;

    // The pool connects lazily, so an unreachable database surfaces on the
    // first query rather than here
    let pool = db::connect(&config.db_url)?;
    let state = AppState::new(pool);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!(service = SERVICE_NAME, address = %addr, "service listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router(&Endpoint::ALL))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Best-effort `.env` loader.
///
/// Accepts `KEY=VALUE` lines, skips blanks and `#` comments, and never
/// overrides variables already present in the environment.
fn load_dotenv() {
    let Ok(content) = std::fs::read_to_string(".env") else {
        return;
    };
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if !key.is_empty() && std::env::var(key).is_err() {
            std::env::set_var(key, value);
        }
    }
}
