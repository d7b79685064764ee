//! HTTP handlers for the hero endpoints.

use axum::extract::State;
use axum::http::Uri;
use axum::Json;

use common::errors::AppError;
use common::models::Hero;

use crate::state::AppState;

/// Serves the built-in static record set.
pub async fn static_heroes() -> Json<Vec<Hero>> {
    Json(Hero::static_set())
}

/// Serves hero rows fetched from the database.
pub async fn dynamic_heroes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Hero>>, AppError> {
    let heroes = state.service.fetch_heroes().await?;
    Ok(Json(heroes))
}

/// Fallback for paths outside the enabled endpoint set.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}
