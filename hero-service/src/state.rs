//! Application state for the hero service.

use std::sync::Arc;

use sqlx::PgPool;

use crate::service::{HeroService, HeroServiceTrait};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Data access for the dynamic endpoint.
    pub service: Arc<dyn HeroServiceTrait>,
}

impl AppState {
    /// Creates application state backed by the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            service: Arc::new(HeroService::new(pool)),
        }
    }
}
