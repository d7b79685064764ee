//! Shared modules for the hero data service.
//!
//! Contains the pieces every binary in the workspace needs: runtime
//! configuration, the application error type, the wire models, and the
//! HTTP middleware stack.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
pub use models::Hero;
