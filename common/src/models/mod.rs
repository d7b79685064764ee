//! Wire-facing data models.

pub mod hero;

// Re-export commonly used types
pub use hero::Hero;
