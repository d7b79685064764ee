//! Hero record model.
//!
//! Both endpoints serve the same record shape: the static endpoint from the
//! built-in set below, the dynamic endpoint from database rows.

use serde::{Deserialize, Serialize};

/// A single hero record.
///
/// Field order is the serialization order, so the JSON body of both
/// endpoints is stable across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Hero {
    /// Unique hero identifier.
    pub id: i32,

    /// Hero display name.
    pub name: String,
}

impl Hero {
    /// Creates a new hero record.
    pub fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    /// The built-in record set served by the static endpoint.
    pub fn static_set() -> Vec<Hero> {
        vec![Hero::new(1, "Static Hero")]
    }
}
