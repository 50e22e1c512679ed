use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Configuration for database connections
#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// Database connection URL; empty selects the in-memory store
    pub url: String,
    /// Maximum number of connections in the connection pool
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Whether a Postgres URL was provided
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }
}
