//! Application configuration loaded from environment variables.

use inventory::Collections;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `8080`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DATABASE_URL`: PostgreSQL connection string; unset means in-memory storage
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: `5`)
/// - `CATEGORY_COLLECTION` / `ITEM_COLLECTION`: collection names
///   (defaults: `"categories"` / `"items"`)
/// - `SEED_SAMPLE_DATA`: insert sample data into empty collections (default: `true`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub collections: Collections,
    pub seed_sample_data: bool,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            collections: Collections {
                categories: std::env::var("CATEGORY_COLLECTION")
                    .unwrap_or(defaults.collections.categories),
                items: std::env::var("ITEM_COLLECTION").unwrap_or(defaults.collections.items),
            },
            seed_sample_data: std::env::var("SEED_SAMPLE_DATA")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_sample_data),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            database_url: None,
            database_max_connections: 5,
            collections: Collections::default(),
            seed_sample_data: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
