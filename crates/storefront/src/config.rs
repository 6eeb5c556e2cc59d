//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to development defaults:
//!
//! - `FRESHCART_HOST` - Bind address (default: 127.0.0.1)
//! - `FRESHCART_PORT` - Listen port (default: 3000)
//! - `FRESHCART_CATALOG` - Path to the catalog JSON file
//!   (default: crates/storefront/content/catalog.json)
//! - `FRESHCART_STATE_DIR` - Directory for durable key-value state
//!   (default: crates/storefront/state)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path to the catalog data file
    pub catalog_path: PathBuf,
    /// Directory holding the durable key-value state files
    pub state_dir: PathBuf,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("FRESHCART_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FRESHCART_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FRESHCART_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FRESHCART_PORT".to_string(), e.to_string()))?;
        let catalog_path = PathBuf::from(get_env_or_default(
            "FRESHCART_CATALOG",
            "crates/storefront/content/catalog.json",
        ));
        let state_dir = PathBuf::from(get_env_or_default(
            "FRESHCART_STATE_DIR",
            "crates/storefront/state",
        ));

        Ok(Self {
            host,
            port,
            catalog_path,
            state_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
