//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard
//! `std::env::var`, following the 12-factor methodology so the service can be
//! configured in containerized deployments without a config file.
//!
//! # Environment Variables
//!
//! Every variable is optional; the service starts with an empty environment.
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 8000)
//! - `UPLOADS_DIR`: Content directory for uploaded images (default: "./uploads")
//! - `MAX_UPLOAD_BYTES`: Request body limit in bytes (default: 10 MiB)
//! - `RUST_LOG`: Logging filter (default: "info,petrescue_api=debug,tower_http=debug")

use serde::Deserialize;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory where uploaded images are written and served from
    pub uploads_dir: String,

    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 8000)?,
            uploads_dir: env_or("UPLOADS_DIR", "./uploads".to_string())?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the
/// default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
