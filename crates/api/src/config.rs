//! Application configuration loaded from environment variables.

use std::time::Duration;

use orchestrator::RestConfig;

/// Gateway configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DIRECTORY_URL` — customer directory base URL (default: `"http://localhost:8081"`)
/// - `CATALOG_URL` — product catalog base URL (default: `"http://localhost:8082"`)
/// - `CART_STORE_URL` — cart store base URL (default: `"http://localhost:8083"`)
/// - `REQUEST_TIMEOUT_SECS` — outbound call timeout (default: `5`)
/// - `VALIDATION_CONCURRENCY` — catalog lookups in flight per request (default: `8`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub directory_url: String,
    pub catalog_url: String,
    pub cart_store_url: String,
    pub request_timeout_secs: u64,
    pub validation_concurrency: usize,
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
            directory_url: std::env::var("DIRECTORY_URL").unwrap_or(defaults.directory_url),
            catalog_url: std::env::var("CATALOG_URL").unwrap_or(defaults.catalog_url),
            cart_store_url: std::env::var("CART_STORE_URL").unwrap_or(defaults.cart_store_url),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            validation_concurrency: std::env::var("VALIDATION_CONCURRENCY")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(defaults.validation_concurrency),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the outbound-call configuration for the REST collaborators.
    pub fn rest_config(&self) -> RestConfig {
        RestConfig {
            directory_url: self.directory_url.clone(),
            catalog_url: self.catalog_url.clone(),
            cart_store_url: self.cart_store_url.clone(),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            directory_url: "http://localhost:8081".to_string(),
            catalog_url: "http://localhost:8082".to_string(),
            cart_store_url: "http://localhost:8083".to_string(),
            request_timeout_secs: 5,
            validation_concurrency: orchestrator::DEFAULT_VALIDATION_CONCURRENCY,
        }
    }
}
