//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Every variable is optional; the defaults reproduce a plain
//! `:8080` listener with 10 second read/write timeouts, a 60 second idle
//! timeout and a 1 MiB body limit.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 10, range: 1-300)
//! - `READ_TIMEOUT_SECS` - Time allowed to receive request headers (default: 10, range: 1-300)
//! - `WRITE_TIMEOUT_SECS` - Time a stalled response write may wait (default: 10, range: 1-300)
//! - `IDLE_TIMEOUT_SECS` - Keep-alive connection without traffic (default: 60, range: 1-3600)
//! - `MAX_BODY_BYTES` - Request body limit (default: 1048576)

use anyhow::Result;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Default request body limit (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

const MIN_BODY_BYTES: usize = 1024;
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound on handling one request, body read included.
    pub request_timeout_secs: u64,
    /// Upper bound on receiving a request's headers.
    pub read_timeout_secs: u64,
    /// Upper bound on a response write that makes no progress.
    pub write_timeout_secs: u64,
    /// Connections without traffic for this long are closed.
    pub idle_timeout_secs: u64,
    /// Requests with larger bodies are rejected with `413`.
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            request_timeout_secs: 10,
            read_timeout_secs: 10,
            write_timeout_secs: 10,
            idle_timeout_secs: 60,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let request_timeout_secs =
            parse_var("REQUEST_TIMEOUT_SECS").unwrap_or(defaults.request_timeout_secs);
        let read_timeout_secs =
            parse_var("READ_TIMEOUT_SECS").unwrap_or(defaults.read_timeout_secs);
        let write_timeout_secs =
            parse_var("WRITE_TIMEOUT_SECS").unwrap_or(defaults.write_timeout_secs);
        let idle_timeout_secs =
            parse_var("IDLE_TIMEOUT_SECS").unwrap_or(defaults.idle_timeout_secs);
        let max_body_bytes = parse_var("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes);

        Self {
            listen_addr,
            log_level,
            log_format,
            request_timeout_secs,
            read_timeout_secs,
            write_timeout_secs,
            idle_timeout_secs,
            max_body_bytes,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not a valid socket address
    /// - `log_format` is not `text` or `json`
    /// - `request_timeout_secs`, `read_timeout_secs` or `write_timeout_secs`
    ///   is outside 1-300
    /// - `idle_timeout_secs` is outside 1-3600
    /// - `max_body_bytes` is outside 1 KiB-64 MiB
    pub fn validate(&self) -> Result<()> {
        if self.listen_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        for (name, value, max) in [
            ("REQUEST_TIMEOUT_SECS", self.request_timeout_secs, 300),
            ("READ_TIMEOUT_SECS", self.read_timeout_secs, 300),
            ("WRITE_TIMEOUT_SECS", self.write_timeout_secs, 300),
            ("IDLE_TIMEOUT_SECS", self.idle_timeout_secs, 3600),
        ] {
            if value == 0 || value > max {
                anyhow::bail!("{name} must be between 1 and {max}, got {value}");
            }
        }

        if !(MIN_BODY_BYTES..=MAX_BODY_BYTES).contains(&self.max_body_bytes) {
            anyhow::bail!(
                "MAX_BODY_BYTES must be between {} and {}, got {}",
                MIN_BODY_BYTES,
                MAX_BODY_BYTES,
                self.max_body_bytes
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}s", self.request_timeout_secs);
        tracing::info!(
            "  Connection timeouts: read {}s, write {}s, idle {}s",
            self.read_timeout_secs,
            self.write_timeout_secs,
            self.idle_timeout_secs
        );
        tracing::info!("  Max body size: {} bytes", self.max_body_bytes);
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
