use std::str::FromStr;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 8000 | HTTP port |
/// | DATABASE_PATH | ./qrixalt.db | SQLite database file |
/// | DB_MAX_CONNECTIONS | 5 | connection pool size |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout (ms) |
/// | LOG_LEVEL | info | default log level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | ENVIRONMENT | development | development / staging / production |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/qrixalt.db HTTP_PORT=8080 cargo run -p fittings-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file, created on first start
    pub database_path: String,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
    /// Default log level when RUST_LOG is not set
    pub log_level: String,
    /// Optional log directory (daily rotation)
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_or("HTTP_PORT", 8000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./qrixalt.db".into()),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30_000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the database path and port, keeping everything else from the environment
    ///
    /// Mostly used by tests.
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    /// `host:port` string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
