//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use postline_infra::database::DatabaseConfig;

#[cfg(feature = "redis")]
use postline_infra::broker::RedisConfig;

/// Base URL of the stream read service when `STREAM_READ_URL` is unset.
pub const DEFAULT_STREAM_READ_URL: &str = "http://localhost:8080";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix of every stream redirect `Location`.
    pub stream_read_url: String,
    /// Grace period for in-flight requests once a stop signal arrives.
    pub shutdown_timeout: Duration,
    pub database: Option<DatabaseConfig>,
    #[cfg(feature = "redis")]
    pub redis: Option<RedisConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL").map(|url| DatabaseConfig {
            url,
            max_connections: parse_or(var("DB_MAX_CONNECTIONS"), 100),
            min_connections: parse_or(var("DB_MIN_CONNECTIONS"), 10),
        });

        #[cfg(feature = "redis")]
        let redis = var("REDIS_URL").map(|url| RedisConfig {
            url,
            connect_timeout: Duration::from_secs(parse_or(var("REDIS_CONNECT_TIMEOUT_SECS"), 5)),
        });

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(var("PORT"), 3000),
            stream_read_url: var("STREAM_READ_URL")
                .unwrap_or_else(|| DEFAULT_STREAM_READ_URL.to_string()),
            shutdown_timeout: Duration::from_secs(parse_or(var("SHUTDOWN_TIMEOUT_SECS"), 30)),
            database,
            #[cfg(feature = "redis")]
            redis,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|s| s.parse().ok()).unwrap_or(default)
}
