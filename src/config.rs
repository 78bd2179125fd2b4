//! Environment-driven application configuration.
//!
//! Values are read once at startup. Every setting has a default matching the
//! stock deployment, so an empty environment yields a usable configuration
//! pointing at a local database.

use crate::telemetry::LogFormat;
use crate::todo::adapters::postgres::PoolSettings;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Environment variable name.
        key: String,
        /// Rejected value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Connection string accepted by libpq: a URL or keyword/value pairs.
    pub url: String,
    /// Pool sizing and timeouts.
    pub pool: PoolSettings,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Log output format.
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `HOST` (default `0.0.0.0`), `PORT` (default `5000`)
    /// - `DATABASE_URL`: full connection string; overrides the discrete
    ///   `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_NAME`, `DATABASE_USER`,
    ///   and `DATABASE_PASSWORD` variables
    /// - `DATABASE_MAX_CONNECTIONS` (default `10`)
    /// - `DATABASE_CONNECTION_TIMEOUT_MS` (default `2000`)
    /// - `DATABASE_IDLE_TIMEOUT_MS` (default `30000`)
    /// - `DATABASE_STATEMENT_TIMEOUT_MS` (unset: no limit)
    /// - `LOG_FORMAT`: `pretty` (default) or `json`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable is set to an
    /// unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a value is unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let vars = Lookup(lookup);

        let max_connections: u32 = vars.parsed("DATABASE_MAX_CONNECTIONS", 10)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DATABASE_MAX_CONNECTIONS".to_owned(),
                value: "0".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }

        let pool = PoolSettings {
            max_connections,
            connection_timeout: Duration::from_millis(
                vars.parsed("DATABASE_CONNECTION_TIMEOUT_MS", 2_000)?,
            ),
            idle_timeout: Some(Duration::from_millis(
                vars.parsed("DATABASE_IDLE_TIMEOUT_MS", 30_000)?,
            )),
            statement_timeout: vars
                .optional_parsed::<u64>("DATABASE_STATEMENT_TIMEOUT_MS")?
                .map(Duration::from_millis),
        };

        let url = match vars.get("DATABASE_URL") {
            Some(url) => url,
            None => connection_string(&[
                ("host", vars.string("DATABASE_HOST", "localhost")),
                ("port", vars.parsed::<u16>("DATABASE_PORT", 5432)?.to_string()),
                ("dbname", vars.string("DATABASE_NAME", "todolist")),
                ("user", vars.string("DATABASE_USER", "postgres")),
                ("password", vars.string("DATABASE_PASSWORD", "postgres")),
            ]),
        };

        Ok(Self {
            host: vars.string("HOST", "0.0.0.0"),
            port: vars.parsed("PORT", 5000)?,
            database: DatabaseConfig { url, pool },
            log_format: vars.parsed("LOG_FORMAT", LogFormat::Pretty)?,
        })
    }

    /// Returns the `host:port` socket address to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

struct Lookup<F>(F);

impl<F> Lookup<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    fn string(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_owned())
    }

    fn optional_parsed<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(key)
            .map(|value| {
                value
                    .trim()
                    .parse::<T>()
                    .map_err(|err| ConfigError::InvalidValue {
                        key: key.to_owned(),
                        value: value.clone(),
                        reason: err.to_string(),
                    })
            })
            .transpose()
    }

    fn parsed<T>(&self, key: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        Ok(self.optional_parsed(key)?.unwrap_or(default))
    }
}

/// Renders libpq keyword/value pairs, quoting every value.
fn connection_string(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", conninfo_quote(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Quotes a libpq connection parameter value.
///
/// Wraps the value in single quotes and backslash-escapes embedded quotes
/// and backslashes.
fn conninfo_quote(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('\'');
    for ch in value.chars() {
        if matches!(ch, '\'' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('\'');
    escaped
}
