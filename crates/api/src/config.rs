use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be set")]
    Missing { var: &'static str },

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Origins allowed by the CORS layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `CORS_ORIGINS=*`: any origin, without credentials.
    Any,
    /// An explicit allow-list, with credentials.
    List(Vec<HeaderValue>),
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Maximum pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Allowed CORS origins (default: any).
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default      |
    /// |------------------------|--------------|
    /// | `DATABASE_URL`         | *(required)* |
    /// | `HOST`                 | `0.0.0.0`    |
    /// | `PORT` / `APP_PORT`    | `3000`       |
    /// | `DB_MAX_CONNECTIONS`   | `20`         |
    /// | `CORS_ORIGINS`         | `*`          |
    /// | `REQUEST_TIMEOUT_SECS` | `30`         |
    /// | `LOG_FORMAT`           | `pretty`     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing {
                var: "DATABASE_URL",
            })?;

        let host = parse_var(&lookup, "HOST", "0.0.0.0")?;

        // PORT wins over the legacy APP_PORT name.
        let port = match lookup("PORT") {
            Some(_) => parse_var(&lookup, "PORT", "3000")?,
            None => parse_var(&lookup, "APP_PORT", "3000")?,
        };

        let db_max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", "20")?;
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30")?;

        let cors_origins =
            parse_cors_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'pretty' or 'json'".to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            log_format,
        })
    }

    /// Socket address the server binds to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|err: T::Err| ConfigError::Invalid {
        var,
        reason: err.to_string(),
        value,
    })
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    if raw.trim() == "*" {
        return Ok(CorsOrigins::Any);
    }
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|err| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: err.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
