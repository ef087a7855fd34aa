use std::path::PathBuf;

use contest_core::admin::AdminCredentials;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Which [`contest_db::ContestStore`] backend to run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    /// Process-local storage; everything is lost on restart.
    Memory,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// Built once at startup and shared with handlers through
/// [`crate::state::AppState`]. Admin credentials have no default.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// The single admin identity.
    pub admin: AdminCredentials,
    pub store: StoreBackend,
    /// Directory served for paths no route matches (e.g. `/success.html`).
    pub static_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `ADMIN_EMAIL`          | required                   |
    /// | `ADMIN_PASSWORD`       | required                   |
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | required for `postgres`    |
    /// | `STATIC_DIR`           | unset                      |
    /// | `LOG_FORMAT`           | `pretty`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_or("PORT", var("PORT"), 3000u16)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30u64)?;

        let admin_email = var("ADMIN_EMAIL").ok_or(ConfigError::Missing("ADMIN_EMAIL"))?;
        let admin_password =
            var("ADMIN_PASSWORD").ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?;

        let store = match var("STORE_BACKEND").as_deref().map(str::trim) {
            None | Some("postgres") => StoreBackend::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "STORE_BACKEND",
                    value: other.to_string(),
                    reason: "expected 'postgres' or 'memory'".into(),
                })
            }
        };

        let static_dir = var("STATIC_DIR").map(PathBuf::from);

        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "LOG_FORMAT",
                    value: other.to_string(),
                    reason: "expected 'pretty' or 'json'".into(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin: AdminCredentials::new(admin_email, admin_password),
            store,
            static_dir,
            log_format,
        })
    }
}

fn parse_or<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => {
            let parsed = raw.trim().parse::<T>();
            parsed.map_err(|e| ConfigError::Invalid {
                var,
                value: raw,
                reason: e.to_string(),
            })
        }
    }
}
