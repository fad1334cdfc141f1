use anyhow::{anyhow, Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub http_host: String,
    pub http_port: u16,
    /// Base url of the notification service. Notifications are only logged when unset.
    pub notification_url: Option<String>,
    pub notification_timeout: Duration,
    /// Restricts CORS to one origin. Any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        dotenvy::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            database_url: non_empty("DATABASE_URL")
                .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?,
            database_max_connections: parse_or(&non_empty, "DATABASE_MAX_CONNECTIONS", 5)?,
            http_host: non_empty("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            http_port: parse_or(&non_empty, "HTTP_PORT", 8080)?,
            notification_url: non_empty("NOTIFICATION_SERVICE_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            notification_timeout: Duration::from_secs(parse_or(
                &non_empty,
                "NOTIFICATION_TIMEOUT_SECS",
                5,
            )?),
            cors_allowed_origin: non_empty("CORS_ALLOWED_ORIGIN"),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid {key}: {raw:?}")),
        None => Ok(default),
    }
}
