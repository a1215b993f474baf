//! Service configuration parsed from environment variables.
//!
//! `main` loads an optional `.env` file through `dotenvy` before calling
//! [`ServerConfig::from_env`], so local runs and deployments share one path.

use crate::services::plans::PlanTier;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Postgres URL. `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    /// Bearer token for preset mutations. `None` disables admin routes.
    pub admin_token: Option<String>,
    /// Plan applied to requests without an `x-palette-plan` header.
    pub default_plan: PlanTier,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DATABASE_URL`: in-memory store when absent or empty
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `ADMIN_TOKEN`: admin preset routes disabled when absent or empty
    /// - `DEFAULT_PLAN`: `free` (default), `pro`, or `team`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` or `DEFAULT_PLAN` is set but
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let default_plan = match non_empty_var("DEFAULT_PLAN") {
            Some(raw) => raw
                .parse::<PlanTier>()
                .map_err(|_| ConfigError::Invalid { var: "DEFAULT_PLAN", value: raw })?,
            None => PlanTier::Free,
        };

        Ok(Self {
            port,
            database_url: non_empty_var("DATABASE_URL"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS),
            admin_token: non_empty_var("ADMIN_TOKEN"),
            default_plan,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
