use std::path::PathBuf;

use crate::app_config::{AppConfig, CatalogConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the settings needed to read the franchise catalog.
///
/// Unlike [`load_app_config`], this never requires `TMDB_API_KEY`. Loads
/// `.env` first.
#[must_use]
pub fn load_catalog_config() -> CatalogConfig {
    dotenvy::dotenv().ok();
    build_catalog_config(&|key| std::env::var(key))
}

fn build_catalog_config<F>(lookup: &F) -> CatalogConfig
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    CatalogConfig {
        log_level: lookup("COSTAR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        franchises_path: PathBuf::from(
            lookup("COSTAR_FRANCHISES_PATH")
                .unwrap_or_else(|_| "./config/franchises.yaml".to_string()),
        ),
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the real environment so tests
/// can drive them with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let tmdb_api_key = require("TMDB_API_KEY")?;

    let env = parse_environment(&or_default("COSTAR_ENV", "development"))?;
    let CatalogConfig {
        log_level,
        franchises_path,
    } = build_catalog_config(&lookup);

    let tmdb_base_url = or_default("COSTAR_TMDB_BASE_URL", "https://api.themoviedb.org/3/");
    let tmdb_request_timeout_secs = parse_u64("COSTAR_TMDB_REQUEST_TIMEOUT_SECS", "30")?;
    let tmdb_user_agent = or_default(
        "COSTAR_TMDB_USER_AGENT",
        "costar/0.1 (filmography-comparison)",
    );
    let tmdb_max_concurrent_requests = parse_usize("COSTAR_TMDB_MAX_CONCURRENT_REQUESTS", "8")?;
    if tmdb_max_concurrent_requests == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "COSTAR_TMDB_MAX_CONCURRENT_REQUESTS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let tmdb_max_retries = parse_u32("COSTAR_TMDB_MAX_RETRIES", "3")?;
    let tmdb_retry_backoff_base_ms = parse_u64("COSTAR_TMDB_RETRY_BACKOFF_BASE_MS", "1000")?;
    let tmdb_max_discover_pages = parse_u32("COSTAR_TMDB_MAX_DISCOVER_PAGES", "500")?;

    Ok(AppConfig {
        env,
        log_level,
        franchises_path,
        tmdb_api_key,
        tmdb_base_url,
        tmdb_request_timeout_secs,
        tmdb_user_agent,
        tmdb_max_concurrent_requests,
        tmdb_max_retries,
        tmdb_retry_backoff_base_ms,
        tmdb_max_discover_pages,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "COSTAR_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
