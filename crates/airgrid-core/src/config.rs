use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_AMADEUS_BASE_URL: &str = "https://test.api.amadeus.com/";
pub const DEFAULT_IATA_BASE_URL: &str = "https://www.iata.org/";
pub const DEFAULT_USER_AGENT: &str = "airgrid/0.1 (fare-search)";

/// The IATA directory rejects non-browser agents, so lookups present as Chrome.
pub const DEFAULT_LOOKUP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Log filter directive from `AIRGRID_LOG_LEVEL`, or `info` when unset or blank.
///
/// Kept apart from [`AppConfig`] so logging comes up even when network
/// settings are invalid.
#[must_use]
pub fn log_level_from_env() -> String {
    log_level_with(|key| std::env::var(key))
}

fn log_level_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("AIRGRID_LOG_LEVEL")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let amadeus_base_url = or_default("AIRGRID_AMADEUS_BASE_URL", DEFAULT_AMADEUS_BASE_URL);
    let iata_base_url = or_default("AIRGRID_IATA_BASE_URL", DEFAULT_IATA_BASE_URL);
    let request_timeout_secs = parse_u64("AIRGRID_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "AIRGRID_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let user_agent = or_default("AIRGRID_USER_AGENT", DEFAULT_USER_AGENT);
    let lookup_user_agent = or_default("AIRGRID_LOOKUP_USER_AGENT", DEFAULT_LOOKUP_USER_AGENT);

    Ok(AppConfig {
        amadeus_base_url,
        iata_base_url,
        request_timeout_secs,
        user_agent,
        lookup_user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
