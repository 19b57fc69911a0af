use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.amadeus_base_url, DEFAULT_AMADEUS_BASE_URL);
    assert_eq!(cfg.iata_base_url, DEFAULT_IATA_BASE_URL);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.lookup_user_agent, DEFAULT_LOOKUP_USER_AGENT);
}

#[test]
fn amadeus_base_url_override() {
    let mut map = HashMap::new();
    map.insert("AIRGRID_AMADEUS_BASE_URL", "https://api.amadeus.com/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.amadeus_base_url, "https://api.amadeus.com/");
}

#[test]
fn blank_value_falls_back_to_default() {
    let mut map = HashMap::new();
    map.insert("AIRGRID_USER_AGENT", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn log_level_defaults_to_info() {
    let mut map = HashMap::new();
    assert_eq!(log_level_with(lookup_from_map(&map)), "info");
    map.insert("AIRGRID_LOG_LEVEL", "  ");
    assert_eq!(log_level_with(lookup_from_map(&map)), "info");
}

#[test]
fn log_level_ignores_invalid_network_settings() {
    let mut map = HashMap::new();
    map.insert("AIRGRID_LOG_LEVEL", "debug");
    map.insert("AIRGRID_REQUEST_TIMEOUT_SECS", "abc");
    assert_eq!(log_level_with(lookup_from_map(&map)), "debug");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn request_timeout_secs_override() {
    let mut map = HashMap::new();
    map.insert("AIRGRID_REQUEST_TIMEOUT_SECS", "60");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_timeout_secs, 60);
}

#[test]
fn request_timeout_secs_invalid() {
    let mut map = HashMap::new();
    map.insert("AIRGRID_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "AIRGRID_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(AIRGRID_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_secs_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("AIRGRID_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn lookup_user_agent_override() {
    let mut map = HashMap::new();
    map.insert("AIRGRID_LOOKUP_USER_AGENT", "custom-agent/2.0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.lookup_user_agent, "custom-agent/2.0");
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
}
