use persephony_client::config::Config;
use persephony_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use persephony_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("PERSY_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("PERSY_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("PERSY_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("PERSY_MISSING_VAR");
    }
    let result: String = get_env_or_default("PERSY_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("PERSY_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("PERSY_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("PERSY_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_blank_var() {
    unsafe {
        env::set_var("PERSY_TEST_VAR_BLANK", "   ");
        let result: Option<u32> = get_env_or_none("PERSY_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("PERSY_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("PERSY_TEST_VAR_OPTION", " 123 ");
        let result: Option<i32> = get_env_or_none("PERSY_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("PERSY_TEST_VAR_OPTION");
    }
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("PERSEPHONY_ACCOUNT_ID", "ACenv");
        env::set_var("PERSEPHONY_AUTH_TOKEN", "envtoken");
        env::set_var("PERSEPHONY_BASE_URL", "http://localhost:4010");
        env::set_var("PERSEPHONY_TIMEOUT", "7");
    }

    let config = Config::new();
    assert_eq!(config.credentials.account_id, "ACenv");
    assert_eq!(config.credentials.auth_token, "envtoken");
    assert_eq!(config.rest_api.base_url, "http://localhost:4010");
    assert_eq!(config.rest_api.timeout, 7);

    unsafe {
        env::remove_var("PERSEPHONY_ACCOUNT_ID");
        env::remove_var("PERSEPHONY_AUTH_TOKEN");
        env::remove_var("PERSEPHONY_BASE_URL");
        env::remove_var("PERSEPHONY_TIMEOUT");
    }
}

#[test]
fn test_config_with_credentials_defaults() {
    let config = Config::with_credentials("AC1", "token");
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_config_serialization_roundtrip() {
    let config = Config::with_credentials("AC1", "token").with_timeout(12);
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}
