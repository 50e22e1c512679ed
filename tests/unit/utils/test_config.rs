use realty_genie::utils::config::{get_env_or_default, get_env_or_none, get_secret};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("RG_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("RG_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("RG_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("RG_MISSING_VAR");
        let result: String = get_env_or_default("RG_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("RG_TEST_VAR_INVALID", "not_a_number");
        let result: u16 = get_env_or_default("RG_TEST_VAR_INVALID", 587);
        assert_eq!(result, 587);
        env::remove_var("RG_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_trims_and_ignores_blank() {
    unsafe {
        env::set_var("RG_TEST_VAR_PADDED", " 8080 ");
        let result: u16 = get_env_or_default("RG_TEST_VAR_PADDED", 8000);
        assert_eq!(result, 8080);

        env::set_var("RG_TEST_VAR_PADDED", "   ");
        let result: u16 = get_env_or_default("RG_TEST_VAR_PADDED", 8000);
        assert_eq!(result, 8000);
        env::remove_var("RG_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("RG_TEST_VAR_OPTION", "123");
        let result: Option<i32> = get_env_or_none("RG_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("RG_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("RG_MISSING_VAR_OPTION");
        let result: Option<i32> = get_env_or_none("RG_MISSING_VAR_OPTION");
        assert_eq!(result, None);
    }
}

#[test]
fn test_get_secret_missing_is_empty() {
    unsafe {
        env::remove_var("RG_MISSING_SECRET");
    }
    assert_eq!(get_secret("RG_MISSING_SECRET"), "");
}
