use realty_genie::model::retry::RetryConfig;

#[test]
fn test_retry_config_none() {
    let config = RetryConfig::none();
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.delay_secs(), 0);
}

#[test]
fn test_retry_config_with_max_retries_and_delay() {
    let config = RetryConfig::with_max_retries_and_delay(3, 15);
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.delay_secs(), 15);
}

#[test]
fn test_retry_config_falls_back_to_defaults() {
    let config = RetryConfig {
        max_retry_count: None,
        retry_delay_secs: None,
    };
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.delay_secs(), 10);
}
