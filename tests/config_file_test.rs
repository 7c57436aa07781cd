use anyhow::Result;
use std::time::Duration;
use stock_sentiment_api::utils::validation::Validate;
use stock_sentiment_api::{CliConfig, Settings};
use tempfile::TempDir;

#[test]
fn test_settings_resolve_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("server.toml");
    std::env::set_var("STOCK_API_FILE_TEST_KEY", "key-from-env");

    std::fs::write(
        &config_path,
        r#"
[server]
host = "127.0.0.1"
port = 8088

[upstream]
api_key = "${STOCK_API_FILE_TEST_KEY}"
base_url = "http://127.0.0.1:9999/api/v1"
timeout_seconds = 3

[sentiment]
news_window_days = 10
max_headlines = 5
"#,
    )?;

    let cli = CliConfig {
        config_file: Some(config_path),
        max_headlines: Some(8),
        ..Default::default()
    };
    let settings = Settings::resolve(cli)?;

    assert_eq!(settings.api_key, "key-from-env");
    assert_eq!(settings.bind_addr(), "127.0.0.1:8088");
    assert_eq!(settings.finnhub_base_url, "http://127.0.0.1:9999/api/v1");
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(3)));
    assert_eq!(settings.news_window_days, 10);
    // 命令列優先於檔案
    assert_eq!(settings.max_headlines, 8);
    settings.validate()?;

    Ok(())
}

#[test]
fn test_unset_key_placeholder_fails_validation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("server.toml");
    std::fs::write(
        &config_path,
        "[upstream]\napi_key = \"${STOCK_API_FILE_TEST_NEVER_SET}\"\n",
    )?;

    let settings = Settings::resolve(CliConfig {
        config_file: Some(config_path),
        ..Default::default()
    })?;

    assert!(settings.validate().is_err());
    Ok(())
}

#[test]
fn test_missing_config_file_is_an_error() {
    let cli = CliConfig {
        api_key: Some("k".into()),
        config_file: Some("/definitely/not/here/server.toml".into()),
        ..Default::default()
    };
    assert!(Settings::resolve(cli).is_err());
}
