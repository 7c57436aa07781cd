pub mod toml_config;

use crate::adapters::finnhub::DEFAULT_BASE_URL;
use crate::core::service::{DEFAULT_MAX_HEADLINES, DEFAULT_NEWS_WINDOW_DAYS};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use toml_config::FileConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "stock-sentiment-api")]
#[command(about = "HTTP API for company profiles and news sentiment")]
pub struct CliConfig {
    #[arg(long, env = "FINNHUB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "FINNHUB_BASE_URL")]
    pub finnhub_base_url: Option<String>,

    #[arg(long = "request-timeout", env = "REQUEST_TIMEOUT_SECONDS", help = "Outbound request timeout in seconds")]
    pub request_timeout_seconds: Option<u64>,

    #[arg(long, env = "NEWS_WINDOW_DAYS")]
    pub news_window_days: Option<u32>,

    #[arg(long, env = "MAX_HEADLINES")]
    pub max_headlines: Option<usize>,

    #[arg(long = "config", env = "SERVER_CONFIG", help = "Optional TOML configuration file")]
    pub config_file: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Accepts `1`/`0`, `yes`/`no`, `on`/`off` and `true`/`false` from the environment.
    #[arg(
        long,
        env = "JSON_LOGS",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Emit logs as JSON"
    )]
    pub json_logs: bool,
}

/// Fully resolved configuration, read once at start-up.
#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub host: String,
    pub port: u16,
    pub finnhub_base_url: String,
    pub request_timeout: Option<Duration>,
    pub news_window_days: u32,
    pub max_headlines: usize,
}

impl Settings {
    /// CLI/env values win over the TOML file, which wins over built-in defaults.
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config_file {
            Some(path) => {
                tracing::debug!("Loading configuration file: {}", path.display());
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };

        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: CliConfig, file: FileConfig) -> Self {
        Self {
            api_key: cli.api_key.or(file.upstream.api_key).unwrap_or_default(),
            host: cli
                .host
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            finnhub_base_url: cli
                .finnhub_base_url
                .or(file.upstream.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout: cli
                .request_timeout_seconds
                .or(file.upstream.timeout_seconds)
                .map(Duration::from_secs),
            news_window_days: cli
                .news_window_days
                .or(file.sentiment.news_window_days)
                .unwrap_or(DEFAULT_NEWS_WINDOW_DAYS),
            max_headlines: cli
                .max_headlines
                .or(file.sentiment.max_headlines)
                .unwrap_or(DEFAULT_MAX_HEADLINES),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key).map_err(|_| ApiError::ConfigError {
            message: "FINNHUB_API_KEY is required (set it in the environment, .env, or --api-key)"
                .to_string(),
        })?;

        if self.api_key.contains("${") {
            return Err(ApiError::ConfigError {
                message: "api_key references an environment variable that is not set".to_string(),
            });
        }

        validate_non_empty_string("host", &self.host)?;
        validate_url("finnhub_base_url", &self.finnhub_base_url)?;
        validate_range("news_window_days", self.news_window_days, 1, 365)?;
        validate_range("max_headlines", self.max_headlines, 1, 250)?;

        if let Some(timeout) = self.request_timeout {
            validate_range("request_timeout_seconds", timeout.as_secs(), 1, 600)?;
        }

        tracing::debug!("✅ Configuration validation passed");
        Ok(())
    }
}

// 金鑰不可出現在日誌
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("finnhub_base_url", &self.finnhub_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("news_window_days", &self.news_window_days)
            .field("max_headlines", &self.max_headlines)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml_config::{SentimentSection, ServerSection, UpstreamSection};

    fn cli_with_key() -> CliConfig {
        CliConfig {
            api_key: Some("key".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::merge(cli_with_key(), FileConfig::default());
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.bind_addr(), "0.0.0.0:5000");
        assert_eq!(settings.finnhub_base_url, "https://finnhub.io/api/v1");
        assert_eq!(settings.news_window_days, 15);
        assert_eq!(settings.max_headlines, 20);
        assert!(settings.request_timeout.is_none());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_file() {
        let cli = CliConfig {
            port: Some(8081),
            ..cli_with_key()
        };
        let file = FileConfig {
            server: ServerSection {
                host: Some("127.0.0.1".into()),
                port: Some(9000),
            },
            upstream: UpstreamSection {
                api_key: Some("file-key".into()),
                base_url: None,
                timeout_seconds: Some(5),
            },
            sentiment: SentimentSection {
                news_window_days: Some(30),
                max_headlines: None,
            },
        };

        let settings = Settings::merge(cli, file);
        assert_eq!(settings.api_key, "key");
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8081);
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(settings.news_window_days, 30);
        assert_eq!(settings.max_headlines, 20);
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let settings = Settings::merge(CliConfig::default(), FileConfig::default());
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("FINNHUB_API_KEY"));
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut settings = Settings::merge(cli_with_key(), FileConfig::default());
        settings.max_headlines = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::merge(cli_with_key(), FileConfig::default());
        settings.finnhub_base_url = "ftp://finnhub.io".into();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let settings = Settings::merge(
            CliConfig {
                api_key: Some("super-secret".into()),
                ..Default::default()
            },
            FileConfig::default(),
        );
        let rendered = format!("{:?}", settings);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_parse_cli_flags() {
        let cli = CliConfig::try_parse_from([
            "stock-sentiment-api",
            "--api-key",
            "k",
            "--port",
            "8080",
            "--max-headlines",
            "10",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("k"));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.max_headlines, Some(10));
        assert!(cli.verbose);
    }

    #[test]
    fn test_json_logs_env_values() {
        let parse = || CliConfig::try_parse_from(["stock-sentiment-api"]).unwrap();

        std::env::set_var("JSON_LOGS", "1");
        assert!(parse().json_logs);
        std::env::set_var("JSON_LOGS", "true");
        assert!(parse().json_logs);
        std::env::set_var("JSON_LOGS", "0");
        assert!(!parse().json_logs);
        std::env::set_var("JSON_LOGS", "off");
        assert!(!parse().json_logs);
        std::env::remove_var("JSON_LOGS");
        assert!(!parse().json_logs);

        let cli = CliConfig::try_parse_from(["stock-sentiment-api", "--json-logs"]).unwrap();
        assert!(cli.json_logs);
    }
}
