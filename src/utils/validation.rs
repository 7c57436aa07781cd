use crate::utils::error::{ApiError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// The symbol is passed through verbatim; only absence and the empty string are rejected.
pub fn validate_symbol(symbol: Option<&str>) -> Result<&str> {
    match symbol {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ApiError::missing_symbol()),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ApiError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            // 不回顯內容，避免金鑰外洩到日誌
            value: String::new(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ApiError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_symbol() {
        assert_eq!(validate_symbol(Some("AAPL")).unwrap(), "AAPL");
        assert_eq!(validate_symbol(Some(" aapl ")).unwrap(), " aapl ");
        assert!(matches!(validate_symbol(Some("")), Err(ApiError::Validation(_))));
        assert!(matches!(validate_symbol(None), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("finnhub_base_url", "https://finnhub.io/api/v1").is_ok());
        assert!(validate_url("finnhub_base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("finnhub_base_url", "").is_err());
        assert!(validate_url("finnhub_base_url", "invalid-url").is_err());
        assert!(validate_url("finnhub_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("api_key", "abc123").is_ok());
        assert!(validate_non_empty_string("api_key", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("news_window_days", 15, 1, 365).is_ok());
        assert!(validate_range("news_window_days", 0, 1, 365).is_err());
        assert!(validate_range("max_headlines", 251, 1, 250).is_err());
    }
}
