use serde::Serialize;
use serde_json::{Number, Value};

/// Provider-defined company profile, passed through without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CompanyProfile(pub Value);

impl CompanyProfile {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// `null`, `false`, zero, and empty strings, arrays or objects all count as "no data".
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}

/// One provider news record, kept undecoded. Only the scored items are ever
/// inspected, so a malformed record past the headline cap is never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NewsItem(pub Value);

impl NewsItem {
    pub fn new(headline: impl Into<String>) -> Self {
        Self(serde_json::json!({ "headline": headline.into() }))
    }

    /// `None` when the record has no `headline` or it is not a string.
    pub fn headline(&self) -> Option<&str> {
        self.0.get("headline").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    pub symbol: String,
    pub average_sentiment: Number,
    pub news_count: usize,
}

impl SentimentResult {
    /// No news in the window: a literal integer zero for both fields.
    pub fn empty(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            average_sentiment: Number::from(0),
            news_count: 0,
        }
    }

    pub fn scored(symbol: &str, average: f64, news_count: usize) -> Self {
        let rounded = round_to(average, 3);
        Self {
            symbol: symbol.to_string(),
            average_sentiment: Number::from_f64(rounded).unwrap_or_else(|| Number::from(0)),
            news_count,
        }
    }
}

/// Rounds the exact binary value half-to-even, e.g. 0.0625 -> 0.062.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse::<f64>()
        .unwrap_or(value)
}
