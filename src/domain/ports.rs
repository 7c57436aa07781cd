use crate::domain::model::{CompanyProfile, NewsItem};
use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

/// Any failure of the outbound market-data call. Handlers do not distinguish
/// between the variants; the Display text is surfaced to the caller as-is.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("FinnhubAPIException(status_code: {status}): {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response from upstream: {0}")]
    Decode(String),
}

#[async_trait]
pub trait MarketDataClient: Send + Sync {
    async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile, UpstreamError>;

    /// News published in the inclusive range `[from, to]`, in provider order.
    async fn company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NewsItem>, UpstreamError>;
}

pub trait SentimentScorer: Send + Sync {
    /// Polarity in `[-1.0, 1.0]`.
    fn polarity(&self, text: &str) -> f64;
}
