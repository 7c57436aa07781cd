use crate::core::{MarketDataClient, SentimentScorer};
use crate::domain::model::{CompanyProfile, SentimentResult};
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::validate_symbol;
use chrono::{Duration, Local, NaiveDate};

pub const DEFAULT_NEWS_WINDOW_DAYS: u32 = 15;
pub const DEFAULT_MAX_HEADLINES: usize = 20;

/// Request core shared by both data endpoints. Holds no per-request state.
pub struct MarketService<C: MarketDataClient, S: SentimentScorer> {
    client: C,
    scorer: S,
    news_window_days: u32,
    max_headlines: usize,
}

impl<C: MarketDataClient, S: SentimentScorer> MarketService<C, S> {
    pub fn new(client: C, scorer: S) -> Self {
        Self {
            client,
            scorer,
            news_window_days: DEFAULT_NEWS_WINDOW_DAYS,
            max_headlines: DEFAULT_MAX_HEADLINES,
        }
    }

    pub fn with_limits(mut self, news_window_days: u32, max_headlines: usize) -> Self {
        self.news_window_days = news_window_days;
        self.max_headlines = max_headlines;
        self
    }

    pub async fn company_details(&self, symbol: Option<&str>) -> Result<CompanyProfile> {
        let symbol = validate_symbol(symbol)?;
        tracing::info!(symbol, "company details requested");

        let profile = self.client.company_profile(symbol).await.map_err(|e| {
            tracing::warn!(symbol, error = %e, "company profile lookup failed");
            ApiError::from(e)
        })?;

        if profile.is_empty() {
            tracing::info!(symbol, "no profile found");
            return Err(ApiError::no_data());
        }

        Ok(profile)
    }

    pub async fn news_sentiment(&self, symbol: Option<&str>) -> Result<SentimentResult> {
        self.news_sentiment_on(symbol, Local::now().date_naive()).await
    }

    /// Average headline polarity over `[today - window, today]`.
    ///
    /// Only the first `max_headlines` items are scored, and `news_count`
    /// reports that truncated size rather than the number of articles returned.
    pub async fn news_sentiment_on(
        &self,
        symbol: Option<&str>,
        today: NaiveDate,
    ) -> Result<SentimentResult> {
        let symbol = validate_symbol(symbol)?;
        let start = today - Duration::days(i64::from(self.news_window_days));
        tracing::info!(symbol, %start, end = %today, "news sentiment requested");

        let news = self
            .client
            .company_news(symbol, start, today)
            .await
            .map_err(|e| {
                tracing::warn!(symbol, error = %e, "company news lookup failed");
                ApiError::from(e)
            })?;

        if news.is_empty() {
            return Ok(SentimentResult::empty(symbol));
        }

        let scored = &news[..news.len().min(self.max_headlines)];
        let mut total = 0.0;
        for item in scored {
            let headline = item.headline().ok_or_else(|| {
                tracing::warn!(symbol, "news item without a string headline");
                ApiError::Upstream("'headline'".to_string())
            })?;
            total += self.scorer.polarity(headline);
        }
        let average = total / scored.len() as f64;

        tracing::debug!(
            symbol,
            available = news.len(),
            scored = scored.len(),
            average,
            "headlines scored"
        );

        Ok(SentimentResult::scored(symbol, average, scored.len()))
    }
}
