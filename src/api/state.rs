use crate::adapters::{FinnhubClient, LexiconScorer};
use crate::config::Settings;
use crate::core::service::MarketService;
use crate::core::{MarketDataClient, SentimentScorer};
use crate::domain::ports::UpstreamError;
use std::sync::Arc;

/// Shared state for all handlers. The service is stateless, so no locking.
pub struct AppState<C: MarketDataClient, S: SentimentScorer> {
    pub service: MarketService<C, S>,
}

impl<C: MarketDataClient, S: SentimentScorer> AppState<C, S> {
    pub fn new(service: MarketService<C, S>) -> Arc<Self> {
        Arc::new(Self { service })
    }
}

impl AppState<FinnhubClient, LexiconScorer> {
    pub fn from_settings(settings: &Settings) -> Result<Arc<Self>, UpstreamError> {
        let client = FinnhubClient::with_timeout(
            settings.finnhub_base_url.clone(),
            settings.api_key.clone(),
            settings.request_timeout,
        )?;

        let service = MarketService::new(client, LexiconScorer::new())
            .with_limits(settings.news_window_days, settings.max_headlines);

        Ok(Self::new(service))
    }
}
