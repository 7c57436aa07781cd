use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use super::state::AppState;
use crate::core::{CompanyProfile, MarketDataClient, SentimentResult, SentimentScorer};
use crate::utils::error::ApiError;

pub const LIVENESS_MESSAGE: &str = "Your AI Stock API is live and running!";

type Params = Query<Vec<(String, String)>>;

/// First value of a repeated query parameter wins.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// GET / - Liveness check
pub async fn index() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /api/company-details?symbol=X
pub async fn company_details<C, S>(
    State(state): State<Arc<AppState<C, S>>>,
    Query(params): Params,
) -> Result<Json<CompanyProfile>, ApiError>
where
    C: MarketDataClient + 'static,
    S: SentimentScorer + 'static,
{
    let profile = state
        .service
        .company_details(first_param(&params, "symbol"))
        .await?;

    Ok(Json(profile))
}

/// GET /api/news-sentiment?symbol=X
pub async fn news_sentiment<C, S>(
    State(state): State<Arc<AppState<C, S>>>,
    Query(params): Params,
) -> Result<Json<SentimentResult>, ApiError>
where
    C: MarketDataClient + 'static,
    S: SentimentScorer + 'static,
{
    let result = state
        .service
        .news_sentiment(first_param(&params, "symbol"))
        .await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_param() {
        let params = vec![
            ("other".to_string(), "x".to_string()),
            ("symbol".to_string(), "AAPL".to_string()),
            ("symbol".to_string(), "MSFT".to_string()),
        ];
        assert_eq!(first_param(&params, "symbol"), Some("AAPL"));
        assert_eq!(first_param(&params, "missing"), None);
    }

    #[tokio::test]
    async fn test_index() {
        assert_eq!(index().await, "Your AI Stock API is live and running!");
    }
}
