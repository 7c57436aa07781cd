use crate::domain::model::{CompanyProfile, NewsItem};
use crate::domain::ports::{MarketDataClient, UpstreamError};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Finnhub REST client. Stateless apart from the connection pool, so a single
/// instance is shared by every request.
#[derive(Debug, Clone)]
pub struct FinnhubClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl FinnhubClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Response, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making upstream request to: {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await?;

        tracing::debug!("Upstream response status: {}", response.status());

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(UpstreamError::Status {
            status,
            message: provider_message(&body),
        })
    }
}

/// Finnhub reports failures as `{"error": "..."}`; fall back to the raw body.
fn provider_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[async_trait]
impl MarketDataClient for FinnhubClient {
    async fn company_profile(&self, symbol: &str) -> Result<CompanyProfile, UpstreamError> {
        let response = self.get("/stock/profile2", &[("symbol", symbol)]).await?;
        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(CompanyProfile::from_value(value))
    }

    async fn company_news(
        &self,
        symbol: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<NewsItem>, UpstreamError> {
        let from = from.format(DATE_FORMAT).to_string();
        let to = to.format(DATE_FORMAT).to_string();

        let response = self
            .get(
                "/company-news",
                &[("symbol", symbol), ("from", from.as_str()), ("to", to.as_str())],
            )
            .await?;

        let value: serde_json::Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::Decode(e.to_string()))?;

        // 未知代號時 Finnhub 可能回傳 null 或 {}，視同沒有新聞
        match value {
            serde_json::Value::Array(items) => Ok(items.into_iter().map(NewsItem).collect()),
            serde_json::Value::Null => Ok(Vec::new()),
            serde_json::Value::Object(ref map) if map.is_empty() => Ok(Vec::new()),
            other => Err(UpstreamError::Decode(format!(
                "expected a list of news items, got {}",
                other
            ))),
        }
    }
}
