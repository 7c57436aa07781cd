mod handlers;
mod state;

pub use handlers::LIVENESS_MESSAGE;
pub use state::AppState;

use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::{MarketDataClient, SentimentScorer};

/// Build the application router
pub fn router<C, S>(state: Arc<AppState<C, S>>) -> Router
where
    C: MarketDataClient + 'static,
    S: SentimentScorer + 'static,
{
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/company-details", get(handlers::company_details::<C, S>))
        .route("/api/news-sentiment", get(handlers::news_sentiment::<C, S>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the router on an already-bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // 無法監聽訊號時就一直執行
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
