use anyhow::Context;
use clap::Parser;
use stock_sentiment_api::api::{self, AppState};
use stock_sentiment_api::utils::{logger, validation::Validate};
use stock_sentiment_api::{CliConfig, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本機開發時從 .env 讀取金鑰；部署環境沒有這個檔案
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let cli = CliConfig::parse();
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting stock-sentiment-api");
    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }

    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let state = AppState::from_settings(&settings).context("failed to build upstream client")?;
    let app = api::router(state);

    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);
    api::serve(listener, app).await?;

    tracing::info!("✅ Server stopped");
    Ok(())
}
