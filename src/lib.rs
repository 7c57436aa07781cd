pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FinnhubClient, LexiconScorer};
pub use config::{CliConfig, Settings};
pub use core::service::MarketService;
pub use utils::error::{ApiError, Result};
