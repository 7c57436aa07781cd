pub mod service;

pub use crate::domain::model::{CompanyProfile, SentimentResult};
pub use crate::domain::ports::{MarketDataClient, SentimentScorer};
