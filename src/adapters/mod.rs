// Adapters layer: concrete implementations of the domain ports.

pub mod finnhub;
pub mod lexicon;

pub use finnhub::FinnhubClient;
pub use lexicon::LexiconScorer;
