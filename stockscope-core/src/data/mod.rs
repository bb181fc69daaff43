//! Data boundary: provider trait, lookback timeframes, Yahoo Finance client.

pub mod provider;
pub mod timeframe;
pub mod yahoo;

pub use provider::{ProviderError, QuoteProvider, QuoteResponse, RawPricePoint};
pub use timeframe::Timeframe;
pub use yahoo::YahooProvider;
