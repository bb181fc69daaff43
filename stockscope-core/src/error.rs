//! Error taxonomy for a single analysis request.
//!
//! Every variant is terminal: no partial result is ever returned.
//! Short-series fallbacks (flat SMA/EMA, neutral RSI, zeroed accuracy)
//! are normal-path behavior and never surface here.

use crate::data::provider::ProviderError;
use thiserror::Error;

/// Structured failure for one request, displayable in CLI and server contexts.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Caller supplied no instrument identifier; fails before any fetch.
    #[error("ticker symbol is required")]
    MissingTicker,

    /// The data provider failed. The pipeline does not retry — any retry
    /// policy belongs to the provider behind the trait.
    #[error("upstream fetch failed: {0}")]
    Upstream(#[from] ProviderError),

    /// Cleaning removed every row of the fetched range.
    #[error("no usable prices in the requested range")]
    InsufficientData,

    /// Prices exist but there are too few to estimate a trend.
    #[error("insufficient history for a trend forecast: {got} points, need at least 31")]
    InsufficientHistory { got: usize },
}
