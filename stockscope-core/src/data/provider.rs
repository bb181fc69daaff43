//! Quote provider trait and structured error types.
//!
//! The QuoteProvider trait abstracts over the market-data source so the
//! pipeline can run against stubs in tests. Retry policy, if any, lives
//! behind this boundary — the pipeline itself never retries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One row of the upstream response, before cleaning.
///
/// `close` is None where the provider reports a gap as null; the cleaner
/// drops such rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPricePoint {
    pub date: NaiveDate,
    pub close: Option<f64>,
    pub volume: Option<u64>,
}

/// Successful fetch for a single ticker.
#[derive(Debug, Clone)]
pub struct QuoteResponse {
    pub ticker: String,
    /// Display name reported by the provider, or the ticker when absent.
    pub name: String,
    pub rows: Vec<RawPricePoint>,
}

/// Structured errors from the data boundary.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network unreachable: {0}")]
    Network(String),

    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("provider error: {0}")]
    Upstream(String),

    #[error("response format changed: {0}")]
    ResponseFormat(String),

    #[error("no data available for '{ticker}'")]
    NoData { ticker: String },
}

/// Trait for market-data providers.
pub trait QuoteProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily closes for a ticker over an inclusive date range.
    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<QuoteResponse, ProviderError>;
}
