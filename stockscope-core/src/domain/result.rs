//! The result structure handed to the presentation collaborator.
//!
//! Constructed once per request, serialized, and discarded — there is no
//! further lifecycle. Field names on the wire follow the dashboard's JSON
//! contract (camelCase).

use super::series::PricePoint;
use crate::signal::Signal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Point-in-time indicator snapshot computed from the tail of the series.
///
/// Values on short series follow the documented fallbacks (flat SMA/EMA,
/// neutral RSI) rather than being absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma20: f64,
    pub sma50: f64,
    pub ema12: f64,
    pub rsi14: f64,
}

/// One forecast day. `lower <= predicted <= upper` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub days_ahead: u32,
    pub date: NaiveDate,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Self-fit dispersion of the trailing closes against their own average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracySet {
    pub mae: f64,
    pub rmse: f64,
}

/// Horizon-length forecast plus its accuracy metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub predictions: Vec<ForecastPoint>,
    pub accuracy: AccuracySet,
}

/// Everything the dashboard needs for one ticker, computed in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ticker: String,
    pub name: String,
    pub current_price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub high: f64,
    pub low: f64,
    pub volume: u64,
    /// Trailing slice of the cleaned series, trimmed to bound payload size.
    pub historical: Vec<PricePoint>,
    pub indicators: IndicatorSet,
    pub signal: Signal,
    pub forecast: ForecastResult,
}
