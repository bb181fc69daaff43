//! BUY/SELL/HOLD classification from RSI and the price-vs-SMA relationship.

use serde::{Deserialize, Serialize};

/// Discrete trading signal. Always recomputed from the current indicator
/// snapshot, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

/// Classify the latest close against its 20-day average and 14-day RSI.
///
/// Oversold (RSI below 30) with price under the average is a Buy;
/// overbought (RSI above 70) with price over it is a Sell. Thresholds are
/// strict inequalities — RSI exactly 30 or 70 stays Hold.
pub fn classify(latest_price: f64, sma20: f64, rsi14: f64) -> Signal {
    if rsi14 < 30.0 && latest_price < sma20 {
        Signal::Buy
    } else if rsi14 > 70.0 && latest_price > sma20 {
        Signal::Sell
    } else {
        Signal::Hold
    }
}
