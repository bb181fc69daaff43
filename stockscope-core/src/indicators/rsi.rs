//! Relative Strength Index (RSI).
//!
//! Computed from the last `period` deltas only — a windowed average, not
//! Wilder smoothing over the whole history. avg_loss == 0 maps to 100,
//! and a series shorter than `period + 1` returns the neutral 50. The
//! windowed form is the upstream definition; keep it.

/// Latest RSI over the trailing `period` price deltas, always in [0, 100].
pub fn rsi(prices: &[f64], period: usize) -> f64 {
    assert!(period >= 1, "RSI period must be >= 1");
    if prices.len() < period + 1 {
        return 50.0;
    }

    let mut gains = 0.0;
    let mut losses = 0.0;
    for i in (prices.len() - period)..prices.len() {
        let change = prices[i] - prices[i - 1];
        if change > 0.0 {
            gains += change;
        } else {
            losses -= change;
        }
    }

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        return 100.0;
    }
    100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
}
