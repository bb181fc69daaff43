//! Simple Moving Average (SMA).
//!
//! Arithmetic mean of the last `period` closes. A series shorter than the
//! window falls back to the most recent close, so callers see a "flat"
//! average instead of an error.

/// Latest SMA over the trailing `period` closes.
///
/// Returns the most recent close when fewer than `period` closes exist,
/// and NaN for an empty slice.
pub fn sma(prices: &[f64], period: usize) -> f64 {
    assert!(period >= 1, "SMA period must be >= 1");
    let Some(&last) = prices.last() else {
        return f64::NAN;
    };
    if prices.len() < period {
        return last;
    }
    let window = &prices[prices.len() - period..];
    window.iter().sum::<f64>() / period as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn sma_is_mean_of_last_period() {
        let prices = [10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0];
        // mean(12..=16) = 14.0
        assert_approx(sma(&prices, 5), 14.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_exact_window_uses_all_prices() {
        let prices = [10.0, 11.0, 12.0];
        assert_approx(sma(&prices, 3), 11.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_short_series_falls_back_to_last() {
        let prices = [100.0, 105.0];
        assert_approx(sma(&prices, 20), 105.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_period_1_is_last() {
        let prices = [100.0, 200.0, 300.0];
        assert_approx(sma(&prices, 1), 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn sma_empty_is_nan() {
        assert!(sma(&[], 20).is_nan());
    }
}
