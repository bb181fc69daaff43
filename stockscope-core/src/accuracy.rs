//! Self-fit MAE/RMSE of the trailing closes against their own average.
//!
//! Not an out-of-sample backtest: the reference curve is the 20-sample SMA
//! of the same window being measured, so forecast values are never compared
//! to realized prices. The dashboard charts exactly this self-referential
//! shape; reproduce it rather than substituting a real backtest.

use crate::domain::AccuracySet;
use crate::indicators::sma;

/// Window shared by the residuals and their SMA reference.
pub const ACCURACY_WINDOW: usize = 20;

/// MAE and RMSE of the last [`ACCURACY_WINDOW`] closes against their SMA.
///
/// Fewer than 2 closes yields zeros (degenerate, not an error) so the
/// result schema stays populated.
pub fn estimate(closes: &[f64]) -> AccuracySet {
    if closes.len() < 2 {
        return AccuracySet { mae: 0.0, rmse: 0.0 };
    }

    let reference = sma(closes, ACCURACY_WINDOW);
    let window = &closes[closes.len().saturating_sub(ACCURACY_WINDOW)..];
    let count = window.len() as f64;

    let mae = window.iter().map(|p| (p - reference).abs()).sum::<f64>() / count;
    let mse = window.iter().map(|p| (p - reference).powi(2)).sum::<f64>() / count;

    AccuracySet {
        mae,
        rmse: mse.sqrt(),
    }
}
