//! Linear-trend forecast with a flat volatility band.
//!
//! Daily drift is the most recent 30-sample delta divided by 30; the band
//! is a constant 5% of the latest close on every horizon day. The band does
//! not widen with horizon distance and ignores observed variance — chart
//! consumers rely on exactly this shape, so keep it flat.

use crate::domain::ForecastPoint;
use crate::error::AnalysisError;
use chrono::{Duration, NaiveDate};

/// Days of drift history behind the trend estimate.
pub const TREND_WINDOW: usize = 30;

/// Minimum cleaned points before a trend can be estimated.
pub const MIN_TREND_SAMPLES: usize = TREND_WINDOW + 1;

/// Default forecast horizon in days.
pub const DEFAULT_HORIZON: u32 = 30;

/// Band half-width as a fraction of the latest close.
const VOLATILITY_FRACTION: f64 = 0.05;

/// Extrapolate `horizon` daily points from the end of `closes`.
///
/// `today` labels the generation date; predicted dates are plain calendar
/// offsets from it, with no weekend or holiday skipping. Fails with
/// [`AnalysisError::InsufficientHistory`] below [`MIN_TREND_SAMPLES`]
/// points — distinct from an empty series, which never reaches this stage.
pub fn generate(
    closes: &[f64],
    horizon: u32,
    today: NaiveDate,
) -> Result<Vec<ForecastPoint>, AnalysisError> {
    let n = closes.len();
    if n < MIN_TREND_SAMPLES {
        return Err(AnalysisError::InsufficientHistory { got: n });
    }

    let last = closes[n - 1];
    let trend = (last - closes[n - MIN_TREND_SAMPLES]) / TREND_WINDOW as f64;
    let volatility = last * VOLATILITY_FRACTION;

    let mut predictions = Vec::with_capacity(horizon as usize);
    for day in 1..=horizon {
        let predicted = last + trend * f64::from(day);
        predictions.push(ForecastPoint {
            days_ahead: day,
            date: today + Duration::days(i64::from(day)),
            predicted,
            lower: predicted - volatility,
            upper: predicted + volatility,
        });
    }
    Ok(predictions)
}
