//! The request pipeline: fetch → clean → compute → result.
//!
//! A thin synchronous call chain, one invocation per request. No state
//! survives between calls, no stage mutates the cleaned series, and the
//! only suspension point is the upstream fetch — computation starts after
//! it completes and either produces a full result or a terminal error.

use crate::accuracy;
use crate::data::provider::{QuoteProvider, QuoteResponse};
use crate::data::timeframe::Timeframe;
use crate::domain::{AnalysisResult, ForecastResult, IndicatorSet, PriceSeries};
use crate::error::AnalysisError;
use crate::forecast;
use crate::indicators::{ema, rsi, sma};
use crate::signal;
use chrono::NaiveDate;

/// Points kept in the serialized historical payload.
pub const HISTORY_LIMIT: usize = 100;

/// Trailing window for the high/low summary.
const RANGE_WINDOW: usize = 20;

/// Validate the ticker, fetch its series, and run [`analyze`].
///
/// `today` is the request date: it anchors the lookback window and the
/// forecast's calendar labels. Injecting it (rather than reading the
/// clock here) keeps the pipeline deterministic for identical inputs.
pub fn analyze_ticker(
    provider: &dyn QuoteProvider,
    ticker: &str,
    timeframe: Timeframe,
    horizon: u32,
    today: NaiveDate,
) -> Result<AnalysisResult, AnalysisError> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(AnalysisError::MissingTicker);
    }

    let start = timeframe.start_from(today);
    let quote = provider.fetch(ticker, start, today)?;
    analyze(&quote, horizon, today)
}

/// Run the computation pipeline over an already-fetched quote response.
pub fn analyze(
    quote: &QuoteResponse,
    horizon: u32,
    today: NaiveDate,
) -> Result<AnalysisResult, AnalysisError> {
    let series = PriceSeries::clean(&quote.rows);
    if series.is_empty() {
        return Err(AnalysisError::InsufficientData);
    }

    let closes = series.closes();
    let latest = closes[closes.len() - 1];

    let (change, change_percent) = if closes.len() >= 2 {
        let previous = closes[closes.len() - 2];
        let change = latest - previous;
        (change, change / previous * 100.0)
    } else {
        (0.0, 0.0)
    };

    let range = &closes[closes.len().saturating_sub(RANGE_WINDOW)..];
    let high = range.iter().copied().fold(f64::MIN, f64::max);
    let low = range.iter().copied().fold(f64::MAX, f64::min);

    // Latest reported volume from the raw response; a trailing null row
    // does not zero the field.
    let volume = quote.rows.iter().rev().find_map(|r| r.volume).unwrap_or(0);

    let indicators = IndicatorSet {
        sma20: sma(&closes, 20),
        sma50: sma(&closes, 50),
        ema12: ema(&closes, 12),
        rsi14: rsi(&closes, 14),
    };
    let signal = signal::classify(latest, indicators.sma20, indicators.rsi14);

    let predictions = forecast::generate(&closes, horizon, today)?;
    let accuracy = accuracy::estimate(&closes);

    Ok(AnalysisResult {
        ticker: quote.ticker.clone(),
        name: quote.name.clone(),
        current_price: latest,
        change,
        change_percent,
        high,
        low,
        volume,
        historical: series.tail(HISTORY_LIMIT).to_vec(),
        indicators,
        signal,
        forecast: ForecastResult {
            predictions,
            accuracy,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::RawPricePoint;
    use crate::indicators::assert_approx;

    fn quote_from_closes(closes: &[f64]) -> QuoteResponse {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        QuoteResponse {
            ticker: "TEST".into(),
            name: "Test Corp".into(),
            rows: closes
                .iter()
                .enumerate()
                .map(|(i, &close)| RawPricePoint {
                    date: base + chrono::Duration::days(i as i64),
                    close: Some(close),
                    volume: Some(1_000 + i as u64),
                })
                .collect(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
    }

    #[test]
    fn quote_summary_fields() {
        let closes: Vec<f64> = (100..135).map(f64::from).collect();
        let result = analyze(&quote_from_closes(&closes), 30, today()).unwrap();

        assert_eq!(result.ticker, "TEST");
        assert_eq!(result.name, "Test Corp");
        assert_approx(result.current_price, 134.0, 1e-12);
        assert_approx(result.change, 1.0, 1e-12);
        assert_approx(result.change_percent, 1.0 / 133.0 * 100.0, 1e-12);
        // high/low over the last 20 closes (115..=134)
        assert_approx(result.high, 134.0, 1e-12);
        assert_approx(result.low, 115.0, 1e-12);
        assert_eq!(result.volume, 1_034);
    }

    #[test]
    fn empty_after_cleaning_is_insufficient_data() {
        let mut quote = quote_from_closes(&[]);
        quote.rows = vec![RawPricePoint {
            date: today(),
            close: None,
            volume: None,
        }];
        let err = analyze(&quote, 30, today()).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientData));
    }

    #[test]
    fn short_history_fails_distinctly() {
        let closes: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let err = analyze(&quote_from_closes(&closes), 30, today()).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::InsufficientHistory { got: 20 }
        ));
    }

    #[test]
    fn single_point_is_still_short_history() {
        let quote = quote_from_closes(&[100.0]);
        let err = analyze(&quote, 30, today()).unwrap_err();
        assert!(matches!(err, AnalysisError::InsufficientHistory { got: 1 }));
    }

    #[test]
    fn historical_is_trimmed_to_limit() {
        let closes: Vec<f64> = (0..250).map(|i| 100.0 + (i % 7) as f64).collect();
        let result = analyze(&quote_from_closes(&closes), 30, today()).unwrap();
        assert_eq!(result.historical.len(), HISTORY_LIMIT);
        let last = result.historical.last().unwrap();
        assert_approx(last.price, 100.0 + (249 % 7) as f64, 1e-12);
    }

    #[test]
    fn trailing_null_rows_do_not_hide_volume() {
        let closes: Vec<f64> = (100..135).map(f64::from).collect();
        let mut quote = quote_from_closes(&closes);
        quote.rows.push(RawPricePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            close: None,
            volume: None,
        });
        let result = analyze(&quote, 30, today()).unwrap();
        assert_eq!(result.volume, 1_034);
        assert_approx(result.current_price, 134.0, 1e-12);
    }
}
