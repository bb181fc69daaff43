//! Price points and the cleaned series every pipeline stage reads.

use crate::data::provider::RawPricePoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily close after cleaning. No missing prices past this point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Chronologically ordered closes: strictly increasing dates, no missing
/// prices.
///
/// Built once per request by [`PriceSeries::clean`] and never mutated
/// afterwards — every downstream stage derives new values from it.
#[derive(Debug, Clone, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Drop rows with missing or non-finite closes, preserving relative order.
    ///
    /// The upstream response is already chronological; this does not sort.
    /// A row whose date does not advance past the last kept row is also
    /// dropped, which establishes the strictly-increasing invariant.
    pub fn clean(rows: &[RawPricePoint]) -> Self {
        let mut points: Vec<PricePoint> = Vec::with_capacity(rows.len());
        for row in rows {
            let Some(close) = row.close else { continue };
            if !close.is_finite() {
                continue;
            }
            if let Some(last) = points.last() {
                if row.date <= last.date {
                    continue;
                }
            }
            points.push(PricePoint {
                date: row.date,
                price: close,
            });
        }
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing-price projection consumed by the indicator, forecast, and
    /// accuracy stages.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.price).collect()
    }

    pub fn latest(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The trailing `n` points (whole series when shorter).
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}
