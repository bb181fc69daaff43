//! Domain types shared by every pipeline stage.

pub mod result;
pub mod series;

pub use result::{AccuracySet, AnalysisResult, ForecastPoint, ForecastResult, IndicatorSet};
pub use series::{PricePoint, PriceSeries};
