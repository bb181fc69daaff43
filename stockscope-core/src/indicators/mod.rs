//! Point-in-time technical indicators.
//!
//! Unlike rolling implementations that emit one value per bar, these are
//! snapshot functions: the whole closing-price projection goes in, the
//! latest indicator value comes out. Short series never error — each
//! function documents its degenerate fallback so the result schema stays
//! populated.

pub mod ema;
pub mod rsi;
pub mod sma;

pub use ema::ema;
pub use rsi::rsi;
pub use sma::sma;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
