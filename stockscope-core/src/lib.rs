//! StockScope Core — price-series analysis engine.
//!
//! This crate contains the computational heart of the stock dashboard:
//! - Domain types (raw rows, cleaned price series, the analysis result)
//! - Point-in-time technical indicators (SMA, EMA, RSI)
//! - BUY/SELL/HOLD signal classification
//! - Linear-trend forecast with a flat volatility band
//! - Self-fit MAE/RMSE accuracy metrics
//! - Data boundary (provider trait + Yahoo Finance chart API client)
//!
//! The pipeline is a linear call chain — fetch → clean → compute → result —
//! with no state shared across invocations. Chart rendering and HTTP routing
//! live with the callers, not here.

pub mod accuracy;
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod forecast;
pub mod indicators;
pub mod signal;
