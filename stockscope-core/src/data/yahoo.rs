//! Yahoo Finance quote provider.
//!
//! Fetches daily closes from Yahoo's v8 chart API. Handles request
//! timeouts, response parsing, and a single retry on transport errors —
//! anything beyond one retry is the caller's policy, not this client's.
//!
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes, which surface as `ProviderError::ResponseFormat`.

use super::provider::{ProviderError, QuoteProvider, QuoteResponse, RawPricePoint};
use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

/// Public chart endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    #[serde(rename = "longName")]
    long_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

/// Yahoo Finance data provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooProvider {
    /// Build a provider against `base_url` (the configured chart endpoint).
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the chart API URL for a ticker and inclusive date range.
    fn chart_url(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> String {
        let period1 = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let period2 = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "{}/{ticker}?period1={period1}&period2={period2}&interval=1d",
            self.base_url
        )
    }

    /// Parse the chart API response into raw rows for the cleaner.
    fn parse_response(ticker: &str, resp: ChartResponse) -> Result<QuoteResponse, ProviderError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                ProviderError::Upstream(format!("{}: {}", err.code, err.description))
            } else {
                ProviderError::ResponseFormat("empty result with no error".into())
            }
        })?;

        let data = result.into_iter().next().ok_or_else(|| ProviderError::NoData {
            ticker: ticker.to_string(),
        })?;

        let name = data
            .meta
            .and_then(|m| m.long_name)
            .unwrap_or_else(|| ticker.to_string());

        let timestamps = data
            .timestamp
            .ok_or_else(|| ProviderError::ResponseFormat("no timestamps".into()))?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormat("no quote data".into()))?;

        let mut rows = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    ProviderError::ResponseFormat(format!("invalid timestamp: {ts}"))
                })?;

            rows.push(RawPricePoint {
                date,
                close: quote.close.get(i).copied().flatten(),
                volume: quote.volume.get(i).copied().flatten(),
            });
        }

        if rows.is_empty() {
            return Err(ProviderError::NoData {
                ticker: ticker.to_string(),
            });
        }

        Ok(QuoteResponse {
            ticker: ticker.to_string(),
            name,
            rows,
        })
    }
}

impl QuoteProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<QuoteResponse, ProviderError> {
        let url = self.chart_url(ticker, start, end);
        let mut last_error = None;

        // One retry on transport errors; HTTP and parse errors are final.
        for attempt in 0..2 {
            if attempt > 0 {
                std::thread::sleep(Duration::from_millis(500));
            }

            match self.client.get(&url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if !status.is_success() {
                        return Err(ProviderError::Status {
                            status: status.as_u16(),
                        });
                    }

                    let chart: ChartResponse = resp.json().map_err(|e| {
                        ProviderError::ResponseFormat(format!(
                            "failed to parse response for {ticker}: {e}"
                        ))
                    })?;

                    return Self::parse_response(ticker, chart);
                }
                Err(e) if e.is_connect() || e.is_timeout() => {
                    last_error = Some(ProviderError::Network(e.to_string()));
                }
                Err(e) => return Err(ProviderError::Network(e.to_string())),
            }
        }

        Err(last_error.unwrap_or_else(|| ProviderError::Network("request failed".into())))
    }
}
