//! Process-start configuration.
//!
//! Resolved once from the environment and injected where needed. The
//! computation functions never read it — only the glue that constructs
//! the provider does.

use crate::data::yahoo::DEFAULT_BASE_URL;
use std::env;

/// Environment variable naming the chart API endpoint.
pub const API_BASE_URL_VAR: &str = "STOCKSCOPE_API_BASE_URL";

/// Environment variable toggling the experimental feature set.
pub const FEATURE_FLAG_VAR: &str = "STOCKSCOPE_FEATURE_FLAG";

/// Recognized configuration, with defaults for anything unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub feature_flag: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            feature_flag: false,
        }
    }
}

impl Config {
    /// Read the recognized variables once at process start.
    pub fn from_env() -> Self {
        Self::from_lookup(env::var(API_BASE_URL_VAR).ok(), env::var(FEATURE_FLAG_VAR).ok())
    }

    /// Unset or blank values fall back to defaults; the flag is only set
    /// by the literal string "true".
    fn from_lookup(api_base_url: Option<String>, feature_flag: Option<String>) -> Self {
        let api_base_url = api_base_url
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let feature_flag = feature_flag.as_deref() == Some("true");
        Self {
            api_base_url,
            feature_flag,
        }
    }
}
