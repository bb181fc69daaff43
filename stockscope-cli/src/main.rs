//! StockScope CLI — fetch a ticker and print its analysis as JSON.
//!
//! The binary stands in for the presentation layer: one `analyze` call per
//! request, fetch → clean → compute → serialize, result on stdout. Errors
//! go to stderr with a non-zero exit.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use stockscope_core::analysis::analyze_ticker;
use stockscope_core::config::Config;
use stockscope_core::data::{Timeframe, YahooProvider};
use stockscope_core::forecast::DEFAULT_HORIZON;

#[derive(Parser)]
#[command(
    name = "stockscope",
    about = "StockScope CLI — indicators, signal, and forecast for a ticker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a ticker's history and print the full analysis as JSON.
    Analyze {
        /// Ticker symbol (e.g., AAPL, RELIANCE.NS).
        ticker: String,

        /// Lookback window: 1Y, 5Y, or 10Y.
        #[arg(long, default_value = "1Y")]
        timeframe: String,

        /// Forecast horizon in days.
        #[arg(long, default_value_t = DEFAULT_HORIZON)]
        horizon: u32,

        /// Pretty-print the JSON output.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            ticker,
            timeframe,
            horizon,
            pretty,
        } => run_analyze(&ticker, &timeframe, horizon, pretty),
    }
}

fn run_analyze(ticker: &str, timeframe: &str, horizon: u32, pretty: bool) -> Result<()> {
    let timeframe: Timeframe = timeframe.parse().map_err(|e: String| anyhow!(e))?;

    let config = Config::from_env();
    let provider = YahooProvider::new(config.api_base_url);
    let today = chrono::Local::now().date_naive();

    let result = analyze_ticker(&provider, ticker, timeframe, horizon, today)
        .with_context(|| format!("analysis failed for '{ticker}'"))?;

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    Ok(())
}
