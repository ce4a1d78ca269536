//! CLI argument definitions for stockdesk.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch stock data for one symbol |
//! | `search` | Search for instruments |
//! | `validate` | Check a position before adding it |
//! | `format` | Format a value the way the portfolio pages do |
//! | `watch` | Poll stock data on an interval |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--base-url` | `STOCKDESK_BASE_URL` or `http://127.0.0.1:5000` | Tracker service root |
//! | `--timeout-ms` | none | Request timeout in ms |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--hebrew` | `false` | Hebrew validation messages |
//!
//! # Examples
//!
//! ```bash
//! stockdesk quote aapl --pretty
//! stockdesk search "berkshire hathaway"
//! stockdesk validate --symbol msft --quantity 10 --avg-price 412.50
//! stockdesk format currency -- -1234.5
//! stockdesk watch NVDA --interval-secs 10 --ticks 3
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Stockdesk - portfolio tracker client
#[derive(Debug, Parser)]
#[command(
    name = "stockdesk",
    author,
    version,
    about = "Command-line client for the stockdesk portfolio tracker"
)]
pub struct Cli {
    /// Root URL of the tracker service.
    ///
    /// Falls back to STOCKDESK_BASE_URL, then to the local development server.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds. Requests wait indefinitely when unset.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Render validation messages in Hebrew.
    #[arg(long, global = true, default_value_t = false)]
    pub hebrew: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch stock data for a symbol.
    ///
    /// Prints the service payload with a `display` object holding the
    /// formatted price, change and volume.
    ///
    /// # Examples
    ///
    ///   stockdesk quote AAPL
    ///   stockdesk quote msft --pretty
    Quote(QuoteArgs),

    /// Search for instruments by symbol or company name.
    ///
    /// # Examples
    ///
    ///   stockdesk search apple
    Search(SearchArgs),

    /// Validate a position the way the add-position form does.
    ///
    /// Exits with code 2 when any rule is violated.
    ///
    /// # Examples
    ///
    ///   stockdesk validate --symbol aapl --quantity 10 --avg-price 150.25
    ///   stockdesk validate --symbol TOOLONG1 --quantity 0 --avg-price -5 --hebrew
    Validate(ValidateArgs),

    /// Format a number as currency, signed percentage, or grouped number.
    ///
    /// # Examples
    ///
    ///   stockdesk format currency 1234.5
    ///   stockdesk format percent -- -2
    Format(FormatArgs),

    /// Refresh stock data on an interval, one line per refresh.
    ///
    /// Runs until Ctrl-C unless `--ticks` is given.
    ///
    /// # Examples
    ///
    ///   stockdesk watch AAPL
    ///   stockdesk watch TSLA --interval-secs 5 --ticks 12
    Watch(WatchArgs),
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Ticker symbol (case-insensitive).
    pub symbol: String,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search query.
    pub query: String,
}

/// Arguments for the `validate` command.
///
/// Amounts are taken as raw text so they are read the same way form input is.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, default_value = "")]
    pub symbol: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub quantity: String,

    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub avg_price: String,
}

/// Arguments for the `format` command.
#[derive(Debug, Args)]
pub struct FormatArgs {
    #[arg(value_enum)]
    pub kind: FormatKind,

    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Display format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    /// US dollars with two decimals, e.g. `$1,234.50`.
    Currency,
    /// Signed two-decimal percentage, e.g. `+3.14%`.
    Percent,
    /// Grouped number with up to three decimals, e.g. `1,234.568`.
    Number,
}

/// Arguments for the `watch` command.
#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Ticker symbol (case-insensitive).
    pub symbol: String,

    /// Seconds between refreshes.
    #[arg(long, default_value_t = 30)]
    pub interval_secs: u64,

    /// Stop after this many refreshes.
    #[arg(long)]
    pub ticks: Option<u64>,
}
