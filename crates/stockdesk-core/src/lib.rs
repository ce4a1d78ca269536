//! # Stockdesk Core
//!
//! Presentation-side primitives for the stockdesk portfolio tracker.
//!
//! ## Overview
//!
//! This crate provides the utility layer the portfolio pages are built on:
//!
//! - **Formatting** of currency, signed percentages, and grouped numbers
//! - **Rate limiting** of callbacks via debounce and throttle wrappers
//! - **Validation** of a proposed stock position before it is submitted
//! - **Remote client** for the tracker's stock-data and search endpoints
//! - **Polling** of periodic refreshes
//! - **Chart payloads** for the candlestick and line figures
//! - **Page wiring** mapping host events to page actions
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`chart`] | Figure builders and the renderer boundary |
//! | [`client`] | Stock-data and search API client |
//! | [`config`] | Client configuration |
//! | [`domain`] | Validated domain types ([`Symbol`]) |
//! | [`error`] | Core error types |
//! | [`format`] | Display formatting |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`poller`] | Periodic refresh loop |
//! | [`rate_limit`] | Debounce and throttle wrappers |
//! | [`validation`] | Stock entry form validation |
//! | [`wiring`] | Host event to page action mapping |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stockdesk_core::{format_currency, format_percentage, ClientConfig, StockApiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StockApiClient::from_config(ClientConfig::default());
//!     let payload = client.fetch_stock_data("AAPL").await?;
//!
//!     if let Some(price) = payload["current_price"].as_f64() {
//!         println!("AAPL {}", format_currency(price)?);
//!     }
//!     if let Some(change) = payload["change_percent"].as_f64() {
//!         println!("change {}", format_percentage(change));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Validation never fails fast: every violated rule is collected into a
//! [`ValidationResult`]. Remote calls fail with a single [`TransportError`]
//! regardless of whether the network or the HTTP status was at fault:
//!
//! ```rust
//! use stockdesk_core::{TransportError, TransportErrorKind};
//!
//! fn describe(error: &TransportError) -> String {
//!     match error.kind() {
//!         TransportErrorKind::Status(code) => format!("server answered {code}"),
//!         TransportErrorKind::Network => String::from("network unreachable"),
//!         TransportErrorKind::Decode => String::from("malformed response"),
//!     }
//! }
//! ```

pub mod chart;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod http_client;
pub mod poller;
pub mod rate_limit;
pub mod validation;
pub mod wiring;

// Re-export commonly used types at crate root for convenience

// Chart payloads
pub use chart::{
    candlestick_figure, line_figure, Axis, CandlestickSeries, ChartRenderer, Figure,
    FigureConfig, Layout, LineSeries, LineStyle, Trace,
};

// Remote client
pub use client::StockApiClient;

// Configuration
pub use config::ClientConfig;

// Domain types
pub use domain::Symbol;

// Error types
pub use error::{
    ChartError, CoreError, FormatError, TransportError, TransportErrorKind, ValidationError,
};

// Formatting
pub use format::{format_currency, format_fixed, format_number, format_percentage};

// HTTP client types
pub use http_client::{
    FixtureHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};

// Polling
pub use poller::{PollerHandle, RefreshPoller, DEFAULT_REFRESH_INTERVAL};

// Rate limiting
pub use rate_limit::{debounce, throttle, throttle_with_clock, Debounced, Throttled};

// Validation
pub use validation::{
    parse_float, parse_number, validate_stock_form, validate_stock_form_with, StockEntry,
    StockEntryInput, ValidationMessages, ValidationResult,
};

// Page wiring
pub use wiring::{PageAction, PageEvent, PageWiring};
