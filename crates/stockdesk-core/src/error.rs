use std::fmt::{Display, Formatter};

use thiserror::Error;

/// Stock entry rule violations exposed by `stockdesk-core`.
///
/// The `Display` text is the default English message; pages that localise
/// render through [`crate::ValidationMessages`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol is required")]
    SymbolRequired,
    #[error("symbol must be 1-5 Latin letters")]
    SymbolFormat { value: String },

    #[error("quantity must be a positive number")]
    QuantityNotPositive,
    #[error("average price must be a positive number")]
    AvgPriceNotPositive,
}

impl ValidationError {
    /// Stable machine-readable code for the violated rule.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SymbolRequired => "symbol_required",
            Self::SymbolFormat { .. } => "symbol_format",
            Self::QuantityNotPositive => "quantity_not_positive",
            Self::AvgPriceNotPositive => "avg_price_not_positive",
        }
    }
}

/// Display formatting failures.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FormatError {
    #[error("cannot format non-finite amount {value} as currency")]
    NonFinite { value: f64 },
}

/// Chart payload shape errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("series column '{column}' has {actual} points, expected {expected}")]
    LengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Which layer of a remote call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The request never produced a response.
    Network,
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The response body was not valid JSON.
    Decode,
}

impl Display for TransportErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Status(code) => write!(f, "status {code}"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Normalized failure of a single remote call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind} error for '{target}': {message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    target: String,
    message: String,
}

impl TransportError {
    pub fn new(
        kind: TransportErrorKind,
        target: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            target: target.into(),
            message: message.into(),
        }
    }

    pub fn network(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Network, target, message)
    }

    pub fn status(target: impl Into<String>, status: u16) -> Self {
        Self::new(
            TransportErrorKind::Status(status),
            target,
            "network response was not ok",
        )
    }

    pub fn decode(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Decode, target, message)
    }

    pub const fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    /// The symbol or query the failed call was made for.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
