use stockdesk_core::{CoreError, FormatError, TransportError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(CoreError::Validation(_)) => 2,
            Self::Core(CoreError::Format(_)) => 2,
            Self::Core(CoreError::Chart(_)) => 2,
            Self::Core(CoreError::Transport(_)) => 3,
            Self::Core(CoreError::Serialization(_)) => 4,
            Self::Command(_) => 2,
            Self::Io(_) => 10,
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(error: ValidationError) -> Self {
        Self::Core(error.into())
    }
}

impl From<TransportError> for CliError {
    fn from(error: TransportError) -> Self {
        Self::Core(error.into())
    }
}

impl From<FormatError> for CliError {
    fn from(error: FormatError) -> Self {
        Self::Core(error.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::Core(error.into())
    }
}
