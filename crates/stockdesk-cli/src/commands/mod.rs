mod format;
mod quote;
mod search;
mod validate;
mod watch;

use serde_json::Value;
use stockdesk_core::{ClientConfig, StockApiClient, ValidationMessages};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command prints on stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Json(Value),
    Text(String),
    /// The command already wrote everything it had to say.
    Silent,
}

pub struct CommandResult {
    pub output: CommandOutput,
    pub exit_code: u8,
}

impl CommandResult {
    pub fn json(data: Value) -> Self {
        Self {
            output: CommandOutput::Json(data),
            exit_code: 0,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            output: CommandOutput::Text(text.into()),
            exit_code: 0,
        }
    }

    pub fn silent() -> Self {
        Self {
            output: CommandOutput::Silent,
            exit_code: 0,
        }
    }

    pub fn with_exit_code(mut self, exit_code: u8) -> Self {
        self.exit_code = exit_code;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let messages = if cli.hebrew {
        ValidationMessages::hebrew()
    } else {
        ValidationMessages::default()
    };

    match &cli.command {
        Command::Quote(args) => quote::run(args, &client(cli)).await,
        Command::Search(args) => search::run(args, &client(cli)).await,
        Command::Validate(args) => validate::run(args, &messages),
        Command::Format(args) => format::run(args),
        Command::Watch(args) => watch::run(args, client(cli)).await,
    }
}

fn client(cli: &Cli) -> StockApiClient {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if cli.timeout_ms.is_some() {
        config = config.with_timeout_ms(cli.timeout_ms);
    }
    tracing::debug!(
        base_url = %config.base_url,
        timeout_ms = ?config.timeout_ms,
        "client configured"
    );

    StockApiClient::from_config(config)
}
