use stockdesk_core::{format_currency, format_number, format_percentage};

use crate::cli::{FormatArgs, FormatKind};
use crate::error::CliError;

use super::CommandResult;

pub fn run(args: &FormatArgs) -> Result<CommandResult, CliError> {
    let text = match args.kind {
        FormatKind::Currency => format_currency(args.value)?,
        FormatKind::Percent => format_percentage(args.value),
        FormatKind::Number => format_number(args.value),
    };
    Ok(CommandResult::text(text))
}
