use serde_json::Value;
use stockdesk_core::{validate_stock_form_with, StockEntryInput, ValidationMessages};

use crate::cli::ValidateArgs;
use crate::error::CliError;

use super::CommandResult;

const INVALID_EXIT_CODE: u8 = 2;

pub fn run(args: &ValidateArgs, messages: &ValidationMessages) -> Result<CommandResult, CliError> {
    let input = StockEntryInput::from_form(&args.symbol, &args.quantity, &args.avg_price);
    let result = validate_stock_form_with(&input, messages);
    let is_valid = result.is_valid;

    let codes: Vec<Value> = result
        .issues
        .iter()
        .map(|issue| Value::from(issue.code()))
        .collect();

    let mut data = serde_json::to_value(&result)?;
    if let Value::Object(fields) = &mut data {
        fields.insert(String::from("codes"), Value::Array(codes));
        if is_valid {
            if let Ok(entry) = input.into_entry() {
                fields.insert(String::from("entry"), serde_json::to_value(entry)?);
            }
        }
    }

    let code = if is_valid { 0 } else { INVALID_EXIT_CODE };
    Ok(CommandResult::json(data).with_exit_code(code))
}
