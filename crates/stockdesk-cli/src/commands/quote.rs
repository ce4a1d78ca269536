use serde_json::{Map, Value};
use stockdesk_core::{
    format_currency, format_number, format_percentage, FormatError, StockApiClient, Symbol,
};

use crate::cli::QuoteArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &QuoteArgs, client: &StockApiClient) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let mut payload = client.fetch_stock_data(symbol.as_str()).await?;
    let display = display_fields(&payload)?;
    if let Value::Object(fields) = &mut payload {
        fields.insert(String::from("display"), Value::Object(display));
    }

    Ok(CommandResult::json(payload))
}

/// Formatted versions of the numeric quote fields present in `payload`.
/// Missing or non-numeric fields are left out.
pub(super) fn display_fields(payload: &Value) -> Result<Map<String, Value>, FormatError> {
    let number = |field: &str| payload.get(field).and_then(Value::as_f64);
    let mut display = Map::new();

    for field in ["current_price", "change"] {
        if let Some(value) = number(field) {
            display.insert(field.to_owned(), Value::String(format_currency(value)?));
        }
    }
    if let Some(value) = number("change_percent") {
        display.insert(
            String::from("change_percent"),
            Value::String(format_percentage(value)),
        );
    }
    if let Some(value) = number("volume") {
        display.insert(String::from("volume"), Value::String(format_number(value)));
    }

    Ok(display)
}
