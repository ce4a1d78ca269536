use stockdesk_core::StockApiClient;

use crate::cli::SearchArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &SearchArgs, client: &StockApiClient) -> Result<CommandResult, CliError> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::Command(String::from("query must not be empty")));
    }

    let results = client.search_stocks(query).await?;
    Ok(CommandResult::json(results))
}
