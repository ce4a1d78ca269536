use std::time::Duration;

use serde_json::Value;
use stockdesk_core::{throttle, RefreshPoller, StockApiClient, Symbol};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::sync::mpsc;

use crate::cli::WatchArgs;
use crate::error::CliError;

use super::quote::display_fields;
use super::CommandResult;

/// Repeated failures print at most one notice per window.
const FAILURE_NOTICE_WINDOW: Duration = Duration::from_secs(60);

type Tick = Result<String, String>;

pub async fn run(args: &WatchArgs, client: StockApiClient) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;
    if args.ticks == Some(0) {
        return Ok(CommandResult::silent());
    }

    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<Tick>();
    let poller = {
        let symbol = symbol.clone();
        RefreshPoller::spawn(Duration::from_secs(args.interval_secs), move || {
            let client = client.clone();
            let symbol = symbol.clone();
            let tick_tx = tick_tx.clone();
            async move {
                let tick = refresh_line(&client, &symbol).await;
                let outcome = tick.as_ref().map(|_| ()).map_err(|message| message.clone());
                let _ = tick_tx.send(tick);
                outcome
            }
        })
    };

    let failure_notice = throttle(
        |message: String| eprintln!("refresh failed: {message}"),
        FAILURE_NOTICE_WINDOW,
    );
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut ticks = 0_u64;
    loop {
        let tick = tokio::select! {
            tick = tick_rx.recv() => tick,
            _ = &mut shutdown => None,
        };
        let Some(tick) = tick else {
            break;
        };

        ticks += 1;
        match tick {
            Ok(line) => println!("{line}"),
            Err(message) => {
                failure_notice.call(message);
            }
        }
        if args.ticks.is_some_and(|limit| ticks >= limit) {
            break;
        }
    }

    let refreshes = poller.stop().await;
    tracing::info!(symbol = %symbol, refreshes, "watch finished");

    Ok(CommandResult::silent())
}

async fn refresh_line(client: &StockApiClient, symbol: &Symbol) -> Tick {
    let payload = client
        .fetch_stock_data(symbol.as_str())
        .await
        .map_err(|error| error.to_string())?;
    quote_line(symbol, &payload, OffsetDateTime::now_utc())
}

fn quote_line(symbol: &Symbol, payload: &Value, at: OffsetDateTime) -> Tick {
    let display = display_fields(payload).map_err(|error| error.to_string())?;
    let timestamp = at.format(&Rfc3339).map_err(|error| error.to_string())?;

    let mut line = format!("{timestamp} {symbol}");
    for field in ["current_price", "change", "change_percent"] {
        if let Some(Value::String(text)) = display.get(field) {
            line.push(' ');
            line.push_str(text);
        }
    }
    Ok(line)
}
