//! Client for the tracker's JSON endpoints.
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `GET /api/stock_data/{symbol}` | [`StockApiClient::fetch_stock_data`] |
//! | `GET /api/search_stocks?q={query}` | [`StockApiClient::search_stocks`] |
//!
//! Payload schemas belong to the service; bodies are returned as parsed
//! [`serde_json::Value`]s without further checks. Calls are one-shot: no
//! retries, no caching, and concurrent identical calls each hit the network.

use std::sync::Arc;

use serde_json::Value;

use crate::{ClientConfig, HttpClient, HttpRequest, ReqwestHttpClient, TransportError};

/// Stock-data and search API client.
#[derive(Clone)]
pub struct StockApiClient {
    config: ClientConfig,
    http: Arc<dyn HttpClient>,
}

impl StockApiClient {
    pub fn new(config: ClientConfig, http: Arc<dyn HttpClient>) -> Self {
        Self { config, http }
    }

    /// Client over a reqwest transport configured from `config`.
    pub fn from_config(config: ClientConfig) -> Self {
        let http = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::new(config, http)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches the stock-data payload for `symbol`.
    pub async fn fetch_stock_data(&self, symbol: &str) -> Result<Value, TransportError> {
        let url = format!(
            "{}/api/stock_data/{}",
            self.config.base(),
            urlencoding::encode(symbol)
        );

        self.get_json(url, symbol).await.inspect_err(|error| {
            tracing::error!(symbol, error = %error, "error fetching stock data");
        })
    }

    /// Runs a free-text instrument search.
    pub async fn search_stocks(&self, query: &str) -> Result<Value, TransportError> {
        let url = format!(
            "{}/api/search_stocks?q={}",
            self.config.base(),
            urlencoding::encode(query)
        );

        self.get_json(url, query).await.inspect_err(|error| {
            tracing::error!(query, error = %error, "error searching stocks");
        })
    }

    async fn get_json(&self, url: String, target: &str) -> Result<Value, TransportError> {
        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);
        tracing::debug!(url = %request.url, "issuing request");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| TransportError::network(target, error.message()))?;

        if !response.is_success() {
            return Err(TransportError::status(target, response.status));
        }

        serde_json::from_str(&response.body).map_err(|error| {
            TransportError::decode(target, format!("response body is not valid JSON: {error}"))
        })
    }
}
