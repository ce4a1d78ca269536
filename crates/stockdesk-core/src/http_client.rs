use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// GET request envelope used by the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// `None` leaves the request unbounded.
    pub timeout_ms: Option<u64>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::new(),
            timeout_ms: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.into().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

/// HTTP response envelope returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok_json(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Transport-level HTTP error: the request produced no response at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for HttpError {}

/// Async transport contract behind [`crate::StockApiClient`].
pub trait HttpClient: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>>;
}

/// Offline transport replaying canned responses keyed by URL.
///
/// Unknown URLs answer `404`. Every executed request is recorded.
#[derive(Debug, Default)]
pub struct FixtureHttpClient {
    routes: Mutex<BTreeMap<String, Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl FixtureHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, url: impl Into<String>, response: HttpResponse) -> Self {
        self.routes
            .lock()
            .expect("fixture routes lock should not be poisoned")
            .insert(url.into(), Ok(response));
        self
    }

    pub fn with_failure(self, url: impl Into<String>, error: HttpError) -> Self {
        self.routes
            .lock()
            .expect("fixture routes lock should not be poisoned")
            .insert(url.into(), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("fixture requests lock should not be poisoned")
            .clone()
    }
}

impl HttpClient for FixtureHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let outcome = self
            .routes
            .lock()
            .expect("fixture routes lock should not be poisoned")
            .get(&request.url)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, r#"{"error":"not found"}"#)));
        self.requests
            .lock()
            .expect("fixture requests lock should not be poisoned")
            .push(request);

        Box::pin(async move { outcome })
    }
}

/// Transport for the live tracker service.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Arc<reqwest::Client>,
}

impl ReqwestHttpClient {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self::with_client(client)
    }

    /// Uses `client` as is, so proxies or TLS roots set on it apply.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(concat!("stockdesk/", env!("CARGO_PKG_VERSION")))
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        Box::pin(async move {
            let mut builder = request
                .headers
                .iter()
                .fold(self.client.get(&request.url), |builder, (name, value)| {
                    builder.header(name, value)
                });
            if let Some(timeout_ms) = request.timeout_ms {
                builder = builder.timeout(Duration::from_millis(timeout_ms));
            }

            let response = builder.send().await.map_err(|error| send_failure(&error))?;
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|error| {
                HttpError::new(format!("reading body from {} failed: {error}", request.url))
            })?;

            Ok(HttpResponse::new(status, body))
        })
    }
}

/// Names the stage a send failed at; the reqwest error carries the detail.
fn send_failure(error: &reqwest::Error) -> HttpError {
    let stage = if error.is_timeout() {
        "timed out"
    } else if error.is_connect() {
        "could not connect"
    } else {
        "request failed"
    };
    HttpError::new(format!("{stage}: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_stored_lowercase() {
        let request = HttpRequest::get("http://example.test/api/stock_data/AAPL")
            .with_header("Accept", "application/json");

        assert_eq!(
            request.headers.get("accept").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(request.timeout_ms, None);
    }

    #[test]
    fn success_range_is_2xx_only() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(301, "").is_success());
        assert!(!HttpResponse::new(400, "").is_success());
    }

    #[tokio::test]
    async fn fixture_replays_routes_and_records_requests() {
        let fixture = FixtureHttpClient::new()
            .with_response("http://x.test/a", HttpResponse::ok_json("{}"))
            .with_failure("http://x.test/b", HttpError::new("connection refused"));

        let ok = fixture
            .execute(HttpRequest::get("http://x.test/a"))
            .await
            .expect("route a answers");
        assert_eq!(ok.status, 200);

        let failed = fixture
            .execute(HttpRequest::get("http://x.test/b"))
            .await
            .expect_err("route b fails");
        assert_eq!(failed.message(), "connection refused");

        let unknown = fixture
            .execute(HttpRequest::get("http://x.test/c"))
            .await
            .expect("unknown routes answer");
        assert_eq!(unknown.status, 404);

        assert_eq!(fixture.requests().len(), 3);
    }

    #[tokio::test]
    async fn live_client_reports_refused_connections() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback");
        let url = format!("http://{}/api/stock_data/AAPL", listener.local_addr().expect("addr"));
        drop(listener);

        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client builds");
        let error = ReqwestHttpClient::with_client(client)
            .execute(HttpRequest::get(url).with_timeout_ms(Some(2_000)))
            .await
            .expect_err("nothing listens on the port");
        assert!(
            error.message().starts_with("could not connect"),
            "unexpected message: {}",
            error.message()
        );
    }
}
