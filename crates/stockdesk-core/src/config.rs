//! Client configuration.
//!
//! | Setting | Environment | Default |
//! |---------|-------------|---------|
//! | `base_url` | `STOCKDESK_BASE_URL` | `http://127.0.0.1:5000` |
//! | `timeout_ms` | `STOCKDESK_TIMEOUT_MS` | none (requests wait for the transport) |
//! | `user_agent` | n/a | `stockdesk/<version>` |

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const BASE_URL_ENV: &str = "STOCKDESK_BASE_URL";
const TIMEOUT_ENV: &str = "STOCKDESK_TIMEOUT_MS";

/// Where and how the API client talks to the tracker service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: Option<u64>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
            user_agent: String::from(concat!("stockdesk/", env!("CARGO_PKG_VERSION"))),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `STOCKDESK_*` variables. An unparseable
    /// timeout is ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(timeout_ms) = lookup(TIMEOUT_ENV).and_then(|value| value.trim().parse().ok()) {
            config = config.with_timeout_ms(Some(timeout_ms));
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Base URL without trailing slashes, ready for path joining.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_service_without_timeout() {
        let config = ClientConfig::default();
        assert_eq!(config.base(), "http://127.0.0.1:5000");
        assert_eq!(config.timeout_ms, None);
        assert!(config.user_agent.starts_with("stockdesk/"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = ClientConfig::from_lookup(|key| match key {
            "STOCKDESK_BASE_URL" => Some(String::from("https://tracker.example/")),
            "STOCKDESK_TIMEOUT_MS" => Some(String::from(" 2500 ")),
            _ => None,
        });

        assert_eq!(config.base(), "https://tracker.example");
        assert_eq!(config.timeout_ms, Some(2500));
    }

    #[test]
    fn malformed_environment_values_are_ignored() {
        let config = ClientConfig::from_lookup(|key| match key {
            "STOCKDESK_BASE_URL" => Some(String::from("  ")),
            "STOCKDESK_TIMEOUT_MS" => Some(String::from("soon")),
            _ => None,
        });

        assert_eq!(config, ClientConfig::default());
    }
}
