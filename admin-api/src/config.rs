use std::time::Duration;

/// Unified client-side timeout for every outbound call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Runtime configuration for the API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Backend base URL, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout applied to every call.
    pub timeout: Duration,
    /// When set, read fetchers substitute locally generated data on
    /// transport failure instead of surfacing the error.
    pub offline_fallback: bool,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            offline_fallback: false,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_offline_fallback(mut self, enabled: bool) -> Self {
        self.offline_fallback = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig::new("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = ApiConfig::new("http://localhost:8080")
            .with_timeout(Duration::from_secs(5))
            .with_offline_fallback(true);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.offline_fallback);
    }
}
