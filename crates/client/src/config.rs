use std::time::Duration;

use deportivos_core::reservation::LOOKUP_DEBOUNCE_MS;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend base URL without a trailing slash (default: `http://localhost:4000`).
    pub api_url: String,
    /// Per-request timeout (default: 10 seconds).
    pub http_timeout: Duration,
    /// Quiet period before an automatic code lookup (default: 800 ms).
    pub lookup_debounce: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:4000".into(),
            http_timeout: Duration::from_secs(10),
            lookup_debounce: Duration::from_millis(LOOKUP_DEBOUNCE_MS),
        }
    }
}

/// Invalid client configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid u64, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

impl GatewayConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                         | Default                 |
    /// |---------------------------------|-------------------------|
    /// | `DEPORTIVOS_API_URL`            | `http://localhost:4000` |
    /// | `DEPORTIVOS_HTTP_TIMEOUT_SECS`  | `10`                    |
    /// | `DEPORTIVOS_LOOKUP_DEBOUNCE_MS` | `800`                   |
    ///
    /// Fails when a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = lookup("DEPORTIVOS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let http_timeout = parse_u64(&lookup, "DEPORTIVOS_HTTP_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        let lookup_debounce = parse_u64(&lookup, "DEPORTIVOS_LOOKUP_DEBOUNCE_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.lookup_debounce);

        Ok(Self {
            api_url,
            http_timeout,
            lookup_debounce,
        })
    }
}

fn parse_u64(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, ConfigError> {
    lookup(var)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidNumber { var, value: raw })
        })
        .transpose()
}
