use std::time::Duration;
use thiserror::Error;

const DEFAULT_REQUEST_DELAY_SECS: f64 = 3.0;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = "matchbook-client/0.1";

const ENV_REQUEST_DELAY: &str = "MATCHBOOK_REQUEST_DELAY";
const ENV_TIMEOUT: &str = "MATCHBOOK_TIMEOUT_SECS";
const ENV_USER_AGENT: &str = "MATCHBOOK_USER_AGENT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Session configuration, passed explicitly to [`Session::new`].
///
/// [`Session::new`]: crate::Session::new
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Minimum spacing between consecutive requests, in seconds.
    pub request_delay: f64,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_delay: DEFAULT_REQUEST_DELAY_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment (a `.env` file is honored
    /// if present). Unset variables fall back to defaults; malformed
    /// values are an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENV_REQUEST_DELAY) {
            config.request_delay = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_REQUEST_DELAY,
                value: raw.clone(),
            })?;
        }
        if let Ok(raw) = std::env::var(ENV_TIMEOUT) {
            config.timeout_secs = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT,
                value: raw.clone(),
            })?;
        }
        if let Ok(raw) = std::env::var(ENV_USER_AGENT) {
            config.user_agent = raw;
        }

        Ok(config)
    }

    /// The configured delay as a [`Duration`]. Negative values clamp to
    /// zero instead of panicking in the conversion.
    pub fn request_interval(&self) -> Duration {
        Duration::from_secs_f64(self.request_delay.max(0.0))
    }
}
