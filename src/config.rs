use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddr { name: &'static str, value: String },

    #[error("{name} must be a whole number of seconds, got: {value}")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Service settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Where submissions are appended. Without it they only go to the log.
    pub csv_path: Option<PathBuf>,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from any variable source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup("SURVEY_BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidAddr {
                name: "SURVEY_BIND_ADDR",
                value,
            })?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|_| ConfigError::InvalidAddr {
                    name: "SURVEY_BIND_ADDR",
                    value: DEFAULT_BIND_ADDR.to_string(),
                })?,
        };

        let csv_path = lookup("SURVEY_CSV_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let request_timeout = match lookup("SURVEY_REQUEST_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout {
                    name: "SURVEY_REQUEST_TIMEOUT_SECS",
                    value,
                })?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            bind_addr,
            csv_path,
            request_timeout,
        })
    }
}
