use anyhow::{Context, Result};
use shared::observability::LogFormat;

pub const DEFAULT_PI_API_BASE_URL: &str = "https://api.minepi.com/v2";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Whole-request bound for every outbound call
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            server: ServerConfig {
                host: var("SERVER_HOST", "0.0.0.0"),
                port: var("SERVER_PORT", "3000")
                    .parse()
                    .context("SERVER_PORT must be a port number")?,
            },
            upstream: UpstreamConfig {
                base_url: var("PI_API_BASE_URL", DEFAULT_PI_API_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
                api_key: lookup("PI_API_KEY").filter(|key| !key.trim().is_empty()),
                timeout_seconds: var("PI_API_TIMEOUT_SECONDS", "30")
                    .parse()
                    .context("PI_API_TIMEOUT_SECONDS must be a whole number of seconds")?,
            },
            logging: LoggingConfig {
                format: var("LOG_FORMAT", "json").parse()?,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
