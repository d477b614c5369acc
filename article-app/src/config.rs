//! Backend configuration, read from the environment (and `.env` via dotenvy
//! in the binary).

use std::time::Duration;

const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 30;
// The bundled UI (site-addr) and the Vite dev server.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8000",
    "http://127.0.0.1:8000",
    "http://localhost:5173",
    "http://127.0.0.1:5173",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// n8n webhook receiving accepted submissions. Requests fail with a 500
    /// while this is unset.
    pub webhook_url: Option<String>,
    pub webhook_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            webhook_url: None,
            webhook_timeout: Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|o| o.to_string())
                .collect(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config.webhook_url = lookup("N8N_WEBHOOK_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if let Some(raw) = lookup("N8N_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue("N8N_TIMEOUT_SECS".to_string(), e.to_string())
            })?;
            config.webhook_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("CORS_ALLOWED_ORIGINS") {
            config.allowed_origins = raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    pub fn webhook_configured(&self) -> bool {
        self.webhook_url.is_some()
    }
}
