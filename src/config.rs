// src/config.rs
use std::time::Duration;

use crate::error::ConfigError;

pub const ENV_PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const ENV_TELEGRAM_BOT_TOKEN: &str = "TELEGRAM_BOT_TOKEN";
pub const ENV_TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
pub const ENV_LOG_PATH: &str = "HOMEWORK_BOT_LOG";
pub const ENV_METRICS_ADDR: &str = "METRICS_ADDR";

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);
pub const DEFAULT_LOG_PATH: &str = "main.log";

/// Immutable runtime configuration, built once at startup.
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_bot_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub telegram_api_base: String,
    pub retry_period: Duration,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

// Tokens stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("retry_period", &self.retry_period)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Read credentials from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary name -> value lookup.
    /// Blank values count as missing; every missing name is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| {
            let v = lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty());
            if v.is_none() {
                missing.push(name);
            }
            v.unwrap_or_default()
        };

        let practicum_token = read(ENV_PRACTICUM_TOKEN);
        let telegram_bot_token = read(ENV_TELEGRAM_BOT_TOKEN);
        let telegram_chat_id = read(ENV_TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(ConfigError::MissingVariables(missing));
        }

        Ok(Self {
            practicum_token,
            telegram_bot_token,
            telegram_chat_id,
            endpoint: ENDPOINT.to_string(),
            telegram_api_base: TELEGRAM_API_BASE.to_string(),
            retry_period: RETRY_PERIOD,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        })
    }
}
