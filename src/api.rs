// src/api.rs
//! Practicum homework API client.

use reqwest::{header, Client, StatusCode};
use serde_json::Value;

use crate::config::Config;
use crate::error::FetchError;

/// Source of raw homework API responses.
#[async_trait::async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch homework statuses changed since `from_date` (unix seconds).
    /// The body is returned as decoded JSON without any shape checks.
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError>;
}

pub struct PracticumClient {
    http: Client,
    endpoint: String,
    auth: String,
}

impl PracticumClient {
    pub fn new(cfg: &Config) -> reqwest::Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.request_timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: cfg.endpoint.clone(),
            auth: format!("OAuth {}", cfg.practicum_token),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, from_date, "requesting homework statuses");

        let resp = self
            .http
            .get(&self.endpoint)
            .header(header::AUTHORIZATION, &self.auth)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                endpoint: self.endpoint.clone(),
                from_date,
                cause: e.to_string(),
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }
        tracing::debug!("homework API answered 200");

        resp.json::<Value>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
