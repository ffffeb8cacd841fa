use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::Notifier;
use crate::config::Config;
use crate::error::DeliveryError;

/// Telegram Bot API sender bound to a single chat.
#[derive(Clone)]
pub struct TelegramNotifier {
    client: Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(cfg: &Config) -> reqwest::Result<Self> {
        let client = Client::builder()
            .connect_timeout(cfg.connect_timeout)
            .timeout(cfg.request_timeout)
            .build()?;
        Ok(Self {
            client,
            url: format!(
                "{}/bot{}/sendMessage",
                cfg.telegram_api_base.trim_end_matches('/'),
                cfg.telegram_bot_token
            ),
            chat_id: cfg.telegram_chat_id.clone(),
        })
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Deserialize)]
struct ApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), DeliveryError> {
        let body = SendMessage {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };
        let resp = self.client.post(&self.url).json(&body).send().await?;

        let status = resp.status();
        // Telegram puts the reason for 4xx into the JSON body.
        let reply: Option<ApiReply> = resp.json().await.ok();
        match reply {
            Some(r) if r.ok && status.is_success() => Ok(()),
            Some(r) => Err(DeliveryError::Rejected(
                r.description
                    .unwrap_or_else(|| format!("HTTP {}", status.as_u16())),
            )),
            None if status.is_success() => Ok(()),
            None => Err(DeliveryError::Status(status.as_u16())),
        }
    }
}
