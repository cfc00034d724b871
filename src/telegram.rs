use serde::Deserialize;
use serde_json::json;

use crate::error::WatchError;

pub const TELEGRAM_API: &str = "https://api.telegram.org";

#[derive(Clone)]
pub struct TelegramBot {
    http: reqwest::Client,
    base_url: String,
    chat_id: String,
}

#[derive(Debug, Deserialize)]
struct SendMessageResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramBot {
    pub fn new(token: &str, chat_id: String) -> Self {
        Self::with_api_url(TELEGRAM_API, token, chat_id)
    }

    pub fn with_api_url(api_url: &str, token: &str, chat_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("{}/bot{}", api_url, token),
            chat_id,
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<(), WatchError> {
        tracing::info!(chat_id = %self.chat_id, "Sending Telegram message");
        let resp = self
            .http
            .post(format!("{}/sendMessage", self.base_url))
            .json(&json!({ "chat_id": self.chat_id, "text": text }))
            .send()
            .await
            .map_err(|err| WatchError::Delivery(err.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WatchError::Delivery(format!("статус {}", status)));
        }

        let parsed: SendMessageResponse = resp
            .json()
            .await
            .map_err(|err| WatchError::Delivery(err.to_string()))?;
        if !parsed.ok {
            return Err(WatchError::Delivery(
                parsed
                    .description
                    .unwrap_or_else(|| "неизвестная ошибка".to_string()),
            ));
        }

        tracing::info!("Telegram message sent");
        Ok(())
    }
}
