use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::WatchError;

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    pub fn new(token: String, endpoint: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            token,
            endpoint,
        })
    }

    pub async fn homework_statuses(&self, from_date: Option<i64>) -> Result<Value, WatchError> {
        let from_date = from_date.unwrap_or_else(|| Utc::now().timestamp());

        tracing::info!(from_date, "Requesting homework statuses");
        let resp = self
            .http
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    WatchError::Timeout(err.to_string())
                } else {
                    WatchError::Transport(err.to_string())
                }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WatchError::HttpStatus(status));
        }

        let body = resp
            .text()
            .await
            .map_err(|err| WatchError::Transport(err.to_string()))?;

        serde_json::from_str(&body).map_err(|err| WatchError::Decode(err.to_string()))
    }
}
