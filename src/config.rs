use std::env;
use std::time::Duration;

use anyhow::{anyhow, Result};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 600;

#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let practicum_token =
            env::var("PRACTICUM_TOKEN").map_err(|_| anyhow!("PRACTICUM_TOKEN must be set"))?;
        let telegram_token =
            env::var("TELEGRAM_TOKEN").map_err(|_| anyhow!("TELEGRAM_TOKEN must be set"))?;
        let telegram_chat_id =
            env::var("TELEGRAM_CHAT_ID").map_err(|_| anyhow!("TELEGRAM_CHAT_ID must be set"))?;

        let poll_interval = env::var("POLL_INTERVAL_SECS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS));

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            poll_interval,
        })
    }
}
