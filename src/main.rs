use anyhow::{Context, Result};

use practicum_bot::config::Config;
use practicum_bot::logger;
use practicum_bot::practicum::{self, PracticumClient};
use practicum_bot::telegram::TelegramBot;
use practicum_bot::watcher::Watcher;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logger::init_logging();

    let config = Config::from_env().context("Missing required environment")?;

    tracing::info!(
        interval_secs = config.poll_interval.as_secs(),
        "Starting homework status watcher"
    );

    let client = PracticumClient::new(
        config.practicum_token.clone(),
        practicum::ENDPOINT.to_string(),
    )?;
    let bot = TelegramBot::new(&config.telegram_token, config.telegram_chat_id.clone());

    Watcher::new(client, bot, config.poll_interval).run().await;

    Ok(())
}
