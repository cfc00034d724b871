use std::time::Duration;

use chrono::Utc;

use crate::error::WatchError;
use crate::models::HomeworkRecord;
use crate::practicum::PracticumClient;
use crate::response;
use crate::status;
use crate::telegram::TelegramBot;

pub struct Watcher {
    client: PracticumClient,
    bot: TelegramBot,
    interval: Duration,
    cursor: i64,
    last_message: Option<String>,
}

impl Watcher {
    pub fn new(client: PracticumClient, bot: TelegramBot, interval: Duration) -> Self {
        Self {
            client,
            bot,
            interval,
            cursor: Utc::now().timestamp(),
            last_message: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    pub async fn run(mut self) {
        loop {
            self.poll_and_report().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    pub async fn poll_and_report(&mut self) {
        if let Err(err) = self.poll_once().await {
            tracing::error!(error = %err, "Poll cycle failed");
            let message = format!("Сбой в работе программы: {}", err);
            self.notify(&message).await;
        }
    }

    pub async fn poll_once(&mut self) -> Result<(), WatchError> {
        let raw = self.client.homework_statuses(Some(self.cursor)).await?;
        let validated = response::extract_homework(&raw)?;
        let homework = HomeworkRecord::from_value(&validated.homework)?;
        let message = status::format_status(&homework)?;

        if self.last_message.as_deref() == Some(message.as_str()) {
            tracing::debug!("Status unchanged, skipping notification");
        } else if self.notify(&message).await {
            self.last_message = Some(message);
        }

        if let Some(date) = validated.current_date {
            self.cursor = date;
        }

        Ok(())
    }

    async fn notify(&self, message: &str) -> bool {
        match self.bot.send_message(message).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "Telegram delivery failed");
                false
            }
        }
    }
}
