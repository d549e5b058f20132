use std::time::Duration;

use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{ChatId, Notification},
    error_chain_fmt,
};

/// Formatting mode Telegram applies to the message text.
const PARSE_MODE: &str = "HTML";

/// Client for the Telegram Bot API `sendMessage` method, bound to one chat.
#[derive(Debug)]
pub struct TelegramClient {
    base_url: String,
    bot_token: Secret<String>,
    chat_id: ChatId,
    http_client: Client,
}

impl TelegramClient {
    pub fn new(
        base_url: String,
        bot_token: Secret<String>,
        chat_id: ChatId,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            bot_token,
            chat_id,
            http_client,
        })
    }

    /// Post a notification to the configured chat.
    #[tracing::instrument(
        name = "Sending a notification to Telegram",
        skip_all,
        fields(chat_id = %self.chat_id)
    )]
    pub async fn send_message(&self, notification: &Notification) -> Result<(), TelegramError> {
        // The token is part of the path, so the URL must never be logged.
        let url = format!(
            "{}/bot{}/sendMessage",
            self.base_url.trim_end_matches('/'),
            self.bot_token.expose_secret()
        );

        let request_body = SendMessageRequest {
            chat_id: self.chat_id.as_ref(),
            text: notification.as_ref(),
            parse_mode: PARSE_MODE,
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| TelegramError::Transport(e.without_url()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let description = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.description);
        Err(TelegramError::Rejected {
            status,
            description,
        })
    }
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
    description: Option<String>,
}

#[derive(thiserror::Error)]
pub enum TelegramError {
    #[error("Failed to reach the Telegram Bot API")]
    Transport(#[source] reqwest::Error),
    #[error(
        "Telegram rejected the message with status {status}: {}",
        .description.as_deref().unwrap_or("no description")
    )]
    Rejected {
        status: StatusCode,
        description: Option<String>,
    },
}

impl std::fmt::Debug for TelegramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
