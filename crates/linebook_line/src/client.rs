//! LINE Messaging API reply client
//!
//! Sends one text message per reply token through
//! `POST /v2/bot/message/reply`, authenticated with the channel access token.

use linebook_common::services::{BoxFuture, ReplyService};
use linebook_common::HTTP_CLIENT;
use linebook_config::LineConfig;
use reqwest::{header, Client};
use thiserror::Error;
use tracing::debug;

use crate::models::{ReplyMessageRequest, TextMessage};

#[derive(Error, Debug)]
pub enum LineError {
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success response from the LINE API
    #[error("LINE API error ({status}): {body}")]
    ApiError { status: u16, body: String },
}

/// Client for the LINE reply endpoint.
#[derive(Clone)]
pub struct LineMessagingClient {
    client: Client,
    base_url: String,
    channel_access_token: String,
}

impl LineMessagingClient {
    pub fn new(config: &LineConfig) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            channel_access_token: config.channel_access_token.clone(),
        }
    }

    /// Replies to the event identified by `reply_token` with a single text message.
    pub async fn reply(&self, reply_token: &str, text: &str) -> Result<(), LineError> {
        let url = format!("{}/v2/bot/message/reply", self.base_url);
        let body = ReplyMessageRequest {
            reply_token: reply_token.to_string(),
            messages: vec![TextMessage::new(text)],
        };

        let response = self
            .client
            .post(&url)
            .header(
                header::AUTHORIZATION,
                format!("Bearer {}", self.channel_access_token),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LineError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        debug!(%status, "LINE reply sent");
        Ok(())
    }
}

impl ReplyService for LineMessagingClient {
    type Error = LineError;

    fn reply_text(&self, reply_token: &str, text: &str) -> BoxFuture<'_, (), Self::Error> {
        let reply_token = reply_token.to_string();
        let text = text.to_string();
        Box::pin(async move { self.reply(&reply_token, &text).await })
    }
}
