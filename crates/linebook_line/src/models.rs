// --- File: crates/linebook_line/src/models.rs ---
//! Subset of the LINE Messaging API webhook and reply payloads.

use serde::{Deserialize, Serialize};

/// Body of a LINE webhook delivery.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

/// One webhook event. Every field is optional so unknown event kinds
/// (follow, postback, ...) still deserialize and are skipped later.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct WebhookEvent {
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub reply_token: Option<String>,
    #[serde(default)]
    pub source: Option<EventSource>,
    #[serde(default)]
    pub message: Option<EventMessage>,
    #[serde(default)]
    pub timestamp: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventSource {
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventMessage {
    #[serde(rename = "type", default)]
    pub message_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// The three fields the booking flow consumes from a text message event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub sender_id: String,
    pub text: String,
    pub reply_token: String,
}

impl WebhookEvent {
    /// `Some` only for text message events carrying a user id and reply token.
    pub fn inbound_message(&self) -> Option<InboundMessage> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "text" {
            return None;
        }

        Some(InboundMessage {
            sender_id: self.source.as_ref()?.user_id.clone()?,
            text: message.text.clone()?,
            reply_token: self.reply_token.clone()?,
        })
    }
}

/// `POST /v2/bot/message/reply` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMessageRequest {
    pub reply_token: String,
    pub messages: Vec<TextMessage>,
}

#[derive(Debug, Serialize)]
pub struct TextMessage {
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub text: String,
}

impl TextMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_type: "text",
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_event_yields_inbound_message() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{
                "destination": "Uxxxxxxxx",
                "events": [{
                    "type": "message",
                    "replyToken": "reply-1",
                    "timestamp": 1700000000000,
                    "source": { "type": "user", "userId": "U123" },
                    "message": { "type": "text", "id": "m1", "text": "12/02 13:00-17:00 ลูกค้า A" }
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(
            payload.events[0].inbound_message(),
            Some(InboundMessage {
                sender_id: "U123".to_string(),
                text: "12/02 13:00-17:00 ลูกค้า A".to_string(),
                reply_token: "reply-1".to_string(),
            })
        );
    }

    #[test]
    fn test_non_text_events_are_skipped() {
        let payload: WebhookPayload = serde_json::from_str(
            r#"{
                "events": [
                    { "type": "follow", "replyToken": "r", "source": { "type": "user", "userId": "U1" } },
                    { "type": "message", "replyToken": "r", "source": { "type": "user", "userId": "U1" },
                      "message": { "type": "sticker", "id": "s1" } },
                    { "type": "message", "source": { "type": "user", "userId": "U1" },
                      "message": { "type": "text", "text": "no reply token" } },
                    { "type": "message", "replyToken": "r", "source": { "type": "group", "groupId": "G1" },
                      "message": { "type": "text", "text": "no user id" } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.events.len(), 4);
        assert!(payload.events.iter().all(|e| e.inbound_message().is_none()));
    }

    #[test]
    fn test_reply_request_wire_format() {
        let body = ReplyMessageRequest {
            reply_token: "reply-1".to_string(),
            messages: vec![TextMessage::new("hello")],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "replyToken": "reply-1",
                "messages": [{ "type": "text", "text": "hello" }]
            })
        );
    }
}
