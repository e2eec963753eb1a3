// --- File: crates/linebook_line/src/handlers.rs ---
use axum::{extract::State, http::StatusCode};
use linebook_booking::BookingController;
use linebook_common::services::{BoxedError, ReplyService};
use linebook_common::{config_error, LinebookError};
use std::sync::Arc;
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::models::WebhookPayload;

/// Shared state for the LINE routes.
pub struct LineState {
    pub controller: Arc<BookingController>,
    /// `None` when no channel access token is configured.
    pub reply: Option<Arc<dyn ReplyService<Error = BoxedError>>>,
}

/// Liveness probe.
pub async fn health_handler() -> &'static str {
    "LINE Booking Bot is running"
}

/// Receives a LINE webhook delivery.
///
/// Acknowledges with 200 right away and handles the events on a spawned
/// task, so a slow or failing booking never delays or breaks the next
/// delivery. Bodies that are not valid webhook JSON are logged and dropped.
#[axum::debug_handler]
pub async fn webhook_handler(
    State(state): State<Arc<LineState>>,
    body: String,
) -> Result<StatusCode, LinebookError> {
    let Some(reply) = state.reply.clone() else {
        return Err(config_error("LINE channel access token is not configured"));
    };

    let payload: WebhookPayload = match serde_json::from_str(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!(error = %e, "ignoring malformed LINE webhook body");
            return Ok(StatusCode::OK);
        }
    };

    let delivery_id = Uuid::new_v4();
    let span = info_span!("line_delivery", %delivery_id, events = payload.events.len());
    tokio::spawn(process_events(state.controller.clone(), reply, payload).instrument(span));

    Ok(StatusCode::OK)
}

/// Runs every text message event of a delivery through the controller, in
/// order, and sends one reply per handled message.
pub async fn process_events(
    controller: Arc<BookingController>,
    reply: Arc<dyn ReplyService<Error = BoxedError>>,
    payload: WebhookPayload,
) {
    for event in payload.events {
        let Some(inbound) = event.inbound_message() else {
            debug!(event_type = %event.event_type, "skipping non-text event");
            continue;
        };

        info!(sender_id = %inbound.sender_id, "received message");
        let Some(outcome) = controller
            .handle_message(&inbound.sender_id, &inbound.text)
            .await
        else {
            continue;
        };

        if let Err(e) = reply.reply_text(&inbound.reply_token, &outcome.text()).await {
            error!(sender_id = %inbound.sender_id, error = %e, "failed to send LINE reply");
        }
    }
}
