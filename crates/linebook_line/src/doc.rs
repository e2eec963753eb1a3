// File: crates/linebook_line/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{EventMessage, EventSource, WebhookEvent, WebhookPayload};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = String)
    ),
    tag = "line"
)]
#[allow(dead_code)]
fn doc_health_handler() {}

#[utoipa::path(
    post,
    path = "/webhook",
    request_body(content = WebhookPayload, example = json!({
        "destination": "U0123456789abcdef",
        "events": [{
            "type": "message",
            "replyToken": "nHuyWiB7yP5Zw52FIkcQobQuGDXCTA",
            "source": { "type": "user", "userId": "U4af4980629" },
            "message": { "type": "text", "id": "444573844083572737", "text": "12/02 13:00-17:00 ลูกค้า A" }
        }]
    })),
    responses(
        (status = 200, description = "Delivery acknowledged, events handled asynchronously"),
        (status = 503, description = "LINE channel access token not configured")
    ),
    tag = "line"
)]
#[allow(dead_code)]
fn doc_webhook_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_health_handler, doc_webhook_handler),
    components(schemas(WebhookPayload, WebhookEvent, EventSource, EventMessage)),
    tags(
        (name = "line", description = "LINE Messaging API webhook")
    )
)]
pub struct LineApiDoc;
