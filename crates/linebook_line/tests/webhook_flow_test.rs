//! Webhook to LINE reply, through the real reply client against a mock LINE API.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use linebook_booking::{BookingController, BookingDispatcher, PendingBookings};
use linebook_common::services::Erased;
use linebook_config::LineConfig;
use linebook_line::{routes, LineMessagingClient, LineState};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_booking_request_gets_summary_reply() {
    let line_api = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/bot/message/reply"))
        .and(body_partial_json(json!({ "replyToken": "reply-flow" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&line_api)
        .await;

    let client = LineMessagingClient::new(&LineConfig {
        channel_access_token: "token".to_string(),
        api_base_url: Some(line_api.uri()),
    });
    // No collaborators configured; only the summary step is exercised.
    let dispatcher = BookingDispatcher::new(chrono_tz::Asia::Bangkok, Duration::from_secs(1), "");
    let controller = BookingController::new(
        Arc::new(PendingBookings::new()),
        Arc::new(dispatcher),
        chrono_tz::Asia::Bangkok,
    );
    let app = routes(Arc::new(LineState {
        controller: Arc::new(controller),
        reply: Some(Arc::new(Erased(client))),
    }));

    let body = json!({
        "destination": "D",
        "events": [{
            "type": "message",
            "replyToken": "reply-flow",
            "source": { "type": "user", "userId": "U-flow" },
            "message": { "type": "text", "id": "1", "text": "12/02 13:00-17:00 ลูกค้า A" }
        }]
    });
    let response = app
        .oneshot(
            Request::post("/webhook")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let received = line_api.received_requests().await.unwrap_or_default();
            if let Some(request) = received.first() {
                let sent: serde_json::Value = serde_json::from_slice(&request.body).unwrap();
                let text = sent["messages"][0]["text"].as_str().unwrap().to_string();
                assert!(text.contains("เวลา: 13:00-17:00"));
                assert!(text.contains("รายละเอียด: ลูกค้า A"));
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    })
    .await
    .expect("LINE reply should arrive");
}
