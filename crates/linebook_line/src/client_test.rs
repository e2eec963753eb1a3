#[cfg(test)]
mod tests {
    use crate::client::{LineError, LineMessagingClient};
    use linebook_common::services::ReplyService;
    use linebook_config::LineConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LineMessagingClient {
        LineMessagingClient::new(&LineConfig {
            channel_access_token: "test-token".to_string(),
            api_base_url: Some(server.uri()),
        })
    }

    #[tokio::test]
    async fn test_reply_posts_text_message_with_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/bot/message/reply"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_json(json!({
                "replyToken": "reply-1",
                "messages": [{ "type": "text", "text": "ยังไม่มีนัดให้ยืนยัน" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .reply_text("reply-1", "ยังไม่มีนัดให้ยืนยัน")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_reply_surfaces_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/bot/message/reply"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string(r#"{"message":"Invalid reply token"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .reply("expired", "hello")
            .await
            .unwrap_err();

        match err {
            LineError::ApiError { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Invalid reply token"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
