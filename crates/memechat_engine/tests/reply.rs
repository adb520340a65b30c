use std::time::Duration;

use memechat_engine::{FailureKind, HttpReplyService, ReplyService, ReplySettings};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> HttpReplyService {
    HttpReplyService::new(ReplySettings {
        endpoint: format!("{}/chat", server.uri()),
        ..ReplySettings::default()
    })
}

#[tokio::test]
async fn posts_the_message_and_parses_the_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(json!({ "message": "tell me a dad joke" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "Here's a dad joke for you 👴",
            "meme_url": null,
        })))
        .mount(&server)
        .await;

    let payload = service_for(&server)
        .request_reply("tell me a dad joke")
        .await
        .expect("reply ok");

    assert_eq!(payload.reply, "Here's a dad joke for you 👴");
    assert_eq!(payload.meme_url, None);
}

#[tokio::test]
async fn meme_url_is_passed_through_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "Sure! Here's a meme for you 😂👉",
            "meme_url": "http://localhost:8000/memes/cat.jpg",
        })))
        .mount(&server)
        .await;

    let payload = service_for(&server)
        .request_reply("send a meme")
        .await
        .expect("reply ok");

    assert_eq!(
        payload.meme_url.as_deref(),
        Some("http://localhost:8000/memes/cat.jpg")
    );
}

#[tokio::test]
async fn missing_meme_url_defaults_to_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "reply": "hi" })))
        .mount(&server)
        .await;

    let payload = service_for(&server)
        .request_reply("hello")
        .await
        .expect("reply ok");

    assert_eq!(payload.reply, "hi");
    assert_eq!(payload.meme_url, None);
}

#[tokio::test]
async fn unknown_fields_are_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "reply": "hi",
            "mood": "chaotic",
            "version": 2,
        })))
        .mount(&server)
        .await;

    let payload = service_for(&server)
        .request_reply("hello")
        .await
        .expect("reply ok");

    assert_eq!(payload.reply, "hi");
}

#[tokio::test]
async fn non_success_status_is_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = service_for(&server).request_reply("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn missing_reply_field_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "meme_url": null })))
        .mount(&server)
        .await;

    let err = service_for(&server).request_reply("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let err = service_for(&server).request_reply("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedBody);
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "reply": "slow" })),
        )
        .mount(&server)
        .await;

    let service = HttpReplyService::new(ReplySettings {
        endpoint: format!("{}/chat", server.uri()),
        request_timeout: Duration::from_millis(50),
        ..ReplySettings::default()
    });

    let err = service.request_reply("hello").await.unwrap_err();

    assert_eq!(err.kind, FailureKind::Timeout);
}
