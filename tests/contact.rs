use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use novatech_notification::{Dispatcher, EmailConfig};
use serde_json::json;

mod common;

use common::{Outbox, Rejecting};

fn valid_body() -> String {
    json!({
        "name": "Jo",
        "email": "jo@example.com",
        "message": "I would like a demo of the platform",
    })
    .to_string()
}

#[tokio::test]
async fn test_valid_submission_is_sent_once() {
    let outbox = Outbox::default();
    let app = common::app_with(Dispatcher::from_mailer(outbox.clone(), "hello@novatech.ai"));

    let response = common::post_json(app, valid_body()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({
            "success": true,
            "message": "Message sent successfully! We will get back to you soon.",
        })
    );

    let sent = outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "hello@novatech.ai");
    assert_eq!(sent[0].reply_to, "jo@example.com");
    assert_eq!(sent[0].subject, "New Contact Form Submission from Jo");
}

#[tokio::test]
async fn test_trial_request_carries_plan() {
    let outbox = Outbox::default();
    let app = common::app_with(Dispatcher::from_mailer(outbox.clone(), "hello@novatech.ai"));

    let body = json!({
        "name": "Jo",
        "email": "jo@example.com",
        "message": "Please start my trial",
        "plan": "Pro",
    });
    let response = common::post_json(app, body.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);

    let sent = outbox.sent();
    assert_eq!(sent[0].subject, "New Trial Request (Pro) from Jo");
    assert!(sent[0].html.contains("Pro"));
}

#[tokio::test]
async fn test_invalid_submission_lists_every_violation() {
    let outbox = Outbox::default();
    let app = common::app_with(Dispatcher::from_mailer(outbox.clone(), "hello@novatech.ai"));

    let body = json!({ "name": "J", "email": "a@b.co", "message": "short" });
    let response = common::post_json(app, body.to_string()).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({
            "success": false,
            "message": "Validation failed",
            "errors": [
                "Name must be at least 2 characters long",
                "Message must be at least 10 characters long",
            ],
        })
    );
    assert!(outbox.sent().is_empty(), "rejected submissions are never sent");
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let app = common::app_with(Dispatcher::from_mailer(Outbox::default(), "hello@novatech.ai"));

    let response = common::post_json(app, "[1, 2, 3]").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"], json!(["Invalid request data"]));
}

#[tokio::test]
async fn test_malformed_json_is_a_server_failure() {
    let outbox = Outbox::default();
    let app = common::app_with(Dispatcher::from_mailer(outbox.clone(), "hello@novatech.ai"));

    let response = common::post_json(app, "{\"name\": ").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.json();
    assert_eq!(body["success"], false);
    assert!(!body["message"].as_str().unwrap_or_default().is_empty());
    assert_eq!(body["message"], body["details"]);
    assert!(outbox.sent().is_empty());
}

#[tokio::test]
async fn test_unknown_provider_fails_with_its_name() {
    let app = common::app_from_email_config(EmailConfig {
        service: "unknown-provider".to_owned(),
        ..EmailConfig::default()
    });

    let response = common::post_json(app, valid_body()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({
            "success": false,
            "message": "Unknown email service: unknown-provider",
            "details": "Unknown email service: unknown-provider",
        })
    );
}

#[tokio::test]
async fn test_missing_credentials_fail_at_submission_time() {
    let app = common::app_from_email_config(EmailConfig::default());

    let response = common::post_json(app, valid_body()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["details"], "SENDGRID_API_KEY is not configured");
}

#[tokio::test]
async fn test_provider_error_text_is_returned() {
    let app = common::app_with(Dispatcher::from_mailer(
        Rejecting("The from address does not match a verified Sender Identity"),
        "hello@novatech.ai",
    ));

    let response = common::post_json(app, valid_body()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json()["message"],
        "SendGrid error: The from address does not match a verified Sender Identity"
    );
}

#[tokio::test]
async fn test_preflight_allows_any_origin() {
    let app = common::app_with(Dispatcher::from_mailer(Outbox::default(), "hello@novatech.ai"));

    let response = common::send(
        app,
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/contact")
            .header("origin", "https://example.org")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
    assert_eq!(
        response.header("access-control-allow-methods"),
        Some("POST, OPTIONS")
    );
    assert_eq!(
        response.header("access-control-allow-headers"),
        Some("Content-Type")
    );
}

#[tokio::test]
async fn test_api_responses_are_not_cached() {
    let app = common::app_with(Dispatcher::from_mailer(Outbox::default(), "hello@novatech.ai"));

    let response = common::post_json(app, valid_body()).await;

    assert!(
        response
            .header("cache-control")
            .unwrap_or_default()
            .contains("no-store")
    );
}
