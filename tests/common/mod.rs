#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use novatech::{AppState, Config};
use novatech_notification::{Dispatcher, Email, EmailConfig, Error, Mailer};
use tower::ServiceExt;

pub fn config() -> Config {
    Config::load_with(Some("does-not-exist.toml".to_string()), |_| None).unwrap()
}

pub fn app_with(dispatcher: Dispatcher) -> Router {
    novatech::app(AppState { dispatcher })
}

/// App whose provider comes from `email`, as `novatech serve` builds it.
pub fn app_from_email_config(email: EmailConfig) -> Router {
    let mut config = config();
    config.email = email;

    novatech::app(AppState::new(&config))
}

/// Keeps every email instead of sending it.
#[derive(Default, Clone)]
pub struct Outbox(Arc<Mutex<Vec<Email>>>);

impl Outbox {
    pub fn sent(&self) -> Vec<Email> {
        self.0.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for Outbox {
    fn name(&self) -> &'static str {
        "outbox"
    }

    async fn send(&self, email: &Email) -> novatech_notification::Result<()> {
        self.0.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Fails like a provider answering with an error body.
pub struct Rejecting(pub &'static str);

#[async_trait]
impl Mailer for Rejecting {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn send(&self, _email: &Email) -> novatech_notification::Result<()> {
        Err(Error::Provider {
            provider: "SendGrid",
            detail: self.0.to_owned(),
        })
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let body = body.collect().await.unwrap().to_bytes();

    TestResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    }
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: Router, body: impl Into<Body>) -> TestResponse {
    send(
        app,
        Request::post("/api/contact")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await
}
