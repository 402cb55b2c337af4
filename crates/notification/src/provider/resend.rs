use async_trait::async_trait;
use serde_json::{Value, json};

use crate::{
    ConfigError, Email, EmailConfig, Error,
    config::{present, required},
};

const DEFAULT_FROM: &str = "onboarding@resend.dev";

pub struct Resend {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    from: String,
}

impl Resend {
    pub fn new(config: &EmailConfig, client: reqwest::Client) -> Result<Self, ConfigError> {
        let api_key = required(&config.resend.api_key, "RESEND_API_KEY")?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!("{}/emails", config.resend.api_base.trim_end_matches('/')),
            from: present(&config.from_address)
                .unwrap_or(DEFAULT_FROM)
                .to_owned(),
        })
    }
}

/// Resend answers errors as `{"message": ...}`; fall back to whatever came back.
fn error_detail(body: String) -> String {
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => match value.get("message").and_then(Value::as_str) {
            Some(message) => message.to_owned(),
            None => value.to_string(),
        },
        Err(_) => body,
    }
}

#[async_trait]
impl super::Mailer for Resend {
    fn name(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, email: &Email) -> crate::Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&json!({
                "from": self.from,
                "to": email.to,
                "subject": email.subject,
                "html": email.html,
                "reply_to": email.reply_to,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let body = super::error_text(response).await;

            return Err(Error::Provider {
                provider: "Resend",
                detail: error_detail(body),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_message() {
        assert_eq!(
            error_detail(r#"{"statusCode":422,"message":"Invalid `to` field"}"#.to_owned()),
            "Invalid `to` field"
        );
    }

    #[test]
    fn test_error_detail_falls_back_to_json_then_text() {
        assert_eq!(
            error_detail(r#"{"error":"nope"}"#.to_owned()),
            r#"{"error":"nope"}"#
        );
        assert_eq!(error_detail("Bad Gateway".to_owned()), "Bad Gateway");
    }
}
