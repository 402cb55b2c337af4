use async_trait::async_trait;
use serde::Serialize;

use crate::{
    ConfigError, Email, EmailConfig, Error,
    config::{present, required},
};

const DEFAULT_FROM: &str = "noreply@novatech.ai";

pub struct SendGrid {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    from: String,
    from_name: String,
}

impl SendGrid {
    pub fn new(config: &EmailConfig, client: reqwest::Client) -> Result<Self, ConfigError> {
        let api_key = required(&config.sendgrid.api_key, "SENDGRID_API_KEY")?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!("{}/v3/mail/send", config.sendgrid.api_base.trim_end_matches('/')),
            from: present(&config.from_address)
                .unwrap_or(DEFAULT_FROM)
                .to_owned(),
            from_name: config.from_name.to_owned(),
        })
    }
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
    subject: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct MailSend<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    reply_to: Address<'a>,
    content: [Content<'a>; 1],
}

#[async_trait]
impl super::Mailer for SendGrid {
    fn name(&self) -> &'static str {
        "sendgrid"
    }

    async fn send(&self, email: &Email) -> crate::Result<()> {
        let payload = MailSend {
            personalizations: [Personalization {
                to: [Address {
                    email: &email.to,
                    name: None,
                }],
                subject: &email.subject,
            }],
            from: Address {
                email: &self.from,
                name: Some(&self.from_name),
            },
            reply_to: Address {
                email: &email.reply_to,
                name: Some(&email.reply_to_name),
            },
            content: [Content {
                kind: "text/html",
                value: &email.html,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Provider {
                provider: "SendGrid",
                detail: super::error_text(response).await,
            });
        }

        Ok(())
    }
}
