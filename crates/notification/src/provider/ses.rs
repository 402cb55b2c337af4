use async_trait::async_trait;
use reqwest::{Url, header};
use serde_json::{Value, json};
use time::OffsetDateTime;

use super::sigv4;
use crate::{
    ConfigError, Email, EmailConfig, Error,
    config::{present, required},
};

const SERVICE: &str = "ses";
const SEND_EMAIL_PATH: &str = "/v2/email/outbound-emails";
const CONTENT_TYPE: &str = "application/json";

/// Amazon SES through the v2 `SendEmail` HTTP action.
pub struct Ses {
    client: reqwest::Client,
    url: Url,
    host: String,
    region: String,
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
    from: String,
}

impl Ses {
    pub fn new(config: &EmailConfig, client: reqwest::Client) -> Result<Self, ConfigError> {
        let ses = &config.ses;
        let access_key_id = required(&ses.access_key_id, "AWS_ACCESS_KEY_ID")?;
        let secret_access_key = required(&ses.secret_access_key, "AWS_SECRET_ACCESS_KEY")?;
        let from_address = required(&config.from_address, "FROM_EMAIL")?;

        let endpoint = match present(&ses.endpoint) {
            Some(endpoint) => endpoint.trim_end_matches('/').to_owned(),
            None => format!("https://email.{}.amazonaws.com", ses.region),
        };

        let url = Url::parse(&format!("{endpoint}{SEND_EMAIL_PATH}")).map_err(|err| {
            ConfigError::Invalid {
                var: "AWS_REGION",
                reason: err.to_string(),
            }
        })?;

        // Host header as reqwest will send it: explicit port only when non default
        let host = match (url.host_str(), url.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_owned(),
            (None, _) => {
                return Err(ConfigError::Invalid {
                    var: "AWS_REGION",
                    reason: format!("no host in {url}"),
                });
            }
        };

        Ok(Self {
            client,
            host,
            url,
            region: ses.region.to_owned(),
            access_key_id: access_key_id.to_owned(),
            secret_access_key: secret_access_key.to_owned(),
            session_token: present(&ses.session_token).map(str::to_owned),
            from: format!("{} <{from_address}>", config.from_name),
        })
    }

    fn payload(&self, email: &Email) -> Value {
        json!({
            "FromEmailAddress": self.from,
            "Destination": { "ToAddresses": [email.to] },
            "ReplyToAddresses": [email.reply_to],
            "Content": {
                "Simple": {
                    "Subject": { "Data": email.subject, "Charset": "UTF-8" },
                    "Body": {
                        "Html": { "Data": email.html, "Charset": "UTF-8" }
                    }
                }
            }
        })
    }
}

#[async_trait]
impl super::Mailer for Ses {
    fn name(&self) -> &'static str {
        "ses"
    }

    async fn send(&self, email: &Email) -> crate::Result<()> {
        let body = serde_json::to_vec(&self.payload(email))?;

        let signed = sigv4::sign(
            &sigv4::Credentials {
                access_key_id: &self.access_key_id,
                secret_access_key: &self.secret_access_key,
                session_token: self.session_token.as_deref(),
            },
            &self.region,
            SERVICE,
            &sigv4::Request {
                host: &self.host,
                path: SEND_EMAIL_PATH,
                content_type: CONTENT_TYPE,
                body: &body,
            },
            OffsetDateTime::now_utc(),
        )?;

        let mut request = self
            .client
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .header("x-amz-date", signed.amz_date)
            .header(header::AUTHORIZATION, signed.authorization);

        if let Some(token) = &self.session_token {
            request = request.header("x-amz-security-token", token);
        }

        let response = request.body(body).send().await?;

        if !response.status().is_success() {
            let body = super::error_text(response).await;
            let detail = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .or_else(|| value.get("Message"))
                        .and_then(Value::as_str)
                        .map(str::to_owned)
                })
                .unwrap_or(body);

            return Err(Error::Provider {
                provider: "SES",
                detail,
            });
        }

        Ok(())
    }
}
