use async_trait::async_trait;
use reqwest::multipart::Form;

use crate::{
    ConfigError, Email, EmailConfig, Error,
    config::present,
};

pub struct Mailgun {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
    from: String,
}

impl Mailgun {
    pub fn new(config: &EmailConfig, client: reqwest::Client) -> Result<Self, ConfigError> {
        let (Some(api_key), Some(domain)) = (
            present(&config.mailgun.api_key),
            present(&config.mailgun.domain),
        ) else {
            return Err(ConfigError::NotConfigured("MAILGUN_API_KEY or MAILGUN_DOMAIN"));
        };

        let address = match present(&config.from_address) {
            Some(address) => address.to_owned(),
            None => format!("noreply@{domain}"),
        };

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!(
                "{}/v3/{domain}/messages",
                config.mailgun.api_base.trim_end_matches('/')
            ),
            from: format!("{} <{address}>", config.from_name),
        })
    }
}

#[async_trait]
impl super::Mailer for Mailgun {
    fn name(&self) -> &'static str {
        "mailgun"
    }

    async fn send(&self, email: &Email) -> crate::Result<()> {
        let form = Form::new()
            .text("from", self.from.to_owned())
            .text("to", email.to.to_owned())
            .text("subject", email.subject.to_owned())
            .text("html", email.html.to_owned())
            .text("h:Reply-To", email.reply_to.to_owned());

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth("api", Some(&self.api_key))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Provider {
                provider: "Mailgun",
                detail: super::error_text(response).await,
            });
        }

        Ok(())
    }
}
