mod mailgun;
mod resend;
mod sendgrid;
mod ses;
mod sigv4;
mod smtp;

use std::sync::Arc;

use async_trait::async_trait;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{ConfigError, Email, EmailConfig};

pub use mailgun::Mailgun;
pub use resend::Resend;
pub use sendgrid::SendGrid;
pub use ses::Ses;
pub use smtp::Smtp;

/// One way of delivering a transactional email.
#[async_trait]
pub trait Mailer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn send(&self, email: &Email) -> crate::Result<()>;
}

#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceKind {
    SendGrid,
    Resend,
    Mailgun,
    /// SMTP relay, kept under the name existing deployments already use
    Nodemailer,
    Ses,
}

impl ServiceKind {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        value
            .parse()
            .map_err(|_| ConfigError::UnknownService(value.to_owned()))
    }

    /// Builds the provider, failing on missing credentials before any network call.
    pub fn build(
        self,
        config: &EmailConfig,
        client: &reqwest::Client,
    ) -> Result<Arc<dyn Mailer>, ConfigError> {
        let mailer: Arc<dyn Mailer> = match self {
            ServiceKind::SendGrid => Arc::new(SendGrid::new(config, client.clone())?),
            ServiceKind::Resend => Arc::new(Resend::new(config, client.clone())?),
            ServiceKind::Mailgun => Arc::new(Mailgun::new(config, client.clone())?),
            ServiceKind::Nodemailer => Arc::new(Smtp::new(config)?),
            ServiceKind::Ses => Arc::new(Ses::new(config, client.clone())?),
        };

        Ok(mailer)
    }
}

/// Reads a non-success response body for error reporting.
pub(crate) async fn error_text(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(text) => text,
        Err(err) => err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names() {
        assert_eq!(ServiceKind::parse("sendgrid"), Ok(ServiceKind::SendGrid));
        assert_eq!(ServiceKind::parse("resend"), Ok(ServiceKind::Resend));
        assert_eq!(ServiceKind::parse("mailgun"), Ok(ServiceKind::Mailgun));
        assert_eq!(ServiceKind::parse("nodemailer"), Ok(ServiceKind::Nodemailer));
        assert_eq!(ServiceKind::parse("ses"), Ok(ServiceKind::Ses));
        assert_eq!(ServiceKind::SendGrid.as_ref(), "sendgrid");
    }

    #[test]
    fn test_unknown_service_has_no_fallback() {
        let err = ServiceKind::parse("unknown-provider").unwrap_err();

        assert_eq!(err.to_string(), "Unknown email service: unknown-provider");
        assert!(ServiceKind::parse("SendGrid").is_err());
        assert!(ServiceKind::parse("").is_err());
    }

    #[test]
    fn test_missing_credentials_fail_fast() {
        let config = EmailConfig::default();
        let client = reqwest::Client::new();

        let messages = ServiceKind::VARIANTS
            .iter()
            .map(|kind| match kind.build(&config, &client) {
                Ok(_) => panic!("{kind} should not build without credentials"),
                Err(err) => err.to_string(),
            })
            .collect::<Vec<_>>();

        assert_eq!(
            messages,
            vec![
                "SENDGRID_API_KEY is not configured",
                "RESEND_API_KEY is not configured",
                "MAILGUN_API_KEY or MAILGUN_DOMAIN is not configured",
                "SMTP_HOST is not configured",
                "AWS_ACCESS_KEY_ID is not configured",
            ]
        );
    }
}
