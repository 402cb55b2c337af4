use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::{
    ConfigError, Email, EmailConfig,
    config::{present, required},
};

/// Port on which the relay expects TLS from the first byte.
const IMPLICIT_TLS_PORT: u16 = 465;

pub struct Smtp {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl Smtp {
    pub fn new(config: &EmailConfig) -> Result<Self, ConfigError> {
        let host = required(&config.smtp.host, "SMTP_HOST")?;
        let from_address = required(&config.from_address, "FROM_EMAIL")?;
        let port = config.smtp.port()?;

        let from = Mailbox::new(
            Some(config.from_name.to_owned()),
            from_address.parse().map_err(|err: lettre::address::AddressError| {
                ConfigError::Invalid {
                    var: "FROM_EMAIL",
                    reason: err.to_string(),
                }
            })?,
        );

        let builder = if port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        }
        .map_err(|err| ConfigError::Invalid {
            var: "SMTP_HOST",
            reason: err.to_string(),
        })?
        .port(port);

        let transport = match (present(&config.smtp.username), present(&config.smtp.password)) {
            (Some(username), Some(password)) => {
                tracing::info!(
                    smtp_host = %host,
                    smtp_port = port,
                    "SMTP relay configured with authentication"
                );
                builder
                    .credentials(Credentials::new(username.to_owned(), password.to_owned()))
                    .build()
            }
            _ => {
                tracing::info!(
                    smtp_host = %host,
                    smtp_port = port,
                    "SMTP credentials not configured, using unauthenticated relay"
                );
                builder.build()
            }
        };

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl super::Mailer for Smtp {
    fn name(&self) -> &'static str {
        "nodemailer"
    }

    async fn send(&self, email: &Email) -> crate::Result<()> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .reply_to(Mailbox::new(
                Some(email.reply_to_name.to_owned()),
                email.reply_to.parse()?,
            ))
            .subject(email.subject.to_owned())
            .header(ContentType::TEXT_HTML)
            .body(email.html.to_owned())?;

        self.transport.send(message).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SmtpConfig;

    fn config(host: Option<&str>, from: Option<&str>) -> EmailConfig {
        EmailConfig {
            service: "nodemailer".to_owned(),
            from_address: from.map(str::to_owned),
            smtp: SmtpConfig {
                host: host.map(str::to_owned),
                ..SmtpConfig::default()
            },
            ..EmailConfig::default()
        }
    }

    #[test]
    fn test_sender_address_is_required() {
        let err = Smtp::new(&config(Some("smtp.example.com"), None))
            .err()
            .unwrap();

        assert_eq!(err, ConfigError::NotConfigured("FROM_EMAIL"));
    }

    #[test]
    fn test_invalid_sender_address() {
        let err = Smtp::new(&config(Some("smtp.example.com"), Some("not an address")))
            .err()
            .unwrap();

        assert!(matches!(err, ConfigError::Invalid { var: "FROM_EMAIL", .. }));
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let mut config = config(Some("smtp.example.com"), Some("noreply@novatech.ai"));
        config.smtp.port = Some("smtp".to_owned());

        let err = Smtp::new(&config).err().unwrap();

        assert!(matches!(err, ConfigError::Invalid { var: "SMTP_PORT", .. }));
        assert!(err.to_string().starts_with("SMTP_PORT is invalid: `smtp`"));
    }

    #[tokio::test]
    async fn test_builds_without_connecting() {
        assert!(Smtp::new(&config(Some("smtp.example.com"), Some("noreply@novatech.ai"))).is_ok());
    }
}
