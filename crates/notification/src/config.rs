use serde::Deserialize;

use crate::ConfigError;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    /// One of `sendgrid`, `resend`, `mailgun`, `nodemailer`, `ses`
    #[serde(default = "default_service")]
    pub service: String,
    /// Inbox that receives every submission
    #[serde(default = "default_to_address")]
    pub to_address: String,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default = "default_from_name")]
    pub from_name: String,
    #[serde(default)]
    pub sendgrid: SendGridConfig,
    #[serde(default)]
    pub resend: ResendConfig,
    #[serde(default)]
    pub mailgun: MailgunConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub ses: SesConfig,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            to_address: default_to_address(),
            from_address: None,
            from_name: default_from_name(),
            sendgrid: SendGridConfig::default(),
            resend: ResendConfig::default(),
            mailgun: MailgunConfig::default(),
            smtp: SmtpConfig::default(),
            ses: SesConfig::default(),
        }
    }
}

fn default_service() -> String {
    "sendgrid".to_string()
}

fn default_to_address() -> String {
    "hello@novatech.ai".to_string()
}

fn default_from_name() -> String {
    "NovaTech".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SendGridConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_sendgrid_api_base")]
    pub api_base: String,
}

impl Default for SendGridConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_sendgrid_api_base(),
        }
    }
}

fn default_sendgrid_api_base() -> String {
    "https://api.sendgrid.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResendConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_resend_api_base")]
    pub api_base: String,
}

impl Default for ResendConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_resend_api_base(),
        }
    }
}

fn default_resend_api_base() -> String {
    "https://api.resend.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct MailgunConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default = "default_mailgun_api_base")]
    pub api_base: String,
}

impl Default for MailgunConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            domain: None,
            api_base: default_mailgun_api_base(),
        }
    }
}

fn default_mailgun_api_base() -> String {
    "https://api.mailgun.net".to_string()
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SmtpConfig {
    #[serde(default)]
    pub host: Option<String>,
    /// Raw text, parsed by [`SmtpConfig::port`] when the relay is built
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

const DEFAULT_SMTP_PORT: u16 = 587;

impl SmtpConfig {
    /// Submission port, 587 when unset.
    pub fn port(&self) -> Result<u16, ConfigError> {
        let Some(port) = present(&self.port) else {
            return Ok(DEFAULT_SMTP_PORT);
        };

        match port.parse::<u16>() {
            Ok(0) => Err(ConfigError::Invalid {
                var: "SMTP_PORT",
                reason: "port must be greater than 0".to_owned(),
            }),
            Ok(port) => Ok(port),
            Err(err) => Err(ConfigError::Invalid {
                var: "SMTP_PORT",
                reason: format!("`{port}` is not a port number ({err})"),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SesConfig {
    #[serde(default = "default_ses_region")]
    pub region: String,
    #[serde(default)]
    pub access_key_id: Option<String>,
    #[serde(default)]
    pub secret_access_key: Option<String>,
    #[serde(default)]
    pub session_token: Option<String>,
    /// Overrides `https://email.<region>.amazonaws.com`
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for SesConfig {
    fn default() -> Self {
        Self {
            region: default_ses_region(),
            access_key_id: None,
            secret_access_key: None,
            session_token: None,
            endpoint: None,
        }
    }
}

fn default_ses_region() -> String {
    "us-east-1".to_string()
}

/// Empty values coming from the environment count as missing.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn required<'a>(
    value: &'a Option<String>,
    var: &'static str,
) -> Result<&'a str, ConfigError> {
    present(value).ok_or(ConfigError::NotConfigured(var))
}
