use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use novatech_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `pretty` for development consoles, `json` for log collectors
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Flat variables read by existing deployments, mapped to their config key.
const LEGACY_ENV: &[(&str, &str)] = &[
    ("EMAIL_SERVICE", "email.service"),
    ("CONTACT_TO_EMAIL", "email.to_address"),
    ("FROM_EMAIL", "email.from_address"),
    ("SENDGRID_API_KEY", "email.sendgrid.api_key"),
    ("RESEND_API_KEY", "email.resend.api_key"),
    ("MAILGUN_API_KEY", "email.mailgun.api_key"),
    ("MAILGUN_DOMAIN", "email.mailgun.domain"),
    ("SMTP_HOST", "email.smtp.host"),
    ("SMTP_PORT", "email.smtp.port"),
    ("SMTP_USER", "email.smtp.username"),
    ("SMTP_PASSWORD", "email.smtp.password"),
    ("AWS_REGION", "email.ses.region"),
    ("AWS_ACCESS_KEY_ID", "email.ses.access_key_id"),
    ("AWS_SECRET_ACCESS_KEY", "email.ses.secret_access_key"),
    ("AWS_SESSION_TOKEN", "email.ses.session_token"),
    ("HOST", "server.host"),
    ("PORT", "server.port"),
];

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Flat variables (EMAIL_SERVICE, SENDGRID_API_KEY, etc.)
    /// 2. Prefixed variables (NOVATECH__EMAIL__SERVICE, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, |key| env::var(key).ok())
    }

    /// Same as [`Config::load`] with flat variables read through `lookup`.
    pub fn load_with(
        config_path: Option<String>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file is not an error
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NOVATECH")
                .separator("__")
                .try_parsing(true),
        );

        // An exported but empty variable means unset
        for (var, key) in LEGACY_ENV {
            if let Some(value) = lookup(var).filter(|value| !value.trim().is_empty()) {
                builder = builder.set_override(*key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Provider credentials are left alone, a missing key only fails the
    /// submissions that need it.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(format!(
                "Unknown log format '{}', expected one of: {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            ));
        }
        Ok(())
    }
}
