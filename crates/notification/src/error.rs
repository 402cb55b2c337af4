/// Problems with the selected provider's configuration.
///
/// Detected when the dispatcher is built and reported again on every send
/// attempt, so a misconfigured deployment still starts and serves pages.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown email service: {0}")]
    UnknownService(String),

    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The provider answered with a non-success status.
    #[error("{provider} error: {detail}")]
    Provider {
        provider: &'static str,
        detail: String,
    },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Failed to render email template: {0}")]
    Template(#[from] askama::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to format request date: {0}")]
    Date(#[from] time::error::Format),
}

pub type Result<T> = std::result::Result<T, Error>;
