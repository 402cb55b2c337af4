pub mod config;
pub mod contact;
mod error;
pub mod provider;
mod service;
pub(crate) mod template;

pub use config::EmailConfig;
pub use contact::{Email, render_contact_email};
pub use error::*;
pub use provider::Mailer;
pub use service::*;
