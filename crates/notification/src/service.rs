use std::sync::Arc;

use novatech_contact::Submission;

use crate::{ConfigError, Email, EmailConfig, Mailer, provider::ServiceKind};

const DEFAULT_SITE_NAME: &str = "NovaTech";

/// Forwards submissions to the one provider selected at startup.
///
/// Cheap to clone. A misconfigured provider does not prevent construction;
/// the configuration error is returned by every [`Dispatcher::dispatch`].
#[derive(Clone)]
pub struct Dispatcher {
    route: Route,
    to: String,
    site_name: String,
}

#[derive(Clone)]
enum Route {
    Ready(Arc<dyn Mailer>),
    Misconfigured(ConfigError),
}

impl Dispatcher {
    pub fn from_config(config: &EmailConfig) -> Self {
        let client = reqwest::Client::new();

        let route = match ServiceKind::parse(&config.service)
            .and_then(|kind| kind.build(config, &client))
        {
            Ok(mailer) => {
                tracing::info!(
                    email_service = mailer.name(),
                    to = %config.to_address,
                    "Email dispatcher ready"
                );
                Route::Ready(mailer)
            }
            Err(err) => {
                tracing::warn!(
                    email_service = %config.service,
                    error = %err,
                    "Email dispatcher misconfigured, submissions will fail"
                );
                Route::Misconfigured(err)
            }
        };

        Self {
            route,
            to: config.to_address.to_owned(),
            site_name: config.from_name.to_owned(),
        }
    }

    pub fn from_mailer(mailer: impl Mailer + 'static, to: impl Into<String>) -> Self {
        Self {
            route: Route::Ready(Arc::new(mailer)),
            to: to.into(),
            site_name: DEFAULT_SITE_NAME.to_owned(),
        }
    }

    /// Name of the ready provider, or why there is none.
    pub fn service(&self) -> Result<&'static str, &ConfigError> {
        match &self.route {
            Route::Ready(mailer) => Ok(mailer.name()),
            Route::Misconfigured(err) => Err(err),
        }
    }

    #[tracing::instrument(skip_all, fields(email_service, from = %submission.email))]
    pub async fn dispatch(&self, submission: &Submission) -> crate::Result<()> {
        let mailer = match &self.route {
            Route::Ready(mailer) => mailer,
            Route::Misconfigured(err) => return Err(err.clone().into()),
        };

        tracing::Span::current().record("email_service", mailer.name());

        let email = Email::contact(submission, &self.to, &self.site_name)?;
        mailer.send(&email).await?;

        tracing::info!("Email sent");

        Ok(())
    }
}
