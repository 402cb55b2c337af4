use askama::Template;
use novatech_contact::Submission;

use crate::template::ContactHtmlTemplate;

/// Provider neutral message. The sender is owned by each provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub to: String,
    pub reply_to: String,
    pub reply_to_name: String,
    pub subject: String,
    pub html: String,
}

impl Email {
    /// Notification for the site inbox; replies go back to the submitter.
    pub fn contact(
        submission: &Submission,
        to: impl Into<String>,
        site_name: &str,
    ) -> crate::Result<Self> {
        let subject = match &submission.plan {
            Some(plan) => format!("New Trial Request ({plan}) from {}", submission.name),
            None => format!("New Contact Form Submission from {}", submission.name),
        };

        let html = render_contact_email(
            site_name,
            &submission.name,
            &submission.email,
            &submission.message,
            submission.plan.as_deref(),
        )?;

        Ok(Self {
            to: to.into(),
            reply_to: submission.email.to_owned(),
            reply_to_name: submission.name.to_owned(),
            subject,
            html,
        })
    }
}

pub fn render_contact_email(
    site_name: &str,
    name: &str,
    email: &str,
    message: &str,
    plan: Option<&str>,
) -> crate::Result<String> {
    Ok(ContactHtmlTemplate {
        site_name,
        name,
        email,
        message,
        plan,
    }
    .render()?)
}
