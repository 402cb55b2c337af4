use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationError};

use crate::ValidationErrors;

pub const INVALID_REQUEST_DATA: &str = "Invalid request data";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const EMAIL_REQUIRED: &str = "Valid email is required";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters long";

pub(crate) const FIELDS: [&str; 3] = ["name", "email", "message"];

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

/// `local@domain.tld` shape only, no RFC 5322 parsing.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// A contact form or trial request that passed validation.
///
/// Values are kept exactly as sent; trimming only applies to the length rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl Submission {
    /// Validates an untyped request body.
    ///
    /// Every field rule runs, so the error list carries all violations at
    /// once. A body that is not a JSON object short-circuits with a single
    /// generic error.
    pub fn from_value(body: &Value) -> Result<Self, ValidationErrors> {
        let Some(fields) = body.as_object() else {
            return Err(ValidationErrors::single(INVALID_REQUEST_DATA));
        };

        let form = ContactForm::lift(fields);
        form.validate()?;

        Ok(Self {
            name: form.name,
            email: form.email.unwrap_or_default(),
            message: form.message,
            plan: text(fields, "plan").map(str::to_owned),
        })
    }
}

/// Shorthand for [`Submission::from_value`].
pub fn validate(body: &Value) -> Result<Submission, ValidationErrors> {
    Submission::from_value(body)
}

#[derive(Validate)]
struct ContactForm {
    #[validate(custom(function = "name_length"))]
    name: String,
    #[validate(
        required(message = "Valid email is required"),
        regex(path = *EMAIL_PATTERN, message = "Invalid email format")
    )]
    email: Option<String>,
    #[validate(custom(function = "message_length"))]
    message: String,
}

impl ContactForm {
    /// Non-text values count as missing; an empty email counts as missing too.
    fn lift(fields: &Map<String, Value>) -> Self {
        Self {
            name: text(fields, "name").unwrap_or_default().to_owned(),
            email: text(fields, "email")
                .filter(|email| !email.is_empty())
                .map(str::to_owned),
            message: text(fields, "message").unwrap_or_default().to_owned(),
        }
    }
}

fn text<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

fn name_length(name: &str) -> Result<(), ValidationError> {
    min_trimmed_chars(name, NAME_MIN_CHARS, "name_length", NAME_TOO_SHORT)
}

fn message_length(message: &str) -> Result<(), ValidationError> {
    min_trimmed_chars(message, MESSAGE_MIN_CHARS, "message_length", MESSAGE_TOO_SHORT)
}

fn min_trimmed_chars(
    value: &str,
    min: usize,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().chars().count() >= min {
        return Ok(());
    }

    Err(ValidationError::new(code).with_message(Cow::Borrowed(message)))
}
