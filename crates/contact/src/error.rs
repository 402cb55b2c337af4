/// Human readable validation failures, in rule evaluation order.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed")]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl From<validator::ValidationErrors> for ValidationErrors {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields = errors.field_errors();

        // HashMap order is arbitrary; report in the order the rules are declared
        let messages = crate::FIELDS
            .iter()
            .filter_map(|field| fields.get(*field))
            .flat_map(|errors| errors.iter())
            .map(|error| match &error.message {
                Some(message) => message.to_string(),
                None => error.code.to_string(),
            })
            .collect();

        Self(messages)
    }
}
