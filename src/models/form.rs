use std::collections::HashMap;

/// Field names posted by the site's booking and contact forms.
pub mod field {
    pub const NAME: &str = "Name";
    pub const EVENT_TYPE: &str = "Event-Type";
    pub const PHONE_NUMBER: &str = "Phone-Number";
    pub const EMAIL_ADDRESS: &str = "Email-Address";
    pub const EMAIL: &str = "email";
    pub const EVENT_DATE: &str = "Event-Date";
    pub const EVENT_TIME: &str = "Event-Time";
    pub const FORMATTED_DATE_TIME: &str = "Formatted-Date-Time";
    pub const NUMBER_OF_SEATS: &str = "Number-of-Seats";
    pub const MESSAGE: &str = "Message";
}

/// Decoded form fields of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    fields: HashMap<String, String>,
}

impl FormPayload {
    /// Collect decoded pairs; a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fields = HashMap::new();
        for (key, value) in pairs {
            fields.insert(key.into(), value.into());
        }
        Self { fields }
    }

    /// Value of a field, or an empty string when it was not posted.
    pub fn get(&self, name: &str) -> &str {
        self.non_empty(name).unwrap_or("")
    }

    /// Value of a field if it was posted with a non-empty value.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Submitter name for log lines.
    pub fn display_name(&self) -> &str {
        self.non_empty(field::NAME).unwrap_or("No name")
    }
}
