use std::time::Duration;

use thiserror::Error;

/// How long the success or error banner stays up.
pub const STATUS_TIMEOUT: Duration = Duration::from_millis(3000);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("invalid recipient address: {0:?}")]
    InvalidRecipient(String),
    #[error("couldn't open mail client: {0}")]
    Navigation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Form control name, also used as its element id.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// Builds a `mailto:` link carrying the subject and message to `recipient`.
    pub fn mailto_uri(&self, recipient: &str) -> Result<String, ContactError> {
        let valid = recipient
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && !host.is_empty())
            && !recipient
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '?' | '&' | '#' | '/'));
        if !valid {
            return Err(ContactError::InvalidRecipient(recipient.to_string()));
        }
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body())
        ))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    /// Hands the `mailto:` link to `navigate`, then records how that went.
    ///
    /// On success the fields are cleared; on failure they are kept so nothing
    /// typed is lost.
    pub fn submit<F>(&mut self, recipient: &str, navigate: F) -> Result<(), ContactError>
    where
        F: FnOnce(&str) -> Result<(), ContactError>,
    {
        let res = self
            .fields
            .mailto_uri(recipient)
            .and_then(|uri| navigate(&uri));
        match res {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = SubmitStatus::Success;
            }
            Err(_) => self.status = SubmitStatus::Error,
        }
        res
    }

    pub fn reset_status(&mut self) {
        self.status = SubmitStatus::Idle;
    }
}
