use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SubmitError;

use super::validate::validate;

/// An editable field of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
    Phone,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Subject,
        Field::Message,
        Field::Phone,
    ];

    /// Form label; required fields carry a trailing `*`.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "FULL NAME *",
            Field::Email => "EMAIL ADDRESS *",
            Field::Subject => "SUBJECT *",
            Field::Message => "MESSAGE *",
            Field::Phone => "PHONE NUMBER",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "your.email@domain.com",
            Field::Subject => "Message subject",
            Field::Message => "Enter your message here...",
            Field::Phone => "+44 20 1234 5678",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
            Field::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-field validation messages, ordered by field.
pub type FieldErrors = BTreeMap<Field, String>;

/// Submission status shown under the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    /// Text on the submit button.
    pub fn button_label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "SEND MESSAGE",
            FormStatus::Submitting => "TRANSMITTING...",
            FormStatus::Success => "TRANSMISSION SUCCESSFUL",
            FormStatus::Error => "TRANSMISSION FAILED",
        }
    }

    /// Banner text for the transient result display.
    pub fn banner(&self) -> Option<&'static str> {
        match self {
            FormStatus::Success => {
                Some("Message transmitted successfully. You will receive a response within 24 hours.")
            }
            FormStatus::Error => {
                Some("Transmission failed. Please try again or use alternative contact methods.")
            }
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }
}

/// Payload handed to a transmitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Contact form contents, status and inline errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phone: String,
    pub status: FormStatus,
    pub errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
            Field::Phone => &self.phone,
        }
    }

    /// Replace a field value. Clears that field's error only.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
            Field::Phone => self.phone = value,
        }
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Payload for the current contents. An empty phone is omitted.
    pub fn to_message(&self) -> ContactMessage {
        let phone = self.phone.trim();
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
        }
    }

    /// Validate and, if clean, move to [`FormStatus::Submitting`].
    ///
    /// On validation failure the errors are stored and the status is left
    /// as it was.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, SubmitError> {
        if self.status.is_submitting() {
            return Err(SubmitError::Busy);
        }
        self.errors = validate(self);
        if !self.errors.is_empty() {
            return Err(SubmitError::Invalid);
        }
        self.status = FormStatus::Submitting;
        Ok(self.to_message())
    }

    /// Record the transmission outcome. Fields are cleared on success only.
    pub fn finish_submit(&mut self, result: &Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.clear_fields();
                self.status = FormStatus::Success;
            }
            Err(_) => self.status = FormStatus::Error,
        }
    }

    /// Drop a success or error banner back to idle.
    pub fn expire_status(&mut self) {
        if matches!(self.status, FormStatus::Success | FormStatus::Error) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.phone.clear();
        self.errors.clear();
    }
}
