use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::validation::{validate_email, validate_min_chars, validate_required};
use crate::errors::FieldError;

pub const NAME_MIN: usize = 2;
pub const SUBJECT_MIN: usize = 2;
pub const MESSAGE_MIN: usize = 10;

/// A stored contact-form submission. Write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: String,
}

/// A submission that already passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewInquiry {
    pub fn into_inquiry(self, id: i64, now: DateTime<Utc>) -> Inquiry {
        Inquiry {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at: timestamp(now),
        }
    }
}

/// `2026-10-18T09:30:00.000Z`
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Raw inquiry fields as they arrive from a JSON body or an HTML form.
/// Anything else the client sends (`id`, `createdAt`, ...) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InquiryForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl InquiryForm {
    /// Build a form from `application/x-www-form-urlencoded` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "subject" => &mut form.subject,
                "message" => &mut form.message,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        form
    }

    /// Check every field and report all failures together.
    pub fn validate(&self) -> Result<NewInquiry, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = validate_required("name", self.name.as_deref(), &mut errors).and_then(|v| {
            validate_min_chars(
                "name",
                v,
                NAME_MIN,
                "Name must be at least 2 characters",
                &mut errors,
            )
        });
        let email = validate_required("email", self.email.as_deref(), &mut errors)
            .and_then(|v| validate_email("email", v, &mut errors));
        let subject =
            validate_required("subject", self.subject.as_deref(), &mut errors).and_then(|v| {
                validate_min_chars(
                    "subject",
                    v,
                    SUBJECT_MIN,
                    "Subject must be at least 2 characters",
                    &mut errors,
                )
            });
        let message =
            validate_required("message", self.message.as_deref(), &mut errors).and_then(|v| {
                validate_min_chars(
                    "message",
                    v,
                    MESSAGE_MIN,
                    "Message must be at least 10 characters",
                    &mut errors,
                )
            });

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) if errors.is_empty() => {
                Ok(NewInquiry {
                    name: name.to_string(),
                    email: email.to_string(),
                    subject: subject.to_string(),
                    message: message.to_string(),
                })
            }
            _ => Err(errors),
        }
    }
}
