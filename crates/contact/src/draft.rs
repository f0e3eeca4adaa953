use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::VALIDATION_ERROR_TEXT;

/// Form fields exactly as typed. Mutated field-by-field by the UI and
/// cleared only after a confirmed remote delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", VALIDATION_ERROR_TEXT)]
pub struct ValidationError;

impl ContactDraft {
    /// Trims every field, then requires a non-empty email and message.
    /// The draft itself is left untouched either way.
    pub fn validate(&self) -> Result<ContactMessage, ValidationError> {
        let message = ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        if message.email.is_empty() || message.message.is_empty() {
            return Err(ValidationError);
        }

        Ok(message)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Trimmed, validated form of a draft. Field names are the wire payload
/// the form endpoint expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// The authored subject, or "Portfolio message from {name}" when none
    /// was given. With an empty name the trailing space is trimmed away.
    pub fn subject_or_default(&self) -> String {
        if self.subject.is_empty() {
            format!("Portfolio message from {}", self.name)
                .trim()
                .to_string()
        } else {
            self.subject.clone()
        }
    }

    /// `mailto:` link carrying the message as URL-encoded subject and body
    /// query parameters.
    pub fn mailto_link(&self, recipient: &str) -> String {
        let subject = self.subject_or_default();
        let body = format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        );

        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, subject: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[test]
    fn validation_trims_every_field() {
        let message = draft("  Alex ", " a@x.com ", " Hello ", "  Hi  ")
            .validate()
            .expect("valid draft");
        assert_eq!(message.name, "Alex");
        assert_eq!(message.email, "a@x.com");
        assert_eq!(message.subject, "Hello");
        assert_eq!(message.message, "Hi");
    }

    #[test]
    fn missing_email_fails_and_leaves_draft_untouched() {
        let original = draft("Alex", "   ", "", "Hi there");
        let checked = original.clone();
        assert_eq!(checked.validate(), Err(ValidationError));
        assert_eq!(checked, original);
    }

    #[test]
    fn missing_message_fails_validation() {
        assert_eq!(
            draft("Alex", "a@x.com", "Subject", "   ").validate(),
            Err(ValidationError)
        );
    }

    #[test]
    fn name_and_subject_are_optional() {
        assert!(draft("", "a@x.com", "", "Hi").validate().is_ok());
    }

    #[test]
    fn validation_error_displays_the_fixed_text() {
        assert_eq!(
            ValidationError.to_string(),
            "Please provide your email and a message."
        );
    }

    #[test]
    fn subject_defaults_to_sender_name() {
        let message = draft("Alex", "a@x.com", "", "Hi").validate().expect("valid");
        assert_eq!(message.subject_or_default(), "Portfolio message from Alex");
    }

    #[test]
    fn subject_default_degrades_without_a_name() {
        let message = draft("", "a@x.com", "", "Hi").validate().expect("valid");
        assert_eq!(message.subject_or_default(), "Portfolio message from");
    }

    #[test]
    fn authored_subject_wins_over_default() {
        let message = draft("Alex", "a@x.com", "Question", "Hi")
            .validate()
            .expect("valid");
        assert_eq!(message.subject_or_default(), "Question");
    }

    #[test]
    fn mailto_link_encodes_subject_and_body() {
        let message = draft("Alex", "a@x.com", "", "Hi").validate().expect("valid");
        assert_eq!(
            message.mailto_link("hello@example.com"),
            "mailto:hello@example.com?subject=Portfolio%20message%20from%20Alex\
             &body=Name%3A%20Alex%0AEmail%3A%20a%40x.com%0A%0AHi"
        );
    }

    #[test]
    fn wire_payload_uses_the_four_field_names() {
        let message = draft("Alex", "a@x.com", "Hello", "Hi")
            .validate()
            .expect("valid");
        let value = serde_json::to_value(&message).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Alex",
                "email": "a@x.com",
                "subject": "Hello",
                "message": "Hi",
            })
        );
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut d = draft("Alex", "a@x.com", "Subject", "Hi");
        d.clear();
        assert_eq!(d, ContactDraft::default());
    }
}
