//! Contact form model.
//!
//! The page collects four free-text fields and hands them to a
//! [`ContactSubmitter`]. The only submitter shipped is [`InertSubmitter`],
//! which records the attempt and does nothing else.

use crate::error::ContactError;

/// How a field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    MultiLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "Your full name",
            ContactField::Email => "your.email@example.com",
            ContactField::Subject => "How can we collaborate?",
            ContactField::Message => "Tell us about your project or inquiry...",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            ContactField::Email => FieldKind::Email,
            ContactField::Message => FieldKind::MultiLine,
            ContactField::Name | ContactField::Subject => FieldKind::Text,
        }
    }
}

/// Current values of the form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_blank(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|f| self.get(*f).trim().is_empty())
    }
}

/// Something that accepts a filled-in contact form.
pub trait ContactSubmitter {
    fn submit(&self, form: &ContactForm) -> Result<(), ContactError>;
}

/// Accepts every submission without sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct InertSubmitter;

impl ContactSubmitter for InertSubmitter {
    fn submit(&self, form: &ContactForm) -> Result<(), ContactError> {
        tracing::info!(
            blank = form.is_blank(),
            "contact form submitted; no handler is configured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_and_get_each_field() {
        let mut form = ContactForm::default();
        for field in ContactField::ALL {
            form.set(field, field.key().to_uppercase());
        }
        assert_eq!(form.get(ContactField::Name), "NAME");
        assert_eq!(form.get(ContactField::Message), "MESSAGE");
        assert!(!form.is_blank());
    }

    #[test]
    fn whitespace_only_form_is_blank() {
        let mut form = ContactForm::default();
        form.set(ContactField::Subject, "   ");
        assert!(form.is_blank());
    }

    #[test]
    fn inert_submitter_accepts_anything() {
        let form = ContactForm::default();
        assert_eq!(InertSubmitter.submit(&form), Ok(()));
    }

    #[test]
    fn rejection_carries_the_reason() {
        struct Closed;
        impl ContactSubmitter for Closed {
            fn submit(&self, _form: &ContactForm) -> Result<(), ContactError> {
                Err(ContactError::Rejected("inbox closed".into()))
            }
        }

        let err = Closed.submit(&ContactForm::default()).unwrap_err();
        assert_eq!(err.to_string(), "submission rejected: inbox closed");
    }

    #[test]
    fn field_kinds() {
        let kinds: Vec<_> = ContactField::ALL.iter().map(|f| f.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Text,
                FieldKind::Email,
                FieldKind::Text,
                FieldKind::MultiLine
            ]
        );
    }
}
