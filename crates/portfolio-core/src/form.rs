//! Contact form record and submission checks.

use std::fmt;

use crate::error::FormError;
use crate::notify::ToastId;

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Message,
}

impl FormField {
    /// All fields, in form order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Message,
    ];

    /// Returns the input's `name` attribute.
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Message => "message",
        }
    }

    /// Phone is the only optional field.
    pub fn is_required(&self) -> bool {
        !matches!(self, FormField::Phone)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Message => "Message",
        };
        f.write_str(label)
    }
}

/// Current values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of one field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    /// Overwrites exactly one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Returns true when every field is empty.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Checks required fields and the email shape.
    ///
    /// A required field only has to be non-empty; whitespace counts as a
    /// value, the same as an HTML `required` input.
    pub fn validate(&self) -> Result<(), FormError> {
        for field in FormField::ALL.into_iter().filter(FormField::is_required) {
            if self.get(field).is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// Accepts `local@domain` with no whitespace and exactly one `@`.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

/// An accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The form as it was when submitted.
    pub form: ContactForm,
    /// Confirmation toast created for it.
    pub toast: ToastId,
}
