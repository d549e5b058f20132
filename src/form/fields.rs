use crate::domain::ContactSubmissionBody;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormFields {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub(super) fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }

    pub(super) fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_body(&self) -> ContactSubmissionBody {
        ContactSubmissionBody {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    /// Every field is required and the email must look like an address.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors: Vec<FieldError> = FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .map(FieldError::Missing)
            .collect();

        let email = self.email.trim();
        if !email.is_empty() && !validator::validate_email(email) {
            errors.push(FieldError::InvalidEmail(self.email.clone()));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("The {0} field is required")]
    Missing(FormField),
    #[error("{0} is not a valid email address")]
    InvalidEmail(String),
}
