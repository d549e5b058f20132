use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The JSON shape exchanged between the contact form and the relay endpoint.
///
/// Absent keys deserialize to empty strings; the fields are not validated.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactSubmissionBody {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One contact form submission, stamped with the time the relay received it.
#[derive(Clone, Debug)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum MalformedSubmission {
    #[error("Expected the submission to be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl ContactSubmission {
    /// Build a submission out of a request body.
    ///
    /// The body must be a JSON object. Nothing else is checked: a missing or
    /// `null` key reads as an empty string and any other non-string value is
    /// kept as its JSON text.
    pub fn parse(body: Value, submitted_at: DateTime<Utc>) -> Result<Self, MalformedSubmission> {
        let fields = match body {
            Value::Object(fields) => fields,
            other => return Err(MalformedSubmission::NotAnObject(json_kind(&other))),
        };
        let field = |key: &str| fields.get(key).map(field_text).unwrap_or_default();

        Ok(Self {
            name: field("name"),
            email: field("email"),
            subject: field("subject"),
            message: field("message"),
            submitted_at,
        })
    }

    pub fn received(body: ContactSubmissionBody, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: body.name,
            email: body.email,
            subject: body.subject,
            message: body.message,
            submitted_at,
        }
    }
}

fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
