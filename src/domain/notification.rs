use chrono::{DateTime, Utc};

use super::ContactSubmission;

/// The text posted to the notification channel for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification(String);

impl Notification {
    /// Render a submission. Field values are inserted as-is.
    pub fn render(submission: &ContactSubmission) -> Self {
        let text = format!(
            "🔔 New Contact Form Submission\n\
             \n\
             👤 Name: {}\n\
             📧 Email: {}\n\
             📝 Subject: {}\n\
             💬 Message: {}\n\
             \n\
             📅 Date: {}",
            submission.name,
            submission.email,
            submission.subject,
            submission.message,
            format_timestamp(&submission.submitted_at),
        );
        Self(text)
    }
}

/// `3/9/2024, 2:05:00 PM UTC`
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string()
}

impl AsRef<str> for Notification {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
