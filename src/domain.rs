mod chat_id;
mod contact_submission;
mod notification;

pub use chat_id::ChatId;
pub use contact_submission::{ContactSubmission, ContactSubmissionBody, MalformedSubmission};
pub use notification::Notification;
