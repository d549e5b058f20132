/// Where the form is in the lifecycle of a single submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    /// `Succeeded` and `Failed` stay put until the notice is acknowledged.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
    }

    pub fn notice(&self) -> Option<StatusNotice> {
        match self {
            SubmissionStatus::Succeeded => Some(StatusNotice {
                title: "Message Sent!",
                body: "Thank you for reaching out. I'll get back to you soon!",
            }),
            SubmissionStatus::Failed => Some(StatusNotice {
                title: "Message Failed",
                body: "Something went wrong. Please try again later.",
            }),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

/// How the endpoint answered an in-flight submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Delivered,
    Failed,
}

/// Feedback shown to the sender once a submission has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusNotice {
    pub title: &'static str,
    pub body: &'static str,
}

impl std::fmt::Display for StatusNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title, self.body)
    }
}
