use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::{domain::ContactSubmissionBody, error_chain_fmt, routes::ContactResponse};

/// Browser-side counterpart of the contact endpoint: posts the form as JSON.
pub struct ContactApiClient {
    base_url: String,
    http_client: Client,
}

impl ContactApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    #[tracing::instrument(name = "Posting the contact form", skip_all)]
    pub async fn send(&self, body: &ContactSubmissionBody) -> Result<(), ContactApiError> {
        let url = format!("{}/api/contact", self.base_url.trim_end_matches('/'));

        let response = self
            .http_client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ContactApiError::Transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match response.json::<ContactResponse>().await {
            Ok(ContactResponse::Failure { error }) => Some(error),
            _ => None,
        };
        Err(ContactApiError::Rejected { status, message })
    }
}

#[derive(thiserror::Error)]
pub enum ContactApiError {
    #[error("Failed to reach the contact endpoint")]
    Transport(#[source] reqwest::Error),
    #[error(
        "The contact endpoint answered with status {status}: {}",
        .message.as_deref().unwrap_or("no message")
    )]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

impl std::fmt::Debug for ContactApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}
