use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use axum_extra::extract::WithRejection;
use axum_macros::debug_handler;
use chrono::Utc;
use serde_json::Value;

use crate::{
    domain::{ContactSubmission, Notification},
    telegram_client::TelegramClient,
};

pub use contact_errors::*;
pub use contact_types::*;

#[cfg_attr(any(test, debug_assertions), debug_handler(state = crate::startup::AppState))]
#[tracing::instrument(
    name = "Relaying a contact submission",
    skip(telegram_client, body),
    fields(sender_name = tracing::field::Empty)
)]
pub async fn submit_contact(
    State(telegram_client): State<Arc<TelegramClient>>,
    WithRejection(body, _): WithRejection<Bytes, ContactError>,
) -> Result<impl IntoResponse, ContactError> {
    // The content type is not checked, only the body has to be JSON.
    let body: Value =
        serde_json::from_slice(&body).map_err(|e| ContactError::MalformedBody(e.into()))?;
    let submission = ContactSubmission::parse(body, Utc::now())
        .map_err(|e| ContactError::MalformedBody(e.into()))?;

    tracing::Span::current().record("sender_name", &tracing::field::display(&submission.name));

    let notification = Notification::render(&submission);
    telegram_client
        .send_message(&notification)
        .await
        .map_err(|e| ContactError::DeliveryFailed(e.into()))?;

    tracing::info!("Contact submission relayed.");
    Ok(Json(ContactResponse::Success { success: true }))
}

mod contact_types {
    use serde::{Deserialize, Serialize};

    /// Body returned by the contact endpoint.
    #[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
    #[serde(untagged)]
    pub enum ContactResponse {
        Success { success: bool },
        Failure { error: String },
    }
}

mod contact_errors {
    use axum::{extract::rejection::BytesRejection, response::IntoResponse, Json};
    use http::StatusCode;

    use super::ContactResponse;
    use crate::error_chain_fmt;

    /// The only message a caller ever sees when a submission is not relayed.
    pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message";

    #[derive(thiserror::Error)]
    pub enum ContactError {
        #[error("The request body is not a contact submission")]
        MalformedBody(#[source] anyhow::Error),
        #[error("The notification could not be delivered")]
        DeliveryFailed(#[source] anyhow::Error),
    }

    impl std::fmt::Debug for ContactError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            error_chain_fmt(self, f)
        }
    }

    impl From<BytesRejection> for ContactError {
        fn from(rejection: BytesRejection) -> Self {
            Self::MalformedBody(rejection.into())
        }
    }

    impl IntoResponse for ContactError {
        fn into_response(self) -> axum::response::Response {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Failed to relay a contact submission"
            );
            let body = ContactResponse::Failure {
                error: GENERIC_FAILURE_MESSAGE.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
