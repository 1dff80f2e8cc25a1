use std::fmt::Debug;

use reqwest::multipart::Form;
use reqwest::Client;
use reqwest::StatusCode;

use crate::domain::ContactSubmission;
use crate::utils::error_chain_fmt;

/// Why the relay did not accept a submission. Callers treat both variants the
/// same way (fall back to `mailto:`); the split only matters for logs.
#[derive(thiserror::Error)]
pub enum RelayError {
    #[error("Relay rejected the submission with status {0}")]
    Rejected(StatusCode),
    #[error("Could not reach the relay")]
    Transport(#[source] reqwest::Error),
}

impl Debug for RelayError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Client for a third-party form relay (e.g. Formspree), which forwards each
/// submission to the site owner by email.
///
/// `Client` pools connections internally and is cheap to clone, so one
/// `RelayClient` is built at startup and shared by all workers.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http_client: Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http_client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }

    /// `POST` the submission as a multipart form with the fields `name`,
    /// `email`, `message` and `_subject`.
    ///
    /// Any 2xx status counts as delivered. No retries, and no timeout beyond
    /// the client's defaults.
    #[tracing::instrument(name = "Posting submission to relay", skip_all, fields(endpoint = %self.endpoint))]
    pub async fn send(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), RelayError> {
        let form = Form::new()
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("message", submission.message.clone())
            .text("_subject", submission.relay_subject());

        let resp = self
            .http_client
            .post(&self.endpoint)
            // without this, Formspree answers browser-style with a redirect to its
            // own thank-you page
            .header("Accept", "application/json")
            .multipart(form)
            .send()
            .await
            .map_err(RelayError::Transport)?;

        match resp.status() {
            status if status.is_success() => Ok(()),
            status => Err(RelayError::Rejected(status)),
        }
    }
}
