//! Submitting the signup form to `POST /api/volunteer`.
//!
//! The form is validated first; an invalid form never reaches the network.
//! A valid one is sent once. Failures come back to the caller for a manual
//! retry.

use crate::i18n::LanguageContext;
use crate::volunteer::form::{FieldErrors, VolunteerForm};
use crate::volunteer::submission::NOT_CONFIGURED_MESSAGE;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

/// Body of a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubmitOutcome {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Client-side validation failed; nothing was sent
    #[error("invalid form: {0}")]
    Invalid(FieldErrors),

    /// The endpoint answered with a failure status
    #[error("submission rejected ({status}): {error}")]
    Rejected { status: u16, error: String },

    /// The request could not be completed
    #[error("submission failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Summary message to show the visitor in the active language.
    ///
    /// Validation failures also carry per-field messages; this is the banner
    /// shown above the form.
    pub fn user_message<'a>(&self, ctx: &'a LanguageContext) -> &'a str {
        match self {
            SubmitError::Invalid(_) => ctx.t("home.getInvolved.form.invalid"),
            SubmitError::Rejected { status: 500, error } if error == NOT_CONFIGURED_MESSAGE => {
                ctx.t("home.getInvolved.form.unavailable")
            }
            SubmitError::Rejected { .. } | SubmitError::Transport(_) => {
                ctx.t("home.getInvolved.form.failed")
            }
        }
    }
}

/// HTTP client for the volunteer endpoint.
#[derive(Debug, Clone)]
pub struct VolunteerClient {
    client: reqwest::Client,
    endpoint: String,
}

impl VolunteerClient {
    /// `base_url` is the site origin, e.g. `https://example.org`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/volunteer", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate `form` in the context's language, then post it once.
    pub async fn submit(
        &self,
        form: &VolunteerForm,
        ctx: &LanguageContext,
    ) -> Result<SubmitOutcome, SubmitError> {
        form.validate(ctx).map_err(SubmitError::Invalid)?;

        let response = self.client.post(&self.endpoint).json(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            warn!("Volunteer submission rejected ({}): {}", status, error);
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                error,
            });
        }

        let outcome: SubmitOutcome = response.json().await?;
        info!("Volunteer submission accepted");
        Ok(outcome)
    }
}
