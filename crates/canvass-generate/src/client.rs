use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ureq::Agent;

use canvass_core::models::GeneratedSurvey;

use crate::error::GenerateError;

const GENERATE_PATH: &str = "/api/surveys/generate";
const GENERIC_FAILURE: &str = "Failed to generate survey.";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct GenerateRequest<'a> {
    description: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    survey: GeneratedSurvey,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Client for the survey generation endpoint.
#[derive(Clone)]
pub struct GenerateClient {
    agent: Agent,
    base_url: String,
}

impl GenerateClient {
    /// `base_url` is the service root, e.g. `http://127.0.0.1:8000`.
    ///
    /// Error statuses are delivered as responses rather than transport
    /// errors so the service's `detail` body can be read back.
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(REQUEST_TIMEOUT))
            .http_status_as_error(false)
            .build();

        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the service to generate a survey from a free-text description.
    ///
    /// One POST, no retry. Non-success statuses surface the service's
    /// `detail` message when present, or a generic failure message.
    pub fn generate(&self, description: &str) -> Result<GeneratedSurvey, GenerateError> {
        let url = format!("{}{}", self.base_url, GENERATE_PATH);

        info!(url = %url, "requesting survey generation");

        let mut response = self
            .agent
            .post(&url)
            .send_json(GenerateRequest { description })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .body_mut()
                .read_json::<ErrorBody>()
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string());
            warn!(status = status.as_u16(), detail = %detail, "generation request rejected");
            return Err(GenerateError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        let body: GenerateResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| GenerateError::ResponseParse(e.to_string()))?;

        info!(
            question_count = body.survey.questions.as_ref().map_or(0, Vec::len),
            "survey generation complete"
        );

        Ok(body.survey)
    }
}
