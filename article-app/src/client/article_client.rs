use crate::domain::{ErrorResponse, ProcessRequest, ProcessResponse};
use crate::form::SubmitOutcome;
use article_errors::SubmitError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/process-article";

/// Posts form submissions to the backend. Makes exactly one attempt per call
/// and applies no timeout of its own.
#[derive(Debug, Clone)]
pub struct ArticleClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ArticleClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Uses `ARTICLE_API_URL` captured at build time, if set.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ARTICLE_API_URL").unwrap_or(DEFAULT_ENDPOINT))
    }

    pub async fn submit(&self, request: &ProcessRequest) -> SubmitOutcome {
        tracing::info!("Sending request to backend: {}", self.endpoint);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Backend unreachable: {}", e);
                SubmitError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if !status.is_success() {
            let detail = ErrorResponse::detail_from_body(status.as_u16(), &body).ok_or_else(|| {
                tracing::error!("Backend returned {} with a non-JSON body", status);
                SubmitError::MalformedResponse(format!("non-JSON body with status {status}"))
            })?;
            tracing::warn!("Backend rejected request: {} - {}", status, detail);
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let data: ProcessResponse = serde_json::from_slice(&body)
            .map_err(|e| SubmitError::MalformedResponse(e.to_string()))?;
        tracing::info!("Response: status={} session_id={}", data.status, data.session_id);
        Ok(data)
    }
}
