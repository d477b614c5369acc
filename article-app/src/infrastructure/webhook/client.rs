use super::types::WebhookPayload;
use article_errors::AppError;
use reqwest::StatusCode;
use std::time::Duration;

pub struct WebhookClient {
    http_client: reqwest::Client,
    url: Option<String>,
}

impl WebhookClient {
    pub fn new(url: Option<String>, timeout: Duration) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client, url })
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    pub async fn send(&self, payload: &WebhookPayload) -> Result<(), AppError> {
        let url = self.url.as_deref().ok_or(AppError::WebhookNotConfigured)?;

        tracing::info!("Sending to n8n webhook: {}", url);
        tracing::debug!("Payload: {:?}", payload);

        let response = self
            .http_client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::WebhookTimeout
                } else {
                    AppError::WebhookUnreachable(e.to_string())
                }
            })?;

        let status = response.status();
        tracing::info!("n8n response status: {}", status);

        if status == StatusCode::OK || status == StatusCode::CREATED {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!("n8n error response: {} - {}", status, body);
        Err(AppError::WebhookFailed(status.as_u16()))
    }
}
