use crate::domain::{ProcessRequest, ProcessResponse};
use crate::infrastructure::security::InputSanitizer;
use crate::infrastructure::webhook::{WebhookClient, WebhookPayload};
use article_errors::AppError;
use uuid::Uuid;

/// Validates a submission, assigns it a session id and hands it to the
/// automation webhook.
pub struct ProcessArticle {
    webhook: WebhookClient,
}

impl ProcessArticle {
    pub fn new(webhook: WebhookClient) -> Self {
        Self { webhook }
    }

    pub fn webhook_configured(&self) -> bool {
        self.webhook.is_configured()
    }

    pub async fn execute(&self, request: ProcessRequest) -> Result<ProcessResponse, AppError> {
        let email = InputSanitizer::validate_email(&request.email)?;
        let article_url = InputSanitizer::validate_url(&request.article_url)?;

        if !self.webhook.is_configured() {
            return Err(AppError::WebhookNotConfigured);
        }

        let session_id = Uuid::new_v4().to_string();
        let payload = WebhookPayload::new(email, article_url, session_id.clone());

        self.webhook.send(&payload).await?;

        tracing::info!("Article accepted, session_id={}", session_id);
        Ok(ProcessResponse::started(session_id))
    }
}
