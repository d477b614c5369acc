use chrono::Utc;
use serde::Serialize;

const SOURCE: &str = "api";

/// Body posted to the n8n workflow.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub email: String,
    pub article_url: String,
    pub session_id: String,
    pub timestamp: String,
    pub source: String,
}

impl WebhookPayload {
    pub fn new(email: String, article_url: String, session_id: String) -> Self {
        Self {
            email,
            article_url,
            session_id,
            timestamp: Utc::now().to_rfc3339(),
            source: SOURCE.to_string(),
        }
    }
}
