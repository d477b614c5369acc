use serde::{Deserialize, Serialize};

/// Failures of the article processing endpoint. Every variant renders as a
/// `{"detail": ...}` body so the form can show it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid article URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("N8N_WEBHOOK_URL is not configured. Please set it in .env file")]
    WebhookNotConfigured,

    #[error("n8n workflow failed with status {0}")]
    WebhookFailed(u16),

    #[error("Request to n8n timed out. Please try again.")]
    WebhookTimeout,

    #[error("Failed to connect to n8n: {0}")]
    WebhookUnreachable(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidEmail(_) | Self::InvalidUrl(_) | Self::InvalidBody(_) => 422,
            Self::WebhookTimeout => 504,
            Self::WebhookNotConfigured
            | Self::WebhookFailed(_)
            | Self::WebhookUnreachable(_)
            | Self::Internal(_) => 500,
        }
    }

    pub fn detail(&self) -> String {
        self.to_string()
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::{IntoResponse, Response};
    use axum::Json;

    #[derive(serde::Serialize)]
    struct ErrorResponse {
        detail: String,
    }

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(ErrorResponse { detail: self.detail() })).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidEmail("x".into()).status_code(), 422);
        assert_eq!(AppError::WebhookTimeout.status_code(), 504);
        assert_eq!(AppError::WebhookFailed(404).status_code(), 500);
        assert_eq!(AppError::WebhookNotConfigured.status_code(), 500);
    }

    #[test]
    fn test_detail_text() {
        assert_eq!(
            AppError::WebhookFailed(502).detail(),
            "n8n workflow failed with status 502"
        );
        assert_eq!(
            AppError::WebhookNotConfigured.detail(),
            "N8N_WEBHOOK_URL is not configured. Please set it in .env file"
        );
    }
}
