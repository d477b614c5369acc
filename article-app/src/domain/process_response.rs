use serde::{Deserialize, Serialize};

pub const STARTED_MESSAGE: &str = "Article processing started! Check your email in a few moments.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub status: String,
    pub message: String,
    pub session_id: String,
}

impl ProcessResponse {
    pub fn started(session_id: String) -> Self {
        Self {
            status: "success".to_string(),
            message: STARTED_MESSAGE.to_string(),
            session_id,
        }
    }
}

/// Body returned alongside a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ErrorResponse {
    /// Extracts a human readable detail from an error body.
    ///
    /// Accepts `{"detail": "..."}` and validation bodies of the form
    /// `{"detail": [{"msg": "..."}, ...]}`; other JSON falls back to the
    /// status code. Returns `None` when the body is not JSON at all.
    pub fn detail_from_body(status: u16, body: &[u8]) -> Option<String> {
        if let Ok(err) = serde_json::from_slice::<ErrorResponse>(body) {
            return Some(err.detail);
        }

        let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
        let messages: Vec<String> = value
            .get("detail")
            .and_then(|d| d.as_array())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if messages.is_empty() {
            Some(format!("HTTP {status}"))
        } else {
            Some(messages.join("; "))
        }
    }
}
