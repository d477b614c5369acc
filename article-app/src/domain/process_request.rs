use serde::{Deserialize, Serialize};

/// Wire payload of `POST /api/process-article`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub email: String,
    pub article_url: String,
}

impl ProcessRequest {
    /// Builds the payload from raw form input, trimming surrounding whitespace.
    pub fn new(email: &str, article_url: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            article_url: article_url.trim().to_string(),
        }
    }
}
