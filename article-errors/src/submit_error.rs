pub const CONNECTIVITY_MESSAGE: &str =
    "❌ Error connecting to server. Make sure backend is running on port 8000.";

/// Why a form submission did not produce a `ProcessResponse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The backend answered with a non-success status.
    #[error("backend rejected request with status {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The request never completed.
    #[error("request failed: {0}")]
    Transport(String),

    /// The body could not be read: not a `ProcessResponse` on success, or
    /// not JSON at all on failure.
    #[error("unreadable response body: {0}")]
    MalformedResponse(String),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { detail, .. } => format!("❌ Error: {detail}"),
            Self::Transport(_) | Self::MalformedResponse(_) => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}
