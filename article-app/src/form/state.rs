use std::time::Duration;

use crate::domain::{ProcessRequest, ProcessResponse};

/// How long the inputs stay populated after a successful submission.
pub const CLEAR_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Everything the form shows. Only `update` mutates it, so message and
/// session id always move together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    email: String,
    article_url: String,
    status: SubmissionStatus,
    message: String,
    session_id: String,
    attempt: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn article_url(&self) -> &str {
        &self.article_url
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Number of submissions started so far.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn is_loading(&self) -> bool {
        self.status == SubmissionStatus::Loading
    }

    pub(crate) fn set_email(&mut self, email: String) {
        self.email = email;
    }

    pub(crate) fn set_article_url(&mut self, article_url: String) {
        self.article_url = article_url;
    }

    /// Returns `None` when either field is blank.
    pub(crate) fn begin_submission(&mut self) -> Option<(u64, ProcessRequest)> {
        let request = ProcessRequest::new(&self.email, &self.article_url);
        if request.email.is_empty() || request.article_url.is_empty() {
            return None;
        }

        self.attempt += 1;
        self.status = SubmissionStatus::Loading;
        self.message.clear();
        self.session_id.clear();
        Some((self.attempt, request))
    }

    pub(crate) fn finish_success(&mut self, response: ProcessResponse) {
        self.status = SubmissionStatus::Success;
        self.message = format!("✅ {}", response.message);
        self.session_id = response.session_id;
    }

    pub(crate) fn finish_error(&mut self, message: String) {
        self.status = SubmissionStatus::Error;
        self.message = message;
        self.session_id.clear();
    }

    pub(crate) fn clear_inputs(&mut self) {
        self.email.clear();
        self.article_url.clear();
    }
}
