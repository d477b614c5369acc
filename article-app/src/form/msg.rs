use crate::domain::ProcessResponse;
use article_errors::SubmitError;

pub type SubmitOutcome = Result<ProcessResponse, SubmitError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    /// User edited the email input.
    EmailChanged(String),
    /// User edited the article URL input.
    ArticleUrlChanged(String),
    /// User submitted the form.
    Submitted,
    /// The request for `attempt` resolved.
    Completed { attempt: u64, outcome: SubmitOutcome },
    /// Delayed input reset after a successful `attempt`.
    ClearInputs { attempt: u64 },
}
