use crate::form::{FormState, SubmissionStatus};

pub const SUBMIT_LABEL: &str = "🚀 Process Article";
pub const SUBMIT_LABEL_LOADING: &str = "Processing...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "result--success",
            Self::Error => "result--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub tone: Tone,
    pub message: String,
    pub session_id: Option<String>,
}

/// Render-ready snapshot of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub email: String,
    pub article_url: String,
    pub inputs_disabled: bool,
    pub submit_disabled: bool,
    pub show_spinner: bool,
    pub submit_label: &'static str,
    pub result: Option<ResultPanel>,
}

impl FormState {
    pub fn view(&self) -> FormView {
        let loading = self.is_loading();

        let result = (!self.message().is_empty()).then(|| ResultPanel {
            tone: match self.status() {
                SubmissionStatus::Success => Tone::Success,
                _ => Tone::Error,
            },
            message: self.message().to_string(),
            session_id: (!self.session_id().is_empty()).then(|| self.session_id().to_string()),
        });

        FormView {
            email: self.email().to_string(),
            article_url: self.article_url().to_string(),
            inputs_disabled: loading,
            submit_disabled: loading,
            show_spinner: loading,
            submit_label: if loading {
                SUBMIT_LABEL_LOADING
            } else {
                SUBMIT_LABEL
            },
            result,
        }
    }
}
