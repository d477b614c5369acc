use crate::form::{FormEffect, FormMsg, FormState, SubmissionStatus, CLEAR_DELAY};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: FormMsg) -> (FormState, Vec<FormEffect>) {
    let effects = match msg {
        FormMsg::EmailChanged(email) => {
            state.set_email(email);
            Vec::new()
        }
        FormMsg::ArticleUrlChanged(article_url) => {
            state.set_article_url(article_url);
            Vec::new()
        }
        FormMsg::Submitted => {
            // One request in flight per form.
            if state.is_loading() {
                return (state, Vec::new());
            }
            match state.begin_submission() {
                Some((attempt, request)) => vec![FormEffect::SendRequest { attempt, request }],
                None => Vec::new(),
            }
        }
        FormMsg::Completed { attempt, outcome } => {
            if attempt != state.attempt() || !state.is_loading() {
                tracing::debug!(attempt, current = state.attempt(), "Ignoring stale completion");
                return (state, Vec::new());
            }
            match outcome {
                Ok(response) => {
                    state.finish_success(response);
                    vec![FormEffect::ScheduleClear {
                        attempt,
                        delay: CLEAR_DELAY,
                    }]
                }
                Err(err) => {
                    state.finish_error(err.user_message());
                    Vec::new()
                }
            }
        }
        FormMsg::ClearInputs { attempt } => {
            if attempt == state.attempt() && state.status() == SubmissionStatus::Success {
                state.clear_inputs();
            }
            Vec::new()
        }
    };

    (state, effects)
}
