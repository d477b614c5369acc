use crate::components::{ArticleForm, NextSteps, ResultCard};
use article_app::client::ArticleClient;
use article_app::form::{update, FormEffect, FormMsg, FormState};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Runs `msg` through the reducer and stores the new state.
///
/// Returns `None` once the page is unmounted: the signal is disposed, so late
/// completions and timers find nothing to update.
fn apply(state: RwSignal<FormState>, msg: FormMsg) -> Option<Vec<FormEffect>> {
    state.try_update(|current| {
        let (next, effects) = update(std::mem::take(current), msg);
        *current = next;
        effects
    })
}

fn dispatch(state: RwSignal<FormState>, client: StoredValue<ArticleClient>, msg: FormMsg) {
    let Some(effects) = apply(state, msg) else {
        tracing::debug!("Form no longer mounted, dropping message");
        return;
    };

    for effect in effects {
        run_effect(state, client, effect);
    }
}

fn run_effect(state: RwSignal<FormState>, client: StoredValue<ArticleClient>, effect: FormEffect) {
    match effect {
        FormEffect::SendRequest { attempt, request } => {
            let Some(http) = client.try_get_value() else {
                return;
            };
            spawn_local(async move {
                let outcome = http.submit(&request).await;
                if let Err(e) = &outcome {
                    tracing::error!("Submission {} failed: {}", attempt, e);
                }
                dispatch(state, client, FormMsg::Completed { attempt, outcome });
            });
        }
        FormEffect::ScheduleClear { attempt, delay } => {
            set_timeout(
                move || dispatch(state, client, FormMsg::ClearInputs { attempt }),
                delay,
            );
        }
    }
}

#[component]
pub fn ArticleProcessorPage() -> impl IntoView {
    let state = RwSignal::new(FormState::new());
    let client = StoredValue::new(ArticleClient::from_build_env());
    let form = Memo::new(move |_| state.with(FormState::view));
    let on_msg = Callback::new(move |msg: FormMsg| dispatch(state, client, msg));

    view! {
        <div class="processor">
            <div class="processor__card">
                <div class="processor__header">
                    <div class="processor__logo">"🤖"</div>
                    <h1 class="processor__title">"AI Article Processor"</h1>
                    <p class="processor__subtitle">"Powered by n8n + Gemini Flash 2.5"</p>
                </div>

                <ArticleForm form=form on_msg=on_msg/>

                {move || form.with(|f| f.result.clone()).map(|panel| view! {
                    <ResultCard panel=panel/>
                })}

                <NextSteps/>

                <p class="processor__footer">"Built by NahidMuntasir7"</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use article_app::domain::ProcessResponse;
    use article_app::form::SubmissionStatus;

    fn accepted() -> ProcessResponse {
        ProcessResponse {
            status: "accepted".to_string(),
            message: "Queued".to_string(),
            session_id: "abc123".to_string(),
        }
    }

    fn fill(state: RwSignal<FormState>) {
        apply(state, FormMsg::EmailChanged("reader@example.com".to_string()));
        apply(state, FormMsg::ArticleUrlChanged("https://example.com/a".to_string()));
    }

    #[test]
    fn live_form_moves_from_loading_to_success() {
        let owner = Owner::new();
        owner.set();
        let state = RwSignal::new(FormState::new());
        fill(state);

        let effects = apply(state, FormMsg::Submitted).expect("mounted");
        assert!(matches!(effects.as_slice(), [FormEffect::SendRequest { attempt: 1, .. }]));
        assert_eq!(state.with_untracked(FormState::status), SubmissionStatus::Loading);

        let effects = apply(
            state,
            FormMsg::Completed {
                attempt: 1,
                outcome: Ok(accepted()),
            },
        )
        .expect("mounted");
        assert!(matches!(effects.as_slice(), [FormEffect::ScheduleClear { attempt: 1, .. }]));
        state.with_untracked(|s| {
            assert_eq!(s.status(), SubmissionStatus::Success);
            assert_eq!(s.session_id(), "abc123");
        });
    }

    #[test]
    fn disposed_form_drops_late_messages() {
        let owner = Owner::new();
        owner.set();
        let state = RwSignal::new(FormState::new());
        let client = StoredValue::new(ArticleClient::new("http://127.0.0.1:9/unused"));
        fill(state);
        apply(state, FormMsg::Submitted).expect("mounted");

        owner.cleanup();
        assert!(state.try_get_untracked().is_none());
        assert!(client.try_get_value().is_none());

        assert!(apply(
            state,
            FormMsg::Completed {
                attempt: 1,
                outcome: Ok(accepted()),
            },
        )
        .is_none());
        dispatch(
            state,
            client,
            FormMsg::Completed {
                attempt: 1,
                outcome: Ok(accepted()),
            },
        );
        dispatch(state, client, FormMsg::ClearInputs { attempt: 1 });
        assert!(state.try_get_untracked().is_none());
    }
}
