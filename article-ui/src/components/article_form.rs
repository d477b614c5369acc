use super::LoadingSpinner;
use article_app::form::{FormMsg, FormView};
use leptos::prelude::*;

#[component]
pub fn ArticleForm(
    form: Memo<FormView>,
    #[prop(into)] on_msg: Callback<FormMsg>,
) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_msg.run(FormMsg::Submitted);
    };

    view! {
        <form class="article-form" on:submit=on_form_submit>
            <div class="article-form__field">
                <label class="article-form__label">
                    <span class="article-form__icon">"📧"</span>
                    "Your Email"
                </label>
                <input
                    type="email"
                    class="article-form__input"
                    placeholder="your@email.com"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| on_msg.run(FormMsg::EmailChanged(event_target_value(&ev)))
                    prop:disabled=move || form.with(|f| f.inputs_disabled)
                    required
                />
            </div>

            <div class="article-form__field">
                <label class="article-form__label">
                    <span class="article-form__icon">"🔗"</span>
                    "Article URL"
                </label>
                <input
                    type="url"
                    class="article-form__input"
                    placeholder="https://example.com/article"
                    prop:value=move || form.with(|f| f.article_url.clone())
                    on:input=move |ev| on_msg.run(FormMsg::ArticleUrlChanged(event_target_value(&ev)))
                    prop:disabled=move || form.with(|f| f.inputs_disabled)
                    required
                />
                <p class="article-form__hint">
                    "Example: https://en.wikipedia.org/wiki/Artificial_intelligence"
                </p>
            </div>

            <button
                type="submit"
                class="article-form__button"
                prop:disabled=move || form.with(|f| f.submit_disabled)
            >
                {move || {
                    let (spinner, label) = form.with(|f| (f.show_spinner, f.submit_label));
                    if spinner {
                        view! { <LoadingSpinner label=label/> }.into_any()
                    } else {
                        view! { <span>{label}</span> }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
