use article_app::form::ResultPanel;
use leptos::prelude::*;

#[component]
pub fn ResultCard(panel: ResultPanel) -> impl IntoView {
    let class = format!("result {}", panel.tone.css_modifier());

    view! {
        <div class=class>
            <p class="result__message">{panel.message}</p>
            {panel.session_id.map(|session_id| view! {
                <p class="result__session">"Session ID: " {session_id}</p>
            })}
        </div>
    }
}
