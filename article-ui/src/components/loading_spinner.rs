use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(label: &'static str) -> impl IntoView {
    view! {
        <span class="loading">
            <svg class="loading__spinner" viewBox="0 0 24 24" width="20" height="20">
                <circle class="loading__track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" fill="none"/>
                <path class="loading__arc" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4z"/>
            </svg>
            {label}
        </span>
    }
}
