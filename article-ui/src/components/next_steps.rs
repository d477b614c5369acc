use leptos::prelude::*;

const STEPS: &[&str] = &[
    "Article is scraped and analyzed",
    "AI generates summary & insights",
    "Results saved to Google Sheets",
    "Email sent to your inbox",
];

#[component]
pub fn NextSteps() -> impl IntoView {
    view! {
        <div class="next-steps">
            <h3 class="next-steps__title">"📋 What happens next?"</h3>
            <ol class="next-steps__list">
                {STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect::<Vec<_>>()}
            </ol>
        </div>
    }
}
