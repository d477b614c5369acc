mod article_form;
mod loading_spinner;
mod next_steps;
mod result_card;

pub use article_form::ArticleForm;
pub use loading_spinner::LoadingSpinner;
pub use next_steps::NextSteps;
pub use result_card::ResultCard;
