//! Form state machine: a pure reducer over the five UI fields plus
//! view-model helpers for rendering.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::FormEffect;
pub use msg::{FormMsg, SubmitOutcome};
pub use state::{FormState, SubmissionStatus, CLEAR_DELAY};
pub use update::update;
pub use view_model::{FormView, ResultPanel, Tone, SUBMIT_LABEL, SUBMIT_LABEL_LOADING};
