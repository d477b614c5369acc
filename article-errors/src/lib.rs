mod app_error;
mod submit_error;

pub use app_error::AppError;
pub use submit_error::{SubmitError, CONNECTIVITY_MESSAGE};
