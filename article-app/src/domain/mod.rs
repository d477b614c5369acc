mod process_request;
mod process_response;

pub use process_request::ProcessRequest;
pub use process_response::{ErrorResponse, ProcessResponse, STARTED_MESSAGE};
