mod client;
mod types;

pub use client::WebhookClient;
pub use types::WebhookPayload;
