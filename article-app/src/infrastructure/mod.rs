pub mod security;
pub mod webhook;
