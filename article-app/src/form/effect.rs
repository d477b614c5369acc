use std::time::Duration;

use crate::domain::ProcessRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    SendRequest { attempt: u64, request: ProcessRequest },
    ScheduleClear { attempt: u64, delay: Duration },
}
