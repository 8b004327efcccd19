use thiserror::Error;

use crate::contact::rules::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FieldValidationError {
    pub field: Field,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Your message could not be sent: {reason}")]
    Rejected { reason: String },
    #[error("Sending timed out after {after_ms}ms, please try again")]
    TimedOut { after_ms: u32 },
}
