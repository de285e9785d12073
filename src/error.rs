use thiserror::Error;

/// Field-level problems shown inline next to the offending control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid 10-digit phone number starting with 06 or 07.")]
    Phone,
    #[error("Please enter a valid email address.")]
    Email,
    #[error("Your message must be at least 10 characters long.")]
    MessageTooShort,
}

/// Why a contact submission did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("could not encode payload: {0}")]
    Encode(String),
    #[error("request timed out")]
    TimedOut,
    #[error("request was cancelled")]
    Cancelled,
}

impl From<gloo_net::Error> for SubmitError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => SubmitError::Encode(e.to_string()),
            other => SubmitError::Network(other.to_string()),
        }
    }
}
