use std::fmt;

// Domain-level errors for form and session workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    SubmissionInFlight,
    FieldNotOnForm,
    StorageFailure,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::SubmissionInFlight => write!(f, "a submission is already in progress"),
            AuthError::FieldNotOnForm => write!(f, "field does not belong to this form"),
            AuthError::StorageFailure => write!(f, "session storage failure"),
        }
    }
}

impl std::error::Error for AuthError {}
