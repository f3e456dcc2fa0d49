use store::FieldErrors;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// One or more form fields were rejected. Shown inline, field by field.
    #[error("{0}")]
    Validation(FieldErrors),
    #[error("Unknown sign-in provider: {0}")]
    UnknownProvider(String),
}

impl AuthError {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AuthError::Validation(errors) => Some(errors),
            AuthError::UnknownProvider(_) => None,
        }
    }
}
