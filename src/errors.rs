use thiserror::Error;

use crate::types::InputField;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmiError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: InputField,
        reason: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl EmiError {
    pub(crate) fn invalid_input(field: InputField, reason: impl Into<String>) -> Self {
        EmiError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// field that failed validation, if this is an input error
    pub fn field(&self) -> Option<InputField> {
        match self {
            EmiError::InvalidInput { field, .. } => Some(*field),
            EmiError::InvalidConfiguration { .. } => None,
        }
    }
}

impl From<serde_json::Error> for EmiError {
    fn from(err: serde_json::Error) -> Self {
        EmiError::InvalidConfiguration {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EmiError>;
