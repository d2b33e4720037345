use crate::span::Span;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LunaticError {
    /// A value could not be copied losslessly through the JSON round trip.
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Parameter error: '{name}' {message}")]
    ParameterError { name: String, message: String },

    #[error("Input error: {message}")]
    InputError { message: String, span: Option<Span> },
}

impl LunaticError {
    pub fn span(&self) -> Option<Span> {
        match self {
            LunaticError::InputError { span, .. } => *span,
            _ => None,
        }
    }

    pub fn missing_parameter(name: &str) -> Self {
        LunaticError::ParameterError {
            name: name.to_string(),
            message: "is not set".into(),
        }
    }

    pub fn parameter_kind(name: &str, expected: &str, found: &crate::Value) -> Self {
        LunaticError::ParameterError {
            name: name.to_string(),
            message: format!("expected {expected}, found {}", found.kind()),
        }
    }
}
