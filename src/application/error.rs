// src/application/error.rs
use crate::domain::errors::{DomainError, InvalidChoice};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// A value for parameter `key` that is not among its choices.
    pub fn invalid_choice(key: &str, value: impl ToString) -> Self {
        Self::invalid_parameter(key, InvalidChoice(value.to_string()))
    }

    pub fn invalid_parameter(key: &str, reason: impl std::fmt::Display) -> Self {
        Self::Validation(format!("{key}: {reason}"))
    }
}
