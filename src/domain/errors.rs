// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// A value outside a fixed set of choices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Select a valid choice. {0} is not one of the available choices.")]
pub struct InvalidChoice(pub String);
