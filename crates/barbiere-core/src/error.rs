//! Unified error handling for the barbiere core.
//!
//! Wraps domain and application errors behind one type so delivery layers
//! (HTTP, CLI) have a single surface to map onto transport responses.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::error::{DomainError, RuleViolation};

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BarbiereError {
    /// Errors from the domain layer (validation and business rules).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl From<RuleViolation> for BarbiereError {
    fn from(violation: RuleViolation) -> Self {
        Self::Domain(DomainError::Rule(violation))
    }
}

impl BarbiereError {
    /// Category for transport-level mapping (the HTTP layer turns these
    /// into status codes; the CLI into exit codes).
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Rule => ErrorCategory::Rule,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Coarse error categories exposed to delivery layers.
///
/// Typical HTTP mapping: `Validation`/`Tenant` → 400, `Rule` → 409,
/// `NotFound` → 404, `Conflict` → 409, `Internal` → 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Rule,
    NotFound,
    Tenant,
    Conflict,
    Internal,
}

/// Convenient result type alias.
pub type BarbiereResult<T> = Result<T, BarbiereError>;
