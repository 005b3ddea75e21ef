//! Application layer errors.
//!
//! These represent orchestration failures — missing entities, cross-tenant
//! references, storage rejections. Business-logic failures are
//! `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The referenced entity belongs to a different shop.
    #[error("{entity} '{id}' does not belong to shop '{shop_id}'")]
    TenantMismatch {
        entity: &'static str,
        id: String,
        shop_id: String,
    },

    /// Self-service cancellation with a wrong code.
    #[error("invalid cancellation code")]
    InvalidCancellationCode,

    /// Storage-level exclusion: a conflicting booking landed first.
    ///
    /// This is the persistence half of the no-double-booking guarantee —
    /// the rules' overlap check is necessary but not sufficient under
    /// concurrency.
    #[error("conflicting booking already exists for barber {barber_id}")]
    SlotConflict { barber_id: String },

    /// Repository lock poisoned (in-memory adapters).
    #[error("repository store lock poisoned")]
    StoreLock,

    /// Any other storage failure (I/O, serialization, ...).
    #[error("storage error: {reason}")]
    Storage { reason: String },
}

impl ApplicationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::TenantMismatch { .. } => ErrorCategory::Tenant,
            Self::InvalidCancellationCode => ErrorCategory::Validation,
            Self::SlotConflict { .. } => ErrorCategory::Conflict,
            Self::StoreLock | Self::Storage { .. } => ErrorCategory::Internal,
        }
    }
}
