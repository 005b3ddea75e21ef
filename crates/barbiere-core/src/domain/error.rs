//! Domain error types.
//!
//! Two layers of failure live here:
//!
//! - [`DomainError`] — malformed input to a value object or entity
//!   constructor. Surfaced immediately, never retried.
//! - [`RuleViolation`] — a named business-rule failure from the booking
//!   rules. The `Display` strings are the fixed vocabulary shown to
//!   customers and staff; callers match on the variant, not the text.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for transport-level mapping)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (malformed construction input)
    // ========================================================================
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("slug '{0}' must be lowercase alphanumeric with hyphens only")]
    InvalidSlug(String),

    #[error("invalid time of day '{0}': expected HH:mm between 00:00 and 23:59")]
    InvalidTimeOfDay(String),

    #[error("invalid time slot: {0}")]
    InvalidSlot(&'static str),

    #[error("duration must be between 1 and 480 minutes, got {0}")]
    InvalidDuration(i64),

    #[error("booking advance days must be between 0 and 365, got {0}")]
    InvalidAdvanceDays(u32),

    #[error("money amount cannot be negative")]
    InvalidAmount,

    #[error("currency must be a 3-letter code, got '{0}'")]
    InvalidCurrency(String),

    #[error("cannot combine {left} with {right}")]
    CurrencyMismatch { left: String, right: String },

    #[error("money result cannot be negative")]
    NegativeResult,

    #[error("multiplication factor cannot be negative")]
    NegativeFactor,

    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("invalid phone number '{0}'")]
    InvalidPhoneNumber(String),

    // ========================================================================
    // Business-rule failures
    // ========================================================================
    #[error(transparent)]
    Rule(#[from] RuleViolation),
}

impl DomainError {
    /// Error category for transport-level mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Rule(_) => ErrorCategory::Rule,
            _ => ErrorCategory::Validation,
        }
    }
}

/// A named booking-rule failure.
///
/// Produced by [`crate::domain::rules`] and, as defense-in-depth, by the
/// state-transition methods on [`crate::domain::entities::Booking`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("cannot create booking in the past")]
    InPast,

    #[error("barber is not active")]
    BarberInactive,

    #[error("service is not active")]
    ServiceInactive,

    #[error("shop is not active")]
    ShopInactive,

    #[error("time slot is outside shop operating hours")]
    OutsideOpeningHours,

    #[error("barber is not working at this time")]
    BarberNotWorking,

    #[error("time slot duration does not match service duration")]
    DurationMismatch,

    #[error("time slot is already booked for this barber")]
    SlotTaken,

    #[error("booking is already cancelled")]
    AlreadyCancelled,

    #[error("cannot cancel completed booking")]
    CancelCompleted,

    #[error("cannot cancel booking less than 2 hours before start time")]
    TooCloseToStart,

    #[error("cannot complete cancelled booking")]
    CompleteCancelled,

    #[error("booking is already completed")]
    AlreadyCompleted,

    #[error("only pending bookings can be confirmed")]
    NotPending,
}

/// Error categories for transport-level mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Rule,
}
