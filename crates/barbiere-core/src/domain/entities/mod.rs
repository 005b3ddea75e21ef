//! Identity-bearing domain records.
//!
//! Entities are immutable: every state change ("wither") returns a new
//! instance, so no shared mutable entity can leak across concurrent
//! operations. Constructors enforce invariants; serde deserialization is
//! the trusted reconstruction path used by storage adapters.

pub mod barber;
pub mod blocked_slot;
pub mod booking;
pub mod service;
pub mod shop;
pub mod user;

pub use barber::{Barber, DaySchedule, WorkSchedule};
pub use blocked_slot::BlockedSlot;
pub use booking::{Booking, BookingStatus};
pub use service::Service;
pub use shop::{Shop, ShopSettings};
pub use user::{User, UserRole};

use crate::domain::error::DomainError;

/// Shared constructor guard: identity and name fields are never blank.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}
