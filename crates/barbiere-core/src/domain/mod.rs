//! Core domain layer for barbiere.
//!
//! Pure business logic: value objects, entities, and the availability /
//! booking-conflict rules. No I/O, no async, no repository knowledge —
//! everything here is a function of its inputs plus an injected [`Clock`].
//!
//! ## Layering rules
//!
//! - **No I/O**: repositories, notifications and persistence live behind
//!   the application ports.
//! - **Immutable entities**: every state change returns a new instance.
//! - **Rich domain model**: invariants live in constructors and entity
//!   methods, rule logic in `rules`.

pub mod entities;
pub mod error;
pub mod ports;
pub mod rules;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    Barber, BlockedSlot, Booking, BookingStatus, DaySchedule, Service, Shop, ShopSettings, User,
    UserRole, WorkSchedule,
};
pub use error::{DomainError, ErrorCategory, RuleViolation};
pub use ports::{Clock, IdGenerator};
pub use value_objects::{Email, Money, PhoneNumber, TimeOfDay, TimeSlot};
