//! Pure business rules.
//!
//! Stateless free functions — no instance state, no I/O, no hidden time
//! source. Everything is a function of its inputs plus an injected clock,
//! which keeps the rules directly testable without mocking repositories.

pub mod booking;
pub mod schedule;

pub use booking::{can_cancel_booking, can_complete_booking, can_create_booking};
pub use schedule::{generate_available_slots, is_slot_available};
