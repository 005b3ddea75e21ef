//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define what the application needs from
//! the outside world. Adapters in `barbiere-adapters` implement these.
//!
//! - **Driven (output) ports**: repositories, notifications, clock, ids —
//!   called by the use-case services, implemented by infrastructure.
//! - **Driving (input) ports**: the delivery layer (HTTP, CLI) calls the
//!   services directly.

pub mod output;

pub use output::{
    BarberRepository, BlockedSlotRepository, BookingRepository, NotificationError,
    NotificationService, ServiceRepository, ShopRepository,
};

// Time and identity are domain-level ports; re-exported here so adapters
// and delivery code find every port in one place.
pub use crate::domain::ports::{Clock, IdGenerator};
