//! Infrastructure adapters for barbiere.
//!
//! This crate implements the ports defined in
//! `barbiere_core::application::ports`. It contains all external
//! dependencies and I/O: clocks, id generation, in-memory repositories,
//! notification logging, and the JSON tenant store used by the CLI.

pub mod clock;
pub mod fixtures;
pub mod id;
pub mod notify;
pub mod repositories;
pub mod store;

// Re-export commonly used adapters
pub use clock::{FixedClock, SystemClock};
pub use id::{SequentialIdGenerator, UuidGenerator};
pub use notify::{FailingNotifier, TracingNotifier};
pub use repositories::{
    InMemoryBarberRepository, InMemoryBlockedSlotRepository, InMemoryBookingRepository,
    InMemoryServiceRepository, InMemoryShopRepository,
};
pub use store::{JsonStore, TenantRepositories, TenantState};
