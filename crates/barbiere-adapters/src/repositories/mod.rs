//! Repository adapters.

pub mod memory;

pub use memory::{
    InMemoryBarberRepository, InMemoryBlockedSlotRepository, InMemoryBookingRepository,
    InMemoryServiceRepository, InMemoryShopRepository,
};
