//! Barbiere Core - Hexagonal Architecture Implementation
//!
//! The availability and booking-conflict engine for a multi-tenant
//! barbershop booking backend, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Delivery (HTTP / barbiere-cli)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (BookingService, ScheduleService,      │
//! │   CatalogService)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │  (Repositories, Clock, IdGenerator,     │
//! │   NotificationService)                  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    barbiere-adapters (Infrastructure)   │
//! │  (InMemory repositories, SystemClock,   │
//! │   UuidGenerator, JsonStore)             │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (TimeSlot, Money, Shop, Barber,        │
//! │   Booking, schedule & booking rules)    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency model
//!
//! The core is synchronous, stateless and pure: every rule is a function
//! of its inputs plus an injected [`domain::Clock`]. The one guarantee the
//! core cannot give alone is at-most-one booking per barber/overlapping
//! range under concurrent requests — that contract belongs to
//! [`application::ports::BookingRepository::save`] and is honored by the
//! storage adapters.

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BlockTimeSlotRequest, BookingRecord, BookingService, CatalogService, CreateBookingRequest,
        CreateServiceRequest, ScheduleService, SlotRecord,
        ports::{
            BarberRepository, BlockedSlotRepository, BookingRepository, Clock, IdGenerator,
            NotificationError, NotificationService, ServiceRepository, ShopRepository,
        },
    };
    pub use crate::domain::{
        Barber, BlockedSlot, Booking, BookingStatus, DaySchedule, Email, Money, PhoneNumber,
        RuleViolation, Service, Shop, ShopSettings, TimeOfDay, TimeSlot, User, UserRole,
        WorkSchedule,
    };
    pub use crate::error::{BarbiereError, BarbiereResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
