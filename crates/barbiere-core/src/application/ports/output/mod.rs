//! Driven (output) ports — implemented by infrastructure.
//!
//! All repositories are synchronous and tenant-agnostic: tenancy is
//! enforced by the services, which thread an explicit `shop_id` through
//! every use case. Data crosses these boundaries as whole entities; the
//! adapters own how they are stored.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::entities::{Barber, BlockedSlot, Booking, Service, Shop};
use crate::domain::value_objects::TimeSlot;
use crate::error::BarbiereResult;

/// Port for booking persistence.
///
/// ## Concurrency contract
///
/// `save` MUST reject an insert whose slot overlaps a non-cancelled
/// booking of the same barber (`ApplicationError::SlotConflict`). The
/// rules re-check overlaps before every save, but only the storage
/// boundary can make the guarantee hold under concurrent requests —
/// implementations back it with an exclusion constraint, a serializable
/// transaction, or (in memory) a check inside the write lock.
#[cfg_attr(test, mockall::automock)]
pub trait BookingRepository: Send + Sync {
    fn save(&self, booking: Booking) -> BarbiereResult<Booking>;

    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Booking>>;

    /// The booking occupying exactly this barber/slot pair, if any.
    fn find_by_slot(&self, barber_id: &str, slot: &TimeSlot) -> BarbiereResult<Option<Booking>>;

    fn find_by_barber_and_date(&self, barber_id: &str, date: NaiveDate)
    -> BarbiereResult<Vec<Booking>>;

    fn find_by_shop_and_date(&self, shop_id: &str, date: NaiveDate) -> BarbiereResult<Vec<Booking>>;

    fn find_by_cancellation_code(&self, code: &str) -> BarbiereResult<Option<Booking>>;

    /// Every booking of this barber whose slot overlaps the given one,
    /// regardless of status — the rules decide what counts as a conflict.
    fn find_overlapping(&self, barber_id: &str, slot: &TimeSlot) -> BarbiereResult<Vec<Booking>>;

    fn update(&self, booking: Booking) -> BarbiereResult<Booking>;
}

#[cfg_attr(test, mockall::automock)]
pub trait BarberRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Barber>>;
    fn find_by_shop(&self, shop_id: &str) -> BarbiereResult<Vec<Barber>>;
    fn save(&self, barber: Barber) -> BarbiereResult<Barber>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ServiceRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Service>>;
    fn find_by_shop(&self, shop_id: &str) -> BarbiereResult<Vec<Service>>;
    fn save(&self, service: Service) -> BarbiereResult<Service>;
    fn update(&self, service: Service) -> BarbiereResult<Service>;
    fn delete(&self, id: &str) -> BarbiereResult<()>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ShopRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Shop>>;
    fn find_by_slug(&self, slug: &str) -> BarbiereResult<Option<Shop>>;
    fn save(&self, shop: Shop) -> BarbiereResult<Shop>;
}

#[cfg_attr(test, mockall::automock)]
pub trait BlockedSlotRepository: Send + Sync {
    fn find_by_barber_and_date(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> BarbiereResult<Vec<BlockedSlot>>;
    fn save(&self, blocked_slot: BlockedSlot) -> BarbiereResult<BlockedSlot>;
    fn delete(&self, id: &str) -> BarbiereResult<()>;
}

/// Delivery failure from a notification channel.
///
/// Deliberately NOT a `BarbiereError`: callers log and swallow these so a
/// confirmed booking is never rolled back by a failed email or SMS.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("notification delivery failed: {0}")]
pub struct NotificationError(pub String);

/// Port for customer notifications. Fire-and-forget from the core's
/// perspective.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationService: Send + Sync {
    fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), NotificationError>;
    fn send_booking_cancellation(&self, booking: &Booking) -> Result<(), NotificationError>;
    fn send_booking_reminder(&self, booking: &Booking) -> Result<(), NotificationError>;
}
