//! Thread-safe in-memory repositories.
//!
//! Backing store for tests and for the CLI's load-mutate-save cycle.
//! Every repository is a cheap `Clone` sharing one `Arc<RwLock<..>>`.
//!
//! `InMemoryBookingRepository::save` enforces the storage half of the
//! no-double-booking contract: the overlap check and the insert happen
//! under the same write lock, so of two racing saves for the same
//! barber/slot exactly one succeeds.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use barbiere_core::application::ApplicationError;
use barbiere_core::application::ports::{
    BarberRepository, BlockedSlotRepository, BookingRepository, ServiceRepository, ShopRepository,
};
use barbiere_core::domain::{Barber, BlockedSlot, Booking, BookingStatus, Service, Shop, TimeSlot};
use barbiere_core::error::BarbiereResult;
use chrono::NaiveDate;

type Shared<T> = Arc<RwLock<HashMap<String, T>>>;

fn not_found(entity: &'static str, id: &str) -> ApplicationError {
    ApplicationError::NotFound {
        entity,
        id: id.to_string(),
    }
}

// ── Bookings ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    inner: Shared<Booking>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        let map = bookings
            .into_iter()
            .map(|b| (b.id().to_string(), b))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    /// All bookings, ordered by start time then id (stable snapshots for
    /// the JSON store).
    pub fn snapshot(&self) -> BarbiereResult<Vec<Booking>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut all: Vec<Booking> = inner.values().cloned().collect();
        all.sort_by(|a, b| {
            a.time_slot()
                .start_time()
                .cmp(&b.time_slot().start_time())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(all)
    }
}

impl BookingRepository for InMemoryBookingRepository {
    fn save(&self, booking: Booking) -> BarbiereResult<Booking> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;

        // Exclusion constraint: at most one live booking per barber and
        // overlapping range. Checked under the write lock so a concurrent
        // save cannot slip in between check and insert.
        let conflict = inner.values().any(|existing| {
            existing.id() != booking.id()
                && existing.barber_id() == booking.barber_id()
                && existing.status() != BookingStatus::Cancelled
                && existing.time_slot().overlaps(booking.time_slot())
        });
        if conflict {
            return Err(ApplicationError::SlotConflict {
                barber_id: booking.barber_id().to_string(),
            }
            .into());
        }

        inner.insert(booking.id().to_string(), booking.clone());
        Ok(booking)
    }

    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Booking>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        Ok(inner.get(id).cloned())
    }

    fn find_by_slot(&self, barber_id: &str, slot: &TimeSlot) -> BarbiereResult<Option<Booking>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        Ok(inner
            .values()
            .find(|b| b.barber_id() == barber_id && b.time_slot() == slot)
            .cloned())
    }

    fn find_by_barber_and_date(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> BarbiereResult<Vec<Booking>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut found: Vec<Booking> = inner
            .values()
            .filter(|b| b.barber_id() == barber_id && b.time_slot().date() == date)
            .cloned()
            .collect();
        found.sort_by_key(|b| b.time_slot().start_time());
        Ok(found)
    }

    fn find_by_shop_and_date(&self, shop_id: &str, date: NaiveDate) -> BarbiereResult<Vec<Booking>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut found: Vec<Booking> = inner
            .values()
            .filter(|b| b.shop_id() == shop_id && b.time_slot().date() == date)
            .cloned()
            .collect();
        found.sort_by_key(|b| b.time_slot().start_time());
        Ok(found)
    }

    fn find_by_cancellation_code(&self, code: &str) -> BarbiereResult<Option<Booking>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        Ok(inner
            .values()
            .find(|b| b.verify_cancellation_code(code))
            .cloned())
    }

    fn find_overlapping(&self, barber_id: &str, slot: &TimeSlot) -> BarbiereResult<Vec<Booking>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut found: Vec<Booking> = inner
            .values()
            .filter(|b| b.barber_id() == barber_id && b.time_slot().overlaps(slot))
            .cloned()
            .collect();
        found.sort_by_key(|b| b.time_slot().start_time());
        Ok(found)
    }

    fn update(&self, booking: Booking) -> BarbiereResult<Booking> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        if !inner.contains_key(booking.id()) {
            return Err(not_found("booking", booking.id()).into());
        }
        inner.insert(booking.id().to_string(), booking.clone());
        Ok(booking)
    }
}

// ── Shops ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryShopRepository {
    inner: Shared<Shop>,
}

impl InMemoryShopRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shops(shops: Vec<Shop>) -> Self {
        let map = shops.into_iter().map(|s| (s.id().to_string(), s)).collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn snapshot(&self) -> BarbiereResult<Vec<Shop>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut all: Vec<Shop> = inner.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}

impl ShopRepository for InMemoryShopRepository {
    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Shop>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        Ok(inner.get(id).cloned())
    }

    fn find_by_slug(&self, slug: &str) -> BarbiereResult<Option<Shop>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        Ok(inner.values().find(|s| s.slug() == slug).cloned())
    }

    fn save(&self, shop: Shop) -> BarbiereResult<Shop> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        inner.insert(shop.id().to_string(), shop.clone());
        Ok(shop)
    }
}

// ── Barbers ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryBarberRepository {
    inner: Shared<Barber>,
}

impl InMemoryBarberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_barbers(barbers: Vec<Barber>) -> Self {
        let map = barbers
            .into_iter()
            .map(|b| (b.id().to_string(), b))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn snapshot(&self) -> BarbiereResult<Vec<Barber>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut all: Vec<Barber> = inner.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}

impl BarberRepository for InMemoryBarberRepository {
    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Barber>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        Ok(inner.get(id).cloned())
    }

    fn find_by_shop(&self, shop_id: &str) -> BarbiereResult<Vec<Barber>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut found: Vec<Barber> = inner
            .values()
            .filter(|b| b.shop_id() == shop_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(found)
    }

    fn save(&self, barber: Barber) -> BarbiereResult<Barber> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        inner.insert(barber.id().to_string(), barber.clone());
        Ok(barber)
    }
}

// ── Services ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceRepository {
    inner: Shared<Service>,
}

impl InMemoryServiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_services(services: Vec<Service>) -> Self {
        let map = services
            .into_iter()
            .map(|s| (s.id().to_string(), s))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn snapshot(&self) -> BarbiereResult<Vec<Service>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut all: Vec<Service> = inner.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}

impl ServiceRepository for InMemoryServiceRepository {
    fn find_by_id(&self, id: &str) -> BarbiereResult<Option<Service>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        Ok(inner.get(id).cloned())
    }

    fn find_by_shop(&self, shop_id: &str) -> BarbiereResult<Vec<Service>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut found: Vec<Service> = inner
            .values()
            .filter(|s| s.shop_id() == shop_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(found)
    }

    fn save(&self, service: Service) -> BarbiereResult<Service> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        inner.insert(service.id().to_string(), service.clone());
        Ok(service)
    }

    fn update(&self, service: Service) -> BarbiereResult<Service> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        if !inner.contains_key(service.id()) {
            return Err(not_found("service", service.id()).into());
        }
        inner.insert(service.id().to_string(), service.clone());
        Ok(service)
    }

    fn delete(&self, id: &str) -> BarbiereResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        inner
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found("service", id).into())
    }
}

// ── Blocked slots ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InMemoryBlockedSlotRepository {
    inner: Shared<BlockedSlot>,
}

impl InMemoryBlockedSlotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocked_slots(blocked: Vec<BlockedSlot>) -> Self {
        let map = blocked
            .into_iter()
            .map(|b| (b.id().to_string(), b))
            .collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub fn snapshot(&self) -> BarbiereResult<Vec<BlockedSlot>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut all: Vec<BlockedSlot> = inner.values().cloned().collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(all)
    }
}

impl BlockedSlotRepository for InMemoryBlockedSlotRepository {
    fn find_by_barber_and_date(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> BarbiereResult<Vec<BlockedSlot>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::StoreLock)?;
        let mut found: Vec<BlockedSlot> = inner
            .values()
            .filter(|b| b.barber_id() == barber_id && b.time_slot().date() == date)
            .cloned()
            .collect();
        found.sort_by_key(|b| b.time_slot().start_time());
        Ok(found)
    }

    fn save(&self, blocked_slot: BlockedSlot) -> BarbiereResult<BlockedSlot> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        inner.insert(blocked_slot.id().to_string(), blocked_slot.clone());
        Ok(blocked_slot)
    }

    fn delete(&self, id: &str) -> BarbiereResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::StoreLock)?;
        inner
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| not_found("blocked slot", id).into())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use barbiere_core::domain::PhoneNumber;
    use barbiere_core::error::BarbiereError;
    use chrono::NaiveDate;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn booking(id: &str, barber_id: &str, hour: u32, status: BookingStatus) -> Booking {
        Booking::reconstruct(
            id,
            "shop-1",
            barber_id,
            "sv-1",
            "Anna Verdi",
            PhoneNumber::new("+393331234567").unwrap(),
            None,
            TimeSlot::new(monday(), hour, 0, 30).unwrap(),
            status,
            monday().and_hms_opt(8, 0, 0).unwrap(),
            format!("CODE-{id}"),
        )
    }

    #[test]
    fn save_enforces_overlap_exclusion() {
        let repo = InMemoryBookingRepository::new();
        repo.save(booking("bk-1", "b-1", 10, BookingStatus::Pending))
            .unwrap();

        // Same barber, same slot: the constraint fires.
        let err = repo
            .save(booking("bk-2", "b-1", 10, BookingStatus::Pending))
            .unwrap_err();
        assert_eq!(
            err,
            BarbiereError::Application(ApplicationError::SlotConflict {
                barber_id: "b-1".into()
            })
        );

        // A different barber is free to take the same time.
        assert!(repo
            .save(booking("bk-3", "b-2", 10, BookingStatus::Pending))
            .is_ok());
    }

    #[test]
    fn cancelled_bookings_do_not_block_saves() {
        let repo = InMemoryBookingRepository::new();
        repo.save(booking("bk-1", "b-1", 10, BookingStatus::Cancelled))
            .unwrap();
        assert!(repo
            .save(booking("bk-2", "b-1", 10, BookingStatus::Pending))
            .is_ok());
    }

    #[test]
    fn update_requires_existing_booking() {
        let repo = InMemoryBookingRepository::new();
        let err = repo
            .update(booking("ghost", "b-1", 10, BookingStatus::Pending))
            .unwrap_err();
        assert!(matches!(
            err,
            BarbiereError::Application(ApplicationError::NotFound { entity: "booking", .. })
        ));
    }

    #[test]
    fn update_can_rewrite_status_in_place() {
        let repo = InMemoryBookingRepository::new();
        repo.save(booking("bk-1", "b-1", 10, BookingStatus::Pending))
            .unwrap();
        repo.update(booking("bk-1", "b-1", 10, BookingStatus::Cancelled))
            .unwrap();
        assert_eq!(
            repo.find_by_id("bk-1").unwrap().unwrap().status(),
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn date_queries_are_sorted_by_start() {
        let repo = InMemoryBookingRepository::new();
        repo.save(booking("bk-b", "b-1", 15, BookingStatus::Pending))
            .unwrap();
        repo.save(booking("bk-a", "b-1", 9, BookingStatus::Pending))
            .unwrap();
        let found = repo.find_by_barber_and_date("b-1", monday()).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id(), "bk-a");
        assert_eq!(found[1].id(), "bk-b");
    }

    #[test]
    fn find_by_slot_requires_exact_slot_match() {
        let repo = InMemoryBookingRepository::new();
        repo.save(booking("bk-1", "b-1", 10, BookingStatus::Pending))
            .unwrap();
        let exact = TimeSlot::new(monday(), 10, 0, 30).unwrap();
        let shifted = TimeSlot::new(monday(), 10, 15, 30).unwrap();
        assert!(repo.find_by_slot("b-1", &exact).unwrap().is_some());
        assert!(repo.find_by_slot("b-1", &shifted).unwrap().is_none());
        assert!(repo.find_by_slot("b-2", &exact).unwrap().is_none());
    }

    #[test]
    fn find_by_cancellation_code_matches_exactly() {
        let repo = InMemoryBookingRepository::new();
        repo.save(booking("bk-1", "b-1", 10, BookingStatus::Pending))
            .unwrap();
        assert!(repo
            .find_by_cancellation_code("CODE-bk-1")
            .unwrap()
            .is_some());
        assert!(repo.find_by_cancellation_code("code-bk-1").unwrap().is_none());
    }

    #[test]
    fn clones_share_state() {
        let repo = InMemoryBookingRepository::new();
        let alias = repo.clone();
        repo.save(booking("bk-1", "b-1", 10, BookingStatus::Pending))
            .unwrap();
        assert!(alias.find_by_id("bk-1").unwrap().is_some());
    }

    #[test]
    fn blocked_slot_delete_is_strict() {
        let repo = InMemoryBlockedSlotRepository::new();
        assert!(repo.delete("missing").is_err());
    }
}
