//! Booking lifecycle use cases: create, confirm, cancel, complete, list.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::application::ports::{
    BarberRepository, BookingRepository, Clock, IdGenerator, NotificationService, ServiceRepository,
    ShopRepository,
};
use crate::application::records::BookingRecord;
use crate::application::services::{ensure_tenant, not_found};
use crate::application::ApplicationError;
use crate::domain::entities::{Barber, Booking, Service};
use crate::domain::rules;
use crate::domain::value_objects::{Email, PhoneNumber, TimeSlot};
use crate::error::BarbiereResult;

/// Input for [`BookingService::create_booking`]. The slot length is the
/// service duration; callers only pick the start.
#[derive(Debug, Clone)]
pub struct CreateBookingRequest {
    pub barber_id: String,
    pub service_id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub date: NaiveDate,
    pub start_hour: u32,
    pub start_minute: u32,
}

/// Orchestrates the booking lifecycle against the repository ports.
pub struct BookingService {
    bookings: Arc<dyn BookingRepository>,
    shops: Arc<dyn ShopRepository>,
    barbers: Arc<dyn BarberRepository>,
    services: Arc<dyn ServiceRepository>,
    notifier: Arc<dyn NotificationService>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingRepository>,
        shops: Arc<dyn ShopRepository>,
        barbers: Arc<dyn BarberRepository>,
        services: Arc<dyn ServiceRepository>,
        notifier: Arc<dyn NotificationService>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            bookings,
            shops,
            barbers,
            services,
            notifier,
            ids,
            clock,
        }
    }

    /// Create a booking for a customer.
    ///
    /// `can_create_booking` is the authoritative gate and runs against a
    /// fresh overlap snapshot even when the slot came straight from
    /// `available_slots`; the repository's exclusion constraint covers the
    /// remaining concurrent-insert window.
    #[instrument(skip_all, fields(shop_id = %shop_id, barber_id = %request.barber_id))]
    pub fn create_booking(
        &self,
        shop_id: &str,
        request: CreateBookingRequest,
    ) -> BarbiereResult<BookingRecord> {
        let shop = self
            .shops
            .find_by_id(shop_id)?
            .ok_or_else(|| not_found("shop", shop_id))?;
        let service = self
            .services
            .find_by_id(&request.service_id)?
            .ok_or_else(|| not_found("service", &request.service_id))?;
        ensure_tenant("service", service.id(), service.shop_id(), shop_id)?;
        let barber = self
            .barbers
            .find_by_id(&request.barber_id)?
            .ok_or_else(|| not_found("barber", &request.barber_id))?;
        ensure_tenant("barber", barber.id(), barber.shop_id(), shop_id)?;

        let phone = PhoneNumber::new(&request.customer_phone)?;
        let email = request
            .customer_email
            .as_deref()
            .map(Email::new)
            .transpose()?;
        let slot = TimeSlot::new(
            request.date,
            request.start_hour,
            request.start_minute,
            u32::from(service.duration_minutes()),
        )?;

        let existing = self.bookings.find_overlapping(barber.id(), &slot)?;
        rules::can_create_booking(
            &slot,
            &service,
            &barber,
            &shop,
            &existing,
            self.clock.as_ref(),
        )?;

        let booking = Booking::create(
            self.ids.generate(),
            shop.id(),
            barber.id(),
            service.id(),
            request.customer_name,
            phone,
            email,
            slot,
            self.ids.generate_code(),
            self.clock.as_ref(),
        )?;

        let saved = self.bookings.save(booking)?;
        info!(booking_id = %saved.id(), "booking created");

        if let Err(e) = self.notifier.send_booking_confirmation(&saved) {
            warn!(booking_id = %saved.id(), error = %e, "confirmation notification failed");
        }

        Ok(BookingRecord::assemble(&saved, barber.name(), Some(&service)))
    }

    /// Customer self-service cancellation, guarded by the cancellation code.
    #[instrument(skip_all, fields(shop_id = %shop_id, booking_id = %booking_id))]
    pub fn cancel_booking(
        &self,
        shop_id: &str,
        booking_id: &str,
        cancellation_code: &str,
    ) -> BarbiereResult<()> {
        let booking = self
            .bookings
            .find_by_id(booking_id)?
            .ok_or_else(|| not_found("booking", booking_id))?;
        ensure_tenant("booking", booking.id(), booking.shop_id(), shop_id)?;

        if !booking.verify_cancellation_code(cancellation_code) {
            return Err(ApplicationError::InvalidCancellationCode.into());
        }

        rules::can_cancel_booking(&booking, self.clock.as_ref())?;
        let cancelled = booking.cancel(self.clock.as_ref())?;
        let saved = self.bookings.update(cancelled)?;
        info!(booking_id = %saved.id(), "booking cancelled");

        if let Err(e) = self.notifier.send_booking_cancellation(&saved) {
            warn!(booking_id = %saved.id(), error = %e, "cancellation notification failed");
        }

        Ok(())
    }

    /// Staff confirmation of a pending booking.
    #[instrument(skip_all, fields(shop_id = %shop_id, booking_id = %booking_id))]
    pub fn confirm_booking(&self, shop_id: &str, booking_id: &str) -> BarbiereResult<BookingRecord> {
        let booking = self
            .bookings
            .find_by_id(booking_id)?
            .ok_or_else(|| not_found("booking", booking_id))?;
        ensure_tenant("booking", booking.id(), booking.shop_id(), shop_id)?;

        let confirmed = booking.confirm()?;
        let saved = self.bookings.update(confirmed)?;
        self.record_for(&saved)
    }

    /// Staff completion after the appointment took place.
    #[instrument(skip_all, fields(shop_id = %shop_id, booking_id = %booking_id))]
    pub fn complete_booking(&self, shop_id: &str, booking_id: &str) -> BarbiereResult<()> {
        let booking = self
            .bookings
            .find_by_id(booking_id)?
            .ok_or_else(|| not_found("booking", booking_id))?;
        ensure_tenant("booking", booking.id(), booking.shop_id(), shop_id)?;

        rules::can_complete_booking(&booking)?;
        let completed = booking.complete()?;
        self.bookings.update(completed)?;
        Ok(())
    }

    /// The shop's agenda for one day, joined with display data.
    #[instrument(skip_all, fields(shop_id = %shop_id, date = %date))]
    pub fn daily_bookings(
        &self,
        shop_id: &str,
        date: NaiveDate,
    ) -> BarbiereResult<Vec<BookingRecord>> {
        let bookings = self.bookings.find_by_shop_and_date(shop_id, date)?;

        let mut barbers: HashMap<String, Barber> = HashMap::new();
        let mut services: HashMap<String, Service> = HashMap::new();
        for booking in &bookings {
            if !barbers.contains_key(booking.barber_id()) {
                if let Some(barber) = self.barbers.find_by_id(booking.barber_id())? {
                    barbers.insert(barber.id().to_string(), barber);
                }
            }
            if !services.contains_key(booking.service_id()) {
                if let Some(service) = self.services.find_by_id(booking.service_id())? {
                    services.insert(service.id().to_string(), service);
                }
            }
        }

        Ok(bookings
            .iter()
            .map(|booking| {
                let barber_name = barbers
                    .get(booking.barber_id())
                    .map_or("Unknown", |b| b.name());
                BookingRecord::assemble(booking, barber_name, services.get(booking.service_id()))
            })
            .collect())
    }

    fn record_for(&self, booking: &Booking) -> BarbiereResult<BookingRecord> {
        let barber_name = self
            .barbers
            .find_by_id(booking.barber_id())?
            .map_or_else(|| "Unknown".to_string(), |b| b.name().to_string());
        let service = self.services.find_by_id(booking.service_id())?;
        Ok(BookingRecord::assemble(
            booking,
            &barber_name,
            service.as_ref(),
        ))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{
        MockBarberRepository, MockBookingRepository, MockNotificationService,
        MockServiceRepository, MockShopRepository, NotificationError,
    };
    use crate::domain::entities::{
        BookingStatus, DaySchedule, ShopSettings, Shop, WorkSchedule,
    };
    use crate::domain::ports::{MockClock, MockIdGenerator};
    use crate::domain::value_objects::Money;
    use crate::domain::{DomainError, RuleViolation};
    use crate::error::BarbiereError;
    use chrono::{NaiveDateTime, Weekday};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    fn now() -> NaiveDateTime {
        monday().and_hms_opt(7, 0, 0).unwrap()
    }

    fn shop() -> Shop {
        Shop::new(
            "shop-1",
            "La Bottega",
            "la-bottega",
            ShopSettings {
                opening_time: "09:00".parse().unwrap(),
                closing_time: "19:00".parse().unwrap(),
                timezone: "Europe/Rome".into(),
                slot_duration_minutes: 30,
                booking_advance_days: 30,
            },
            true,
        )
        .unwrap()
    }

    fn barber() -> Barber {
        let weekday = DaySchedule::working("09:00".parse().unwrap(), "18:00".parse().unwrap());
        Barber::new(
            "b-1",
            "shop-1",
            "Mario Rossi",
            WorkSchedule::closed().with_day(Weekday::Mon, weekday),
            true,
        )
        .unwrap()
    }

    fn service() -> Service {
        Service::new(
            "sv-1",
            "shop-1",
            "Taglio Capelli",
            "",
            30,
            Money::new(25.0, "EUR").unwrap(),
            true,
        )
        .unwrap()
    }

    fn request() -> CreateBookingRequest {
        CreateBookingRequest {
            barber_id: "b-1".into(),
            service_id: "sv-1".into(),
            customer_name: "Anna Verdi".into(),
            customer_phone: "+39 333 123 4567".into(),
            customer_email: Some("anna@example.com".into()),
            date: monday(),
            start_hour: 10,
            start_minute: 0,
        }
    }

    struct Mocks {
        bookings: MockBookingRepository,
        shops: MockShopRepository,
        barbers: MockBarberRepository,
        services: MockServiceRepository,
        notifier: MockNotificationService,
        ids: MockIdGenerator,
        clock: MockClock,
    }

    fn mocks() -> Mocks {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(now());
        Mocks {
            bookings: MockBookingRepository::new(),
            shops: MockShopRepository::new(),
            barbers: MockBarberRepository::new(),
            services: MockServiceRepository::new(),
            notifier: MockNotificationService::new(),
            ids: MockIdGenerator::new(),
            clock,
        }
    }

    fn build(m: Mocks) -> BookingService {
        BookingService::new(
            Arc::new(m.bookings),
            Arc::new(m.shops),
            Arc::new(m.barbers),
            Arc::new(m.services),
            Arc::new(m.notifier),
            Arc::new(m.ids),
            Arc::new(m.clock),
        )
    }

    fn expect_happy_lookups(m: &mut Mocks) {
        m.shops
            .expect_find_by_id()
            .returning(|_| Ok(Some(shop())));
        m.services
            .expect_find_by_id()
            .returning(|_| Ok(Some(service())));
        m.barbers
            .expect_find_by_id()
            .returning(|_| Ok(Some(barber())));
    }

    #[test]
    fn create_booking_happy_path() {
        let mut m = mocks();
        expect_happy_lookups(&mut m);
        m.ids.expect_generate().return_const("bk-1".to_string());
        m.ids
            .expect_generate_code()
            .return_const("A1B2C3".to_string());
        m.bookings
            .expect_find_overlapping()
            .returning(|_, _| Ok(Vec::new()));
        m.bookings.expect_save().returning(|b| Ok(b));
        m.notifier
            .expect_send_booking_confirmation()
            .times(1)
            .returning(|_| Ok(()));

        let record = build(m).create_booking("shop-1", request()).unwrap();
        assert_eq!(record.id, "bk-1");
        assert_eq!(record.barber_name, "Mario Rossi");
        assert_eq!(record.status, "PENDING");
        assert_eq!(record.cancellation_code, "A1B2C3");
        assert_eq!(record.start_time, "2025-06-02T10:00:00");
    }

    #[test]
    fn notification_failure_does_not_abort_creation() {
        let mut m = mocks();
        expect_happy_lookups(&mut m);
        m.ids.expect_generate().return_const("bk-1".to_string());
        m.ids
            .expect_generate_code()
            .return_const("A1B2C3".to_string());
        m.bookings
            .expect_find_overlapping()
            .returning(|_, _| Ok(Vec::new()));
        m.bookings.expect_save().returning(|b| Ok(b));
        m.notifier
            .expect_send_booking_confirmation()
            .returning(|_| Err(NotificationError("smtp down".into())));

        assert!(build(m).create_booking("shop-1", request()).is_ok());
    }

    #[test]
    fn create_rejects_unknown_shop() {
        let mut m = mocks();
        m.shops.expect_find_by_id().returning(|_| Ok(None));
        let err = build(m).create_booking("shop-1", request()).unwrap_err();
        assert_eq!(
            err,
            ApplicationError::NotFound {
                entity: "shop",
                id: "shop-1".into()
            }
            .into()
        );
    }

    #[test]
    fn create_rejects_cross_tenant_barber() {
        let mut m = mocks();
        m.shops.expect_find_by_id().returning(|_| Ok(Some(shop())));
        m.services
            .expect_find_by_id()
            .returning(|_| Ok(Some(service())));
        m.barbers.expect_find_by_id().returning(|_| {
            Ok(Some(
                Barber::new("b-1", "other-shop", "Mario", WorkSchedule::closed(), true).unwrap(),
            ))
        });
        let err = build(m).create_booking("shop-1", request()).unwrap_err();
        assert!(matches!(
            err,
            BarbiereError::Application(ApplicationError::TenantMismatch { entity: "barber", .. })
        ));
    }

    #[test]
    fn create_rejects_taken_slot() {
        let mut m = mocks();
        expect_happy_lookups(&mut m);
        m.bookings.expect_find_overlapping().returning(|_, _| {
            Ok(vec![Booking::reconstruct(
                "bk-0",
                "shop-1",
                "b-1",
                "sv-1",
                "Luca",
                PhoneNumber::new("+393331234567").unwrap(),
                None,
                TimeSlot::new(monday(), 10, 0, 30).unwrap(),
                BookingStatus::Confirmed,
                now(),
                "CODE00",
            )])
        });
        let err = build(m).create_booking("shop-1", request()).unwrap_err();
        assert_eq!(err, RuleViolation::SlotTaken.into());
    }

    #[test]
    fn create_surfaces_invalid_phone() {
        let mut m = mocks();
        expect_happy_lookups(&mut m);
        let mut req = request();
        req.customer_phone = "not-a-number".into();
        let err = build(m).create_booking("shop-1", req).unwrap_err();
        assert!(matches!(
            err,
            BarbiereError::Domain(DomainError::InvalidPhoneNumber(_))
        ));
    }

    fn pending_booking() -> Booking {
        Booking::reconstruct(
            "bk-1",
            "shop-1",
            "b-1",
            "sv-1",
            "Anna Verdi",
            PhoneNumber::new("+393331234567").unwrap(),
            None,
            TimeSlot::new(monday(), 10, 0, 30).unwrap(),
            BookingStatus::Pending,
            now(),
            "A1B2C3",
        )
    }

    #[test]
    fn cancel_booking_requires_matching_code() {
        let mut m = mocks();
        m.bookings
            .expect_find_by_id()
            .returning(|_| Ok(Some(pending_booking())));
        let err = build(m)
            .cancel_booking("shop-1", "bk-1", "WRONG0")
            .unwrap_err();
        assert_eq!(err, ApplicationError::InvalidCancellationCode.into());
    }

    #[test]
    fn cancel_booking_happy_path_notifies() {
        let mut m = mocks();
        m.bookings
            .expect_find_by_id()
            .returning(|_| Ok(Some(pending_booking())));
        m.bookings
            .expect_update()
            .withf(|b| b.status() == BookingStatus::Cancelled)
            .returning(|b| Ok(b));
        m.notifier
            .expect_send_booking_cancellation()
            .times(1)
            .returning(|_| Ok(()));
        assert!(build(m).cancel_booking("shop-1", "bk-1", "A1B2C3").is_ok());
    }

    #[test]
    fn cancel_booking_checks_tenant() {
        let mut m = mocks();
        m.bookings
            .expect_find_by_id()
            .returning(|_| Ok(Some(pending_booking())));
        let err = build(m)
            .cancel_booking("other-shop", "bk-1", "A1B2C3")
            .unwrap_err();
        assert!(matches!(
            err,
            BarbiereError::Application(ApplicationError::TenantMismatch { .. })
        ));
    }

    #[test]
    fn complete_rejects_cancelled_booking() {
        let mut m = mocks();
        m.bookings.expect_find_by_id().returning(|_| {
            Ok(Some(Booking::reconstruct(
                "bk-1",
                "shop-1",
                "b-1",
                "sv-1",
                "Anna",
                PhoneNumber::new("+393331234567").unwrap(),
                None,
                TimeSlot::new(monday(), 10, 0, 30).unwrap(),
                BookingStatus::Cancelled,
                now(),
                "A1B2C3",
            )))
        });
        let err = build(m).complete_booking("shop-1", "bk-1").unwrap_err();
        assert_eq!(err, RuleViolation::CompleteCancelled.into());
    }

    #[test]
    fn daily_bookings_joins_display_data() {
        let mut m = mocks();
        m.bookings
            .expect_find_by_shop_and_date()
            .returning(|_, _| Ok(vec![pending_booking()]));
        m.barbers
            .expect_find_by_id()
            .returning(|_| Ok(Some(barber())));
        m.services
            .expect_find_by_id()
            .returning(|_| Ok(Some(service())));
        let records = build(m).daily_bookings("shop-1", monday()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].barber_name, "Mario Rossi");
        assert_eq!(records[0].service_name, "Taglio Capelli");
    }

    #[test]
    fn daily_bookings_degrade_missing_barber_to_unknown() {
        let mut m = mocks();
        m.bookings
            .expect_find_by_shop_and_date()
            .returning(|_, _| Ok(vec![pending_booking()]));
        m.barbers.expect_find_by_id().returning(|_| Ok(None));
        m.services.expect_find_by_id().returning(|_| Ok(None));
        let records = build(m).daily_bookings("shop-1", monday()).unwrap();
        assert_eq!(records[0].barber_name, "Unknown");
        assert_eq!(records[0].service_name, "Unknown");
    }
}
