//! The `Booking` entity and its status state machine.
//!
//! ```text
//!            confirm              complete
//! Pending ────────────► Confirmed ─────────► Completed (terminal)
//!    │                      │
//!    │ complete             │ cancel
//!    ├──────► Completed     ▼
//!    └──────────────► Cancelled (terminal)
//! ```
//!
//! Completed and Cancelled are terminal: no transition leaves them.
//! Cancelled/completed bookings are retained for history, never deleted.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::entities::require_non_empty;
use crate::domain::error::{DomainError, RuleViolation};
use crate::domain::ports::Clock;
use crate::domain::value_objects::{Email, PhoneNumber, TimeSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer appointment with one barber for one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    id: String,
    shop_id: String,
    barber_id: String,
    service_id: String,
    customer_name: String,
    customer_phone: PhoneNumber,
    customer_email: Option<Email>,
    time_slot: TimeSlot,
    status: BookingStatus,
    created_at: NaiveDateTime,
    cancellation_code: String,
}

impl Booking {
    /// Create a new `Pending` booking.
    ///
    /// Fails unless the slot start is strictly in the future of the
    /// injected clock. The full rule set lives in
    /// [`crate::domain::rules::booking`]; this check is defense-in-depth.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: impl Into<String>,
        shop_id: impl Into<String>,
        barber_id: impl Into<String>,
        service_id: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: PhoneNumber,
        customer_email: Option<Email>,
        time_slot: TimeSlot,
        cancellation_code: impl Into<String>,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let shop_id = shop_id.into();
        let barber_id = barber_id.into();
        let service_id = service_id.into();
        let customer_name = customer_name.into();
        let cancellation_code = cancellation_code.into();
        require_non_empty("booking id", &id)?;
        require_non_empty("shop id", &shop_id)?;
        require_non_empty("barber id", &barber_id)?;
        require_non_empty("service id", &service_id)?;
        require_non_empty("customer name", &customer_name)?;
        require_non_empty("cancellation code", &cancellation_code)?;

        let now = clock.now();
        if time_slot.start_time() <= now {
            return Err(RuleViolation::InPast.into());
        }

        Ok(Self {
            id,
            shop_id,
            barber_id,
            service_id,
            customer_name,
            customer_phone,
            customer_email,
            time_slot,
            status: BookingStatus::Pending,
            created_at: now,
            cancellation_code,
        })
    }

    /// Trusted reconstruction from storage — no rule checks.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: impl Into<String>,
        shop_id: impl Into<String>,
        barber_id: impl Into<String>,
        service_id: impl Into<String>,
        customer_name: impl Into<String>,
        customer_phone: PhoneNumber,
        customer_email: Option<Email>,
        time_slot: TimeSlot,
        status: BookingStatus,
        created_at: NaiveDateTime,
        cancellation_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            shop_id: shop_id.into(),
            barber_id: barber_id.into(),
            service_id: service_id.into(),
            customer_name: customer_name.into(),
            customer_phone,
            customer_email,
            time_slot,
            status,
            created_at,
            cancellation_code: cancellation_code.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn barber_id(&self) -> &str {
        &self.barber_id
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_phone(&self) -> &PhoneNumber {
        &self.customer_phone
    }

    pub fn customer_email(&self) -> Option<&Email> {
        self.customer_email.as_ref()
    }

    pub fn time_slot(&self) -> &TimeSlot {
        &self.time_slot
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn cancellation_code(&self) -> &str {
        &self.cancellation_code
    }

    /// Only valid from `Pending`.
    pub fn confirm(self) -> Result<Booking, DomainError> {
        if self.status != BookingStatus::Pending {
            return Err(RuleViolation::NotPending.into());
        }
        Ok(self.with_status(BookingStatus::Confirmed))
    }

    /// Valid from `Pending` or `Confirmed`.
    pub fn complete(self) -> Result<Booking, DomainError> {
        match self.status {
            BookingStatus::Cancelled => Err(RuleViolation::CompleteCancelled.into()),
            BookingStatus::Completed => Err(RuleViolation::AlreadyCompleted.into()),
            BookingStatus::Pending | BookingStatus::Confirmed => {
                Ok(self.with_status(BookingStatus::Completed))
            }
        }
    }

    /// Valid from `Pending` or `Confirmed`, subject to the two-hour window.
    ///
    /// The window only guards the interval strictly before start: a booking
    /// whose start has already passed is NOT blocked by it. This mirrors
    /// the canonical rule in [`crate::domain::rules::booking`].
    pub fn cancel(self, clock: &dyn Clock) -> Result<Booking, DomainError> {
        match self.status {
            BookingStatus::Cancelled => return Err(RuleViolation::AlreadyCancelled.into()),
            BookingStatus::Completed => return Err(RuleViolation::CancelCompleted.into()),
            BookingStatus::Pending | BookingStatus::Confirmed => {}
        }
        let until_start = self.time_slot.start_time() - clock.now();
        if until_start > Duration::zero() && until_start < Duration::hours(2) {
            return Err(RuleViolation::TooCloseToStart.into());
        }
        Ok(self.with_status(BookingStatus::Cancelled))
    }

    /// Whether [`cancel`](Booking::cancel) would currently succeed.
    pub fn can_be_cancelled(&self, clock: &dyn Clock) -> bool {
        crate::domain::rules::booking::can_cancel_booking(self, clock).is_ok()
    }

    /// Plain string equality — the code is short-lived and rate limiting is
    /// the delivery layer's concern.
    pub fn verify_cancellation_code(&self, code: &str) -> bool {
        self.cancellation_code == code
    }

    fn with_status(self, status: BookingStatus) -> Booking {
        Self { status, ..self }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockClock;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn clock_at(at: NaiveDateTime) -> MockClock {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(at);
        clock
    }

    fn slot_at(hour: u32, minute: u32) -> TimeSlot {
        TimeSlot::new(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), hour, minute, 30).unwrap()
    }

    fn booking_at(hour: u32, minute: u32) -> Booking {
        Booking::create(
            "bk-1",
            "shop-1",
            "b-1",
            "sv-1",
            "Anna Verdi",
            PhoneNumber::new("+393331234567").unwrap(),
            None,
            slot_at(hour, minute),
            "A1B2C3",
            &clock_at(now()),
        )
        .unwrap()
    }

    #[test]
    fn create_starts_pending() {
        let b = booking_at(10, 0);
        assert_eq!(b.status(), BookingStatus::Pending);
        assert_eq!(b.created_at(), now());
    }

    #[test]
    fn create_rejects_past_and_present_start() {
        let clock = clock_at(now());
        let at_now = TimeSlot::new(
            NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            8,
            0,
            30,
        )
        .unwrap();
        let result = Booking::create(
            "bk",
            "s",
            "b",
            "sv",
            "Anna",
            PhoneNumber::new("+393331234567").unwrap(),
            None,
            at_now,
            "CODE00",
            &clock,
        );
        assert_eq!(result.unwrap_err(), RuleViolation::InPast.into());
    }

    #[test]
    fn confirm_only_from_pending() {
        let confirmed = booking_at(10, 0).confirm().unwrap();
        assert_eq!(confirmed.status(), BookingStatus::Confirmed);
        assert_eq!(
            confirmed.confirm().unwrap_err(),
            RuleViolation::NotPending.into()
        );
    }

    #[test]
    fn complete_from_pending_or_confirmed() {
        assert_eq!(
            booking_at(10, 0).complete().unwrap().status(),
            BookingStatus::Completed
        );
        let confirmed = booking_at(10, 0).confirm().unwrap();
        assert_eq!(
            confirmed.complete().unwrap().status(),
            BookingStatus::Completed
        );
    }

    #[test]
    fn terminal_states_are_closed() {
        let clock = clock_at(now());
        let completed = booking_at(10, 0).complete().unwrap();
        assert!(completed.status().is_terminal());
        assert!(completed.clone().confirm().is_err());
        assert!(completed.clone().complete().is_err());
        assert!(completed.cancel(&clock).is_err());

        let early = clock_at(now() - Duration::hours(4));
        let cancelled = booking_at(10, 0).cancel(&early).unwrap();
        assert!(cancelled.status().is_terminal());
        assert!(cancelled.clone().confirm().is_err());
        assert!(cancelled.clone().complete().is_err());
        assert!(cancelled.cancel(&clock).is_err());

        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
    }

    #[test]
    fn can_be_cancelled_mirrors_the_cancel_rule() {
        let b = booking_at(10, 0);
        assert!(b.can_be_cancelled(&clock_at(now() - Duration::minutes(1))));
        assert!(!b.can_be_cancelled(&clock_at(now() + Duration::minutes(1))));
        // Already started: still cancellable.
        assert!(b.can_be_cancelled(&clock_at(now() + Duration::hours(3))));
        // Terminal: never.
        let completed = b.complete().unwrap();
        assert!(!completed.can_be_cancelled(&clock_at(now())));
    }

    #[test]
    fn cancel_respects_two_hour_window() {
        // Booking at 10:00, clock at 08:01 — 119 minutes out: blocked.
        let b = booking_at(10, 0);
        let close = clock_at(now() + Duration::minutes(1));
        assert_eq!(
            b.clone().cancel(&close).unwrap_err(),
            RuleViolation::TooCloseToStart.into()
        );

        // 121 minutes out: allowed.
        let far = clock_at(now() - Duration::minutes(1));
        assert!(b.clone().cancel(&far).is_ok());

        // Already started: the window does not apply.
        let after = clock_at(now() + Duration::hours(3));
        assert!(b.cancel(&after).is_ok());
    }

    #[test]
    fn cancellation_code_is_plain_equality() {
        let b = booking_at(10, 0);
        assert!(b.verify_cancellation_code("A1B2C3"));
        assert!(!b.verify_cancellation_code("a1b2c3"));
        assert!(!b.verify_cancellation_code(""));
    }

    #[test]
    fn reconstruct_bypasses_rule_checks() {
        // Storage may legitimately hold past bookings.
        let b = Booking::reconstruct(
            "bk-old",
            "shop-1",
            "b-1",
            "sv-1",
            "Anna",
            PhoneNumber::new("+393331234567").unwrap(),
            None,
            slot_at(10, 0),
            BookingStatus::Completed,
            now() - Duration::days(30),
            "OLD123",
        );
        assert_eq!(b.status(), BookingStatus::Completed);
    }

    #[test]
    fn serde_round_trip() {
        let b = booking_at(10, 0);
        let json = serde_json::to_string(&b).unwrap();
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
        assert!(json.contains("\"PENDING\""));
    }
}
