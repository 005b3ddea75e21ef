//! Booking lifecycle predicates.
//!
//! `can_create_booking` is the authoritative creation gate: it re-checks
//! everything even for slots that already survived
//! [`generate_available_slots`](crate::domain::rules::schedule), closing
//! the window between "slot was shown as available" and "slot is actually
//! booked". The storage layer still has the final word under true
//! concurrency (see the repository contract).

use chrono::Duration;

use crate::domain::entities::{Barber, Booking, BookingStatus, Service, Shop};
use crate::domain::error::RuleViolation;
use crate::domain::ports::Clock;
use crate::domain::value_objects::TimeSlot;

/// Ordered checks; the first failure wins.
pub fn can_create_booking(
    slot: &TimeSlot,
    service: &Service,
    barber: &Barber,
    shop: &Shop,
    existing_bookings: &[Booking],
    clock: &dyn Clock,
) -> Result<(), RuleViolation> {
    if slot.start_time() <= clock.now() {
        return Err(RuleViolation::InPast);
    }
    if !barber.is_active() {
        return Err(RuleViolation::BarberInactive);
    }
    if !service.is_active() {
        return Err(RuleViolation::ServiceInactive);
    }
    if !shop.is_active() {
        return Err(RuleViolation::ShopInactive);
    }
    if !shop.is_open_at(slot.start_hour(), slot.start_minute()) {
        return Err(RuleViolation::OutsideOpeningHours);
    }
    if !barber.is_working_at(slot.weekday(), slot.start_hour(), slot.start_minute()) {
        return Err(RuleViolation::BarberNotWorking);
    }
    if slot.duration_minutes() != i64::from(service.duration_minutes()) {
        return Err(RuleViolation::DurationMismatch);
    }
    let conflict = existing_bookings.iter().any(|booking| {
        booking.barber_id() == barber.id()
            && booking.status() != BookingStatus::Cancelled
            && booking.time_slot().overlaps(slot)
    });
    if conflict {
        return Err(RuleViolation::SlotTaken);
    }
    Ok(())
}

/// Cancellation is closed for terminal bookings and inside the two-hour
/// window before start.
///
/// The window only guards `0 < start - now < 2h`: a booking whose start
/// has already passed can still be cancelled. Deliberate — see DESIGN.md
/// for the open product question.
pub fn can_cancel_booking(booking: &Booking, clock: &dyn Clock) -> Result<(), RuleViolation> {
    match booking.status() {
        BookingStatus::Cancelled => return Err(RuleViolation::AlreadyCancelled),
        BookingStatus::Completed => return Err(RuleViolation::CancelCompleted),
        BookingStatus::Pending | BookingStatus::Confirmed => {}
    }
    let until_start = booking.time_slot().start_time() - clock.now();
    if until_start > Duration::zero() && until_start < Duration::hours(2) {
        return Err(RuleViolation::TooCloseToStart);
    }
    Ok(())
}

/// Completion is valid from `Pending` or `Confirmed`.
pub fn can_complete_booking(booking: &Booking) -> Result<(), RuleViolation> {
    match booking.status() {
        BookingStatus::Cancelled => Err(RuleViolation::CompleteCancelled),
        BookingStatus::Completed => Err(RuleViolation::AlreadyCompleted),
        BookingStatus::Pending | BookingStatus::Confirmed => Ok(()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
