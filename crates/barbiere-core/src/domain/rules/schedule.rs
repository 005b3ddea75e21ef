//! Availability derivation: which slots can still be booked.

use chrono::{Datelike, NaiveDate};

use crate::domain::entities::{Barber, Booking, BookingStatus, Service, Shop};
use crate::domain::value_objects::TimeSlot;

/// Compute the bookable slots for one barber/service/day.
///
/// The effective working window is the intersection of the barber's day
/// schedule and the shop's opening hours. Candidate start offsets walk
/// that window in steps of `slot_duration_minutes` (the booking grid),
/// while each candidate slot itself spans the **service** duration — the
/// two are independent, so a long service may extend past several grid
/// units. A candidate survives unless it overlaps a non-cancelled booking
/// of this barber or a blocked slot.
///
/// The result is fully materialized and ascending by start time (the walk
/// is monotonic, so no sort is needed). Identical inputs always produce
/// the identical sequence.
pub fn generate_available_slots(
    date: NaiveDate,
    barber: &Barber,
    shop: &Shop,
    service: &Service,
    existing_bookings: &[Booking],
    blocked_slots: &[TimeSlot],
    slot_duration_minutes: u16,
) -> Vec<TimeSlot> {
    let day = barber.schedule().day(date.weekday());
    if !day.is_working {
        return Vec::new();
    }
    if slot_duration_minutes == 0 {
        return Vec::new();
    }

    let settings = shop.settings();
    let window_start = u32::from(
        day.start
            .minute_of_day()
            .max(settings.opening_time.minute_of_day()),
    );
    let window_end = u32::from(
        day.end
            .minute_of_day()
            .min(settings.closing_time.minute_of_day()),
    );

    let service_len = u32::from(service.duration_minutes());
    let step = u32::from(slot_duration_minutes);

    let mut slots = Vec::new();
    let mut offset = window_start;
    while offset + service_len <= window_end {
        // A pathological schedule can still produce an unconstructible
        // candidate; such offsets are dropped, not reported.
        if let Ok(slot) = TimeSlot::new(date, offset / 60, offset % 60, service_len) {
            if !has_conflict(barber, existing_bookings, &slot)
                && !blocked_slots.iter().any(|blocked| blocked.overlaps(&slot))
            {
                slots.push(slot);
            }
        }
        offset += step;
    }
    slots
}

/// Point query mirroring the generation checks for a single slot.
pub fn is_slot_available(
    slot: &TimeSlot,
    barber: &Barber,
    shop: &Shop,
    service: &Service,
    existing_bookings: &[Booking],
    blocked_slots: &[TimeSlot],
) -> bool {
    if !barber.is_working_at(slot.weekday(), slot.start_hour(), slot.start_minute()) {
        return false;
    }
    if !shop.is_open_at(slot.start_hour(), slot.start_minute()) {
        return false;
    }
    if slot.duration_minutes() != i64::from(service.duration_minutes()) {
        return false;
    }
    if has_conflict(barber, existing_bookings, slot) {
        return false;
    }
    !blocked_slots.iter().any(|blocked| blocked.overlaps(slot))
}

/// A non-cancelled booking of this barber occupying the slot.
fn has_conflict(barber: &Barber, existing_bookings: &[Booking], slot: &TimeSlot) -> bool {
    existing_bookings.iter().any(|booking| {
        booking.barber_id() == barber.id()
            && booking.status() != BookingStatus::Cancelled
            && booking.time_slot().overlaps(slot)
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
