//! Boundary records: plain serializable shapes handed to delivery layers.
//!
//! Dates are `YYYY-MM-DD`, timestamps ISO-8601, money a decimal amount
//! plus 3-letter currency, durations integer minutes. No framework types
//! originate here.

use serde::Serialize;

use crate::domain::entities::{Booking, Service};
use crate::domain::value_objects::TimeSlot;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One bookable slot as shown to customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRecord {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
}

impl SlotRecord {
    pub fn from_slot(slot: &TimeSlot) -> Self {
        Self {
            date: slot.date().format(DATE_FORMAT).to_string(),
            start_time: slot.start_time().format(DATETIME_FORMAT).to_string(),
            end_time: slot.end_time().format(DATETIME_FORMAT).to_string(),
            duration_minutes: slot.duration_minutes(),
        }
    }
}

/// A booking joined with its barber and service display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRecord {
    pub id: String,
    pub shop_id: String,
    pub barber_id: String,
    pub barber_name: String,
    pub service_id: String,
    pub service_name: String,
    pub service_duration_minutes: u16,
    pub service_price: f64,
    pub service_currency: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub cancellation_code: String,
    pub created_at: String,
}

impl BookingRecord {
    /// Assemble from a booking plus whatever display data could be loaded.
    ///
    /// A missing service (deleted after the booking was taken) degrades to
    /// "Unknown" display fields rather than failing the listing.
    pub fn assemble(booking: &Booking, barber_name: &str, service: Option<&Service>) -> Self {
        let slot = booking.time_slot();
        Self {
            id: booking.id().to_string(),
            shop_id: booking.shop_id().to_string(),
            barber_id: booking.barber_id().to_string(),
            barber_name: barber_name.to_string(),
            service_id: booking.service_id().to_string(),
            service_name: service.map_or_else(|| "Unknown".to_string(), |s| s.name().to_string()),
            service_duration_minutes: service.map_or(0, |s| s.duration_minutes()),
            service_price: service.map_or(0.0, |s| s.price().amount()),
            service_currency: service.map_or_else(|| "EUR".to_string(), |s| {
                s.price().currency().to_string()
            }),
            customer_name: booking.customer_name().to_string(),
            customer_phone: booking.customer_phone().as_str().to_string(),
            customer_email: booking.customer_email().map(|e| e.as_str().to_string()),
            date: slot.date().format(DATE_FORMAT).to_string(),
            start_time: slot.start_time().format(DATETIME_FORMAT).to_string(),
            end_time: slot.end_time().format(DATETIME_FORMAT).to_string(),
            status: booking.status().to_string(),
            cancellation_code: booking.cancellation_code().to_string(),
            created_at: booking.created_at().format(DATETIME_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::BookingStatus;
    use crate::domain::value_objects::{Money, PhoneNumber};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn booking() -> Booking {
        let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        Booking::reconstruct(
            "bk-1",
            "shop-1",
            "b-1",
            "sv-1",
            "Anna Verdi",
            PhoneNumber::new("+393331234567").unwrap(),
            None,
            TimeSlot::new(date, 10, 0, 30).unwrap(),
            BookingStatus::Confirmed,
            date.and_hms_opt(8, 0, 0).unwrap(),
            "CODE01",
        )
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

    #[test]
    fn slot_record_uses_iso_shapes() {
        let slot = TimeSlot::new(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(), 9, 0, 30).unwrap();
        let record = SlotRecord::from_slot(&slot);
        assert_eq!(record.date, "2025-06-02");
        assert_eq!(record.start_time, "2025-06-02T09:00:00");
        assert_eq!(record.end_time, "2025-06-02T09:30:00");
        assert_eq!(record.duration_minutes, 30);
    }

    #[test]
    fn booking_record_joins_display_data() {
        let record = BookingRecord::assemble(&booking(), "Mario Rossi", Some(&service()));
        assert_eq!(record.barber_name, "Mario Rossi");
        assert_eq!(record.service_name, "Taglio Capelli");
        assert_eq!(record.service_price, 25.0);
        assert_eq!(record.status, "CONFIRMED");
        assert_eq!(record.date, "2025-06-02");
    }

    #[test]
    fn missing_service_degrades_to_unknown() {
        let record = BookingRecord::assemble(&booking(), "Mario Rossi", None);
        assert_eq!(record.service_name, "Unknown");
        assert_eq!(record.service_duration_minutes, 0);
        assert_eq!(record.service_price, 0.0);
        assert_eq!(record.service_currency, "EUR");
    }
}
