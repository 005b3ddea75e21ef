//! Notification adapters.
//!
//! Real channels (email, SMS) live outside this repository; the tracing
//! notifier stands in for them and demonstrates the contract: failures are
//! the caller's to log and swallow, never to propagate.

use barbiere_core::application::ports::{NotificationError, NotificationService};
use barbiere_core::domain::Booking;
use tracing::info;

/// Logs every notification as a structured event and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for TracingNotifier {
    fn send_booking_confirmation(&self, booking: &Booking) -> Result<(), NotificationError> {
        info!(
            booking_id = %booking.id(),
            customer = %booking.customer_name(),
            phone = %booking.customer_phone(),
            slot = %booking.time_slot(),
            "booking confirmation"
        );
        Ok(())
    }

    fn send_booking_cancellation(&self, booking: &Booking) -> Result<(), NotificationError> {
        info!(
            booking_id = %booking.id(),
            customer = %booking.customer_name(),
            slot = %booking.time_slot(),
            "booking cancellation"
        );
        Ok(())
    }

    fn send_booking_reminder(&self, booking: &Booking) -> Result<(), NotificationError> {
        info!(
            booking_id = %booking.id(),
            customer = %booking.customer_name(),
            slot = %booking.time_slot(),
            "booking reminder"
        );
        Ok(())
    }
}

/// Always fails. Exists to prove that notification failures never abort a
/// booking transaction.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingNotifier;

impl FailingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl NotificationService for FailingNotifier {
    fn send_booking_confirmation(&self, _booking: &Booking) -> Result<(), NotificationError> {
        Err(NotificationError("notification channel down".into()))
    }

    fn send_booking_cancellation(&self, _booking: &Booking) -> Result<(), NotificationError> {
        Err(NotificationError("notification channel down".into()))
    }

    fn send_booking_reminder(&self, _booking: &Booking) -> Result<(), NotificationError> {
        Err(NotificationError("notification channel down".into()))
    }
}
