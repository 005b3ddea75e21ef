//! The `Barber` entity and its weekly work schedule.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::domain::entities::require_non_empty;
use crate::domain::error::DomainError;
use crate::domain::value_objects::TimeOfDay;

/// One day of a barber's week.
///
/// `start >= end` is NOT rejected: the `TimeOfDay` type already enforces
/// format, and a malformed ordering simply yields no slots downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub is_working: bool,
}

impl DaySchedule {
    pub fn working(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            start,
            end,
            is_working: true,
        }
    }

    pub fn off() -> Self {
        Self {
            start: TimeOfDay::MIDNIGHT,
            end: TimeOfDay::MIDNIGHT,
            is_working: false,
        }
    }
}

/// A full week of day schedules, indexed Sunday = 0 .. Saturday = 6
/// (calendar convention, not ISO).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSchedule {
    days: [DaySchedule; 7],
}

impl WorkSchedule {
    pub fn new(days: [DaySchedule; 7]) -> Self {
        Self { days }
    }

    /// Every day off.
    pub fn closed() -> Self {
        Self {
            days: [DaySchedule::off(); 7],
        }
    }

    pub fn day(&self, weekday: Weekday) -> &DaySchedule {
        &self.days[weekday.num_days_from_sunday() as usize]
    }

    pub fn with_day(mut self, weekday: Weekday, schedule: DaySchedule) -> Self {
        self.days[weekday.num_days_from_sunday() as usize] = schedule;
        self
    }
}

/// A barber working in exactly one shop.
///
/// Deactivation stops future bookings while keeping past ones intact;
/// barbers are never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barber {
    id: String,
    shop_id: String,
    name: String,
    schedule: WorkSchedule,
    is_active: bool,
}

impl Barber {
    pub fn new(
        id: impl Into<String>,
        shop_id: impl Into<String>,
        name: impl Into<String>,
        schedule: WorkSchedule,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let shop_id = shop_id.into();
        let name = name.into();
        require_non_empty("barber id", &id)?;
        require_non_empty("shop id", &shop_id)?;
        require_non_empty("barber name", &name)?;
        Ok(Self {
            id,
            shop_id,
            name,
            schedule,
            is_active,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schedule(&self) -> &WorkSchedule {
        &self.schedule
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Half-open check against that day's window: the end minute itself is
    /// no longer working time.
    pub fn is_working_at(&self, weekday: Weekday, hour: u32, minute: u32) -> bool {
        let day = self.schedule.day(weekday);
        if !day.is_working {
            return false;
        }
        let query = hour * 60 + minute;
        let start = u32::from(day.start.minute_of_day());
        let end = u32::from(day.end.minute_of_day());
        start <= query && query < end
    }

    pub fn with_schedule(self, schedule: WorkSchedule) -> Barber {
        Self { schedule, ..self }
    }

    pub fn activate(self) -> Barber {
        Self {
            is_active: true,
            ..self
        }
    }

    pub fn deactivate(self) -> Barber {
        Self {
            is_active: false,
            ..self
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn weekday_schedule() -> WorkSchedule {
        // Mon-Fri 09:00-18:00, weekend off.
        let working = DaySchedule::working("09:00".parse().unwrap(), "18:00".parse().unwrap());
        WorkSchedule::closed()
            .with_day(Weekday::Mon, working)
            .with_day(Weekday::Tue, working)
            .with_day(Weekday::Wed, working)
            .with_day(Weekday::Thu, working)
            .with_day(Weekday::Fri, working)
    }

    fn barber() -> Barber {
        Barber::new("b-1", "shop-1", "Mario Rossi", weekday_schedule(), true).unwrap()
    }

    #[test]
    fn not_working_on_day_off() {
        assert!(!barber().is_working_at(Weekday::Sun, 10, 0));
        assert!(!barber().is_working_at(Weekday::Sat, 10, 0));
    }

    #[test]
    fn working_window_is_half_open() {
        let b = barber();
        assert!(!b.is_working_at(Weekday::Mon, 8, 59));
        assert!(b.is_working_at(Weekday::Mon, 9, 0));
        assert!(b.is_working_at(Weekday::Mon, 17, 59));
        assert!(!b.is_working_at(Weekday::Mon, 18, 0));
    }

    #[test]
    fn week_is_indexed_from_sunday() {
        let sunday_only = WorkSchedule::closed().with_day(
            Weekday::Sun,
            DaySchedule::working("10:00".parse().unwrap(), "14:00".parse().unwrap()),
        );
        let b = Barber::new("b", "s", "n", sunday_only, true).unwrap();
        assert!(b.is_working_at(Weekday::Sun, 11, 0));
        assert!(!b.is_working_at(Weekday::Mon, 11, 0));
    }

    #[test]
    fn inverted_day_window_yields_no_working_time() {
        let inverted = WorkSchedule::closed().with_day(
            Weekday::Mon,
            DaySchedule::working("18:00".parse().unwrap(), "09:00".parse().unwrap()),
        );
        let b = Barber::new("b", "s", "n", inverted, true).unwrap();
        assert!(!b.is_working_at(Weekday::Mon, 10, 0));
        assert!(!b.is_working_at(Weekday::Mon, 18, 0));
    }

    #[test]
    fn rejects_blank_fields() {
        assert!(Barber::new("", "s", "n", WorkSchedule::closed(), true).is_err());
        assert!(Barber::new("b", "", "n", WorkSchedule::closed(), true).is_err());
        assert!(Barber::new("b", "s", " ", WorkSchedule::closed(), true).is_err());
    }

    #[test]
    fn deactivate_preserves_identity() {
        let b = barber();
        let off = b.clone().deactivate();
        assert!(!off.is_active());
        assert_eq!(b.id(), off.id());
        assert_eq!(b.schedule(), off.schedule());
    }
}
