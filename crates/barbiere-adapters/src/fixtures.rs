//! Demo tenant used by `barbiere init` and the integration tests.

use barbiere_core::domain::{
    Barber, DaySchedule, IdGenerator, Money, Service, Shop, ShopSettings, TimeOfDay, WorkSchedule,
};
use barbiere_core::error::BarbiereResult;
use chrono::Weekday;

use crate::store::TenantState;

fn tod(s: &str) -> BarbiereResult<TimeOfDay> {
    Ok(s.parse::<TimeOfDay>()?)
}

/// A small but realistic shop: two barbers, three services, no bookings.
pub fn demo_tenant(ids: &dyn IdGenerator) -> BarbiereResult<TenantState> {
    let shop = Shop::new(
        ids.generate(),
        "La Bottega",
        "la-bottega",
        ShopSettings {
            opening_time: tod("09:00")?,
            closing_time: tod("19:00")?,
            timezone: "Europe/Rome".into(),
            slot_duration_minutes: 30,
            booking_advance_days: 30,
        },
        true,
    )?;

    let full_day = DaySchedule::working(tod("09:00")?, tod("18:00")?);
    let mario_schedule = WorkSchedule::closed()
        .with_day(Weekday::Mon, full_day)
        .with_day(Weekday::Tue, full_day)
        .with_day(Weekday::Wed, full_day)
        .with_day(Weekday::Thu, full_day)
        .with_day(Weekday::Fri, full_day)
        .with_day(
            Weekday::Sat,
            DaySchedule::working(tod("09:00")?, tod("13:00")?),
        );
    let mario = Barber::new(ids.generate(), shop.id(), "Mario Rossi", mario_schedule, true)?;

    let late_day = DaySchedule::working(tod("10:00")?, tod("19:00")?);
    let luca_schedule = WorkSchedule::closed()
        .with_day(Weekday::Tue, late_day)
        .with_day(Weekday::Wed, late_day)
        .with_day(Weekday::Thu, late_day)
        .with_day(Weekday::Fri, late_day)
        .with_day(Weekday::Sat, late_day);
    let luca = Barber::new(ids.generate(), shop.id(), "Luca Bianchi", luca_schedule, true)?;

    let services = vec![
        Service::new(
            ids.generate(),
            shop.id(),
            "Taglio Capelli",
            "Taglio di capelli completo",
            30,
            Money::new(25.0, "EUR")?,
            true,
        )?,
        Service::new(
            ids.generate(),
            shop.id(),
            "Rasatura Barba",
            "Rasatura tradizionale con panno caldo",
            30,
            Money::new(15.0, "EUR")?,
            true,
        )?,
        Service::new(
            ids.generate(),
            shop.id(),
            "Taglio e Barba",
            "Taglio completo con rifinitura barba",
            60,
            Money::new(35.0, "EUR")?,
            true,
        )?,
    ];

    Ok(TenantState {
        shop,
        barbers: vec![mario, luca],
        services,
        bookings: Vec::new(),
        blocked_slots: Vec::new(),
    })
}
