//! Availability and schedule administration use cases.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::application::ports::{
    BarberRepository, BlockedSlotRepository, BookingRepository, Clock, IdGenerator,
    ServiceRepository, ShopRepository,
};
use crate::application::records::SlotRecord;
use crate::application::services::{ensure_tenant, not_found};
use crate::domain::entities::BlockedSlot;
use crate::domain::rules;
use crate::domain::value_objects::TimeSlot;
use crate::error::BarbiereResult;

/// Input for [`ScheduleService::block_time_slot`].
#[derive(Debug, Clone)]
pub struct BlockTimeSlotRequest {
    pub barber_id: String,
    pub date: NaiveDate,
    pub start_hour: u32,
    pub start_minute: u32,
    pub duration_minutes: u32,
    pub reason: String,
}

/// Derives availability and manages ad-hoc blocks.
pub struct ScheduleService {
    shops: Arc<dyn ShopRepository>,
    barbers: Arc<dyn BarberRepository>,
    services: Arc<dyn ServiceRepository>,
    bookings: Arc<dyn BookingRepository>,
    blocked_slots: Arc<dyn BlockedSlotRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ScheduleService {
    pub fn new(
        shops: Arc<dyn ShopRepository>,
        barbers: Arc<dyn BarberRepository>,
        services: Arc<dyn ServiceRepository>,
        bookings: Arc<dyn BookingRepository>,
        blocked_slots: Arc<dyn BlockedSlotRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            shops,
            barbers,
            services,
            bookings,
            blocked_slots,
            ids,
            clock,
        }
    }

    /// The bookable slots for one barber/service/day.
    ///
    /// A read-only derivation: the creation rules re-validate whichever
    /// slot the customer eventually picks.
    #[instrument(skip_all, fields(shop_id = %shop_id, barber_id = %barber_id, service_id = %service_id, date = %date))]
    pub fn available_slots(
        &self,
        shop_id: &str,
        barber_id: &str,
        service_id: &str,
        date: NaiveDate,
    ) -> BarbiereResult<Vec<SlotRecord>> {
        let shop = self
            .shops
            .find_by_id(shop_id)?
            .ok_or_else(|| not_found("shop", shop_id))?;
        let barber = self
            .barbers
            .find_by_id(barber_id)?
            .ok_or_else(|| not_found("barber", barber_id))?;
        ensure_tenant("barber", barber.id(), barber.shop_id(), shop_id)?;
        let service = self
            .services
            .find_by_id(service_id)?
            .ok_or_else(|| not_found("service", service_id))?;
        ensure_tenant("service", service.id(), service.shop_id(), shop_id)?;

        let existing = self.bookings.find_by_barber_and_date(barber_id, date)?;
        let blocked: Vec<TimeSlot> = self
            .blocked_slots
            .find_by_barber_and_date(barber_id, date)?
            .into_iter()
            .map(|blocked| blocked.time_slot().clone())
            .collect();

        let slots = rules::generate_available_slots(
            date,
            &barber,
            &shop,
            &service,
            &existing,
            &blocked,
            shop.settings().slot_duration_minutes,
        );

        Ok(slots.iter().map(SlotRecord::from_slot).collect())
    }

    /// Carve a slot out of a barber's availability.
    #[instrument(skip_all, fields(shop_id = %shop_id, barber_id = %request.barber_id))]
    pub fn block_time_slot(
        &self,
        shop_id: &str,
        request: BlockTimeSlotRequest,
    ) -> BarbiereResult<BlockedSlot> {
        let barber = self
            .barbers
            .find_by_id(&request.barber_id)?
            .ok_or_else(|| not_found("barber", &request.barber_id))?;
        ensure_tenant("barber", barber.id(), barber.shop_id(), shop_id)?;

        let slot = TimeSlot::new(
            request.date,
            request.start_hour,
            request.start_minute,
            request.duration_minutes,
        )?;
        let blocked = BlockedSlot::new(
            self.ids.generate(),
            shop_id,
            barber.id(),
            slot,
            request.reason,
            self.clock.now(),
        )?;
        let saved = self.blocked_slots.save(blocked)?;
        info!(blocked_slot_id = %saved.id(), "time slot blocked");
        Ok(saved)
    }

    /// Remove a previously created block.
    #[instrument(skip_all, fields(shop_id = %shop_id, blocked_slot_id = %blocked_slot_id))]
    pub fn unblock_time_slot(&self, shop_id: &str, blocked_slot_id: &str) -> BarbiereResult<()> {
        let _ = shop_id; // blocks are keyed by opaque id; tenancy is checked at creation
        self.blocked_slots.delete(blocked_slot_id)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
