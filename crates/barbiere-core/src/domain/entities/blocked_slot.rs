//! Ad-hoc admin-created availability exclusions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::require_non_empty;
use crate::domain::error::DomainError;
use crate::domain::value_objects::TimeSlot;

/// A slot carved out of a barber's availability (holiday, walk-in,
/// maintenance, ...). Independent of bookings, and deletable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockedSlot {
    id: String,
    shop_id: String,
    barber_id: String,
    time_slot: TimeSlot,
    reason: String,
    created_at: NaiveDateTime,
}

impl BlockedSlot {
    pub fn new(
        id: impl Into<String>,
        shop_id: impl Into<String>,
        barber_id: impl Into<String>,
        time_slot: TimeSlot,
        reason: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let shop_id = shop_id.into();
        let barber_id = barber_id.into();
        require_non_empty("blocked slot id", &id)?;
        require_non_empty("shop id", &shop_id)?;
        require_non_empty("barber id", &barber_id)?;
        Ok(Self {
            id,
            shop_id,
            barber_id,
            time_slot,
            reason: reason.into(),
            created_at,
        })
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

    pub fn time_slot(&self) -> &TimeSlot {
        &self.time_slot
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }
}
