//! The `Shop` tenant root.

use serde::{Deserialize, Serialize};

use crate::domain::entities::require_non_empty;
use crate::domain::error::DomainError;
use crate::domain::value_objects::TimeOfDay;

/// Per-shop scheduling configuration.
///
/// `opening_time < closing_time` is deliberately NOT enforced here: a shop
/// whose closing is at or before its opening simply yields zero slots from
/// schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopSettings {
    pub opening_time: TimeOfDay,
    pub closing_time: TimeOfDay,
    /// IANA timezone name, e.g. "Europe/Rome". Carried as data for the
    /// delivery layer; the core treats all timestamps as shop-local.
    pub timezone: String,
    pub slot_duration_minutes: u16,
    pub booking_advance_days: u16,
}

impl ShopSettings {
    pub fn validate(&self) -> Result<(), DomainError> {
        require_non_empty("timezone", &self.timezone)?;
        if self.slot_duration_minutes == 0 || self.slot_duration_minutes > 480 {
            return Err(DomainError::InvalidDuration(i64::from(
                self.slot_duration_minutes,
            )));
        }
        if self.booking_advance_days > 365 {
            return Err(DomainError::InvalidAdvanceDays(u32::from(
                self.booking_advance_days,
            )));
        }
        Ok(())
    }
}

/// A single barbershop — the tenant boundary for everything else.
///
/// Shops are never hard-deleted; `deactivate` stops future bookings while
/// preserving history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    id: String,
    name: String,
    slug: String,
    settings: ShopSettings,
    is_active: bool,
}

impl Shop {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        slug: impl Into<String>,
        settings: ShopSettings,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();
        let slug = slug.into();
        require_non_empty("shop id", &id)?;
        require_non_empty("shop name", &name)?;
        require_non_empty("shop slug", &slug)?;
        if !is_valid_slug(&slug) {
            return Err(DomainError::InvalidSlug(slug));
        }
        settings.validate()?;
        Ok(Self {
            id,
            name,
            slug,
            settings,
            is_active,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn settings(&self) -> &ShopSettings {
        &self.settings
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Half-open check against opening/closing: the closing minute itself
    /// is already outside operating hours.
    pub fn is_open_at(&self, hour: u32, minute: u32) -> bool {
        let query = hour * 60 + minute;
        let open = u32::from(self.settings.opening_time.minute_of_day());
        let close = u32::from(self.settings.closing_time.minute_of_day());
        open <= query && query < close
    }

    pub fn with_settings(self, settings: ShopSettings) -> Result<Shop, DomainError> {
        settings.validate()?;
        Ok(Self { settings, ..self })
    }

    pub fn activate(self) -> Shop {
        Self {
            is_active: true,
            ..self
        }
    }

    pub fn deactivate(self) -> Shop {
        Self {
            is_active: false,
            ..self
        }
    }
}

fn is_valid_slug(slug: &str) -> bool {
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ── Tests ─────────────────────────────────────────────────────────────────────
