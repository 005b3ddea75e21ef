//! JSON tenant store.
//!
//! Persists one shop's full state (shop, barbers, services, bookings,
//! blocked slots) as a single JSON document. The CLI loads the file into
//! the in-memory repositories, runs a use case, and writes the snapshot
//! back. Writes go through a temp file + rename so an interrupted save
//! never truncates the live file.

use std::fs;
use std::path::{Path, PathBuf};

use barbiere_core::application::ApplicationError;
use barbiere_core::domain::{Barber, BlockedSlot, Booking, Service, Shop};
use barbiere_core::error::{BarbiereError, BarbiereResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::repositories::{
    InMemoryBarberRepository, InMemoryBlockedSlotRepository, InMemoryBookingRepository,
    InMemoryServiceRepository, InMemoryShopRepository,
};

/// Everything one tenant owns, in a serializable bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantState {
    pub shop: Shop,
    pub barbers: Vec<Barber>,
    pub services: Vec<Service>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub blocked_slots: Vec<BlockedSlot>,
}

impl TenantState {
    /// Spread the state across in-memory repositories.
    pub fn into_repositories(self) -> TenantRepositories {
        TenantRepositories {
            shops: InMemoryShopRepository::with_shops(vec![self.shop]),
            barbers: InMemoryBarberRepository::with_barbers(self.barbers),
            services: InMemoryServiceRepository::with_services(self.services),
            bookings: InMemoryBookingRepository::with_bookings(self.bookings),
            blocked_slots: InMemoryBlockedSlotRepository::with_blocked_slots(self.blocked_slots),
        }
    }
}

/// The in-memory repository bundle backing one CLI invocation.
#[derive(Debug, Clone)]
pub struct TenantRepositories {
    pub shops: InMemoryShopRepository,
    pub barbers: InMemoryBarberRepository,
    pub services: InMemoryServiceRepository,
    pub bookings: InMemoryBookingRepository,
    pub blocked_slots: InMemoryBlockedSlotRepository,
}

impl TenantRepositories {
    /// Collect the current repository contents back into a state bundle.
    pub fn snapshot(&self) -> BarbiereResult<TenantState> {
        let shop = self
            .shops
            .snapshot()?
            .into_iter()
            .next()
            .ok_or_else(|| storage_error("tenant store holds no shop"))?;
        Ok(TenantState {
            shop,
            barbers: self.barbers.snapshot()?,
            services: self.services.snapshot()?,
            bookings: self.bookings.snapshot()?,
            blocked_slots: self.blocked_slots.snapshot()?,
        })
    }
}

/// Whole-file JSON persistence for a [`TenantState`].
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> BarbiereResult<TenantState> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            storage_error(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let state = serde_json::from_str(&raw).map_err(|e| {
            storage_error(format!("cannot parse {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "tenant state loaded");
        Ok(state)
    }

    pub fn save(&self, state: &TenantState) -> BarbiereResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    storage_error(format!("cannot create {}: {e}", parent.display()))
                })?;
            }
        }
        let raw = serde_json::to_string_pretty(state)
            .map_err(|e| storage_error(format!("cannot serialize tenant state: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)
            .map_err(|e| storage_error(format!("cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            storage_error(format!("cannot move state into {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), "tenant state saved");
        Ok(())
    }
}

fn storage_error(reason: impl Into<String>) -> BarbiereError {
    ApplicationError::Storage {
        reason: reason.into(),
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
