//! Command handlers.
//!
//! Every handler follows the same load-mutate-save cycle: open the tenant
//! data file into in-memory repositories, run the use case through the
//! core services, and persist the snapshot back when something changed.

use std::sync::Arc;

use barbiere_adapters::{JsonStore, SystemClock, TenantRepositories, TracingNotifier, UuidGenerator};
use barbiere_core::application::{BookingService, CatalogService, ScheduleService};
use barbiere_core::domain::{Shop, TimeOfDay};
use chrono::NaiveDate;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

pub mod agenda;
pub mod block;
pub mod book;
pub mod booking_ops;
pub mod catalog;
pub mod init;
pub mod slots;

/// One CLI invocation's view of the tenant: the backing store plus the
/// loaded repositories.
pub(crate) struct Workspace {
    store: JsonStore,
    pub repos: TenantRepositories,
    pub shop: Shop,
}

impl Workspace {
    /// Load the tenant data file, honoring `--data` and `--shop`.
    pub fn open(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let path = global
            .data
            .clone()
            .unwrap_or_else(|| config.data_file.clone());
        let store = JsonStore::new(path);
        if !store.exists() {
            return Err(CliError::TenantNotInitialized {
                path: store.path().to_path_buf(),
            });
        }
        let state = store.load()?;
        if let Some(requested) = &global.shop {
            if state.shop.slug() != requested {
                return Err(CliError::ShopMismatch {
                    requested: requested.clone(),
                    actual: state.shop.slug().to_string(),
                });
            }
        }
        let shop = state.shop.clone();
        Ok(Self {
            store,
            repos: state.into_repositories(),
            shop,
        })
    }

    /// Write the repository snapshot back to disk.
    pub fn persist(&self) -> CliResult<()> {
        let state = self.repos.snapshot()?;
        self.store.save(&state)?;
        Ok(())
    }

    pub fn shop_id(&self) -> &str {
        self.shop.id()
    }

    pub fn booking_service(&self) -> BookingService {
        BookingService::new(
            Arc::new(self.repos.bookings.clone()),
            Arc::new(self.repos.shops.clone()),
            Arc::new(self.repos.barbers.clone()),
            Arc::new(self.repos.services.clone()),
            Arc::new(TracingNotifier::new()),
            Arc::new(UuidGenerator::new()),
            Arc::new(SystemClock::new()),
        )
    }

    pub fn schedule_service(&self) -> ScheduleService {
        ScheduleService::new(
            Arc::new(self.repos.shops.clone()),
            Arc::new(self.repos.barbers.clone()),
            Arc::new(self.repos.services.clone()),
            Arc::new(self.repos.bookings.clone()),
            Arc::new(self.repos.blocked_slots.clone()),
            Arc::new(UuidGenerator::new()),
            Arc::new(SystemClock::new()),
        )
    }

    pub fn catalog_service(&self) -> CatalogService {
        CatalogService::new(
            Arc::new(self.repos.services.clone()),
            Arc::new(self.repos.barbers.clone()),
            Arc::new(UuidGenerator::new()),
        )
    }
}

/// Parse a `YYYY-MM-DD` argument.
pub(crate) fn parse_date(raw: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| CliError::InvalidInput {
        message: format!("invalid date '{raw}', expected YYYY-MM-DD"),
    })
}

/// Parse an `HH:mm` argument into an (hour, minute) pair.
pub(crate) fn parse_time(raw: &str) -> CliResult<(u32, u32)> {
    let time: TimeOfDay = raw.parse().map_err(|_| CliError::InvalidInput {
        message: format!("invalid time '{raw}', expected HH:mm"),
    })?;
    Ok((u32::from(time.hour()), u32::from(time.minute())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso() {
        assert_eq!(
            parse_date("2026-03-02").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
        );
        assert!(parse_date("02/03/2026").is_err());
    }

    #[test]
    fn parse_time_accepts_hhmm() {
        assert_eq!(parse_time("09:30").unwrap(), (9, 30));
        assert!(parse_time("9am").is_err());
    }
}
