//! Use-case orchestration services.
//!
//! Each service composes entities, rules and ports into one application
//! operation. Tenant context is an explicit `shop_id` parameter threaded
//! through every call — there is deliberately no ambient/request-scoped
//! tenant holder.

pub mod booking_service;
pub mod catalog_service;
pub mod schedule_service;

pub use booking_service::{BookingService, CreateBookingRequest};
pub use catalog_service::{CatalogService, CreateServiceRequest};
pub use schedule_service::{BlockTimeSlotRequest, ScheduleService};

use crate::application::ApplicationError;
use crate::error::{BarbiereError, BarbiereResult};

pub(crate) fn not_found(entity: &'static str, id: &str) -> BarbiereError {
    ApplicationError::NotFound {
        entity,
        id: id.to_string(),
    }
    .into()
}

/// Every cross-entity reference must stay inside the caller's shop.
pub(crate) fn ensure_tenant(
    entity: &'static str,
    id: &str,
    owner_shop_id: &str,
    shop_id: &str,
) -> BarbiereResult<()> {
    if owner_shop_id != shop_id {
        return Err(ApplicationError::TenantMismatch {
            entity,
            id: id.to_string(),
            shop_id: shop_id.to_string(),
        }
        .into());
    }
    Ok(())
}
