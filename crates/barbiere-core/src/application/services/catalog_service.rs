//! Shop-owner administration: services and barbers.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::application::ports::{BarberRepository, IdGenerator, ServiceRepository};
use crate::application::services::{ensure_tenant, not_found};
use crate::domain::entities::{Barber, Service, WorkSchedule};
use crate::domain::value_objects::Money;
use crate::error::BarbiereResult;

/// Input for [`CatalogService::create_service`].
#[derive(Debug, Clone)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    pub duration_minutes: u16,
    pub price: f64,
    /// Defaults to EUR when omitted.
    pub currency: Option<String>,
}

/// Manages the tenant's offering: what can be booked, and with whom.
pub struct CatalogService {
    services: Arc<dyn ServiceRepository>,
    barbers: Arc<dyn BarberRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl CatalogService {
    pub fn new(
        services: Arc<dyn ServiceRepository>,
        barbers: Arc<dyn BarberRepository>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            services,
            barbers,
            ids,
        }
    }

    #[instrument(skip_all, fields(shop_id = %shop_id, name = %request.name))]
    pub fn create_service(
        &self,
        shop_id: &str,
        request: CreateServiceRequest,
    ) -> BarbiereResult<Service> {
        let price = Money::new(request.price, request.currency.as_deref().unwrap_or("EUR"))?;
        let service = Service::new(
            self.ids.generate(),
            shop_id,
            request.name,
            request.description,
            request.duration_minutes,
            price,
            true,
        )?;
        let saved = self.services.save(service)?;
        info!(service_id = %saved.id(), "service created");
        Ok(saved)
    }

    pub fn list_services(&self, shop_id: &str) -> BarbiereResult<Vec<Service>> {
        self.services.find_by_shop(shop_id)
    }

    /// Reprice a service: same identity, new `Money` value object.
    #[instrument(skip_all, fields(shop_id = %shop_id, service_id = %service_id))]
    pub fn update_service_price(
        &self,
        shop_id: &str,
        service_id: &str,
        price: f64,
        currency: Option<&str>,
    ) -> BarbiereResult<Service> {
        let service = self
            .services
            .find_by_id(service_id)?
            .ok_or_else(|| not_found("service", service_id))?;
        ensure_tenant("service", service.id(), service.shop_id(), shop_id)?;
        let repriced = service.with_price(Money::new(price, currency.unwrap_or("EUR"))?);
        self.services.update(repriced)
    }

    /// Soft-delete: the service stops being offered but history keeps it.
    #[instrument(skip_all, fields(shop_id = %shop_id, service_id = %service_id))]
    pub fn deactivate_service(&self, shop_id: &str, service_id: &str) -> BarbiereResult<Service> {
        let service = self
            .services
            .find_by_id(service_id)?
            .ok_or_else(|| not_found("service", service_id))?;
        ensure_tenant("service", service.id(), service.shop_id(), shop_id)?;
        self.services.update(service.deactivate())
    }

    /// List the shop's barbers. Public callers pass `only_active = true`;
    /// the back office sees everyone.
    pub fn list_barbers(&self, shop_id: &str, only_active: bool) -> BarbiereResult<Vec<Barber>> {
        let barbers = self.barbers.find_by_shop(shop_id)?;
        Ok(if only_active {
            barbers.into_iter().filter(Barber::is_active).collect()
        } else {
            barbers
        })
    }

    #[instrument(skip_all, fields(shop_id = %shop_id, name = %name))]
    pub fn register_barber(
        &self,
        shop_id: &str,
        name: &str,
        schedule: WorkSchedule,
    ) -> BarbiereResult<Barber> {
        let barber = Barber::new(self.ids.generate(), shop_id, name, schedule, true)?;
        let saved = self.barbers.save(barber)?;
        info!(barber_id = %saved.id(), "barber registered");
        Ok(saved)
    }

    /// Stops future bookings for this barber; history stays intact.
    #[instrument(skip_all, fields(shop_id = %shop_id, barber_id = %barber_id))]
    pub fn deactivate_barber(&self, shop_id: &str, barber_id: &str) -> BarbiereResult<Barber> {
        let barber = self
            .barbers
            .find_by_id(barber_id)?
            .ok_or_else(|| not_found("barber", barber_id))?;
        ensure_tenant("barber", barber.id(), barber.shop_id(), shop_id)?;
        self.barbers.save(barber.deactivate())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{MockBarberRepository, MockServiceRepository};
    use crate::application::ApplicationError;
    use crate::domain::ports::MockIdGenerator;
    use crate::error::BarbiereError;

    fn build(
        services: MockServiceRepository,
        barbers: MockBarberRepository,
        ids: MockIdGenerator,
    ) -> CatalogService {
        CatalogService::new(Arc::new(services), Arc::new(barbers), Arc::new(ids))
    }

    fn existing_service() -> Service {
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
    fn create_service_defaults_to_eur() {
        let mut services = MockServiceRepository::new();
        services.expect_save().returning(|s| Ok(s));
        let mut ids = MockIdGenerator::new();
        ids.expect_generate().return_const("sv-1".to_string());

        let created = build(services, MockBarberRepository::new(), ids)
            .create_service(
                "shop-1",
                CreateServiceRequest {
                    name: "Taglio Capelli".into(),
                    description: "Taglio di capelli completo".into(),
                    duration_minutes: 30,
                    price: 25.0,
                    currency: None,
                },
            )
            .unwrap();
        assert_eq!(created.price().currency(), "EUR");
        assert_eq!(created.shop_id(), "shop-1");
        assert!(created.is_active());
    }

    #[test]
    fn create_service_rejects_bad_duration() {
        let ids = MockIdGenerator::new();
        let result = build(MockServiceRepository::new(), MockBarberRepository::new(), {
            let mut ids = ids;
            ids.expect_generate().return_const("sv-1".to_string());
            ids
        })
        .create_service(
            "shop-1",
            CreateServiceRequest {
                name: "Maratona".into(),
                description: "".into(),
                duration_minutes: 481,
                price: 99.0,
                currency: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn update_price_keeps_identity() {
        let mut services = MockServiceRepository::new();
        services
            .expect_find_by_id()
            .returning(|_| Ok(Some(existing_service())));
        services
            .expect_update()
            .withf(|s| s.price().minor_units() == 2800 && s.id() == "sv-1")
            .returning(|s| Ok(s));

        let updated = build(services, MockBarberRepository::new(), MockIdGenerator::new())
            .update_service_price("shop-1", "sv-1", 28.0, None)
            .unwrap();
        assert_eq!(updated.price().minor_units(), 2800);
    }

    #[test]
    fn update_price_checks_tenant() {
        let mut services = MockServiceRepository::new();
        services
            .expect_find_by_id()
            .returning(|_| Ok(Some(existing_service())));
        let err = build(services, MockBarberRepository::new(), MockIdGenerator::new())
            .update_service_price("other-shop", "sv-1", 28.0, None)
            .unwrap_err();
        assert!(matches!(
            err,
            BarbiereError::Application(ApplicationError::TenantMismatch { .. })
        ));
    }

    #[test]
    fn list_barbers_filters_inactive_for_public_calls() {
        let mut barbers = MockBarberRepository::new();
        barbers.expect_find_by_shop().returning(|_| {
            Ok(vec![
                Barber::new("b-1", "shop-1", "Mario", WorkSchedule::closed(), true).unwrap(),
                Barber::new("b-2", "shop-1", "Luca", WorkSchedule::closed(), false).unwrap(),
            ])
        });

        let catalog = build(MockServiceRepository::new(), barbers, MockIdGenerator::new());
        let public = catalog.list_barbers("shop-1", true).unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].name(), "Mario");

        let back_office = catalog.list_barbers("shop-1", false).unwrap();
        assert_eq!(back_office.len(), 2);
    }

    #[test]
    fn register_barber_starts_active() {
        let mut barbers = MockBarberRepository::new();
        barbers.expect_save().returning(|b| Ok(b));
        let mut ids = MockIdGenerator::new();
        ids.expect_generate().return_const("b-9".to_string());

        let barber = build(MockServiceRepository::new(), barbers, ids)
            .register_barber("shop-1", "Giovanni Blu", WorkSchedule::closed())
            .unwrap();
        assert_eq!(barber.id(), "b-9");
        assert_eq!(barber.shop_id(), "shop-1");
        assert!(barber.is_active());
    }

    #[test]
    fn deactivate_barber_is_persisted_as_inactive() {
        let mut barbers = MockBarberRepository::new();
        barbers.expect_find_by_id().returning(|_| {
            Ok(Some(
                Barber::new("b-1", "shop-1", "Mario", WorkSchedule::closed(), true).unwrap(),
            ))
        });
        barbers
            .expect_save()
            .withf(|b| !b.is_active())
            .returning(|b| Ok(b));

        let off = build(MockServiceRepository::new(), barbers, MockIdGenerator::new())
            .deactivate_barber("shop-1", "b-1")
            .unwrap();
        assert!(!off.is_active());
    }
}
