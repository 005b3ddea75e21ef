//! The `Service` entity: a priced, fixed-duration offering of one shop.

use serde::{Deserialize, Serialize};

use crate::domain::entities::require_non_empty;
use crate::domain::error::DomainError;
use crate::domain::value_objects::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    id: String,
    shop_id: String,
    name: String,
    description: String,
    duration_minutes: u16,
    price: Money,
    is_active: bool,
}

impl Service {
    pub fn new(
        id: impl Into<String>,
        shop_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        duration_minutes: u16,
        price: Money,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let shop_id = shop_id.into();
        let name = name.into();
        require_non_empty("service id", &id)?;
        require_non_empty("shop id", &shop_id)?;
        require_non_empty("service name", &name)?;
        if duration_minutes == 0 || duration_minutes > 480 {
            return Err(DomainError::InvalidDuration(i64::from(duration_minutes)));
        }
        Ok(Self {
            id,
            shop_id,
            name,
            description: description.into(),
            duration_minutes,
            price,
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

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn duration_minutes(&self) -> u16 {
        self.duration_minutes
    }

    pub fn price(&self) -> &Money {
        &self.price
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Price changes recreate the value object; identity stays.
    pub fn with_price(self, price: Money) -> Service {
        Self { price, ..self }
    }

    pub fn activate(self) -> Service {
        Self {
            is_active: true,
            ..self
        }
    }

    pub fn deactivate(self) -> Service {
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

    fn price() -> Money {
        Money::new(25.0, "EUR").unwrap()
    }

    #[test]
    fn duration_bounds() {
        assert!(Service::new("sv", "s", "Taglio", "", 0, price(), true).is_err());
        assert!(Service::new("sv", "s", "Taglio", "", 481, price(), true).is_err());
        assert!(Service::new("sv", "s", "Taglio", "", 480, price(), true).is_ok());
        assert!(Service::new("sv", "s", "Taglio", "", 1, price(), true).is_ok());
    }

    #[test]
    fn description_may_be_empty() {
        assert!(Service::new("sv", "s", "Taglio", "", 30, price(), true).is_ok());
    }

    #[test]
    fn with_price_keeps_identity() {
        let service = Service::new("sv", "s", "Taglio", "", 30, price(), true).unwrap();
        let raised = service.clone().with_price(Money::new(28.0, "EUR").unwrap());
        assert_eq!(service.id(), raised.id());
        assert_eq!(raised.price().minor_units(), 2800);
    }
}
