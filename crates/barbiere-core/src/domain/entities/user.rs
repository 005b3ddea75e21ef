//! Back-office users (shop owners and admins).
//!
//! Authentication mechanics live outside the core; this entity only
//! carries the tenant-scoped identity the rules and repositories refer to.

use serde::{Deserialize, Serialize};

use crate::domain::entities::require_non_empty;
use crate::domain::error::DomainError;
use crate::domain::value_objects::Email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: String,
    shop_id: String,
    email: Email,
    password_hash: String,
    role: UserRole,
    is_active: bool,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        shop_id: impl Into<String>,
        email: Email,
        password_hash: impl Into<String>,
        role: UserRole,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let shop_id = shop_id.into();
        let password_hash = password_hash.into();
        require_non_empty("user id", &id)?;
        require_non_empty("shop id", &shop_id)?;
        require_non_empty("password hash", &password_hash)?;
        Ok(Self {
            id,
            shop_id,
            email,
            password_hash,
            role,
            is_active,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shop_id(&self) -> &str {
        &self.shop_id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn activate(self) -> User {
        Self {
            is_active: true,
            ..self
        }
    }

    pub fn deactivate(self) -> User {
        Self {
            is_active: false,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_and_deactivation() {
        let user = User::new(
            "u-1",
            "shop-1",
            Email::new("admin@labottega.it").unwrap(),
            "$2b$10$abcdef",
            UserRole::Owner,
            true,
        )
        .unwrap();
        assert_eq!(user.role(), UserRole::Owner);
        let off = user.clone().deactivate();
        assert!(!off.is_active());
        assert_eq!(user.id(), off.id());
    }

    #[test]
    fn rejects_blank_password_hash() {
        assert!(
            User::new(
                "u-1",
                "shop-1",
                Email::new("admin@labottega.it").unwrap(),
                "",
                UserRole::Admin,
                true,
            )
            .is_err()
        );
    }
}
