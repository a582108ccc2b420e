//! Service Container - Centralized service access.
//!
//! Builds both stores from one [`Database`] and hands out the services as
//! trait objects, so commands depend on the service traits only.

use std::sync::Arc;

use super::{AuthService, ProductService, UserService};
use crate::infra::{Database, ProductStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductService>,
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create service container from a database connection provider
    pub fn from_database(db: Database) -> Self {
        use super::{Authenticator, ProductCatalog, UserManager};

        let products = Arc::new(ProductStore::new(db.clone()));
        let users = Arc::new(UserStore::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(users.clone())),
            product_service: Arc::new(ProductCatalog::new(products)),
            user_service: Arc::new(UserManager::new(users)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
