//! Infrastructure layer - External systems integration
//!
//! - Database connection provider and migrations
//! - Repositories for the products and users tables

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{ProductRepository, ProductStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockProductRepository, MockUserRepository};
