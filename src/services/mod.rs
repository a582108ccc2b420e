//! Application services layer - Use cases and business logic.
//!
//! Services validate caller input and orchestrate the repositories. They
//! depend on the repository traits, so tests swap in mocks.

mod auth_service;
pub mod container;
mod product_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use product_service::{ProductCatalog, ProductService};
pub use user_service::{UserManager, UserService};
