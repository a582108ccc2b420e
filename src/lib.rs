//! Catalog Desk - Login-gated product and user management
//!
//! A login gate backed by a users table, plus create/read/update/delete
//! and name search over products and users in a SQL store (Postgres or
//! SQLite through SeaORM).
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Records and input forms
//! - **services**: Validation, login and catalog use cases
//! - **infra**: Connection provider, migrations, repositories
//! - **utils**: Terminal rendering
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Create the tables and the administrator account
//! cargo run -- migrate up
//! cargo run -- seed
//!
//! # Manage products
//! cargo run -- products list --user admin --pass admin123
//! cargo run -- products search laptop --user admin --pass admin123
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Product, ProductForm, User, UserForm};
pub use errors::{AppError, AppResult};
pub use infra::Database;
