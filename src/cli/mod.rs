//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `migrate` - Database migrations
//! - `seed` - Initial administrator and sample products
//! - `login` - Credential check
//! - `products` / `users` - Record management behind the login gate

pub mod args;

pub use args::{Cli, Commands};
