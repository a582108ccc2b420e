//! Domain layer - Core records and input forms
//!
//! Plain data holders for the two tables plus the forms that carry
//! caller input into the services. Nothing here touches the store.

pub mod product;
pub mod user;

pub use product::{Product, ProductForm};
pub use user::{User, UserForm};
