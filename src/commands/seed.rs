//! Seed command - Initial data for an empty store.

use rust_decimal::Decimal;

use crate::config::Config;
use crate::domain::{ProductForm, UserForm};
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

use super::finish;

/// Sample products inserted when the products table is empty
const SAMPLE_PRODUCTS: [(&str, i64, u32); 2] =
    [("Gaming Laptop", 129_999, 2), ("Keyboard", 4_990, 2)];

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    let services = Services::from_database(db.clone());

    let outcome = seed(&services, &config).await;
    finish(outcome, db.close().await).map(|_| ())
}

/// Insert the administrator if there are no users and the sample products
/// if there are no products. Returns how many rows were inserted.
pub async fn seed(services: &dyn ServiceContainer, config: &Config) -> AppResult<usize> {
    let mut inserted = 0;

    if services.users().list_users().await?.is_empty() {
        let form = UserForm::new(&config.seed_admin_username, config.seed_admin_password());
        let admin = services.users().add_user(form).await?;
        tracing::info!(user_id = admin.id, username = %admin.username, "Administrator created");
        inserted += 1;
    } else {
        tracing::info!("Users already present, skipping administrator");
    }

    if services.products().list_products().await?.is_empty() {
        for (name, cents, scale) in SAMPLE_PRODUCTS {
            let form = ProductForm::new(name, Decimal::new(cents, scale));
            services.products().add_product(form).await?;
            inserted += 1;
        }
        tracing::info!(count = SAMPLE_PRODUCTS.len(), "Sample products created");
    } else {
        tracing::info!("Products already present, skipping samples");
    }

    println!("Seeded {} record(s)", inserted);
    Ok(inserted)
}
