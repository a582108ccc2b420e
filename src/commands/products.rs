//! Products command - Product management behind the login gate.

use crate::cli::args::{ProductAction, ProductsArgs};
use crate::config::Config;
use crate::domain::{Product, ProductForm};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};
use crate::utils::display;

use super::finish;
use super::login::sign_in;

/// Execute the products command
pub async fn execute(args: ProductsArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    let services = Services::from_database(db.clone());

    let outcome = run(&services, args).await;
    finish(outcome, db.close().await)
}

/// Sign in, then perform one product action
pub async fn run(services: &dyn ServiceContainer, args: ProductsArgs) -> AppResult<()> {
    sign_in(services, &args.session).await?;
    let products = services.products();

    match args.action {
        ProductAction::List { json } => {
            let rows = products.list_products().await?;
            print_products(&rows, json)?;
        }
        ProductAction::Show { id } => {
            let product = products.get_product(id).await?;
            println!("{}", display::product_details(&product));
        }
        ProductAction::Add { name, price } => {
            let product = products.add_product(ProductForm::new(&name, price)).await?;
            println!("Product added successfully! (ID {})", product.id);
        }
        ProductAction::Update { id, name, price } => {
            products
                .update_product(id, ProductForm::new(&name, price))
                .await?;
            println!("Product updated successfully!");
        }
        ProductAction::Delete { id, yes } => {
            if !yes {
                return Err(AppError::validation(
                    "Are you sure you want to delete this product? Re-run with --yes to confirm",
                ));
            }
            products.delete_product(id).await?;
            println!("Product deleted successfully!");
        }
        ProductAction::Search { term, json } => {
            let rows = products.search_products(&term).await?;
            if rows.is_empty() && !json {
                println!("No products found!");
            } else {
                print_products(&rows, json)?;
            }
        }
    }

    Ok(())
}

fn print_products(products: &[Product], json: bool) -> AppResult<()> {
    if json {
        let out = serde_json::to_string_pretty(products)
            .map_err(|e| AppError::internal(e.to_string()))?;
        println!("{}", out);
    } else {
        println!("{}", display::products_table(products));
    }
    Ok(())
}
