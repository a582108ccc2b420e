//! Product service - Product catalog use cases.
//!
//! Validates caller input before it reaches the repository, which stores
//! whatever it is given.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{Product, ProductForm};
use crate::errors::{AppResult, OptionExt};
use crate::infra::ProductRepository;

/// Product service trait for dependency injection.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Validate the form and insert a new product
    async fn add_product(&self, form: ProductForm) -> AppResult<Product>;

    /// All products, oldest first
    async fn list_products(&self) -> AppResult<Vec<Product>>;

    /// Product by ID
    async fn get_product(&self, id: i32) -> AppResult<Product>;

    /// Validate the form and replace name and price of a product
    async fn update_product(&self, id: i32, form: ProductForm) -> AppResult<Product>;

    /// Remove a product
    async fn delete_product(&self, id: i32) -> AppResult<()>;

    /// Products whose name contains `term`; a blank term lists everything
    async fn search_products(&self, term: &str) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductService.
pub struct ProductCatalog<R: ProductRepository> {
    products: Arc<R>,
}

impl<R: ProductRepository> ProductCatalog<R> {
    /// Create new product service instance
    pub fn new(products: Arc<R>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for ProductCatalog<R> {
    async fn add_product(&self, form: ProductForm) -> AppResult<Product> {
        form.validate()?;
        self.products.create(form.name, form.price).await
    }

    async fn list_products(&self) -> AppResult<Vec<Product>> {
        self.products.list().await
    }

    async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.products.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_product(&self, id: i32, form: ProductForm) -> AppResult<Product> {
        form.validate()?;
        self.products
            .update(id, form.name.clone(), form.price)
            .await?;
        Ok(Product::new(id, form.name, form.price))
    }

    async fn delete_product(&self, id: i32) -> AppResult<()> {
        self.products.delete(id).await
    }

    async fn search_products(&self, term: &str) -> AppResult<Vec<Product>> {
        let term = term.trim();
        if term.is_empty() {
            return self.products.list().await;
        }
        self.products.search_by_name(term).await
    }
}
