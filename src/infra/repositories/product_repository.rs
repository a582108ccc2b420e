//! Product repository implementation.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, Set};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::product::{self, ActiveModel, Entity as ProductEntity};
use crate::domain::Product;
use crate::errors::{AppError, AppResult};
use crate::infra::db::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Escape character used in LIKE patterns built by [`contains_pattern`]
const LIKE_ESCAPE: char = '\\';

/// Case-insensitive LIKE; both operands go through the store's `LOWER()`
const LOWER_LIKE: &str = "LOWER(?) LIKE LOWER(?) ESCAPE '\\'";

/// Product repository trait for dependency injection.
///
/// Each method runs exactly one statement. Update and delete report
/// `AppError::NotFound` when no row carries the given id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product; the store assigns the id
    async fn create(&self, name: String, price: Decimal) -> AppResult<Product>;

    /// All products in insertion order
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Find product by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;

    /// Replace name and price of an existing product
    async fn update(&self, id: i32, name: String, price: Decimal) -> AppResult<()>;

    /// Remove a product
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Products whose name contains `term`, ignoring case
    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Product>>;
}

/// Concrete implementation of ProductRepository
pub struct ProductStore {
    db: Database,
}

impl ProductStore {
    /// Create new repository instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ReadRepository<ProductEntity> for ProductStore {
    fn database(&self) -> &Database {
        &self.db
    }
}

impl WriteRepository<ProductEntity, ActiveModel> for ProductStore {
    fn database(&self) -> &Database {
        &self.db
    }
}

impl DeleteRepository<ProductEntity> for ProductStore {
    fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn create(&self, name: String, price: Decimal) -> AppResult<Product> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            price: Set(price),
        };

        let model = self.insert_one(active_model).await?;
        tracing::info!(product_id = model.id, "Product created");
        Ok(Product::from(model))
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = self.select_all().await?;
        tracing::debug!(count = models.len(), "Products loaded");
        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let model = self.select_by_id(id).await?;
        Ok(model.map(Product::from))
    }

    async fn update(&self, id: i32, name: String, price: Decimal) -> AppResult<()> {
        let changes = ActiveModel {
            id: NotSet,
            name: Set(name),
            price: Set(price),
        };

        let rows = self.update_where(changes, product::Column::Id.eq(id)).await?;
        if rows == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(product_id = id, "Product updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.delete_by_key(id).await? == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn search_by_name(&self, term: &str) -> AppResult<Vec<Product>> {
        let matches_name = Expr::cust_with_exprs(
            LOWER_LIKE,
            [
                Expr::col((ProductEntity, product::Column::Name)).into(),
                Expr::val(contains_pattern(term)).into(),
            ],
        );

        let models = self.select_where(matches_name).await?;
        tracing::debug!(term, count = models.len(), "Product search finished");
        Ok(models.into_iter().map(Product::from).collect())
    }
}

/// Build a `%term%` pattern in which `%`, `_` and the escape character
/// itself match literally. Case folding is left to the store.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_keeps_case() {
        assert_eq!(contains_pattern("Laptop"), "%Laptop%");
        assert_eq!(contains_pattern("Äpfel"), "%Äpfel%");
    }

    #[test]
    fn test_contains_pattern_empty_matches_everything() {
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
