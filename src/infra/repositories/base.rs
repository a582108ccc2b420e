//! Base repository traits following Interface Segregation Principle (ISP).
//!
//! Every store operation has the same shape: acquire a connection from
//! [`Database`], run one statement, map the rows. These traits hold that
//! shape once, parameterized over the SeaORM entity, so the concrete
//! stores only name their filters and convert models to records.

use async_trait::async_trait;
use sea_orm::sea_query::IntoCondition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter, QueryOrder, Select,
};

use crate::errors::AppResult;
use crate::infra::db::Database;

/// Order a select by every primary key column, ascending.
///
/// Primary keys are store-assigned and increasing, so this is insertion
/// order.
fn in_key_order<E: EntityTrait>(mut select: Select<E>) -> Select<E> {
    for key in E::PrimaryKey::iter() {
        select = select.order_by_asc(key.into_column());
    }
    select
}

/// Read operations (Query)
#[async_trait]
pub trait ReadRepository<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync,
{
    /// Connection provider for this repository
    fn database(&self) -> &Database;

    /// Every row, in primary key order
    async fn select_all(&self) -> AppResult<Vec<E::Model>> {
        let conn = self.database().acquire().await?;
        let rows = in_key_order(E::find()).all(&conn).await?;
        Ok(rows)
    }

    /// Row by primary key
    async fn select_by_id<K>(&self, id: K) -> AppResult<Option<E::Model>>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        let conn = self.database().acquire().await?;
        let row = E::find_by_id(id).one(&conn).await?;
        Ok(row)
    }

    /// Rows matching a condition, in primary key order
    async fn select_where<F>(&self, filter: F) -> AppResult<Vec<E::Model>>
    where
        F: IntoCondition + Send,
    {
        let conn = self.database().acquire().await?;
        let rows = in_key_order(E::find().filter(filter)).all(&conn).await?;
        Ok(rows)
    }

    /// First row matching a condition
    async fn select_one_where<F>(&self, filter: F) -> AppResult<Option<E::Model>>
    where
        F: IntoCondition + Send,
    {
        let conn = self.database().acquire().await?;
        let row = in_key_order(E::find().filter(filter)).one(&conn).await?;
        Ok(row)
    }
}

/// Write operations (Command)
#[async_trait]
pub trait WriteRepository<E, A>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Connection provider for this repository
    fn database(&self) -> &Database;

    /// Insert one row and return it as stored (with its assigned key)
    async fn insert_one(&self, model: A) -> AppResult<E::Model> {
        let conn = self.database().acquire().await?;
        let stored = model.insert(&conn).await?;
        Ok(stored)
    }

    /// Apply the set columns of `model` to every matching row.
    ///
    /// Returns the number of rows the statement touched.
    async fn update_where<F>(&self, model: A, filter: F) -> AppResult<u64>
    where
        F: IntoCondition + Send,
    {
        let conn = self.database().acquire().await?;
        let result = E::update_many().set(model).filter(filter).exec(&conn).await?;
        Ok(result.rows_affected)
    }
}

/// Delete operations
#[async_trait]
pub trait DeleteRepository<E>: Send + Sync
where
    E: EntityTrait,
{
    /// Connection provider for this repository
    fn database(&self) -> &Database;

    /// Delete by primary key, returning the number of rows removed
    async fn delete_by_key<K>(&self, id: K) -> AppResult<u64>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType> + Send,
    {
        let conn = self.database().acquire().await?;
        let result = E::delete_by_id(id).exec(&conn).await?;
        Ok(result.rows_affected)
    }
}
