//! User repository implementation.
//!
//! Passwords are stored and compared as plain text.

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, Condition, Set};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::db::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Subject named in the conflict raised by the unique username key
const USERNAME_SUBJECT: &str = "Username";

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// User whose username and password both match exactly (case-sensitive)
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>>;

    /// Create a new user; `Conflict` if the username is taken
    async fn create(&self, username: String, password: String) -> AppResult<User>;

    /// All users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Replace username and password of an existing user
    async fn update(&self, id: i32, username: String, password: String) -> AppResult<()>;

    /// Remove a user
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Database,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl ReadRepository<UserEntity> for UserStore {
    fn database(&self) -> &Database {
        &self.db
    }
}

impl WriteRepository<UserEntity, ActiveModel> for UserStore {
    fn database(&self) -> &Database {
        &self.db
    }
}

impl DeleteRepository<UserEntity> for UserStore {
    fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        let credentials = Condition::all()
            .add(user::Column::Username.eq(username))
            .add(user::Column::Password.eq(password));

        let model = self.select_one_where(credentials).await?;
        if model.is_none() {
            tracing::debug!(username, "No user matched the given credentials");
        }
        Ok(model.map(User::from))
    }

    async fn create(&self, username: String, password: String) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            username: Set(username),
            password: Set(password),
        };

        let model = self
            .insert_one(active_model)
            .await
            .map_err(|e| e.conflict_on(USERNAME_SUBJECT))?;
        tracing::info!(user_id = model.id, "User created");
        Ok(User::from(model))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = self.select_all().await?;
        tracing::debug!(count = models.len(), "Users loaded");
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let model = self.select_by_id(id).await?;
        Ok(model.map(User::from))
    }

    async fn update(&self, id: i32, username: String, password: String) -> AppResult<()> {
        let changes = ActiveModel {
            id: NotSet,
            username: Set(username),
            password: Set(password),
        };

        let rows = self
            .update_where(changes, user::Column::Id.eq(id))
            .await
            .map_err(|e| e.conflict_on(USERNAME_SUBJECT))?;
        if rows == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(user_id = id, "User updated");
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if self.delete_by_key(id).await? == 0 {
            return Err(AppError::NotFound);
        }

        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
