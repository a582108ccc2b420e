//! User service - User management use cases.

use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

use crate::domain::{User, UserForm};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Validate the form and create a user
    async fn add_user(&self, form: UserForm) -> AppResult<User>;

    /// All users, oldest first
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// User by ID, password included
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Validate the form and replace username and password
    async fn update_user(&self, id: i32, form: UserForm) -> AppResult<User>;

    /// Remove a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService.
pub struct UserManager<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> UserManager<R> {
    /// Create new user service instance
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R: UserRepository> UserService for UserManager<R> {
    async fn add_user(&self, form: UserForm) -> AppResult<User> {
        form.validate()?;
        self.users.create(form.username, form.password).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: i32, form: UserForm) -> AppResult<User> {
        form.validate()?;
        self.users
            .update(id, form.username.clone(), form.password.clone())
            .await?;
        Ok(User::new(id, form.username, form.password))
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.users.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    fn manager(mock: MockUserRepository) -> UserManager<MockUserRepository> {
        UserManager::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_add_user_success() {
        let mut mock = MockUserRepository::new();
        mock.expect_create()
            .with(eq("alice".to_string()), eq("pw1".to_string()))
            .times(1)
            .returning(|username, password| Ok(User::new(1, username, password)));

        let user = manager(mock)
            .add_user(UserForm::new(" alice ", "pw1"))
            .await
            .unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.password, "pw1");
    }

    #[tokio::test]
    async fn test_add_user_duplicate_is_conflict() {
        let mut mock = MockUserRepository::new();
        mock.expect_create()
            .times(1)
            .returning(|_, _| Err(AppError::Conflict("Username".to_string())));

        let result = manager(mock).add_user(UserForm::new("admin", "x")).await;

        let err = result.unwrap_err();
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(err.user_message(), "Username already exists");
    }

    #[tokio::test]
    async fn test_add_user_requires_password() {
        let mut mock = MockUserRepository::new();
        mock.expect_create().never();

        let result = manager(mock).add_user(UserForm::new("alice", "")).await;

        match result {
            Err(AppError::Validation(msg)) => assert_eq!(msg, "Please enter password!"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut mock = MockUserRepository::new();
        mock.expect_find_by_id()
            .with(eq(5))
            .times(1)
            .returning(|_| Ok(None));

        let result = manager(mock).get_user(5).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_user_success() {
        let mut mock = MockUserRepository::new();
        mock.expect_update()
            .with(eq(2), eq("bob".to_string()), eq("pw2".to_string()))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let user = manager(mock)
            .update_user(2, UserForm::new("bob", "pw2"))
            .await
            .unwrap();

        assert_eq!(user, User::new(2, "bob", "pw2"));
    }

    #[tokio::test]
    async fn test_update_user_rejects_long_username() {
        let mut mock = MockUserRepository::new();
        mock.expect_update().never();

        let result = manager(mock)
            .update_user(2, UserForm::new(&"b".repeat(51), "pw"))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_user_missing() {
        let mut mock = MockUserRepository::new();
        mock.expect_delete()
            .with(eq(99))
            .times(1)
            .returning(|_| Err(AppError::NotFound));

        let result = manager(mock).delete_user(99).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
