//! Authentication service - The login gate.
//!
//! Credentials are compared as plain text by the store; this service only
//! normalizes input and turns a miss into [`AppError::InvalidCredentials`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Message shown when either credential is missing
const MISSING_CREDENTIALS: &str = "Please enter both username and password";

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check credentials and return the matching user
    async fn login(&self, username: &str, password: &str) -> AppResult<User>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator<R: UserRepository> {
    users: Arc<R>,
}

impl<R: UserRepository> Authenticator<R> {
    /// Create new auth service instance
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<R: UserRepository> AuthService for Authenticator<R> {
    async fn login(&self, username: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::validation(MISSING_CREDENTIALS));
        }

        match self.users.authenticate(username, password).await? {
            Some(user) => {
                tracing::info!(user_id = user.id, "Login succeeded");
                Ok(user)
            }
            None => {
                tracing::warn!(username, "Login failed");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;

    fn authenticator(mock: MockUserRepository) -> Authenticator<MockUserRepository> {
        Authenticator::new(Arc::new(mock))
    }

    #[tokio::test]
    async fn test_login_success() {
        let mut mock = MockUserRepository::new();
        mock.expect_authenticate()
            .times(1)
            .returning(|username, password| {
                assert_eq!(username, "admin");
                assert_eq!(password, "admin123");
                Ok(Some(User::new(1, "admin", "admin123")))
            });

        let user = authenticator(mock).login(" admin ", "admin123").await.unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "admin");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let mut mock = MockUserRepository::new();
        mock.expect_authenticate()
            .times(1)
            .returning(|_, _| Ok(None));

        let result = authenticator(mock).login("admin", "nope").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.user_message(), "Invalid username or password");
    }

    #[tokio::test]
    async fn test_login_missing_fields_skips_store() {
        let mut mock = MockUserRepository::new();
        mock.expect_authenticate().never();
        let auth = authenticator(mock);

        for (username, password) in [("", "pw"), ("   ", "pw"), ("admin", "")] {
            match auth.login(username, password).await {
                Err(AppError::Validation(msg)) => assert_eq!(msg, MISSING_CREDENTIALS),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_login_store_failure_propagates() {
        let mut mock = MockUserRepository::new();
        mock.expect_authenticate()
            .times(1)
            .returning(|_, _| Err(AppError::connection("refused")));

        let result = authenticator(mock).login("admin", "admin123").await;
        assert!(matches!(result, Err(AppError::Connection(_))));
    }
}
