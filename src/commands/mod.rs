//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.
//! The management commands expose `run`, which works against any
//! [`ServiceContainer`](crate::services::ServiceContainer).

use crate::errors::AppResult;

pub mod login;
pub mod migrate;
pub mod products;
pub mod seed;
pub mod users;

/// Combine a command's outcome with the result of closing the pool.
///
/// The command's own error wins; a close failure is reported only when the
/// command succeeded.
pub(crate) fn finish<T>(outcome: AppResult<T>, closed: AppResult<()>) -> AppResult<T> {
    let value = outcome?;
    closed?;
    Ok(value)
}
