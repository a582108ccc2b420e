//! Login command and the sign-in step shared by the management commands.

use crate::cli::args::{LoginArgs, SessionArgs};
use crate::config::Config;
use crate::domain::User;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

use super::finish;

/// Execute the login command
pub async fn execute(args: LoginArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    let services = Services::from_database(db.clone());

    let outcome = services.auth().login(&args.username, &args.password).await;
    let user = finish(outcome, db.close().await)?;
    println!("Login successful! Welcome, {}", user.username);
    Ok(())
}

/// Sign in with the session credentials before any management action
pub async fn sign_in(services: &dyn ServiceContainer, session: &SessionArgs) -> AppResult<User> {
    let user = services
        .auth()
        .login(&session.username, &session.password)
        .await?;
    tracing::debug!(username = %user.username, "Session opened");
    Ok(user)
}
