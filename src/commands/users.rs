//! Users command - User management behind the login gate.

use crate::cli::args::{UserAction, UsersArgs};
use crate::config::Config;
use crate::domain::UserForm;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};
use crate::utils::display;

use super::finish;
use super::login::sign_in;

/// Execute the users command
pub async fn execute(args: UsersArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config.database).await?;
    let services = Services::from_database(db.clone());

    let outcome = run(&services, args).await;
    finish(outcome, db.close().await)
}

/// Sign in, then perform one user action
pub async fn run(services: &dyn ServiceContainer, args: UsersArgs) -> AppResult<()> {
    let current = sign_in(services, &args.session).await?;
    let users = services.users();

    match args.action {
        UserAction::List { json } => {
            let rows = users.list_users().await?;
            if json {
                // User skips its password when serialized
                let out = serde_json::to_string_pretty(&rows)
                    .map_err(|e| AppError::internal(e.to_string()))?;
                println!("{}", out);
            } else {
                println!("{}", display::users_table(&rows));
            }
        }
        UserAction::Show { id } => {
            let user = users.get_user(id).await?;
            println!("{}", display::user_details(&user));
        }
        UserAction::Add { username, password } => {
            let user = users.add_user(UserForm::new(&username, &password)).await?;
            println!("User added successfully! (ID {})", user.id);
        }
        UserAction::Update {
            id,
            username,
            password,
        } => {
            users
                .update_user(id, UserForm::new(&username, &password))
                .await?;
            println!("User updated successfully!");
        }
        UserAction::Delete { id, yes } => {
            if !yes {
                return Err(AppError::validation(
                    "Are you sure you want to delete this user? Re-run with --yes to confirm",
                ));
            }
            if id == current.id {
                tracing::warn!(user_id = id, "Deleting the signed-in account");
            }
            users.delete_user(id).await?;
            println!("User deleted successfully!");
        }
    }

    Ok(())
}
