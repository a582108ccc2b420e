//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

/// Catalog Desk - Login-gated product and user management
#[derive(Parser, Debug)]
#[command(name = "catalog-desk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Insert the administrator account and sample products into an empty store
    Seed,

    /// Check a username and password
    Login(LoginArgs),

    /// Manage products
    Products(ProductsArgs),

    /// Manage users
    Users(UsersArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub username: String,

    #[arg(short, long)]
    pub password: String,
}

/// Credentials every management command signs in with
#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    /// Username to sign in as
    #[arg(long = "user", global = true, env = "CATALOG_USER", default_value = "")]
    pub username: String,

    /// Password to sign in with
    #[arg(
        long = "pass",
        global = true,
        env = "CATALOG_PASS",
        hide_env_values = true,
        default_value = ""
    )]
    pub password: String,
}

/// Arguments for the products command
#[derive(Parser, Debug)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[command(subcommand)]
    pub action: ProductAction,
}

/// Product actions
#[derive(Subcommand, Debug)]
pub enum ProductAction {
    /// List every product
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one product
    Show { id: i32 },
    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: Decimal,
    },
    /// Replace the name and price of a product
    Update {
        id: i32,
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: Decimal,
    },
    /// Delete a product
    Delete {
        id: i32,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Search products by name
    Search {
        /// Substring to look for, ignoring case
        #[arg(default_value = "")]
        term: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[command(subcommand)]
    pub action: UserAction,
}

/// User actions
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List every user (passwords masked)
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one user, password included
    Show { id: i32 },
    /// Add a user
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Replace the username and password of a user
    Update {
        id: i32,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Delete a user
    Delete {
        id: i32,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
