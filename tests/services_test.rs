//! Service, seed and command integration tests against SQLite.

mod common;

use rust_decimal_macros::dec;

use catalog_desk::cli::args::{
    LoginArgs, ProductAction, ProductsArgs, SessionArgs, UserAction, UsersArgs,
};
use catalog_desk::commands::{login, products, seed, users};
use catalog_desk::config::Config;
use catalog_desk::domain::{ProductForm, UserForm};
use catalog_desk::errors::AppError;
use catalog_desk::services::{ServiceContainer, Services};

async fn services() -> Services {
    Services::from_database(common::test_database().await)
}

fn admin_session() -> SessionArgs {
    SessionArgs {
        username: "admin".to_string(),
        password: "admin123".to_string(),
    }
}

#[tokio::test]
async fn test_seed_populates_empty_store_once() {
    let services = services().await;
    let config = Config::for_database(common::memory_config());

    assert_eq!(seed::seed(&services, &config).await.unwrap(), 3);
    assert_eq!(seed::seed(&services, &config).await.unwrap(), 0);

    let products = services.products().list_products().await.unwrap();
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Gaming Laptop", "Keyboard"]);

    let admin = services.auth().login("admin", "admin123").await.unwrap();
    assert_eq!(admin.username, "admin");
}

#[tokio::test]
async fn test_login_failures() {
    let services = services().await;
    services
        .users()
        .add_user(UserForm::new("alice", "pw1"))
        .await
        .unwrap();

    let wrong = services.auth().login("alice", "pw2").await;
    assert!(matches!(wrong, Err(AppError::InvalidCredentials)));

    let blank = services.auth().login("  ", "pw1").await;
    assert!(matches!(blank, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_invalid_product_never_reaches_store() {
    let services = services().await;

    let result = services
        .products()
        .add_product(ProductForm::new("Mouse", dec!(-3)))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(services.products().list_products().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_service_trims_and_falls_back_to_list() {
    let services = services().await;
    for (name, price) in [("Gaming Laptop", dec!(1299.99)), ("Keyboard", dec!(49.90))] {
        services
            .products()
            .add_product(ProductForm::new(name, price))
            .await
            .unwrap();
    }

    let hits = services.products().search_products("  LAPTOP  ").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Gaming Laptop");

    assert_eq!(services.products().search_products("   ").await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_product_commands_require_login() {
    let services = services().await;
    let config = Config::for_database(common::memory_config());
    seed::seed(&services, &config).await.unwrap();

    let args = ProductsArgs {
        session: SessionArgs {
            username: "admin".to_string(),
            password: "nope".to_string(),
        },
        action: ProductAction::List { json: false },
    };

    let result = products::run(&services, args).await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_product_commands_add_update_delete() {
    let services = services().await;
    let config = Config::for_database(common::memory_config());
    seed::seed(&services, &config).await.unwrap();

    let add = ProductsArgs {
        session: admin_session(),
        action: ProductAction::Add {
            name: " Monitor ".to_string(),
            price: dec!(199.00),
        },
    };
    products::run(&services, add).await.unwrap();

    let monitor = services
        .products()
        .search_products("monitor")
        .await
        .unwrap()
        .remove(0);
    assert_eq!(monitor.name, "Monitor");

    let update = ProductsArgs {
        session: admin_session(),
        action: ProductAction::Update {
            id: monitor.id,
            name: "Wide Monitor".to_string(),
            price: dec!(249.50),
        },
    };
    products::run(&services, update).await.unwrap();
    let updated = services.products().get_product(monitor.id).await.unwrap();
    assert_eq!(updated.price, dec!(249.50));

    let unconfirmed = ProductsArgs {
        session: admin_session(),
        action: ProductAction::Delete {
            id: monitor.id,
            yes: false,
        },
    };
    assert!(matches!(
        products::run(&services, unconfirmed).await,
        Err(AppError::Validation(_))
    ));
    assert!(services.products().get_product(monitor.id).await.is_ok());

    let confirmed = ProductsArgs {
        session: admin_session(),
        action: ProductAction::Delete {
            id: monitor.id,
            yes: true,
        },
    };
    products::run(&services, confirmed).await.unwrap();
    assert!(matches!(
        services.products().get_product(monitor.id).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_user_commands_add_and_reject_duplicate() {
    let services = services().await;
    let config = Config::for_database(common::memory_config());
    seed::seed(&services, &config).await.unwrap();

    let add = UsersArgs {
        session: admin_session(),
        action: UserAction::Add {
            username: "bob".to_string(),
            password: "pw".to_string(),
        },
    };
    users::run(&services, add).await.unwrap();

    let duplicate = UsersArgs {
        session: admin_session(),
        action: UserAction::Add {
            username: "bob".to_string(),
            password: "other".to_string(),
        },
    };
    let err = users::run(&services, duplicate).await.unwrap_err();
    assert_eq!(err.user_message(), "Username already exists");

    assert_eq!(services.users().list_users().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_seed_command_runs_against_fresh_store() {
    let config = Config::for_database(common::memory_config());

    seed::execute(config).await.unwrap();
}

#[tokio::test]
async fn test_login_command_reports_invalid_credentials() {
    let config = Config::for_database(common::memory_config());
    let args = LoginArgs {
        username: "admin".to_string(),
        password: "admin123".to_string(),
    };

    // A fresh store has no users, so the login itself fails before the pool closes
    let result = login::execute(args, config).await;
    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}
