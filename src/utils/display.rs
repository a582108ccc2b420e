//! Terminal rendering for product and user rows.

use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

use crate::config::MASKED_PASSWORD;
use crate::domain::{Product, User};

/// Format a price as dollars with two decimals, e.g. `$12.50`
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}

/// Render products as a table with ID, Name and Price columns
pub fn products_table(products: &[Product]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Price"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            format_price(product.price),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..3), Alignment::right());
    table.to_string()
}

/// Render users as a table; passwords are always masked
pub fn users_table(users: &[User]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Username", "Password"]);

    for user in users {
        builder.push_record([
            user.id.to_string(),
            user.username.clone(),
            MASKED_PASSWORD.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.to_string()
}

/// Detail view of one product
pub fn product_details(product: &Product) -> String {
    format!(
        "ID:    {}\nName:  {}\nPrice: {}",
        product.id,
        product.name,
        format_price(product.price)
    )
}

/// Detail view of one user, with the stored password in clear
pub fn user_details(user: &User) -> String {
    format!(
        "ID:       {}\nUsername: {}\nPassword: {}",
        user.id, user.username, user.password
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(dec!(12.5)), "$12.50");
        assert_eq!(format_price(dec!(1299.99)), "$1299.99");
        assert_eq!(format_price(dec!(3)), "$3.00");
        assert_eq!(format_price(dec!(0.005)), "$0.01");
    }

    #[test]
    fn test_products_table_lists_rows() {
        let table = products_table(&[
            Product::new(1, "Gaming Laptop", dec!(1299.99)),
            Product::new(2, "Keyboard", dec!(49.9)),
        ]);

        assert!(table.contains("Gaming Laptop"));
        assert!(table.contains("$1299.99"));
        assert!(table.contains("$49.90"));
    }

    #[test]
    fn test_users_table_masks_passwords() {
        let table = users_table(&[User::new(1, "admin", "admin123")]);

        assert!(table.contains("admin"));
        assert!(table.contains(MASKED_PASSWORD));
        assert!(!table.contains("admin123"));
    }

    #[test]
    fn test_user_details_shows_password() {
        let details = user_details(&User::new(4, "alice", "pw1"));
        assert!(details.contains("alice"));
        assert!(details.contains("pw1"));
    }
}
