//! Product record and input form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::config::{MAX_PRICE_SCALE, MAX_PRODUCT_NAME_LENGTH, PRICE_LIMIT};

/// A row of the products table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Product creation/update input.
///
/// The name is trimmed on construction. Validation mirrors the rules the
/// store itself does not enforce: a non-empty name that fits the column and
/// a strictly positive price the `DECIMAL(10, 2)` column holds exactly.
#[derive(Debug, Clone, Validate)]
pub struct ProductForm {
    #[validate(
        length(min = 1, message = "Please enter product name!"),
        custom(function = "validate_product_name_length")
    )]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

impl ProductForm {
    pub fn new(name: &str, price: Decimal) -> Self {
        Self {
            name: name.trim().to_string(),
            price,
        }
    }
}

fn validate_product_name_length(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() as u64 <= MAX_PRODUCT_NAME_LENGTH {
        return Ok(());
    }
    let mut err = ValidationError::new("name_too_long");
    err.message = Some(
        format!("Product name must be {MAX_PRODUCT_NAME_LENGTH} characters or less!").into(),
    );
    Err(err)
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if !price.is_sign_positive() || price.is_zero() {
        return Err(price_error("price_not_positive", "Price must be greater than 0!".into()));
    }
    if price.normalize().scale() > MAX_PRICE_SCALE {
        return Err(price_error(
            "price_too_precise",
            format!("Price can have at most {MAX_PRICE_SCALE} decimal places!"),
        ));
    }
    if *price >= Decimal::from(PRICE_LIMIT) {
        return Err(price_error(
            "price_too_large",
            format!("Price must be less than {PRICE_LIMIT}!"),
        ));
    }
    Ok(())
}

fn price_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}
