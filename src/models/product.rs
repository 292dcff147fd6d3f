use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::RecordError;

/// A shop item. `discount` is a fraction in `[0, 1]`, not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    pub name: String,
    #[validate(custom(function = "validate_finite", message = "Price must be a finite number"))]
    pub price: f64,
    #[validate(custom(function = "validate_finite", message = "Discount must be a finite number"))]
    pub discount: f64,
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("not_finite"));
    }
    Ok(())
}

impl Product {
    pub fn new(name: &str, price: f64, discount: f64) -> Result<Self, RecordError> {
        let product = Self {
            name: name.to_string(),
            price,
            discount,
        };

        product.validate()?;
        Ok(product)
    }
}
