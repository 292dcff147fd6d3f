use crate::models::{CouponLocation, Product};

/// Products priced at or above this are left out of the cheap total.
pub const PRICE_THRESHOLD: f64 = 7.0;

/// Adds the product's price when it is below [`PRICE_THRESHOLD`].
pub fn cheap_price_total(total: f64, product: &Product) -> f64 {
    if product.price < PRICE_THRESHOLD {
        total + product.price
    } else {
        total
    }
}

/// Overflow panics in every profile; see `overflow-checks` in Cargo.toml.
pub fn coupon_counter(total: u32, location: &CouponLocation) -> u32 {
    total + location.amount
}
