use tracing::debug;

use super::{CouponLocation, Product, RecordError};

/// The two fixed record lists. Built once at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub coupon_locations: Vec<CouponLocation>,
}

impl Catalog {
    pub fn seed() -> Result<Self, RecordError> {
        let products = vec![
            Product::new("Head & Shoulders Shampoo", 5.0, 0.6)?,
            Product::new("Twinkies", 8.0, 0.45)?,
            Product::new("Oreos", 6.5, 0.8)?,
            Product::new("Jasmine-scented bath pearls", 14.0, 0.7)?,
        ];

        let coupon_locations = vec![
            CouponLocation::new("Living room", 5),
            CouponLocation::new("Kitchen", 2),
            CouponLocation::new("Bathroom", 1),
            CouponLocation::new("Master bedroom", 7),
        ];

        debug!(
            "Catalog seeded with {} products and {} coupon locations",
            products.len(),
            coupon_locations.len()
        );

        Ok(Self {
            products,
            coupon_locations,
        })
    }
}
