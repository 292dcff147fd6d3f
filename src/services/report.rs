use tracing::{info, warn};

use super::accumulators::{cheap_price_total, coupon_counter};
use super::reducer::reduce;
use crate::models::Catalog;

/// Starting value for the third coupon reduction. Kept as a literal.
pub const COUPON_BONUS_START: u32 = 3;

/// The four totals the program prints, in print order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReduceReport {
    pub cheap_products_total: f64,
    pub coupon_total: u32,
    pub coupon_total_with_bonus: u32,
    pub builtin_coupon_total: u32,
}

impl ReduceReport {
    pub fn compute(catalog: &Catalog) -> Self {
        info!(
            "Computing totals over {} products and {} coupon locations",
            catalog.products.len(),
            catalog.coupon_locations.len()
        );

        let report = Self {
            cheap_products_total: reduce(&catalog.products, cheap_price_total, 0.0),
            coupon_total: reduce(&catalog.coupon_locations, coupon_counter, 0),
            coupon_total_with_bonus: reduce(
                &catalog.coupon_locations,
                coupon_counter,
                COUPON_BONUS_START,
            ),
            builtin_coupon_total: catalog.coupon_locations.iter().fold(0, coupon_counter),
        };

        if !report.builtin_matches_custom() {
            warn!(
                "Iterator::fold gave {} but reduce gave {}",
                report.builtin_coupon_total, report.coupon_total
            );
        }

        report
    }

    pub fn builtin_matches_custom(&self) -> bool {
        self.coupon_total == self.builtin_coupon_total
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            self.cheap_products_total.to_string(),
            self.coupon_total.to_string(),
            self.coupon_total_with_bonus.to_string(),
            self.builtin_coupon_total.to_string(),
        ]
    }
}
