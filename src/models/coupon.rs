use serde::{Deserialize, Serialize};

/// Where coupons were found around the house, and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponLocation {
    pub room: String,
    pub amount: u32,
}

impl CouponLocation {
    pub fn new(room: &str, amount: u32) -> Self {
        Self {
            room: room.to_string(),
            amount,
        }
    }
}
