pub mod product;
pub mod coupon;
pub mod catalog;

pub use product::*;
pub use coupon::*;
pub use catalog::*;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),
}
