pub mod reducer;
pub mod accumulators;
pub mod report;

pub use reducer::*;
pub use accumulators::*;
pub use report::*;
