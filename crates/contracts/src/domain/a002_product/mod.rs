pub mod aggregate;
pub mod report;

pub use aggregate::Product;
pub use report::ProductMostSold;
