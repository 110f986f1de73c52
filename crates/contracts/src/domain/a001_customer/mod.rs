pub mod aggregate;
pub mod report;

pub use aggregate::Customer;
pub use report::{CustomerCheaperProduct, CustomerTotalByCondition};
