pub mod a001_customer;
pub mod a002_product;
pub mod a003_invoice;
pub mod a004_sale;
