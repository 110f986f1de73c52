use sea_orm::DatabaseConnection;

use crate::domain::a001_customer::{repository::CustomerRepository, service::CustomerService};
use crate::domain::a002_product::{repository::ProductRepository, service::ProductService};
use crate::domain::a003_invoice::{repository::InvoiceRepository, service::InvoiceService};
use crate::domain::a004_sale::{repository::SaleRepository, service::SaleService};
use crate::shared::config::DataConfig;

/// Services shared by all handlers. Cloning is cheap: every repository holds
/// a handle to the same connection pool.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub products: ProductService,
    pub invoices: InvoiceService,
    pub sales: SaleService,
}

impl AppState {
    pub fn new(conn: DatabaseConnection, data: &DataConfig) -> Self {
        Self {
            customers: CustomerService::new(
                CustomerRepository::new(conn.clone()),
                data.customers_source(),
            ),
            products: ProductService::new(
                ProductRepository::new(conn.clone()),
                data.products_source(),
            ),
            invoices: InvoiceService::new(
                InvoiceRepository::new(conn.clone()),
                data.invoices_source(),
            ),
            sales: SaleService::new(SaleRepository::new(conn), data.sales_source()),
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use std::path::Path;

    use super::AppState;
    use crate::shared::config::DataConfig;
    use crate::shared::data::db::connect_in_memory;

    /// State over an in-memory database, reading `customers.txt`,
    /// `products.txt`, `invoices.txt` and `sales.txt` from `dir`.
    pub async fn state_for_dir(dir: &Path) -> AppState {
        let data = DataConfig {
            dir: dir.to_string_lossy().into_owned(),
            delimiter: "#$%#".to_string(),
            customers: "customers.txt".to_string(),
            products: "products.txt".to_string(),
            invoices: "invoices.txt".to_string(),
            sales: "sales.txt".to_string(),
        };
        AppState::new(connect_in_memory().await, &data)
    }

    pub fn write_lines(dir: &Path, file: &str, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        std::fs::write(dir.join(file), content).expect("write fixture");
    }
}
