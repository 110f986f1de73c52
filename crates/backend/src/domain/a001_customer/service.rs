use contracts::domain::a001_customer::{Customer, CustomerCheaperProduct, CustomerTotalByCondition};

use super::repository::CustomerRepository;
use crate::shared::data::bulk::ingest;
use crate::shared::error::AppError;
use crate::shared::file::SourceFile;

#[derive(Clone)]
pub struct CustomerService {
    repository: CustomerRepository,
    source: SourceFile,
}

impl CustomerService {
    pub fn new(repository: CustomerRepository, source: SourceFile) -> Self {
        Self { repository, source }
    }

    pub async fn get(&self, id: i32) -> Result<Customer, AppError> {
        self.repository.get(id).await
    }

    /// Загрузка клиентов из файла
    pub async fn store_bulk(&self) -> Result<Vec<Customer>, AppError> {
        ingest(&self.repository, &self.source).await
    }

    pub async fn total_by_condition(&self) -> Result<Vec<CustomerTotalByCondition>, AppError> {
        self.repository.total_by_condition().await
    }

    pub async fn cheaper_products(&self) -> Result<Vec<CustomerCheaperProduct>, AppError> {
        self.repository.cheaper_products().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use crate::shared::file::temp_source;

    #[tokio::test]
    async fn test_store_bulk_from_file() {
        let (_file, source) = temp_source(&[
            "1000#$%#Argento#$%#Coki#$%#Activo",
            "1001#$%#Argento#$%#Moni",
            "1002#$%#Fuseneco#$%#Dardo#$%#Inactivo\r",
        ]);
        let service = CustomerService::new(
            CustomerRepository::new(connect_in_memory().await),
            source,
        );

        let stored = service.store_bulk().await.unwrap();
        assert_eq!(stored.len(), 2);

        let dardo = service.get(1002).await.unwrap();
        assert_eq!(dardo.first_name, "Dardo");
        assert_eq!(dardo.situation, "Inactivo");
        assert!(service.get(1001).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_store_bulk_only_malformed_rows() {
        let (_file, source) = temp_source(&["x#$%#Argento#$%#Coki#$%#Activo"]);
        let service = CustomerService::new(
            CustomerRepository::new(connect_in_memory().await),
            source,
        );
        assert!(service.store_bulk().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_bulk_latin1_line() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1#$%#Pe\xf1a#$%#Moni#$%#Activo\n2#$%#Argento#$%#Coki#$%#Activo\n")
            .unwrap();
        let service = CustomerService::new(
            CustomerRepository::new(connect_in_memory().await),
            SourceFile::new(file.path(), "#$%#"),
        );

        assert_eq!(service.store_bulk().await.unwrap().len(), 2);
        assert_eq!(service.get(1).await.unwrap().last_name, "Peña");
        assert_eq!(service.get(2).await.unwrap().first_name, "Coki");
    }

    #[tokio::test]
    async fn test_reports_on_empty_database() {
        let (_file, source) = temp_source(&[]);
        let service = CustomerService::new(
            CustomerRepository::new(connect_in_memory().await),
            source,
        );
        assert!(service.total_by_condition().await.unwrap().is_empty());
        assert!(service.cheaper_products().await.unwrap().is_empty());
    }
}
