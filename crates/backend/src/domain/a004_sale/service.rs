use contracts::domain::a004_sale::Sale;

use super::repository::SaleRepository;
use crate::shared::data::bulk::ingest;
use crate::shared::error::AppError;
use crate::shared::file::SourceFile;

#[derive(Clone)]
pub struct SaleService {
    repository: SaleRepository,
    source: SourceFile,
}

impl SaleService {
    pub fn new(repository: SaleRepository, source: SourceFile) -> Self {
        Self { repository, source }
    }

    pub async fn get(&self, id: i32) -> Result<Sale, AppError> {
        self.repository.get(id).await
    }

    /// Загрузка продаж из файла
    pub async fn store_bulk(&self) -> Result<Vec<Sale>, AppError> {
        ingest(&self.repository, &self.source).await
    }
}
