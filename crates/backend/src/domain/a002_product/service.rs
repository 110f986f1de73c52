use contracts::domain::a002_product::{Product, ProductMostSold};

use super::repository::ProductRepository;
use crate::shared::data::bulk::ingest;
use crate::shared::error::AppError;
use crate::shared::file::SourceFile;

#[derive(Clone)]
pub struct ProductService {
    repository: ProductRepository,
    source: SourceFile,
}

impl ProductService {
    pub fn new(repository: ProductRepository, source: SourceFile) -> Self {
        Self { repository, source }
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        self.repository.get(id).await
    }

    /// Загрузка товаров из файла: уже существующие id пропускаются
    pub async fn store_bulk(&self) -> Result<Vec<Product>, AppError> {
        ingest(&self.repository, &self.source).await
    }

    pub async fn most_sold(&self) -> Result<Vec<ProductMostSold>, AppError> {
        self.repository.most_sold().await
    }
}
