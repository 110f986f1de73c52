use contracts::domain::a003_invoice::{Invoice, InvoiceTotal};

use super::repository::InvoiceRepository;
use crate::shared::data::bulk::ingest;
use crate::shared::error::AppError;
use crate::shared::file::SourceFile;

#[derive(Clone)]
pub struct InvoiceService {
    repository: InvoiceRepository,
    source: SourceFile,
}

impl InvoiceService {
    pub fn new(repository: InvoiceRepository, source: SourceFile) -> Self {
        Self { repository, source }
    }

    pub async fn get(&self, id: i32) -> Result<Invoice, AppError> {
        self.repository.get(id).await
    }

    /// Загрузка счетов из файла, все новые счета получают total = 0
    pub async fn store_bulk(&self) -> Result<Vec<Invoice>, AppError> {
        ingest(&self.repository, &self.source).await
    }

    /// Пересчёт итогов счетов с нулевой суммой.
    ///
    /// Two phases: select invoices with `total = 0`, then aggregate
    /// price × quantity over their sales and write each total back with its
    /// own UPDATE. The first failure aborts the run; invoices updated before
    /// it keep their new totals and the rest are picked up by the next run.
    pub async fn update_totals(&self) -> Result<Vec<InvoiceTotal>, AppError> {
        let ids = self.repository.get_all_total_empty().await?;
        if ids.is_empty() {
            tracing::info!("Invoices: no empty totals to recalculate");
            return Ok(Vec::new());
        }

        let totals = self.repository.calculate_totals(&ids).await?;
        for total in &totals {
            self.repository.update_total(total.id, total.total).await?;
        }

        tracing::info!(
            "Invoices: recalculated {} of {} empty totals",
            totals.len(),
            ids.len()
        );
        Ok(totals)
    }
}
