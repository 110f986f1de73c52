use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable,
    TransactionTrait,
};

use crate::shared::error::AppError;
use crate::shared::file::{read_records, FromRecord, SourceFile};

/// SQLITE_MAX_VARIABLE_NUMBER of the bundled SQLite
const MAX_BIND_PARAMS: usize = 32766;

/// Rows per INSERT so that `columns` bound values per row stay under the limit
fn rows_per_insert(columns: usize) -> usize {
    (MAX_BIND_PARAMS / columns.max(1)).max(1)
}

/// Inserts `rows` with as few multi-row INSERTs as the parameter limit
/// allows, all inside one transaction: either every row is stored or none.
pub async fn insert_chunked<A, T>(conn: &DatabaseConnection, rows: &[T]) -> Result<(), AppError>
where
    A: ActiveModelTrait + Send + for<'a> From<&'a T>,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    T: Sync,
{
    let columns = <<A::Entity as EntityTrait>::Column as Iterable>::iter().count();
    let chunk_size = rows_per_insert(columns);

    let txn = conn.begin().await?;
    for chunk in rows.chunks(chunk_size) {
        let result = <A::Entity as EntityTrait>::insert_many(chunk.iter().map(A::from))
            .exec_without_returning(&txn)
            .await;
        if let Err(e) = result {
            txn.rollback().await?;
            return Err(AppError::Exec(e.to_string()));
        }
    }
    txn.commit()
        .await
        .map_err(|e| AppError::Exec(e.to_string()))?;

    Ok(())
}

/// Хранилище сущности, загружаемой из файла
#[async_trait]
pub trait EntityStore: Send + Sync {
    type Item: FromRecord + Send + Sync;

    /// Used in log lines, e.g. "Customers"
    const LABEL: &'static str;

    fn id_of(item: &Self::Item) -> i32;

    async fn find(&self, id: i32) -> Result<Self::Item, AppError>;

    async fn insert_all(&self, items: Vec<Self::Item>) -> Result<Vec<Self::Item>, AppError>;
}

/// Reads `source`, keeps the records whose id is not stored yet and inserts
/// them in one batch. Nothing new to store is not an error.
pub async fn ingest<S: EntityStore>(
    store: &S,
    source: &SourceFile,
) -> Result<Vec<S::Item>, AppError> {
    let mapped = read_records::<S::Item>(source)?;

    let mut fresh = Vec::with_capacity(mapped.items.len());
    for item in mapped.items {
        match store.find(S::id_of(&item)).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => fresh.push(item),
            Err(e) => return Err(e),
        }
    }

    if fresh.is_empty() {
        tracing::info!("{}: nothing new to store", S::LABEL);
        return Ok(fresh);
    }

    let stored = store.insert_all(fresh).await?;
    tracing::info!("{}: stored {}", S::LABEL, stored.len());
    Ok(stored)
}
