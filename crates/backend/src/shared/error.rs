use std::path::PathBuf;

use sea_orm::DbErr;
use thiserror::Error;

/// Ошибки загрузки и чтения данных.
///
/// Repositories return these unchanged, services pass them through and the
/// handlers turn them into a status code plus the error text.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("can not read source file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("can not prepare store statement: {0}")]
    Prepare(String),

    #[error("error executing statement: {0}")]
    Exec(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
