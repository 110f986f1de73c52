use std::path::Path;

use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Statement};

/// Tables the loader writes into. Foreign keys are not
/// declared: sales may reference invoices that are loaded later.
const SCHEMA: &[(&str, &str)] = &[
    (
        "customers",
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            situation TEXT NOT NULL
        );
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY NOT NULL,
            description TEXT NOT NULL,
            price REAL NOT NULL
        );
        "#,
    ),
    (
        "invoices",
        r#"
        CREATE TABLE IF NOT EXISTS invoices (
            id INTEGER PRIMARY KEY NOT NULL,
            customer_id INTEGER NOT NULL,
            datetime TEXT NOT NULL,
            total REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "sales",
        r#"
        CREATE TABLE IF NOT EXISTS sales (
            id INTEGER PRIMARY KEY NOT NULL,
            invoice_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL,
            quantity REAL NOT NULL
        );
        "#,
    ),
];

fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Opens (creating if needed) the SQLite file and bootstraps the schema.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };

    let db_url = build_sqlite_url(&absolute_path);
    tracing::info!("Connecting to {}", db_url);
    let conn = Database::connect(&db_url).await?;

    ensure_schema(&conn).await?;
    Ok(conn)
}

pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DbErr> {
    for (table, ddl) in SCHEMA {
        tracing::debug!("Ensuring table {}", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            ddl.to_string(),
        ))
        .await?;
    }
    Ok(())
}

/// Fresh in-memory database with the schema applied.
///
/// The pool is pinned to a single connection: every SQLite `:memory:`
/// connection is a separate database.
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    let mut options = sea_orm::ConnectOptions::new("sqlite::memory:".to_owned());
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let conn = Database::connect(options)
        .await
        .expect("in-memory sqlite");
    ensure_schema(&conn).await.expect("schema bootstrap");
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sqlite_url() {
        assert_eq!(
            build_sqlite_url(Path::new("/var/lib/sales.db")),
            "sqlite:///var/lib/sales.db?mode=rwc"
        );
        assert_eq!(
            build_sqlite_url(Path::new("C:\\data\\sales.db")),
            "sqlite:///C:/data/sales.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_schema_bootstrap_is_idempotent() {
        let conn = connect_in_memory().await;
        ensure_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get("", "name").unwrap())
            .collect();
        assert_eq!(names, vec!["customers", "invoices", "products", "sales"]);
    }

    #[tokio::test]
    async fn test_initialize_database_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_file = dir.path().join("nested").join("sales.db");
        let conn = initialize_database(&db_file).await.unwrap();
        assert!(db_file.exists());
        drop(conn);
    }
}
