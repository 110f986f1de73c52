use async_trait::async_trait;
use contracts::domain::a003_invoice::{Invoice, InvoiceTotal};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseBackend, EntityTrait, FromQueryResult, QueryFilter, Set, Statement, Value};

use crate::shared::data::bulk::{insert_chunked, EntityStore};
use crate::shared::error::AppError;

const TOTAL_EMPTY_QUERY: &str = "SELECT id FROM invoices WHERE total = 0 ORDER BY id";

/// Ids are bound as parameters; SQLite caps the number of host parameters
/// per statement, so the id list is split into chunks of this size.
const CALCULATE_CHUNK: usize = 500;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "invoices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub customer_id: i32,
    pub datetime: String,
    pub total: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Invoice {
    fn from(m: Model) -> Self {
        Invoice {
            id: m.id,
            customer_id: m.customer_id,
            datetime: m.datetime,
            total: m.total,
        }
    }
}

impl From<&Invoice> for ActiveModel {
    fn from(i: &Invoice) -> Self {
        ActiveModel {
            id: Set(i.id),
            customer_id: Set(i.customer_id),
            datetime: Set(i.datetime.clone()),
            total: Set(i.total),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct IdRow {
    id: i32,
}

#[derive(Debug, FromQueryResult)]
struct TotalRow {
    id: i32,
    total: f64,
}

fn calculate_totals_sql(ids_count: usize) -> String {
    let placeholders = vec!["?"; ids_count].join(", ");
    format!(
        r#"
        SELECT
            sales.invoice_id AS id,
            SUM(products.price * sales.quantity) AS total
        FROM sales
        INNER JOIN products ON products.id = sales.product_id
        WHERE sales.invoice_id IN ({})
        GROUP BY sales.invoice_id
        ORDER BY sales.invoice_id
        "#,
        placeholders
    )
}

#[derive(Clone)]
pub struct InvoiceRepository {
    conn: DatabaseConnection,
}

impl InvoiceRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: i32) -> Result<Invoice, AppError> {
        Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::not_found("invoice", id))
    }

    pub async fn store_bulk(&self, invoices: Vec<Invoice>) -> Result<Vec<Invoice>, AppError> {
        if invoices.is_empty() {
            return Err(AppError::Prepare("empty invoice batch".to_string()));
        }

        insert_chunked::<ActiveModel, _>(&self.conn, invoices.as_slice()).await?;

        Ok(invoices)
    }

    /// Ids of invoices whose total has not been calculated yet
    pub async fn get_all_total_empty(&self) -> Result<Vec<i32>, AppError> {
        let stmt = Statement::from_string(DatabaseBackend::Sqlite, TOTAL_EMPTY_QUERY.to_string());
        let rows = IdRow::find_by_statement(stmt).all(&self.conn).await?;
        Ok(rows.into_iter().map(|r| r.id).collect())
    }

    /// Σ(price × quantity) per invoice. Invoices without sales are absent
    /// from the result.
    pub async fn calculate_totals(&self, ids: &[i32]) -> Result<Vec<InvoiceTotal>, AppError> {
        let mut totals = Vec::with_capacity(ids.len());
        for chunk in ids.chunks(CALCULATE_CHUNK) {
            let stmt = Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                calculate_totals_sql(chunk.len()),
                chunk.iter().map(|id| Value::from(*id)),
            );
            let rows = TotalRow::find_by_statement(stmt).all(&self.conn).await?;
            totals.extend(rows.into_iter().map(|r| InvoiceTotal {
                id: r.id,
                total: r.total,
            }));
        }
        Ok(totals)
    }

    pub async fn update_total(&self, id: i32, total: f64) -> Result<InvoiceTotal, AppError> {
        let result = Entity::update_many()
            .col_expr(Column::Total, Expr::value(total))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|e| AppError::Exec(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("invoice", id));
        }
        Ok(InvoiceTotal { id, total })
    }
}

#[async_trait]
impl EntityStore for InvoiceRepository {
    type Item = Invoice;

    const LABEL: &'static str = "Invoices";

    fn id_of(item: &Invoice) -> i32 {
        item.id
    }

    async fn find(&self, id: i32) -> Result<Invoice, AppError> {
        self.get(id).await
    }

    async fn insert_all(&self, items: Vec<Invoice>) -> Result<Vec<Invoice>, AppError> {
        self.store_bulk(items).await
    }
}
