use async_trait::async_trait;
use contracts::domain::a001_customer::{Customer, CustomerCheaperProduct, CustomerTotalByCondition};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseBackend, EntityTrait, FromQueryResult, Set, Statement};

use crate::shared::data::bulk::{insert_chunked, EntityStore};
use crate::shared::error::AppError;

const TOTAL_BY_CONDITION_QUERY: &str = r#"
    SELECT
        customers.situation AS situation,
        ROUND(SUM(invoices.total), 2) AS total
    FROM customers
    INNER JOIN invoices ON invoices.customer_id = customers.id
    GROUP BY customers.situation
    ORDER BY customers.situation
"#;

const CHEAPER_PRODUCTS_QUERY: &str = r#"
    SELECT DISTINCT
        customers.last_name AS last_name,
        customers.first_name AS first_name,
        products.price AS price
    FROM customers
    INNER JOIN invoices ON invoices.customer_id = customers.id
    INNER JOIN sales ON sales.invoice_id = invoices.id
    INNER JOIN products ON sales.product_id = products.id
    ORDER BY products.price ASC, customers.last_name ASC
    LIMIT 5
"#;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub situation: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            situation: m.situation,
        }
    }
}

impl From<&Customer> for ActiveModel {
    fn from(c: &Customer) -> Self {
        ActiveModel {
            id: Set(c.id),
            first_name: Set(c.first_name.clone()),
            last_name: Set(c.last_name.clone()),
            situation: Set(c.situation.clone()),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct TotalByConditionRow {
    situation: String,
    total: f64,
}

#[derive(Debug, FromQueryResult)]
struct CheaperProductRow {
    last_name: String,
    first_name: String,
}

#[derive(Clone)]
pub struct CustomerRepository {
    conn: DatabaseConnection,
}

impl CustomerRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: i32) -> Result<Customer, AppError> {
        Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::not_found("customer", id))
    }

    pub async fn store_bulk(&self, customers: Vec<Customer>) -> Result<Vec<Customer>, AppError> {
        if customers.is_empty() {
            return Err(AppError::Prepare("empty customer batch".to_string()));
        }

        insert_chunked::<ActiveModel, _>(&self.conn, customers.as_slice()).await?;

        Ok(customers)
    }

    /// Сумма счетов по статусу клиента, округлённая до 2 знаков
    pub async fn total_by_condition(&self) -> Result<Vec<CustomerTotalByCondition>, AppError> {
        let stmt = Statement::from_string(
            DatabaseBackend::Sqlite,
            TOTAL_BY_CONDITION_QUERY.to_string(),
        );
        let rows = TotalByConditionRow::find_by_statement(stmt)
            .all(&self.conn)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| CustomerTotalByCondition {
                situation: r.situation,
                total: r.total,
            })
            .collect())
    }

    /// Up to 5 customers who bought the cheapest products. Distinctness is on
    /// (last name, first name, price), so a customer can appear twice.
    pub async fn cheaper_products(&self) -> Result<Vec<CustomerCheaperProduct>, AppError> {
        let stmt = Statement::from_string(
            DatabaseBackend::Sqlite,
            CHEAPER_PRODUCTS_QUERY.to_string(),
        );
        let rows = CheaperProductRow::find_by_statement(stmt)
            .all(&self.conn)
            .await?;
        Ok(rows
            .into_iter()
            .map(|r| CustomerCheaperProduct {
                first_name: r.first_name,
                last_name: r.last_name,
            })
            .collect())
    }
}

#[async_trait]
impl EntityStore for CustomerRepository {
    type Item = Customer;

    const LABEL: &'static str = "Customers";

    fn id_of(item: &Customer) -> i32 {
        item.id
    }

    async fn find(&self, id: i32) -> Result<Customer, AppError> {
        self.get(id).await
    }

    async fn insert_all(&self, items: Vec<Customer>) -> Result<Vec<Customer>, AppError> {
        self.store_bulk(items).await
    }
}
