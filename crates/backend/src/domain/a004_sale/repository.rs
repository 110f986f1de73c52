use async_trait::async_trait;
use contracts::domain::a004_sale::Sale;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, Set};

use crate::shared::data::bulk::{insert_chunked, EntityStore};
use crate::shared::error::AppError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub invoice_id: i32,
    pub product_id: i32,
    pub quantity: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sale {
    fn from(m: Model) -> Self {
        Sale {
            id: m.id,
            invoice_id: m.invoice_id,
            product_id: m.product_id,
            quantity: m.quantity,
        }
    }
}

impl From<&Sale> for ActiveModel {
    fn from(s: &Sale) -> Self {
        ActiveModel {
            id: Set(s.id),
            invoice_id: Set(s.invoice_id),
            product_id: Set(s.product_id),
            quantity: Set(s.quantity),
        }
    }
}

#[derive(Clone)]
pub struct SaleRepository {
    conn: DatabaseConnection,
}

impl SaleRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: i32) -> Result<Sale, AppError> {
        Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::not_found("sale", id))
    }

    pub async fn store_bulk(&self, sales: Vec<Sale>) -> Result<Vec<Sale>, AppError> {
        if sales.is_empty() {
            return Err(AppError::Prepare("empty sale batch".to_string()));
        }

        insert_chunked::<ActiveModel, _>(&self.conn, sales.as_slice()).await?;

        Ok(sales)
    }
}

#[async_trait]
impl EntityStore for SaleRepository {
    type Item = Sale;

    const LABEL: &'static str = "Sales";

    fn id_of(item: &Sale) -> i32 {
        item.id
    }

    async fn find(&self, id: i32) -> Result<Sale, AppError> {
        self.get(id).await
    }

    async fn insert_all(&self, items: Vec<Sale>) -> Result<Vec<Sale>, AppError> {
        self.store_bulk(items).await
    }
}
