use async_trait::async_trait;
use contracts::domain::a002_product::{Product, ProductMostSold};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseBackend, EntityTrait, FromQueryResult, Set, Statement};

use crate::shared::data::bulk::{insert_chunked, EntityStore};
use crate::shared::error::AppError;

/// Top 5 products by number of sales; `total` is the sum of the unit price over those sales
pub const MOST_SOLD_QUERY: &str = r#"
    SELECT
        COUNT(products.id) AS count_total,
        products.description AS description,
        ROUND(SUM(products.price), 1) AS total
    FROM products
    INNER JOIN sales ON sales.product_id = products.id
    GROUP BY products.id
    ORDER BY count_total DESC, products.id ASC
    LIMIT 5
"#;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub description: String,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: m.id,
            description: m.description,
            price: m.price,
        }
    }
}

impl From<&Product> for ActiveModel {
    fn from(p: &Product) -> Self {
        ActiveModel {
            id: Set(p.id),
            description: Set(p.description.clone()),
            price: Set(p.price),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct MostSoldRow {
    description: String,
    total: f64,
}

#[derive(Clone)]
pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        Entity::find_by_id(id)
            .one(&self.conn)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::not_found("product", id))
    }

    /// One multi-row INSERT for the whole batch
    pub async fn store_bulk(&self, products: Vec<Product>) -> Result<Vec<Product>, AppError> {
        if products.is_empty() {
            return Err(AppError::Prepare("empty product batch".to_string()));
        }

        insert_chunked::<ActiveModel, _>(&self.conn, products.as_slice()).await?;

        Ok(products)
    }

    pub async fn most_sold(&self) -> Result<Vec<ProductMostSold>, AppError> {
        let stmt = Statement::from_string(DatabaseBackend::Sqlite, MOST_SOLD_QUERY.to_string());
        let rows = MostSoldRow::find_by_statement(stmt).all(&self.conn).await?;
        Ok(rows
            .into_iter()
            .map(|r| ProductMostSold {
                description: r.description,
                total: r.total,
            })
            .collect())
    }
}

#[async_trait]
impl EntityStore for ProductRepository {
    type Item = Product;

    const LABEL: &'static str = "Products";

    fn id_of(item: &Product) -> i32 {
        item.id
    }

    async fn find(&self, id: i32) -> Result<Product, AppError> {
        self.get(id).await
    }

    async fn insert_all(&self, items: Vec<Product>) -> Result<Vec<Product>, AppError> {
        self.store_bulk(items).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use sea_orm::ConnectionTrait;

    fn product(id: i32, description: &str, price: f64) -> Product {
        Product {
            id,
            description: description.to_string(),
            price,
        }
    }

    #[tokio::test]
    async fn test_store_bulk_then_get() {
        let repository = ProductRepository::new(connect_in_memory().await);
        let products = vec![
            product(1000, "Descripcion 1000", 1000.0),
            product(1001, "Descripcion 1001", 1000.1),
            product(1002, "Descripcion 1002", 1000.2),
        ];

        let stored = repository.store_bulk(products.clone()).await.unwrap();
        assert_eq!(stored, products);

        for p in &products {
            assert_eq!(&repository.get(p.id).await.unwrap(), p);
        }
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let repository = ProductRepository::new(connect_in_memory().await);
        let err = repository.get(99999).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "product not found");
    }

    #[tokio::test]
    async fn test_store_bulk_empty_is_prepare_error() {
        let repository = ProductRepository::new(connect_in_memory().await);
        let err = repository.store_bulk(Vec::new()).await.unwrap_err();
        assert!(matches!(err, AppError::Prepare(_)));
    }

    #[tokio::test]
    async fn test_store_bulk_duplicate_is_exec_error() {
        let repository = ProductRepository::new(connect_in_memory().await);
        let err = repository
            .store_bulk(vec![
                product(2000, "Descripcion 1000", 1000.0),
                product(2000, "Descripcion 1000", 1000.0),
            ])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Exec(_)));
        // the statement is atomic, nothing was written
        assert!(repository.get(2000).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_most_sold() {
        let conn = connect_in_memory().await;
        let repository = ProductRepository::new(conn.clone());
        repository
            .store_bulk(vec![
                product(1, "Mate", 10.0),
                product(2, "Yerba", 2.5),
                product(3, "Bombilla", 1.0),
            ])
            .await
            .unwrap();
        conn.execute_unprepared(
            "INSERT INTO sales (id, invoice_id, product_id, quantity) VALUES \
             (1, 1, 2, 1), (2, 1, 2, 3), (3, 2, 2, 1), (4, 2, 1, 1)",
        )
        .await
        .unwrap();

        let rows = repository.most_sold().await.unwrap();
        assert_eq!(
            rows,
            vec![
                ProductMostSold {
                    description: "Yerba".to_string(),
                    total: 7.5
                },
                ProductMostSold {
                    description: "Mate".to_string(),
                    total: 10.0
                },
            ]
        );
    }
}
