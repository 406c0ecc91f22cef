//! SQLite persistence for products.
//!
//! The `products` table is created on connect if it does not exist. Identifier
//! assignment and uniqueness belong to SQLite (`INTEGER PRIMARY KEY
//! AUTOINCREMENT`); nothing in this crate generates ids.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::{NewProduct, Product};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL
)
"#;

/// Handle to the product table. Cloning shares the underlying pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open a pool against `database_url`, creating the database file if it is
    /// missing, and make sure the schema exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, applying the schema.
    pub async fn from_pool(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Every stored product, oldest first.
    pub async fn list_products(&self) -> Result<Vec<Product>, sqlx::Error> {
        sqlx::query_as::<_, Product>("SELECT id, name, price FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a product and return the stored row with its assigned id.
    pub async fn create_product(&self, input: &NewProduct) -> Result<Product, sqlx::Error> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price) VALUES (?, ?) RETURNING id, name, price",
        )
        .bind(&input.name)
        .bind(input.price)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> Store {
        Store::connect("sqlite::memory:", 1).await.unwrap()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = store().await;
        assert!(store.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = store().await;
        let first = store
            .create_product(&NewProduct {
                name: "Widget".to_string(),
                price: 9.99,
            })
            .await
            .unwrap();
        let second = store
            .create_product(&NewProduct {
                name: "Gadget".to_string(),
                price: 20.0,
            })
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.name, "Widget");
        assert_eq!(first.price, 9.99);
    }

    #[tokio::test]
    async fn list_returns_rows_in_id_order() {
        let store = store().await;
        for name in ["a", "b", "c"] {
            store
                .create_product(&NewProduct {
                    name: name.to_string(),
                    price: 1.0,
                })
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn duplicate_names_are_separate_rows() {
        let store = store().await;
        let input = NewProduct {
            name: "Same".to_string(),
            price: 1.5,
        };
        let a = store.create_product(&input).await.unwrap();
        let b = store.create_product(&input).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_products().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_pool() {
        assert!(store().await.ping().await.is_ok());
    }

    #[tokio::test]
    async fn closed_pool_reports_errors() {
        let store = store().await;
        store.pool().close().await;
        assert!(store.ping().await.is_err());
        assert!(store.list_products().await.is_err());
    }
}
