//! PostgreSQL implementation of the order repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order, OrderPatch};
use crate::domain::repositories::CrudRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `orders` table.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Order> for PgOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, Order>(
            "SELECT id, name, price, total, note FROM orders ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, Order>(
            "SELECT id, name, price, total, note FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_duplicate(&self, _new: &NewOrder) -> Result<Option<Order>, AppError> {
        Ok(None)
    }

    async fn create(&self, new: NewOrder) -> Result<Order, AppError> {
        let row = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO orders (name, price, total, note)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, price, total, note
            "#,
        )
        .bind(new.name)
        .bind(new.price)
        .bind(new.total)
        .bind(new.note)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: &i64, patch: OrderPatch) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders SET
                name  = CASE WHEN $2 THEN $3::TEXT ELSE name END,
                price = CASE WHEN $4 THEN $5::INTEGER ELSE price END,
                total = CASE WHEN $6 THEN $7::INTEGER ELSE total END,
                note  = CASE WHEN $8 THEN $9::TEXT ELSE note END
            WHERE id = $1
            RETURNING id, name, price, total, note
            "#,
        )
        .bind(id)
        .bind(patch.name.is_some())
        .bind(patch.name.flatten())
        .bind(patch.price.is_some())
        .bind(patch.price.flatten())
        .bind(patch.total.is_some())
        .bind(patch.total.flatten())
        .bind(patch.note.is_some())
        .bind(patch.note.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn replace(&self, id: &i64, new: NewOrder) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, Order>(
            r#"
            UPDATE orders SET name = $2, price = $3, total = $4, note = $5
            WHERE id = $1
            RETURNING id, name, price, total, note
            "#,
        )
        .bind(id)
        .bind(new.name)
        .bind(new.price)
        .bind(new.total)
        .bind(new.note)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: &i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
