//! PostgreSQL implementation of the menu repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Menu, MenuPatch, NewMenu};
use crate::domain::repositories::CrudRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `menus` table.
pub struct PgMenuRepository {
    pool: Arc<PgPool>,
}

impl PgMenuRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Menu> for PgMenuRepository {
    async fn list(&self) -> Result<Vec<Menu>, AppError> {
        let rows = sqlx::query_as::<_, Menu>(
            "SELECT id, name, price, detail, ingredient, is_published FROM menus ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &i64) -> Result<Option<Menu>, AppError> {
        let row = sqlx::query_as::<_, Menu>(
            "SELECT id, name, price, detail, ingredient, is_published FROM menus WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_duplicate(&self, _new: &NewMenu) -> Result<Option<Menu>, AppError> {
        // Menus have no uniqueness rule besides the generated key.
        Ok(None)
    }

    async fn create(&self, new: NewMenu) -> Result<Menu, AppError> {
        let row = sqlx::query_as::<_, Menu>(
            r#"
            INSERT INTO menus (name, price, detail, ingredient, is_published)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, price, detail, ingredient, is_published
            "#,
        )
        .bind(new.name)
        .bind(new.price)
        .bind(new.detail)
        .bind(new.ingredient)
        .bind(new.is_published)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: &i64, patch: MenuPatch) -> Result<Option<Menu>, AppError> {
        let row = sqlx::query_as::<_, Menu>(
            r#"
            UPDATE menus SET
                name         = COALESCE($2::TEXT, name),
                price        = CASE WHEN $3 THEN $4::INTEGER ELSE price END,
                detail       = CASE WHEN $5 THEN $6::TEXT ELSE detail END,
                ingredient   = CASE WHEN $7 THEN $8::TEXT ELSE ingredient END,
                is_published = CASE WHEN $9 THEN $10::BOOLEAN ELSE is_published END
            WHERE id = $1
            RETURNING id, name, price, detail, ingredient, is_published
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.price.is_some())
        .bind(patch.price.flatten())
        .bind(patch.detail.is_some())
        .bind(patch.detail.flatten())
        .bind(patch.ingredient.is_some())
        .bind(patch.ingredient.flatten())
        .bind(patch.is_published.is_some())
        .bind(patch.is_published.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn replace(&self, id: &i64, new: NewMenu) -> Result<Option<Menu>, AppError> {
        let row = sqlx::query_as::<_, Menu>(
            r#"
            UPDATE menus SET
                name         = $2,
                price        = $3,
                detail       = $4,
                ingredient   = $5,
                is_published = $6
            WHERE id = $1
            RETURNING id, name, price, detail, ingredient, is_published
            "#,
        )
        .bind(id)
        .bind(new.name)
        .bind(new.price)
        .bind(new.detail)
        .bind(new.ingredient)
        .bind(new.is_published)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: &i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
