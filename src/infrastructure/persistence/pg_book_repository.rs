//! PostgreSQL implementation of the book repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::domain::repositories::CrudRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `books` table.
///
/// Two books are duplicates when they share a title; the table also carries a
/// `books_title_key` unique constraint for concurrent inserts.
pub struct PgBookRepository {
    pool: Arc<PgPool>,
}

impl PgBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Book> for PgBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, is_published, detail, story, classification
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &i64) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, is_published, detail, story, classification
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_duplicate(&self, new: &NewBook) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, title, author, year, is_published, detail, story, classification
            FROM books
            WHERE title = $1
            "#,
        )
        .bind(&new.title)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn create(&self, new: NewBook) -> Result<Book, AppError> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, year, is_published, detail, story, classification)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, author, year, is_published, detail, story, classification
            "#,
        )
        .bind(new.title)
        .bind(new.author)
        .bind(new.year)
        .bind(new.is_published)
        .bind(new.detail)
        .bind(new.story)
        .bind(new.classification)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: &i64, patch: BookPatch) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET
                title          = COALESCE($2::TEXT, title),
                author         = COALESCE($3::TEXT, author),
                year           = COALESCE($4::INTEGER, year),
                is_published   = COALESCE($5::BOOLEAN, is_published),
                detail         = CASE WHEN $6 THEN $7::TEXT ELSE detail END,
                story          = CASE WHEN $8 THEN $9::TEXT ELSE story END,
                classification = CASE WHEN $10 THEN $11::TEXT ELSE classification END
            WHERE id = $1
            RETURNING id, title, author, year, is_published, detail, story, classification
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.author)
        .bind(patch.year)
        .bind(patch.is_published)
        .bind(patch.detail.is_some())
        .bind(patch.detail.flatten())
        .bind(patch.story.is_some())
        .bind(patch.story.flatten())
        .bind(patch.classification.is_some())
        .bind(patch.classification.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn replace(&self, id: &i64, new: NewBook) -> Result<Option<Book>, AppError> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET
                title          = $2,
                author         = $3,
                year           = $4,
                is_published   = $5,
                detail         = $6,
                story          = $7,
                classification = $8
            WHERE id = $1
            RETURNING id, title, author, year, is_published, detail, story, classification
            "#,
        )
        .bind(id)
        .bind(new.title)
        .bind(new.author)
        .bind(new.year)
        .bind(new.is_published)
        .bind(new.detail)
        .bind(new.story)
        .bind(new.classification)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: &i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
