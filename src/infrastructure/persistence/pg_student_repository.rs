//! PostgreSQL implementation of the student repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::domain::repositories::CrudRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `students` table.
///
/// Student ids are chosen by the caller, so a create payload duplicates an
/// existing row when its id is already taken.
pub struct PgStudentRepository {
    pool: Arc<PgPool>,
}

impl PgStudentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<Student> for PgStudentRepository {
    async fn list(&self) -> Result<Vec<Student>, AppError> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, firstname, lastname, dob, gender FROM students ORDER BY id",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &i64) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, Student>(
            "SELECT id, firstname, lastname, dob, gender FROM students WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_duplicate(&self, new: &NewStudent) -> Result<Option<Student>, AppError> {
        self.find_by_id(&new.id).await
    }

    async fn create(&self, new: NewStudent) -> Result<Student, AppError> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (id, firstname, lastname, dob, gender)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, firstname, lastname, dob, gender
            "#,
        )
        .bind(new.id)
        .bind(new.firstname)
        .bind(new.lastname)
        .bind(new.dob)
        .bind(new.gender)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(&self, id: &i64, patch: StudentPatch) -> Result<Option<Student>, AppError> {
        let row = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET
                firstname = COALESCE($2::TEXT, firstname),
                lastname  = COALESCE($3::TEXT, lastname),
                dob       = COALESCE($4::TEXT, dob),
                gender    = CASE WHEN $5 THEN $6::TEXT ELSE gender END
            WHERE id = $1
            RETURNING id, firstname, lastname, dob, gender
            "#,
        )
        .bind(id)
        .bind(patch.firstname)
        .bind(patch.lastname)
        .bind(patch.dob)
        .bind(patch.gender.is_some())
        .bind(patch.gender.flatten())
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn replace(&self, id: &i64, new: NewStudent) -> Result<Option<Student>, AppError> {
        // The key comes from the path; `new.id` is not written.
        let row = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students SET firstname = $2, lastname = $3, dob = $4, gender = $5
            WHERE id = $1
            RETURNING id, firstname, lastname, dob, gender
            "#,
        )
        .bind(id)
        .bind(new.firstname)
        .bind(new.lastname)
        .bind(new.dob)
        .bind(new.gender)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: &i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
