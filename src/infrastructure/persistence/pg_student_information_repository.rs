//! PostgreSQL implementation of the student information repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{
    NewStudentInformation, StudentInformation, StudentInformationPatch,
};
use crate::domain::repositories::CrudRepository;
use crate::error::AppError;

/// PostgreSQL repository for the `student_information` table.
///
/// No explicit duplicate rule; a clashing `id` or `student_id` is caught by
/// the table's unique constraints and reported as a conflict.
pub struct PgStudentInformationRepository {
    pool: Arc<PgPool>,
}

impl PgStudentInformationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository<StudentInformation> for PgStudentInformationRepository {
    async fn list(&self) -> Result<Vec<StudentInformation>, AppError> {
        let rows = sqlx::query_as::<_, StudentInformation>(
            r#"
            SELECT id, first_name, last_name, student_id, birth_date, gender
            FROM student_information
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: &String) -> Result<Option<StudentInformation>, AppError> {
        let row = sqlx::query_as::<_, StudentInformation>(
            r#"
            SELECT id, first_name, last_name, student_id, birth_date, gender
            FROM student_information
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_duplicate(
        &self,
        _new: &NewStudentInformation,
    ) -> Result<Option<StudentInformation>, AppError> {
        Ok(None)
    }

    async fn create(&self, new: NewStudentInformation) -> Result<StudentInformation, AppError> {
        let row = sqlx::query_as::<_, StudentInformation>(
            r#"
            INSERT INTO student_information (id, first_name, last_name, student_id, birth_date, gender)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, student_id, birth_date, gender
            "#,
        )
        .bind(new.id)
        .bind(new.first_name)
        .bind(new.last_name)
        .bind(new.student_id)
        .bind(new.birth_date)
        .bind(new.gender)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        id: &String,
        patch: StudentInformationPatch,
    ) -> Result<Option<StudentInformation>, AppError> {
        let row = sqlx::query_as::<_, StudentInformation>(
            r#"
            UPDATE student_information SET
                first_name = COALESCE($2::TEXT, first_name),
                last_name  = COALESCE($3::TEXT, last_name),
                student_id = COALESCE($4::TEXT, student_id),
                birth_date = COALESCE($5::DATE, birth_date),
                gender     = COALESCE($6::TEXT, gender)
            WHERE id = $1
            RETURNING id, first_name, last_name, student_id, birth_date, gender
            "#,
        )
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.student_id)
        .bind(patch.birth_date)
        .bind(patch.gender)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn replace(
        &self,
        id: &String,
        new: NewStudentInformation,
    ) -> Result<Option<StudentInformation>, AppError> {
        let row = sqlx::query_as::<_, StudentInformation>(
            r#"
            UPDATE student_information SET
                first_name = $2,
                last_name  = $3,
                student_id = $4,
                birth_date = $5,
                gender     = $6
            WHERE id = $1
            RETURNING id, first_name, last_name, student_id, birth_date, gender
            "#,
        )
        .bind(id)
        .bind(new.first_name)
        .bind(new.last_name)
        .bind(new.student_id)
        .bind(new.birth_date)
        .bind(new.gender)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: &String) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM student_information WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
