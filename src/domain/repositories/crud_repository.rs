//! Repository trait shared by every resource.

use crate::domain::resource::Resource;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage operations available for a resource type `E`.
///
/// Each call runs on its own pooled connection, acquired for the duration
/// of the call and released when it returns, whether it succeeds or not.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence`] - one PostgreSQL repository per resource
///
/// # Examples
///
/// See integration tests: `tests/repository_*.rs`
#[async_trait]
pub trait CrudRepository<E: Resource>: Send + Sync {
    /// Returns every row, ordered by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn list(&self) -> Result<Vec<E>, AppError>;

    /// Finds a row by primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError>;

    /// Finds an existing row that the given payload would duplicate.
    ///
    /// Each resource decides what counts as a duplicate. Resources without
    /// an explicit uniqueness rule return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn find_duplicate(&self, new: &E::New) -> Result<Option<E>, AppError>;

    /// Inserts a row and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a unique constraint violation.
    /// Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new: E::New) -> Result<E, AppError>;

    /// Applies a partial update. Returns `Ok(None)` if no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a unique constraint violation.
    /// Returns [`AppError::Database`] on other database errors.
    async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<Option<E>, AppError>;

    /// Overwrites every writable column. Returns `Ok(None)` if no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a unique constraint violation.
    /// Returns [`AppError::Database`] on other database errors.
    async fn replace(&self, id: &E::Id, new: E::New) -> Result<Option<E>, AppError>;

    /// Deletes a row. Returns `Ok(false)` if no row has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    async fn delete(&self, id: &E::Id) -> Result<bool, AppError>;
}
