//! Uniform CRUD service shared by every resource.

use std::sync::Arc;

use crate::domain::Resource;
use crate::domain::repositories::CrudRepository;
use crate::error::AppError;

/// CRUD operations for one resource type.
///
/// Wraps a [`CrudRepository`] and turns its `Option`/`bool` results into the
/// client-facing error contract:
///
/// - reads of a missing row fail with `"<Label> not found"`
/// - mutations of a missing row fail with `"<Label> not exists"`
/// - creating a duplicate fails with `"<Label> already exists"`
///
/// Payload validation happens before the service is called, when request
/// DTOs are converted into domain payloads.
pub struct ResourceService<E: Resource> {
    repository: Arc<dyn CrudRepository<E>>,
}

impl<E: Resource> ResourceService<E> {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<dyn CrudRepository<E>>) -> Self {
        Self { repository }
    }

    /// Lists every row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors.
    pub async fn list(&self) -> Result<Vec<E>, AppError> {
        self.repository.list().await
    }

    /// Fetches one row by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row does not exist.
    pub async fn get(&self, id: &E::Id) -> Result<E, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<E>())
    }

    /// Creates a row after checking the resource's duplicate rule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the payload duplicates an existing row.
    /// Returns [`AppError::Database`] on database errors.
    pub async fn create(&self, new: E::New) -> Result<E, AppError> {
        if self.repository.find_duplicate(&new).await?.is_some() {
            return Err(already_exists::<E>());
        }

        let created = self.repository.create(new).await?;
        tracing::info!(resource = E::LABEL, id = %created.id(), "Record created");

        Ok(created)
    }

    /// Applies a partial update and returns the updated row.
    ///
    /// A missing row is never created.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row does not exist.
    /// Returns [`AppError::Conflict`] if the change violates a unique column.
    pub async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<E, AppError> {
        let updated = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| not_exists::<E>())?;

        tracing::info!(resource = E::LABEL, %id, "Record updated");

        Ok(updated)
    }

    /// Overwrites every writable field of an existing row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row does not exist.
    /// Returns [`AppError::Conflict`] if the payload duplicates another row.
    pub async fn replace(&self, id: &E::Id, new: E::New) -> Result<E, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_exists::<E>());
        }

        if let Some(existing) = self.repository.find_duplicate(&new).await?
            && existing.id() != id
        {
            return Err(already_exists::<E>());
        }

        let replaced = self
            .repository
            .replace(id, new)
            .await?
            .ok_or_else(|| not_exists::<E>())?;

        tracing::info!(resource = E::LABEL, %id, "Record replaced");

        Ok(replaced)
    }

    /// Deletes a row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the row does not exist.
    pub async fn delete(&self, id: &E::Id) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_exists::<E>());
        }

        tracing::info!(resource = E::LABEL, %id, "Record deleted");

        Ok(())
    }
}

fn not_found<E: Resource>() -> AppError {
    AppError::not_found(format!("{} not found", E::LABEL))
}

fn not_exists<E: Resource>() -> AppError {
    AppError::not_found(format!("{} not exists", E::LABEL))
}

fn already_exists<E: Resource>() -> AppError {
    AppError::conflict(format!("{} already exists", E::LABEL))
}
