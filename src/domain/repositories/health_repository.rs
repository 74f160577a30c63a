//! Repository trait for storage health probes.

use crate::error::AppError;
use async_trait::async_trait;

/// Checks that the backing store answers queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial query against the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), AppError>;
}
