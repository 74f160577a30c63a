//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - [`CrudRepository`] is generic over the [`crate::domain::Resource`] it stores;
//!   each resource supplies its own SQL and its own duplicate rule
//! - Implementations live in `crate::infrastructure::persistence`
//! - [`HealthRepository`] backs the `/health` endpoint
//!
//! # Testing
//!
//! Services are unit-tested against `mockall` mocks; see integration tests in
//! `tests/repository_*.rs` for the PostgreSQL implementations.

pub mod crud_repository;
pub mod health_repository;

pub use crud_repository::CrudRepository;
pub use health_repository::HealthRepository;

#[cfg(test)]
pub use health_repository::MockHealthRepository;
