//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and `validator` for required
//! and format checks. Each resource has a create DTO (also used for full
//! replace), an update DTO with optional fields for partial updates, and an
//! item DTO for responses.

pub mod book;
pub mod health;
pub mod menu;
pub mod order;
pub mod student;
pub mod student_information;
