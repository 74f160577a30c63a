//! Domain layer containing the stored record types and repository contracts.
//!
//! # Architecture
//!
//! - [`resource`] - The [`resource::Resource`] trait shared by every record type
//! - [`entities`] - Books, menus, orders, students and student information
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no knowledge of HTTP or SQL. Repository traits are
//! implemented by `crate::infrastructure::persistence`.

pub mod entities;
pub mod repositories;
pub mod resource;

pub use resource::Resource;
