//! Application layer services implementing the CRUD contract.
//!
//! Services consume repository traits and give HTTP handlers a uniform API:
//! not-found signalling, duplicate detection and mutation logging happen here,
//! once, for every resource.
//!
//! # Available Services
//!
//! - [`services::resource_service::ResourceService`] - generic CRUD over any
//!   [`crate::domain::Resource`]

pub mod services;
