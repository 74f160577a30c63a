//! Small helpers shared across layers.
//!
//! - [`db_error`] - Mapping of storage constraint violations to client messages

pub mod db_error;
