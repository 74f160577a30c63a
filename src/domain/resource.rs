//! The capability every stored record type shares.

use std::fmt::{Debug, Display};

/// A record type served by the REST API.
///
/// Each resource names its identifier type, the payload used to create or
/// fully replace a row, and the payload used for partial updates. The generic
/// [`crate::application::services::ResourceService`] and
/// [`crate::domain::repositories::CrudRepository`] are written against this
/// trait so that every resource gets the same CRUD contract.
pub trait Resource: Debug + Clone + Send + Sync + 'static {
    /// Primary key type.
    type Id: Debug + Display + Clone + PartialEq + Send + Sync + 'static;
    /// Full set of writable fields, used by create and replace.
    type New: Debug + Send + Sync + 'static;
    /// Named optional fields, used by partial update.
    type Patch: Debug + Send + Sync + 'static;

    /// Human-readable name used in client messages ("Book not found").
    const LABEL: &'static str;

    fn id(&self) -> &Self::Id;
}
