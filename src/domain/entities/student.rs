//! Student entity.

use crate::domain::resource::Resource;

/// A student record.
///
/// Unlike the other integer-keyed resources, the `id` is supplied by the
/// caller on creation and is never generated. Creating a student whose id is
/// already taken is rejected.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    /// Date of birth, stored as free text.
    pub dob: String,
    pub gender: Option<String>,
}

/// Writable fields of a student, including the caller-chosen id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub dob: String,
    pub gender: Option<String>,
}

/// Partial update for a student. The id cannot be changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentPatch {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<Option<String>>,
}

impl Resource for Student {
    type Id = i64;
    type New = NewStudent;
    type Patch = StudentPatch;

    const LABEL: &'static str = "Student";

    fn id(&self) -> &i64 {
        &self.id
    }
}
