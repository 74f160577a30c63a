//! Student information entity.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::resource::Resource;

/// Registration details of a student, keyed by a string id.
///
/// `student_id` is a separate, unique registration number.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct StudentInformation {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewStudentInformation {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentInformationPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub student_id: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl StudentInformation {
    /// Generates a primary key for records created without one.
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }
}

impl Resource for StudentInformation {
    type Id = String;
    type New = NewStudentInformation;
    type Patch = StudentInformationPatch;

    const LABEL: &'static str = "Student information";

    fn id(&self) -> &String {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = StudentInformation::generate_id();
        let b = StudentInformation::generate_id();

        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }
}
