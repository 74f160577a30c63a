//! DTOs for the `student_information` resource.
//!
//! Unlike the other resources, required fields are enforced by the types
//! themselves: a body without `gender` fails to deserialize and is reported
//! as a structured `detail` list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{
    NewStudentInformation, StudentInformation, StudentInformationPatch,
};

/// Request body for `POST /student_information` and `PUT /student_information/{id}`.
///
/// `id` is optional on create; a UUID is generated when it is absent. On
/// replace the path id wins.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentInformationRequest {
    #[validate(length(min = 1))]
    pub id: Option<String>,

    #[validate(length(min = 1))]
    pub first_name: String,

    #[validate(length(min = 1))]
    pub last_name: String,

    #[validate(length(min = 1))]
    pub student_id: String,

    pub birth_date: NaiveDate,
    pub gender: String,
}

impl CreateStudentInformationRequest {
    /// Builds the domain payload with the given primary key.
    pub fn into_new(self, id: String) -> NewStudentInformation {
        NewStudentInformation {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            student_id: self.student_id,
            birth_date: self.birth_date,
            gender: self.gender,
        }
    }
}

/// Request body for `PATCH /student_information/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateStudentInformationRequest {
    #[validate(length(min = 1))]
    pub first_name: Option<String>,

    #[validate(length(min = 1))]
    pub last_name: Option<String>,

    #[validate(length(min = 1))]
    pub student_id: Option<String>,

    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
}

impl From<UpdateStudentInformationRequest> for StudentInformationPatch {
    fn from(req: UpdateStudentInformationRequest) -> Self {
        StudentInformationPatch {
            first_name: req.first_name,
            last_name: req.last_name,
            student_id: req.student_id,
            birth_date: req.birth_date,
            gender: req.gender,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentInformationItem {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub birth_date: NaiveDate,
    pub gender: String,
}

impl From<StudentInformation> for StudentInformationItem {
    fn from(s: StudentInformation) -> Self {
        Self {
            id: s.id,
            first_name: s.first_name,
            last_name: s.last_name,
            student_id: s.student_id,
            birth_date: s.birth_date,
            gender: s.gender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_gender_fails_to_deserialize() {
        let result = serde_json::from_value::<CreateStudentInformationRequest>(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "student_id": "S-001",
            "birth_date": "1815-12-10"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_birth_date_is_parsed() {
        let req: CreateStudentInformationRequest = serde_json::from_value(json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "student_id": "S-001",
            "birth_date": "1815-12-10",
            "gender": "female"
        }))
        .unwrap();

        let new = req.into_new("abc".to_string());

        assert_eq!(new.id, "abc");
        assert_eq!(new.birth_date, NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());
    }
}
