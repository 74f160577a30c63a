//! DTOs for the `students` resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewStudent, Student, StudentPatch};
use crate::error::AppError;

/// Request body for `POST /students`.
///
/// The caller chooses the `id`. `id`, `firstname`, `lastname` and `dob` are
/// required; `gender` is optional.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudentRequest {
    #[validate(required)]
    pub id: Option<i64>,

    #[validate(required)]
    pub firstname: Option<String>,

    #[validate(required)]
    pub lastname: Option<String>,

    #[validate(required)]
    pub dob: Option<String>,

    pub gender: Option<String>,
}

impl TryFrom<CreateStudentRequest> for NewStudent {
    type Error = AppError;

    fn try_from(req: CreateStudentRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let Some(id) = req.id else {
            return Err(AppError::missing_fields(["id"]));
        };

        ReplaceStudentRequest {
            firstname: req.firstname,
            lastname: req.lastname,
            dob: req.dob,
            gender: req.gender,
        }
        .into_new_student(id)
    }
}

/// Request body for `PUT /students/{id}`. The id comes from the path.
#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceStudentRequest {
    #[validate(required)]
    pub firstname: Option<String>,

    #[validate(required)]
    pub lastname: Option<String>,

    #[validate(required)]
    pub dob: Option<String>,

    pub gender: Option<String>,
}

impl ReplaceStudentRequest {
    /// Validates the payload and attaches the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is missing.
    pub fn into_new_student(self, id: i64) -> Result<NewStudent, AppError> {
        self.validate()?;

        let (Some(firstname), Some(lastname), Some(dob)) = (self.firstname, self.lastname, self.dob)
        else {
            return Err(AppError::missing_fields(["firstname", "lastname", "dob"]));
        };

        Ok(NewStudent {
            id,
            firstname,
            lastname,
            dob,
            gender: self.gender,
        })
    }
}

/// Request body for `PATCH /students/{id}`. `gender: null` clears the gender.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateStudentRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub dob: Option<String>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub gender: Option<Option<String>>,
}

impl From<UpdateStudentRequest> for StudentPatch {
    fn from(req: UpdateStudentRequest) -> Self {
        StudentPatch {
            firstname: req.firstname,
            lastname: req.lastname,
            dob: req.dob,
            gender: req.gender,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StudentItem {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub dob: String,
    pub gender: Option<String>,
}

impl From<Student> for StudentItem {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            firstname: s.firstname,
            lastname: s.lastname,
            dob: s.dob,
            gender: s.gender,
        }
    }
}
