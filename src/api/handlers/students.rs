//! Handlers for the `students` resource.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::student::{
    CreateStudentRequest, ReplaceStudentRequest, StudentItem, UpdateStudentRequest,
};
use crate::api::extractors::{ApiJson, RecordId};
use crate::domain::entities::NewStudent;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all students.
///
/// # Endpoint
///
/// `GET /api/v1/students`
pub async fn list_students_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentItem>>, AppError> {
    let students = state.student_service.list().await?;

    Ok(Json(students.into_iter().map(StudentItem::from).collect()))
}

/// Returns one student.
///
/// # Endpoint
///
/// `GET /api/v1/students/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Student not found"}` if the student does not exist.
pub async fn get_student_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<Json<StudentItem>, AppError> {
    let student = state.student_service.get(&id).await?;

    Ok(Json(student.into()))
}

/// Creates a student with a caller-chosen id.
///
/// # Endpoint
///
/// `POST /api/v1/students`
///
/// # Request Body
///
/// ```json
/// {
///   "id": 1001,
///   "firstname": "Ada",
///   "lastname": "Lovelace",
///   "dob": "1815-12-10",
///   "gender": "female"   // optional
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a required field is missing.
/// Returns 409 `{"message": "Student already exists"}` if the id is taken.
pub async fn create_student_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateStudentRequest>,
) -> Result<(StatusCode, Json<StudentItem>), AppError> {
    let new_student = NewStudent::try_from(payload)?;
    let student = state.student_service.create(new_student).await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Partially updates a student.
///
/// # Endpoint
///
/// `PATCH /api/v1/students/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Student not exists"}` if the student does not exist.
pub async fn update_student_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateStudentRequest>,
) -> Result<Json<StudentItem>, AppError> {
    let student = state.student_service.update(&id, payload.into()).await?;

    Ok(Json(student.into()))
}

/// Replaces every field of a student except its id.
///
/// # Endpoint
///
/// `PUT /api/v1/students/{id}`
pub async fn replace_student_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ReplaceStudentRequest>,
) -> Result<Json<StudentItem>, AppError> {
    let new_student = payload.into_new_student(id)?;
    let student = state.student_service.replace(&id, new_student).await?;

    Ok(Json(student.into()))
}

/// Deletes a student.
///
/// # Endpoint
///
/// `DELETE /api/v1/students/{id}`
///
/// # Errors
///
/// Returns 404 `{"message": "Student not exists"}` if the student does not exist.
pub async fn delete_student_handler(
    RecordId(id): RecordId,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.student_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
