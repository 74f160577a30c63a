//! Handlers for the `student_information` resource.
//!
//! Errors from this resource are reported under a `detail` key, see
//! [`DetailError`].

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::student_information::{
    CreateStudentInformationRequest, StudentInformationItem, UpdateStudentInformationRequest,
};
use crate::domain::entities::StudentInformation;
use crate::error::DetailError;
use crate::state::AppState;

/// `GET /api/v1/student_information`
pub async fn list_student_information_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentInformationItem>>, DetailError> {
    let records = state.student_information_service.list().await?;

    Ok(Json(
        records
            .into_iter()
            .map(StudentInformationItem::from)
            .collect(),
    ))
}

/// `GET /api/v1/student_information/{id}`
pub async fn get_student_information_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StudentInformationItem>, DetailError> {
    let record = state.student_information_service.get(&id).await?;

    Ok(Json(record.into()))
}

/// Creates a student information record.
///
/// # Endpoint
///
/// `POST /api/v1/student_information`
///
/// # Errors
///
/// Returns 422 with a `detail` list if the body is missing a field or has a
/// malformed `birth_date`.
/// Returns 409 if the `id` or `student_id` is already taken.
pub async fn create_student_information_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentInformationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentInformationItem>), DetailError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let id = payload
        .id
        .clone()
        .unwrap_or_else(StudentInformation::generate_id);
    let record = state
        .student_information_service
        .create(payload.into_new(id))
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// `PATCH /api/v1/student_information/{id}`
pub async fn update_student_information_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateStudentInformationRequest>, JsonRejection>,
) -> Result<Json<StudentInformationItem>, DetailError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state
        .student_information_service
        .update(&id, payload.into())
        .await?;

    Ok(Json(record.into()))
}

/// `PUT /api/v1/student_information/{id}`
///
/// An `id` in the body is ignored; the path id is kept.
pub async fn replace_student_information_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<CreateStudentInformationRequest>, JsonRejection>,
) -> Result<Json<StudentInformationItem>, DetailError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let record = state
        .student_information_service
        .replace(&id, payload.into_new(id.clone()))
        .await?;

    Ok(Json(record.into()))
}

/// `DELETE /api/v1/student_information/{id}`
pub async fn delete_student_information_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, DetailError> {
    state.student_information_service.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
