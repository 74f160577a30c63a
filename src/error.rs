//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service returns [`AppError`]. Handlers
//! propagate it with `?` and Axum renders it through [`IntoResponse`] as
//! `{"message": "..."}` with the matching status code.
//!
//! The `student_information` resource reports errors under a `detail` key
//! instead; its handlers wrap failures in [`DetailError`].

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::utils::db_error::conflict_message;

/// Message returned when a create or replace payload lacks required fields.
pub const MISSING_DATA_MESSAGE: &str = "Required data is missing";

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    /// Request payload failed validation. `fields` lists the offending keys.
    #[error("{message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// Body or path could not be extracted. Keeps the framework's status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("database error: {0}")]
    Database(sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

/// Body shape for every resource except `student_information`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl AppError {
    pub fn missing_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            message: MISSING_DATA_MESSAGE.to_string(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Rejected { status, .. } => *status,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients. Storage details never leak.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    fn log_if_internal(&self) {
        if self.status().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let missing = field_errors
            .values()
            .flat_map(|errs| errs.iter())
            .any(|e| e.code == "required");

        let mut fields: Vec<String> = field_errors.keys().map(|k| k.to_string()).collect();
        fields.sort();

        let message = if missing {
            MISSING_DATA_MESSAGE.to_string()
        } else {
            "Invalid request data".to_string()
        };

        AppError::Validation { message, fields }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log_if_internal();

        let body = ErrorBody {
            message: self.public_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Converts a storage error into an [`AppError`].
///
/// Unique constraint violations become [`AppError::Conflict`] with the
/// message of the resource that owns the constraint.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(conflict_message(db.constraint()));
    }

    AppError::Database(e)
}

/// Error wrapper used by the `student_information` handlers.
///
/// Renders `{"detail": "..."}` for domain errors and a structured
/// `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}` list with
/// status 422 for request bodies that fail to parse or validate.
#[derive(Debug)]
pub enum DetailError {
    App(AppError),
    Unprocessable(Vec<DetailItem>),
}

/// One entry of a structured `detail` list.
#[derive(Debug, Clone, Serialize)]
pub struct DetailItem {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<AppError> for DetailError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Validation { message, fields } => DetailError::Unprocessable(
                fields
                    .into_iter()
                    .map(|field| DetailItem {
                        loc: vec!["body".to_string(), field],
                        msg: message.clone(),
                        kind: "value_error".to_string(),
                    })
                    .collect(),
            ),
            other => DetailError::App(other),
        }
    }
}

impl From<ValidationErrors> for DetailError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::from(errors).into()
    }
}

impl From<JsonRejection> for DetailError {
    fn from(rejection: JsonRejection) -> Self {
        DetailError::Unprocessable(vec![DetailItem {
            loc: vec!["body".to_string()],
            msg: rejection.body_text(),
            kind: "json_invalid".to_string(),
        }])
    }
}

impl IntoResponse for DetailError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            DetailError::App(e) => {
                e.log_if_internal();
                (e.status(), Value::String(e.public_message()))
            }
            DetailError::Unprocessable(items) => {
                (StatusCode::UNPROCESSABLE_ENTITY, json!(items))
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
