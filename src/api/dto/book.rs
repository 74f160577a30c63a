//! DTOs for the `books` resource.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Book, BookPatch, NewBook};
use crate::error::AppError;

/// Request body for `POST /books` and `PUT /books/{id}`.
///
/// `title`, `author`, `year` and `is_published` are required. They are
/// declared optional so that a missing key is reported as
/// `"Required data is missing"` instead of a deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(required, length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,

    #[validate(required)]
    pub author: Option<String>,

    #[validate(required)]
    pub year: Option<i32>,

    #[validate(required)]
    pub is_published: Option<bool>,

    pub detail: Option<String>,
    pub story: Option<String>,
    pub classification: Option<String>,
}

impl TryFrom<CreateBookRequest> for NewBook {
    type Error = AppError;

    fn try_from(req: CreateBookRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        let (Some(title), Some(author), Some(year), Some(is_published)) =
            (req.title, req.author, req.year, req.is_published)
        else {
            return Err(AppError::missing_fields([
                "title",
                "author",
                "year",
                "is_published",
            ]));
        };

        Ok(NewBook {
            title,
            author,
            year,
            is_published,
            detail: req.detail,
            story: req.story,
            classification: req.classification,
        })
    }
}

/// Request body for `PATCH /books/{id}`.
///
/// Absent fields are left unchanged. For `detail`, `story` and
/// `classification`, an explicit `null` clears the stored value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBookRequest {
    #[validate(length(min = 1, message = "Title must not be empty"))]
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub is_published: Option<bool>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub detail: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub story: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub classification: Option<Option<String>>,
}

impl TryFrom<UpdateBookRequest> for BookPatch {
    type Error = AppError;

    fn try_from(req: UpdateBookRequest) -> Result<Self, Self::Error> {
        req.validate()?;

        Ok(BookPatch {
            title: req.title,
            author: req.author,
            year: req.year,
            is_published: req.is_published,
            detail: req.detail,
            story: req.story,
            classification: req.classification,
        })
    }
}

/// JSON representation of a stored book.
#[derive(Debug, Serialize)]
pub struct BookItem {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_published: bool,
    pub detail: Option<String>,
    pub story: Option<String>,
    pub classification: Option<String>,
}

impl From<Book> for BookItem {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            author: b.author,
            year: b.year,
            is_published: b.is_published,
            detail: b.detail,
            story: b.story,
            classification: b.classification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_complete() {
        let req: CreateBookRequest = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "year": 1965,
            "is_published": true
        }))
        .unwrap();

        let new = NewBook::try_from(req).unwrap();

        assert_eq!(new.title, "Dune");
        assert_eq!(new.year, 1965);
        assert!(new.detail.is_none());
    }

    #[test]
    fn test_create_request_missing_year() {
        let req: CreateBookRequest = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "is_published": true
        }))
        .unwrap();

        let err = NewBook::try_from(req).unwrap_err();

        match err {
            AppError::Validation { message, fields } => {
                assert_eq!(message, "Required data is missing");
                assert_eq!(fields, vec!["year".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_create_request_empty_title() {
        let req: CreateBookRequest = serde_json::from_value(json!({
            "title": "",
            "author": "Herbert",
            "year": 1965,
            "is_published": true
        }))
        .unwrap();

        assert!(NewBook::try_from(req).is_err());
    }

    #[test]
    fn test_update_request_null_clears_optional_field() {
        let req: UpdateBookRequest = serde_json::from_value(json!({
            "detail": null,
            "year": 1966
        }))
        .unwrap();

        let patch = BookPatch::try_from(req).unwrap();

        assert_eq!(patch.detail, Some(None));
        assert_eq!(patch.story, None);
        assert_eq!(patch.year, Some(1966));
        assert_eq!(patch.title, None);
    }
}
