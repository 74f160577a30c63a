//! Book entity.

use crate::domain::resource::Resource;

/// A book record.
///
/// `title` is unique across the table; creating a second book with the same
/// title is rejected.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_published: bool,
    pub detail: Option<String>,
    pub story: Option<String>,
    pub classification: Option<String>,
}

/// Writable fields of a book, used for create and full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
    pub is_published: bool,
    pub detail: Option<String>,
    pub story: Option<String>,
    pub classification: Option<String>,
}

/// Partial update for a book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
    pub is_published: Option<bool>,
    pub detail: Option<Option<String>>,
    pub story: Option<Option<String>>,
    pub classification: Option<Option<String>>,
}

impl Resource for Book {
    type Id = i64;
    type New = NewBook;
    type Patch = BookPatch;

    const LABEL: &'static str = "Book";

    fn id(&self) -> &i64 {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_label_and_id() {
        let book = Book {
            id: 7,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            year: 1965,
            is_published: true,
            detail: None,
            story: None,
            classification: Some("sci-fi".to_string()),
        };

        assert_eq!(Book::LABEL, "Book");
        assert_eq!(*book.id(), 7);
    }

    #[test]
    fn test_book_patch_default_changes_nothing() {
        let patch = BookPatch::default();

        assert!(patch.title.is_none());
        assert!(patch.detail.is_none());
        assert!(patch.classification.is_none());
    }
}
