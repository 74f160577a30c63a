//! Helpers for interpreting PostgreSQL constraint violations.

/// Returns the client-facing conflict message for a violated unique constraint.
///
/// Constraint names come from the migrations under `migrations/`.
pub fn conflict_message(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("books_title_key") | Some("books_pkey") => "Book already exists",
        Some("menus_pkey") => "Menu already exists",
        Some("orders_pkey") => "Order already exists",
        Some("students_pkey") => "Student already exists",
        Some("student_information_pkey") | Some("student_information_student_id_key") => {
            "Student information already exists"
        }
        _ => "Record already exists",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_constraints() {
        assert_eq!(conflict_message(Some("books_title_key")), "Book already exists");
        assert_eq!(conflict_message(Some("students_pkey")), "Student already exists");
        assert_eq!(
            conflict_message(Some("student_information_student_id_key")),
            "Student information already exists"
        );
    }

    #[test]
    fn test_unknown_constraint() {
        assert_eq!(conflict_message(Some("other_key")), "Record already exists");
        assert_eq!(conflict_message(None), "Record already exists");
    }
}
