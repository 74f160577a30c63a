//! API route configuration.
//!
//! Every resource exposes the same verbs:
//!
//! ```text
//! GET    /{resource}         list
//! POST   /{resource}         create
//! GET    /{resource}/{id}    get one
//! PATCH  /{resource}/{id}    partial update
//! PUT    /{resource}/{id}    full replace
//! DELETE /{resource}/{id}    delete
//! ```

use crate::api::handlers::{
    create_book_handler, create_menu_handler, create_staff_handler, create_student_handler,
    create_student_information_handler, delete_book_handler, delete_menu_handler,
    delete_staff_handler, delete_student_handler, delete_student_information_handler,
    get_book_handler, get_menu_handler, get_staff_handler, get_student_handler,
    get_student_information_handler, list_books_handler, list_menus_handler,
    list_staffs_handler, list_student_information_handler, list_students_handler,
    replace_book_handler, replace_menu_handler, replace_staff_handler, replace_student_handler,
    replace_student_information_handler, update_book_handler, update_menu_handler,
    update_staff_handler, update_student_handler, update_student_information_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Version 1 routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `/books`, `/books/{id}`
/// - `/menus`, `/menus/{id}`
/// - `/staffs`, `/staffs/{id}` - backed by the orders table
/// - `/students`, `/students/{id}`
/// - `/student_information`, `/student_information/{id}`
pub fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books_handler).post(create_book_handler))
        .route(
            "/books/{id}",
            get(get_book_handler)
                .patch(update_book_handler)
                .put(replace_book_handler)
                .delete(delete_book_handler),
        )
        .route("/menus", get(list_menus_handler).post(create_menu_handler))
        .route(
            "/menus/{id}",
            get(get_menu_handler)
                .patch(update_menu_handler)
                .put(replace_menu_handler)
                .delete(delete_menu_handler),
        )
        .route("/staffs", get(list_staffs_handler).post(create_staff_handler))
        .route(
            "/staffs/{id}",
            get(get_staff_handler)
                .patch(update_staff_handler)
                .put(replace_staff_handler)
                .delete(delete_staff_handler),
        )
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/{id}",
            get(get_student_handler)
                .patch(update_student_handler)
                .put(replace_student_handler)
                .delete(delete_student_handler),
        )
        .route(
            "/student_information",
            get(list_student_information_handler).post(create_student_information_handler),
        )
        .route(
            "/student_information/{id}",
            get(get_student_information_handler)
                .patch(update_student_information_handler)
                .put(replace_student_information_handler)
                .delete(delete_student_information_handler),
        )
}
