//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod books;
pub mod health;
pub mod menus;
pub mod staffs;
pub mod student_information;
pub mod students;

pub use books::{
    create_book_handler, delete_book_handler, get_book_handler, list_books_handler,
    replace_book_handler, update_book_handler,
};
pub use health::health_handler;
pub use menus::{
    create_menu_handler, delete_menu_handler, get_menu_handler, list_menus_handler,
    replace_menu_handler, update_menu_handler,
};
pub use staffs::{
    create_staff_handler, delete_staff_handler, get_staff_handler, list_staffs_handler,
    replace_staff_handler, update_staff_handler,
};
pub use student_information::{
    create_student_information_handler, delete_student_information_handler,
    get_student_information_handler, list_student_information_handler,
    replace_student_information_handler, update_student_information_handler,
};
pub use students::{
    create_student_handler, delete_student_handler, get_student_handler, list_students_handler,
    replace_student_handler, update_student_handler,
};
