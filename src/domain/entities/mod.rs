//! Stored record types.
//!
//! Every entity follows the same pattern as the others:
//! - `Book`, `Menu`, ... - a stored row, including its primary key
//! - `NewBook`, `NewMenu`, ... - all writable fields, for create and full replace
//! - `BookPatch`, `MenuPatch`, ... - named optional fields, for partial updates
//!
//! In patches, `None` leaves a column unchanged. Nullable columns use
//! `Option<Option<T>>` so that `Some(None)` clears the stored value.
//!
//! The tables are independent of each other; there are no foreign keys.

pub mod book;
pub mod menu;
pub mod order;
pub mod student;
pub mod student_information;

pub use book::{Book, BookPatch, NewBook};
pub use menu::{Menu, MenuPatch, NewMenu};
pub use order::{NewOrder, Order, OrderPatch};
pub use student::{NewStudent, Student, StudentPatch};
pub use student_information::{NewStudentInformation, StudentInformation, StudentInformationPatch};
