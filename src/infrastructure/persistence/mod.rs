//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx with
//! bound parameters. Rows are decoded through `sqlx::FromRow` on the domain
//! entities.
//!
//! # Repositories
//!
//! - [`PgBookRepository`] - `books` table, duplicate rule on `title`
//! - [`PgMenuRepository`] - `menus` table
//! - [`PgOrderRepository`] - `orders` table, served under `/staffs`
//! - [`PgStudentRepository`] - `students` table, duplicate rule on `id`
//! - [`PgStudentInformationRepository`] - `student_information` table
//! - [`PgHealthRepository`] - connectivity probe

pub mod pg_book_repository;
pub mod pg_health_repository;
pub mod pg_menu_repository;
pub mod pg_order_repository;
pub mod pg_student_information_repository;
pub mod pg_student_repository;

pub use pg_book_repository::PgBookRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_menu_repository::PgMenuRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_student_information_repository::PgStudentInformationRepository;
pub use pg_student_repository::PgStudentRepository;
