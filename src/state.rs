//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::ResourceService;
use crate::domain::entities::{Book, Menu, Order, Student, StudentInformation};
use crate::domain::Resource;
use crate::domain::repositories::{CrudRepository, HealthRepository};
use crate::infrastructure::persistence::{
    PgBookRepository, PgHealthRepository, PgMenuRepository, PgOrderRepository,
    PgStudentInformationRepository, PgStudentRepository,
};

/// One service per resource plus the storage health probe.
///
/// Cloning is cheap; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<ResourceService<Book>>,
    pub menu_service: Arc<ResourceService<Menu>>,
    pub order_service: Arc<ResourceService<Order>>,
    pub student_service: Arc<ResourceService<Student>>,
    pub student_information_service: Arc<ResourceService<StudentInformation>>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    /// Wires the PostgreSQL repositories into services.
    pub fn from_pool(pool: Arc<PgPool>) -> Self {
        Self {
            book_service: service(PgBookRepository::new(pool.clone())),
            menu_service: service(PgMenuRepository::new(pool.clone())),
            order_service: service(PgOrderRepository::new(pool.clone())),
            student_service: service(PgStudentRepository::new(pool.clone())),
            student_information_service: service(PgStudentInformationRepository::new(
                pool.clone(),
            )),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }
}

/// Wraps a repository into a shareable service.
pub fn service<E, R>(repository: R) -> Arc<ResourceService<E>>
where
    E: Resource,
    R: CrudRepository<E> + 'static,
{
    Arc::new(ResourceService::new(Arc::new(repository)))
}
