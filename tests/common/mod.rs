#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use records_api::domain::Resource;
use records_api::domain::entities::{
    Book, BookPatch, Menu, MenuPatch, NewBook, NewMenu, NewOrder, NewStudent,
    NewStudentInformation, Order, OrderPatch, Student, StudentInformation,
    StudentInformationPatch, StudentPatch,
};
use records_api::domain::repositories::{CrudRepository, HealthRepository};
use records_api::error::AppError;
use records_api::routes::router;
use records_api::state::{AppState, service};

/// How an entity is stored by [`InMemoryRepository`].
pub trait Record: Resource {
    fn build(next_id: i64, new: Self::New) -> Self;
    fn apply(&mut self, patch: Self::Patch);
    fn overwrite(&mut self, new: Self::New);

    /// Rows the service treats as duplicates before inserting.
    fn duplicates(&self, _new: &Self::New) -> bool {
        false
    }

    /// Rows the store itself rejects, like a unique constraint.
    fn conflicts(&self, new: &Self::New) -> bool {
        self.duplicates(new)
    }

    /// Whether two stored rows share a unique column.
    fn collides(&self, _other: &Self) -> bool {
        false
    }
}

/// Vec-backed repository used by the handler tests.
pub struct InMemoryRepository<E> {
    rows: Mutex<Vec<E>>,
    next_id: AtomicI64,
}

impl<E> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl<E: Record> CrudRepository<E> for InMemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>, AppError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.id() == id).cloned())
    }

    async fn find_duplicate(&self, new: &E::New) -> Result<Option<E>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|row| row.duplicates(new)).cloned())
    }

    async fn create(&self, new: E::New) -> Result<E, AppError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.conflicts(&new)) {
            return Err(AppError::conflict(format!("{} already exists", E::LABEL)));
        }

        let row = E::build(self.next_id.fetch_add(1, Ordering::SeqCst), new);
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: &E::Id, patch: E::Patch) -> Result<Option<E>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(mut candidate) = rows.iter().find(|row| row.id() == id).cloned() else {
            return Ok(None);
        };

        candidate.apply(patch);
        store(&mut rows[..], candidate).map(Some)
    }

    async fn replace(&self, id: &E::Id, new: E::New) -> Result<Option<E>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let Some(mut candidate) = rows.iter().find(|row| row.id() == id).cloned() else {
            return Ok(None);
        };

        candidate.overwrite(new);
        store(&mut rows[..], candidate).map(Some)
    }

    async fn delete(&self, id: &E::Id) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        Ok(rows.len() != before)
    }
}

/// Writes back a changed row unless it collides with another one.
fn store<E: Record>(rows: &mut [E], candidate: E) -> Result<E, AppError> {
    if rows
        .iter()
        .any(|row| row.id() != candidate.id() && row.collides(&candidate))
    {
        return Err(AppError::conflict(format!("{} already exists", E::LABEL)));
    }

    if let Some(row) = rows.iter_mut().find(|row| row.id() == candidate.id()) {
        *row = candidate.clone();
    }
    Ok(candidate)
}

impl Record for Book {
    fn build(next_id: i64, new: NewBook) -> Self {
        Book {
            id: next_id,
            title: new.title,
            author: new.author,
            year: new.year,
            is_published: new.is_published,
            detail: new.detail,
            story: new.story,
            classification: new.classification,
        }
    }

    fn apply(&mut self, patch: BookPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(is_published) = patch.is_published {
            self.is_published = is_published;
        }
        if let Some(detail) = patch.detail {
            self.detail = detail;
        }
        if let Some(story) = patch.story {
            self.story = story;
        }
        if let Some(classification) = patch.classification {
            self.classification = classification;
        }
    }

    fn overwrite(&mut self, new: NewBook) {
        *self = Book::build(self.id, new);
    }

    fn duplicates(&self, new: &NewBook) -> bool {
        self.title == new.title
    }

    fn collides(&self, other: &Book) -> bool {
        self.title == other.title
    }
}

impl Record for Menu {
    fn build(next_id: i64, new: NewMenu) -> Self {
        Menu {
            id: next_id,
            name: new.name,
            price: new.price,
            detail: new.detail,
            ingredient: new.ingredient,
            is_published: new.is_published,
        }
    }

    fn apply(&mut self, patch: MenuPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(detail) = patch.detail {
            self.detail = detail;
        }
        if let Some(ingredient) = patch.ingredient {
            self.ingredient = ingredient;
        }
        if let Some(is_published) = patch.is_published {
            self.is_published = is_published;
        }
    }

    fn overwrite(&mut self, new: NewMenu) {
        *self = Menu::build(self.id, new);
    }
}

impl Record for Order {
    fn build(next_id: i64, new: NewOrder) -> Self {
        Order {
            id: next_id,
            name: new.name,
            price: new.price,
            total: new.total,
            note: new.note,
        }
    }

    fn apply(&mut self, patch: OrderPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(note) = patch.note {
            self.note = note;
        }
    }

    fn overwrite(&mut self, new: NewOrder) {
        *self = Order::build(self.id, new);
    }
}

impl Record for Student {
    fn build(_next_id: i64, new: NewStudent) -> Self {
        Student {
            id: new.id,
            firstname: new.firstname,
            lastname: new.lastname,
            dob: new.dob,
            gender: new.gender,
        }
    }

    fn apply(&mut self, patch: StudentPatch) {
        if let Some(firstname) = patch.firstname {
            self.firstname = firstname;
        }
        if let Some(lastname) = patch.lastname {
            self.lastname = lastname;
        }
        if let Some(dob) = patch.dob {
            self.dob = dob;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
    }

    fn overwrite(&mut self, new: NewStudent) {
        *self = Student::build(self.id, NewStudent { id: self.id, ..new });
    }

    fn duplicates(&self, new: &NewStudent) -> bool {
        self.id == new.id
    }
}

impl Record for StudentInformation {
    fn build(_next_id: i64, new: NewStudentInformation) -> Self {
        StudentInformation {
            id: new.id,
            first_name: new.first_name,
            last_name: new.last_name,
            student_id: new.student_id,
            birth_date: new.birth_date,
            gender: new.gender,
        }
    }

    fn apply(&mut self, patch: StudentInformationPatch) {
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(student_id) = patch.student_id {
            self.student_id = student_id;
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
    }

    fn overwrite(&mut self, new: NewStudentInformation) {
        let id = self.id.clone();
        *self = StudentInformation::build(0, new);
        self.id = id;
    }

    fn conflicts(&self, new: &NewStudentInformation) -> bool {
        self.id == new.id || self.student_id == new.student_id
    }

    fn collides(&self, other: &StudentInformation) -> bool {
        self.student_id == other.student_id
    }
}

/// Health probe with a fixed answer.
pub struct StaticHealth {
    pub healthy: bool,
}

#[async_trait]
impl HealthRepository for StaticHealth {
    async fn ping(&self) -> Result<(), AppError> {
        if self.healthy {
            Ok(())
        } else {
            Err(AppError::internal("connection refused"))
        }
    }
}

pub fn create_test_state() -> AppState {
    create_test_state_with_health(true)
}

pub fn create_test_state_with_health(healthy: bool) -> AppState {
    AppState {
        book_service: service(InMemoryRepository::<Book>::default()),
        menu_service: service(InMemoryRepository::<Menu>::default()),
        order_service: service(InMemoryRepository::<Order>::default()),
        student_service: service(InMemoryRepository::<Student>::default()),
        student_information_service: service(
            InMemoryRepository::<StudentInformation>::default(),
        ),
        health: Arc::new(StaticHealth { healthy }),
    }
}

/// Full application router over in-memory storage.
pub fn test_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn new_book(title: &str) -> NewBook {
    NewBook {
        title: title.to_string(),
        author: "Frank Herbert".to_string(),
        year: 1965,
        is_published: true,
        detail: None,
        story: None,
        classification: None,
    }
}

pub fn new_student(id: i64) -> NewStudent {
    NewStudent {
        id,
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        dob: "1815-12-10".to_string(),
        gender: None,
    }
}

pub fn new_student_information(id: &str, student_id: &str) -> NewStudentInformation {
    NewStudentInformation {
        id: id.to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        student_id: student_id.to_string(),
        birth_date: date(1906, 12, 9),
        gender: "female".to_string(),
    }
}
