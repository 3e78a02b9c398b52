//! In-memory backend for the storage traits
//!
//! `MemoryStore` satisfies every trait contract without touching disk. It
//! backs the test suites and one-off CLI runs that should not persist.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use gradebook_core::{Level, Semester};

use crate::document::StoreDocument;
use crate::schema::{
    CourseId, NewCourse, NewStudent, Standing, StandingUpdate, StoredCourse, StudentId,
    StudentRecord,
};
use crate::storage_traits::*;

/// In-memory store for students, courses and standings.
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<StoreDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn doc(&self) -> MutexGuard<'_, StoreDocument> {
        self.doc.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl StudentStore for MemoryStore {
    async fn create_student(&self, student: NewStudent) -> StorageResult<StudentRecord> {
        self.doc().create_student(student)
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<StudentRecord>> {
        Ok(self.doc().find_by_email(email))
    }

    async fn get_student(&self, id: &StudentId) -> StorageResult<StudentRecord> {
        self.doc().get_student(id)
    }
}

#[async_trait]
impl CourseStore for MemoryStore {
    async fn add_course(
        &self,
        student: &StudentId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse> {
        self.doc().add_course(student, course)
    }

    async fn update_course(
        &self,
        student: &StudentId,
        course_id: &CourseId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse> {
        self.doc().update_course(student, course_id, course)
    }

    async fn delete_course(
        &self,
        student: &StudentId,
        course_id: &CourseId,
    ) -> StorageResult<()> {
        self.doc().delete_course(student, course_id)
    }

    async fn list_courses(
        &self,
        student: &StudentId,
        term: Option<(Level, Semester)>,
    ) -> StorageResult<Vec<StoredCourse>> {
        self.doc().list_courses(student, term)
    }
}

#[async_trait]
impl StandingStore for MemoryStore {
    async fn get_standing(&self, student: &StudentId) -> StorageResult<Standing> {
        self.doc().get_standing(student)
    }

    async fn record_semester(
        &self,
        student: &StudentId,
        expected_version: u64,
        update: StandingUpdate,
    ) -> StorageResult<Standing> {
        self.doc().record_semester(student, expected_version, update)
    }
}
