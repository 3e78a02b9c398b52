//! Storage trait definitions for Gradebook
//!
//! These traits define the persistence the services rely on:
//! - `StudentStore`: Student accounts keyed by id and by email
//! - `CourseStore`: Course results owned by a student
//! - `StandingStore`: Prior CGPA per student with optimistic versioning
//!
//! All traits are async and backend-agnostic. An in-memory backend lives in
//! `fakes`, a single-file JSON backend in `file_store`.

use async_trait::async_trait;
use gradebook_core::{Level, Semester};

use crate::error::StorageError;
use crate::schema::{
    CourseId, NewCourse, NewStudent, Standing, StandingUpdate, StoredCourse, StudentId,
    StudentRecord,
};

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

// ---------------------------------------------------------------------------
// StudentStore
// ---------------------------------------------------------------------------

/// Student account storage.
///
/// Guarantees:
/// - Emails are unique after normalisation (trim + lowercase).
/// - `find_by_email` matches regardless of case.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Create an account. Fails with `EmailTaken` if the email exists.
    async fn create_student(&self, student: NewStudent) -> StorageResult<StudentRecord>;

    /// Look up by email; `None` if absent.
    async fn find_by_email(&self, email: &str) -> StorageResult<Option<StudentRecord>>;

    /// Look up by id. Fails with `StudentNotFound` if absent.
    async fn get_student(&self, id: &StudentId) -> StorageResult<StudentRecord>;
}

// ---------------------------------------------------------------------------
// CourseStore
// ---------------------------------------------------------------------------

/// Course result storage.
///
/// Every operation is scoped to one student: a course owned by another
/// student behaves exactly like a missing one (`CourseNotFound`).
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Add a course for `student`. Fails with `StudentNotFound` for an unknown student.
    async fn add_course(
        &self,
        student: &StudentId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse>;

    /// Replace the editable fields of a course.
    async fn update_course(
        &self,
        student: &StudentId,
        course_id: &CourseId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse>;

    /// Delete a course.
    async fn delete_course(&self, student: &StudentId, course_id: &CourseId)
        -> StorageResult<()>;

    /// List a student's courses in insertion order, optionally limited to
    /// one level/semester.
    async fn list_courses(
        &self,
        student: &StudentId,
        term: Option<(Level, Semester)>,
    ) -> StorageResult<Vec<StoredCourse>>;
}

// ---------------------------------------------------------------------------
// StandingStore
// ---------------------------------------------------------------------------

/// Persisted CGPA per student.
///
/// Semantics:
/// - `get_standing` of a student with nothing recorded is
///   `Standing::initial` (CGPA 0.00, version 0).
/// - `record_semester` succeeds only if `expected_version` equals the
///   stored version; it then appends the semester and bumps the version.
///   A mismatch is `StaleStanding`, so two writers computing from the same
///   stale CGPA cannot both win.
#[async_trait]
pub trait StandingStore: Send + Sync {
    async fn get_standing(&self, student: &StudentId) -> StorageResult<Standing>;

    async fn record_semester(
        &self,
        student: &StudentId,
        expected_version: u64,
        update: StandingUpdate,
    ) -> StorageResult<Standing>;
}

/// Everything the `Gradebook` service needs from one backend.
pub trait GradebookStore: StudentStore + CourseStore + StandingStore {}

impl<T> GradebookStore for T where T: StudentStore + CourseStore + StandingStore {}
