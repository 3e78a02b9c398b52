//! Single-file JSON backend.
//!
//! The store is one JSON document. Every mutation is applied to a copy,
//! written to a temp file in the same directory and renamed over the
//! original; only then does the in-memory copy change.
//!
//! Writes are synchronous `std::fs` calls made while the document mutex is
//! held, so an async caller blocks its worker thread for the duration of
//! the write. That suits the CLI, which handles one request per process.
//! A long-running async server should move mutations onto
//! `tokio::task::spawn_blocking` or use a different backend. Separate
//! processes sharing one file are not coordinated.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use gradebook_core::{Level, Semester};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::document::StoreDocument;
use crate::schema::{
    CourseId, NewCourse, NewStudent, Standing, StandingUpdate, StoredCourse, StudentId,
    StudentRecord,
};
use crate::storage_traits::*;

/// File-backed store. A missing file is an empty store.
pub struct JsonFileStore {
    path: PathBuf,
    doc: Mutex<StoreDocument>,
}

impl JsonFileStore {
    /// Open the store at `path`, loading it if it exists.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();
        let doc = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => StoreDocument::default(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), "opened gradebook store");
        Ok(Self {
            path,
            doc: Mutex::new(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn doc(&self) -> MutexGuard<'_, StoreDocument> {
        self.doc.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self, doc: &StoreDocument) -> StorageResult<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let content = serde_json::to_vec_pretty(doc)?;
        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&content)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut StoreDocument) -> StorageResult<T>,
    ) -> StorageResult<T> {
        let mut guard = self.doc();
        let mut next = guard.clone();
        let out = f(&mut next)?;
        self.write(&next)?;
        *guard = next;
        Ok(out)
    }
}

#[async_trait]
impl StudentStore for JsonFileStore {
    async fn create_student(&self, student: NewStudent) -> StorageResult<StudentRecord> {
        self.mutate(|doc| doc.create_student(student))
    }

    async fn find_by_email(&self, email: &str) -> StorageResult<Option<StudentRecord>> {
        Ok(self.doc().find_by_email(email))
    }

    async fn get_student(&self, id: &StudentId) -> StorageResult<StudentRecord> {
        self.doc().get_student(id)
    }
}

#[async_trait]
impl CourseStore for JsonFileStore {
    async fn add_course(
        &self,
        student: &StudentId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse> {
        self.mutate(|doc| doc.add_course(student, course))
    }

    async fn update_course(
        &self,
        student: &StudentId,
        course_id: &CourseId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse> {
        self.mutate(|doc| doc.update_course(student, course_id, course))
    }

    async fn delete_course(
        &self,
        student: &StudentId,
        course_id: &CourseId,
    ) -> StorageResult<()> {
        self.mutate(|doc| doc.delete_course(student, course_id))
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
impl StandingStore for JsonFileStore {
    async fn get_standing(&self, student: &StudentId) -> StorageResult<Standing> {
        self.doc().get_standing(student)
    }

    async fn record_semester(
        &self,
        student: &StudentId,
        expected_version: u64,
        update: StandingUpdate,
    ) -> StorageResult<Standing> {
        self.mutate(|doc| doc.record_semester(student, expected_version, update))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::PasswordDigest;
    use gradebook_core::{AdmissionMode, Grade};

    fn new_student(email: &str) -> NewStudent {
        NewStudent {
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: email.to_string(),
            password: PasswordDigest::create("password1", 2),
            admission_mode: AdmissionMode::StandardEntry,
        }
    }

    fn new_course(code: &str) -> NewCourse {
        NewCourse {
            code: code.to_string(),
            title: "Course".to_string(),
            unit: 3,
            grade: Grade::B,
            level: Level::L100,
            semester: Semester::First,
        }
    }

    #[tokio::test]
    async fn reopen_sees_previous_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let id = {
            let store = JsonFileStore::open(&path).unwrap();
            let student = store.create_student(new_student("ada@example.com")).await.unwrap();
            store.add_course(&student.id, new_course("CSC101")).await.unwrap();
            student.id
        };

        let store = JsonFileStore::open(&path).unwrap();
        let found = store.find_by_email("ADA@example.com").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        let courses = store.list_courses(&id, None).await.unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].code, "CSC101");
    }

    #[tokio::test]
    async fn missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.find_by_email("x@example.com").await.unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn failed_mutation_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).unwrap();
        store.create_student(new_student("a@example.com")).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let dup = store.create_student(new_student("a@example.com")).await;
        assert!(dup.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(crate::StorageError::Serialization(_))
        ));
    }
}
