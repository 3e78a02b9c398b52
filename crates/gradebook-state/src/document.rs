//! The whole store as one serializable value.
//!
//! Both backends keep a `StoreDocument` behind a mutex; the file backend
//! also writes it to disk after every mutation. All trait semantics are
//! implemented here once.

use std::collections::BTreeMap;

use chrono::Utc;
use gradebook_core::{Level, Semester};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::schema::{
    normalize_email, CourseId, NewCourse, NewStudent, SemesterStanding, Standing, StandingUpdate,
    StoredCourse, StudentId, StudentRecord,
};
use crate::storage_traits::StorageResult;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct StoreDocument {
    #[serde(default)]
    students: BTreeMap<String, StudentRecord>,
    #[serde(default)]
    courses: Vec<StoredCourse>,
    #[serde(default)]
    standings: BTreeMap<String, Standing>,
}

impl StoreDocument {
    fn require_student(&self, id: &StudentId) -> StorageResult<&StudentRecord> {
        self.students
            .get(&id.0)
            .ok_or_else(|| StorageError::StudentNotFound {
                student_id: id.0.clone(),
            })
    }

    fn owned_course_mut(
        &mut self,
        student: &StudentId,
        course_id: &CourseId,
    ) -> StorageResult<&mut StoredCourse> {
        self.courses
            .iter_mut()
            .find(|c| c.id == *course_id && c.student_id == *student)
            .ok_or_else(|| StorageError::CourseNotFound {
                course_id: course_id.0.clone(),
            })
    }

    pub(crate) fn create_student(&mut self, student: NewStudent) -> StorageResult<StudentRecord> {
        let email = normalize_email(&student.email);
        if self.students.values().any(|s| s.email == email) {
            return Err(StorageError::EmailTaken { email });
        }
        let record = StudentRecord {
            id: StudentId::new(),
            first_name: student.first_name,
            last_name: student.last_name,
            email,
            password: student.password,
            admission_mode: student.admission_mode,
            created_at: Utc::now(),
        };
        self.students.insert(record.id.0.clone(), record.clone());
        Ok(record)
    }

    pub(crate) fn find_by_email(&self, email: &str) -> Option<StudentRecord> {
        let email = normalize_email(email);
        self.students.values().find(|s| s.email == email).cloned()
    }

    pub(crate) fn get_student(&self, id: &StudentId) -> StorageResult<StudentRecord> {
        self.require_student(id).cloned()
    }

    pub(crate) fn add_course(
        &mut self,
        student: &StudentId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse> {
        self.require_student(student)?;
        let stored = StoredCourse::new(student.clone(), course);
        self.courses.push(stored.clone());
        Ok(stored)
    }

    pub(crate) fn update_course(
        &mut self,
        student: &StudentId,
        course_id: &CourseId,
        course: NewCourse,
    ) -> StorageResult<StoredCourse> {
        let stored = self.owned_course_mut(student, course_id)?;
        stored.apply(course);
        Ok(stored.clone())
    }

    pub(crate) fn delete_course(
        &mut self,
        student: &StudentId,
        course_id: &CourseId,
    ) -> StorageResult<()> {
        self.owned_course_mut(student, course_id)?;
        self.courses.retain(|c| c.id != *course_id);
        Ok(())
    }

    pub(crate) fn list_courses(
        &self,
        student: &StudentId,
        term: Option<(Level, Semester)>,
    ) -> StorageResult<Vec<StoredCourse>> {
        self.require_student(student)?;
        Ok(self
            .courses
            .iter()
            .filter(|c| c.student_id == *student)
            .filter(|c| term.map(|(l, s)| c.taken_in(l, s)).unwrap_or(true))
            .cloned()
            .collect())
    }

    pub(crate) fn get_standing(&self, student: &StudentId) -> StorageResult<Standing> {
        self.require_student(student)?;
        Ok(self
            .standings
            .get(&student.0)
            .cloned()
            .unwrap_or_else(|| Standing::initial(student.clone())))
    }

    pub(crate) fn record_semester(
        &mut self,
        student: &StudentId,
        expected_version: u64,
        update: StandingUpdate,
    ) -> StorageResult<Standing> {
        let mut standing = self.get_standing(student)?;
        if standing.version != expected_version {
            return Err(StorageError::StaleStanding {
                student_id: student.0.clone(),
                expected: expected_version,
                actual: standing.version,
            });
        }
        standing.cgpa = update.cgpa;
        standing.version += 1;
        standing.history.push(SemesterStanding {
            position: update.position,
            gpa: update.gpa,
            cgpa: update.cgpa,
            recorded_at: Utc::now(),
        });
        self.standings.insert(student.0.clone(), standing.clone());
        Ok(standing)
    }
}
