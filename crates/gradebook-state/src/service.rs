//! Course workflow and semester calculation for a logged-in student.
//!
//! Every operation takes the caller's [`Session`]; course access is limited
//! to the session's own student.

use std::sync::Arc;

use gradebook_core::{
    generate_result, AcademicPosition, Grade, Level, ResultSheet, Semester, SemesterSubmission,
    MAX_COURSE_UNIT,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::accounts::Session;
use crate::error::StorageError;
use crate::schema::{
    CourseId, NewCourse, Standing, StandingUpdate, StoredCourse, StudentId, StudentProfile,
    StudentRecord,
};
use crate::storage_traits::{GradebookStore, StorageResult};

/// Course form fields as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseForm {
    pub code: String,
    pub title: String,
    pub unit: u32,
    pub grade: String,
    pub level: u16,
    pub semester: u8,
}

/// Everything shown on a student's dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub student: StudentProfile,
    pub courses: Vec<StoredCourse>,
    pub standing: Standing,
}

/// Course and calculation operations over one backend.
pub struct Gradebook<S> {
    store: Arc<S>,
}

impl<S> Gradebook<S>
where
    S: GradebookStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    async fn student(&self, session: &Session) -> StorageResult<StudentRecord> {
        self.store.get_student(session.student_id()).await
    }

    fn validate_course(student: &StudentRecord, form: CourseForm) -> StorageResult<NewCourse> {
        let code = form.code.trim().to_ascii_uppercase();
        if code.is_empty() {
            return Err(StorageError::InvalidInput("course code is required".into()));
        }
        let title = form.title.trim().to_string();
        if title.is_empty() {
            return Err(StorageError::InvalidInput("course title is required".into()));
        }
        if !(1..=MAX_COURSE_UNIT).contains(&form.unit) {
            return Err(StorageError::InvalidInput(format!(
                "course unit must be between 1 and {MAX_COURSE_UNIT}, got {}",
                form.unit
            )));
        }
        if form.grade.trim().is_empty() {
            return Err(StorageError::InvalidInput("grade is required".into()));
        }

        let position = AcademicPosition::from_raw(form.level, form.semester, student.admission_mode)
            .map_err(|e| StorageError::InvalidInput(e.to_string()))?;

        Ok(NewCourse {
            code,
            title,
            unit: form.unit,
            grade: Grade::parse(&form.grade),
            level: position.level,
            semester: position.semester,
        })
    }

    /// Reject changes to a semester whose GPA is already part of the standing.
    async fn ensure_unrecorded(
        &self,
        student: &StudentId,
        level: Level,
        semester: Semester,
    ) -> StorageResult<()> {
        let standing = self.store.get_standing(student).await?;
        let recorded = standing
            .history
            .iter()
            .any(|s| s.position.level == level && s.position.semester == semester);
        if recorded {
            return Err(StorageError::InvalidInput(format!(
                "level {level} semester {semester} is already recorded; its courses can no longer change"
            )));
        }
        Ok(())
    }

    async fn owned_course(
        &self,
        student: &StudentId,
        course_id: &CourseId,
    ) -> StorageResult<StoredCourse> {
        self.store
            .list_courses(student, None)
            .await?
            .into_iter()
            .find(|c| c.id == *course_id)
            .ok_or_else(|| StorageError::CourseNotFound {
                course_id: course_id.0.clone(),
            })
    }

    #[instrument(skip(self, session, form), fields(student_id = %session.student_id()))]
    pub async fn add_course(&self, session: &Session, form: CourseForm) -> StorageResult<StoredCourse> {
        let student = self.student(session).await?;
        let course = Self::validate_course(&student, form)?;
        self.ensure_unrecorded(&student.id, course.level, course.semester)
            .await?;
        let stored = self.store.add_course(&student.id, course).await?;
        info!(course_id = %stored.id, code = %stored.code, "course added");
        Ok(stored)
    }

    /// Replace a course. Neither its old nor its new semester may be recorded.
    #[instrument(skip(self, session, form), fields(student_id = %session.student_id()))]
    pub async fn edit_course(
        &self,
        session: &Session,
        course_id: &CourseId,
        form: CourseForm,
    ) -> StorageResult<StoredCourse> {
        let student = self.student(session).await?;
        let course = Self::validate_course(&student, form)?;
        let current = self.owned_course(&student.id, course_id).await?;
        self.ensure_unrecorded(&student.id, current.level, current.semester)
            .await?;
        self.ensure_unrecorded(&student.id, course.level, course.semester)
            .await?;
        let stored = self.store.update_course(&student.id, course_id, course).await?;
        info!(course_id = %stored.id, "course updated");
        Ok(stored)
    }

    #[instrument(skip(self, session), fields(student_id = %session.student_id()))]
    pub async fn delete_course(&self, session: &Session, course_id: &CourseId) -> StorageResult<()> {
        let student = session.student_id();
        let current = self.owned_course(student, course_id).await?;
        self.ensure_unrecorded(student, current.level, current.semester)
            .await?;
        self.store.delete_course(student, course_id).await?;
        info!(course_id = %course_id, "course deleted");
        Ok(())
    }

    pub async fn courses(
        &self,
        session: &Session,
        term: Option<(Level, Semester)>,
    ) -> StorageResult<Vec<StoredCourse>> {
        self.store.list_courses(session.student_id(), term).await
    }

    pub async fn dashboard(&self, session: &Session) -> StorageResult<Dashboard> {
        let student = self.student(session).await?;
        let courses = self.store.list_courses(&student.id, None).await?;
        let standing = self.store.get_standing(&student.id).await?;
        Ok(Dashboard {
            student: student.profile(),
            courses,
            standing,
        })
    }

    /// Compute GPA and CGPA for one semester and record the new standing.
    ///
    /// Uses the student's own admission mode and the persisted prior CGPA.
    /// Semesters are recorded strictly in pathway order, starting at the
    /// pathway's first semester. A concurrent calculation for the same
    /// student fails with `StaleStanding` instead of overwriting.
    #[instrument(skip(self, session), fields(student_id = %session.student_id()))]
    pub async fn calculate(
        &self,
        session: &Session,
        level: Level,
        semester: Semester,
    ) -> StorageResult<ResultSheet> {
        let student = self.student(session).await?;
        let position = AcademicPosition::new(level, semester, student.admission_mode);
        position.sequence_index()?;

        let standing = self.store.get_standing(&student.id).await?;
        let expected = match standing.last_position() {
            Some(last) => last.next(),
            None => Some(AcademicPosition::seed(student.admission_mode)),
        };
        if expected != Some(position) {
            let expected = expected
                .map(|p| format!("level {} semester {}", p.level, p.semester))
                .unwrap_or_else(|| "nothing (programme complete)".to_string());
            return Err(StorageError::InvalidInput(format!(
                "level {level} semester {semester} is out of sequence; expected {expected}"
            )));
        }

        let courses = self
            .store
            .list_courses(&student.id, Some((level, semester)))
            .await?;
        debug!(count = courses.len(), prev_cgpa = standing.cgpa, "calculating semester");

        let submission = SemesterSubmission {
            admission_mode: student.admission_mode,
            level: level.value(),
            semester: semester.value(),
            prev_cgpa: standing.cgpa,
            courses: courses.iter().map(StoredCourse::to_entry).collect(),
        };
        let sheet = generate_result(&submission)?;

        self.store
            .record_semester(
                &student.id,
                standing.version,
                StandingUpdate {
                    position,
                    gpa: sheet.gpa,
                    cgpa: sheet.cgpa,
                },
            )
            .await?;
        info!(gpa = sheet.gpa, cgpa = sheet.cgpa, "semester recorded");
        Ok(sheet)
    }
}
