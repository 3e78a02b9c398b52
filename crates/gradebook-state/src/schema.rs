//! Record definitions persisted by the Gradebook stores
//!
//! Collections:
//! - students: Accounts with a password digest and admission mode
//! - courses: Course results, each owned by one student and tagged with the
//!   level/semester it was taken in
//! - standings: Prior CGPA per student plus the semesters it was built from

use chrono::{DateTime, Utc};
use gradebook_core::{
    AcademicPosition, AdmissionMode, CourseEntry, CourseRecord, Grade, Level, Semester,
};
use serde::{Deserialize, Serialize};

use crate::credentials::PasswordDigest;

/// Unique identifier for a student account
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new() -> Self {
        StudentId(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for StudentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for StudentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a course record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseId(pub String);

impl CourseId {
    pub fn new() -> Self {
        CourseId(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for CourseId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalise an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// A student account as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    /// Normalised (trimmed, lowercase)
    pub email: String,
    pub password: PasswordDigest,
    pub admission_mode: AdmissionMode,
    pub created_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Public view without the password digest.
    pub fn profile(&self) -> StudentProfile {
        StudentProfile {
            id: self.id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            admission_mode: self.admission_mode,
        }
    }
}

/// What a store needs to create an account.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: PasswordDigest,
    pub admission_mode: AdmissionMode,
}

/// Account details safe to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub admission_mode: AdmissionMode,
}

/// Fields of a course as entered or edited by a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCourse {
    pub code: String,
    pub title: String,
    pub unit: u32,
    pub grade: Grade,
    pub level: Level,
    pub semester: Semester,
}

/// A stored course result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCourse {
    pub id: CourseId,
    pub student_id: StudentId,
    pub code: String,
    pub title: String,
    pub unit: u32,
    pub grade: Grade,
    pub level: Level,
    pub semester: Semester,
    pub created_at: DateTime<Utc>,
}

impl StoredCourse {
    pub fn new(student_id: StudentId, course: NewCourse) -> Self {
        Self {
            id: CourseId::new(),
            student_id,
            code: course.code,
            title: course.title,
            unit: course.unit,
            grade: course.grade,
            level: course.level,
            semester: course.semester,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the editable fields, keeping id, owner and creation time.
    pub fn apply(&mut self, course: NewCourse) {
        self.code = course.code;
        self.title = course.title;
        self.unit = course.unit;
        self.grade = course.grade;
        self.level = course.level;
        self.semester = course.semester;
    }

    pub fn taken_in(&self, level: Level, semester: Semester) -> bool {
        self.level == level && self.semester == semester
    }

    pub fn to_entry(&self) -> CourseEntry {
        CourseEntry {
            code: self.code.clone(),
            title: self.title.clone(),
            unit: self.unit,
            grade: self.grade.clone(),
        }
    }

    pub fn to_record(&self) -> CourseRecord {
        self.to_entry().to_record()
    }
}

/// One recorded semester in a student's standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterStanding {
    pub position: AcademicPosition,
    pub gpa: f64,
    pub cgpa: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Result of a semester calculation to be written to the standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingUpdate {
    pub position: AcademicPosition,
    pub gpa: f64,
    pub cgpa: f64,
}

/// A student's persisted cumulative position.
///
/// `version` starts at 0 and increases by one with every recorded
/// semester; writers must present the version they read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub student_id: StudentId,
    pub cgpa: f64,
    pub version: u64,
    pub history: Vec<SemesterStanding>,
}

impl Standing {
    /// Standing of an account with nothing recorded: CGPA 0.00, version 0.
    pub fn initial(student_id: StudentId) -> Self {
        Self {
            student_id,
            cgpa: 0.0,
            version: 0,
            history: Vec::new(),
        }
    }

    pub fn last_position(&self) -> Option<AcademicPosition> {
        self.history.last().map(|s| s.position)
    }
}
