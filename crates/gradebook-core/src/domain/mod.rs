//! Domain models for Gradebook.
//!
//! Canonical definitions for the core entities:
//! - `Grade`: Letter grade and its point value
//! - `CourseRecord` / `SemesterResult`: Courses of one semester
//! - `AcademicPosition`: Level, semester and admission pathway

pub mod course;
pub mod error;
pub mod grade;
pub mod position;

// Re-export main types and errors
pub use course::{CourseRecord, SemesterResult, MAX_COURSE_UNIT};
pub use error::{CgpaError, GpaError, GradebookError, Result};
pub use grade::{points_for, Grade};
pub use position::{AcademicPosition, AdmissionMode, Level, Semester};
