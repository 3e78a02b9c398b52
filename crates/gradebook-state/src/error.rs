//! Error types for gradebook-state

use gradebook_core::GradebookError;
use thiserror::Error;

/// Errors from the storage traits and the services built on them.
#[derive(Error, Debug)]
pub enum StorageError {
    /// No student with this id
    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: String },

    /// No course with this id for the requesting student
    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: String },

    /// Email already registered
    #[error("Email already registered: {email}")]
    EmailTaken { email: String },

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Form input rejected before reaching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Standing changed since the caller read it
    #[error("Standing for {student_id} is at version {actual}, expected {expected}")]
    StaleStanding {
        student_id: String,
        expected: u64,
        actual: u64,
    },

    /// Filesystem error in a file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store document could not be encoded or decoded
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// GPA/CGPA computation rejected the data
    #[error(transparent)]
    Core(#[from] GradebookError),
}

impl From<gradebook_core::GpaError> for StorageError {
    fn from(err: gradebook_core::GpaError) -> Self {
        StorageError::Core(err.into())
    }
}

impl From<gradebook_core::CgpaError> for StorageError {
    fn from(err: gradebook_core::CgpaError) -> Self {
        StorageError::Core(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::GpaError;

    #[test]
    fn core_errors_keep_their_kind() {
        let err: StorageError = GpaError::DivisionByZero.into();
        assert!(matches!(
            err,
            StorageError::Core(GradebookError::Gpa(GpaError::DivisionByZero))
        ));
        assert!(err.to_string().contains("no credit units"));
    }

    #[test]
    fn stale_standing_message() {
        let err = StorageError::StaleStanding {
            student_id: "s1".to_string(),
            expected: 2,
            actual: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("version 3"));
        assert!(msg.contains("expected 2"));
    }
}
