//! Domain-level error taxonomy for Gradebook.

/// Errors produced by the GPA engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GpaError {
    #[error("cannot compute GPA: no credit units")]
    DivisionByZero,

    #[error("invalid course unit: {unit} (expected 1..={max})")]
    InvalidUnit { unit: u32, max: u32 },
}

/// Errors produced by the CGPA recurrence engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CgpaError {
    #[error("invalid academic position: {0}")]
    InvalidPosition(String),

    #[error("{field} {value} is outside 0.00..=5.00")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Gradebook domain errors.
#[derive(Debug, thiserror::Error)]
pub enum GradebookError {
    #[error("gpa error: {0}")]
    Gpa(#[from] GpaError),

    #[error("cgpa error: {0}")]
    Cgpa(#[from] CgpaError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Gradebook domain operations.
pub type Result<T> = std::result::Result<T, GradebookError>;
