//! Gradebook Core Library
//!
//! Pure GPA and CGPA computation for students:
//!
//! - Grade point table: letter grade to points (A=5 .. E=1, else 0)
//! - GPA engine: unit-weighted mean of one semester's grade points
//! - CGPA recurrence: running mean weighted by the semester's index along
//!   the standard-entry or advanced-entry pathway
//!
//! Every function here is deterministic and side-effect free. Persistence,
//! accounts and presentation live in `gradebook-state` and `gradebook-cli`.

pub mod cgpa;
pub mod domain;
pub mod gpa;
pub mod reporting;
pub mod result_sheet;
pub mod telemetry;

pub use domain::{
    points_for, AcademicPosition, AdmissionMode, CgpaError, CourseRecord, GpaError, Grade,
    GradebookError, Level, Result, Semester, SemesterResult, MAX_COURSE_UNIT,
};

pub use cgpa::{cgpa_trajectory, compute_cgpa, CgpaStep};
pub use gpa::{compute_gpa, round2};
pub use reporting::{render_result_md, write_result_json, write_result_md};
pub use result_sheet::{generate_result, CourseEntry, ResultSheet, SemesterSubmission};
pub use telemetry::{init_tracing, level_for_verbosity};

/// Gradebook version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
