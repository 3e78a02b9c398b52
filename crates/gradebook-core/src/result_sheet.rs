//! Semester result sheets.
//!
//! A [`SemesterSubmission`] is everything a student declares for one
//! semester: pathway, position, prior CGPA and the courses taken.
//! [`generate_result`] runs the GPA engine and then the CGPA recurrence for
//! the declared pathway and returns the filled-in [`ResultSheet`].

use serde::{Deserialize, Serialize};

use crate::cgpa::compute_cgpa;
use crate::domain::{
    AcademicPosition, AdmissionMode, CourseRecord, Grade, Result, SemesterResult,
};

/// A course as entered on the result form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    #[serde(default)]
    pub title: String,
    pub unit: u32,
    pub grade: Grade,
}

impl CourseEntry {
    pub fn to_record(&self) -> CourseRecord {
        CourseRecord::new(self.unit, self.grade.clone()).with_code(self.code.clone())
    }
}

/// Input for one semester's calculation.
///
/// All fields except `prev_cgpa` (default `0.0`) are required when
/// deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemesterSubmission {
    pub admission_mode: AdmissionMode,
    pub level: u16,
    pub semester: u8,
    #[serde(default)]
    pub prev_cgpa: f64,
    pub courses: Vec<CourseEntry>,
}

impl SemesterSubmission {
    /// Parse a submission from JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The courses as a [`SemesterResult`].
    pub fn semester(&self) -> SemesterResult {
        self.courses.iter().map(CourseEntry::to_record).collect()
    }
}

/// Outcome of one semester's calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSheet {
    pub admission_mode: AdmissionMode,
    pub position: AcademicPosition,
    pub courses: Vec<CourseEntry>,
    pub total_units: u64,
    pub quality_points: u64,
    pub gpa: f64,
    pub prev_cgpa: f64,
    pub cgpa: f64,
}

/// Compute GPA and CGPA for a submission.
///
/// The CGPA uses the recurrence of the submission's own admission mode.
pub fn generate_result(submission: &SemesterSubmission) -> Result<ResultSheet> {
    let position = AcademicPosition::from_raw(
        submission.level,
        submission.semester,
        submission.admission_mode,
    )?;
    let semester = submission.semester();
    let gpa = semester.gpa()?;
    let cgpa = compute_cgpa(&position, submission.prev_cgpa, gpa)?;

    Ok(ResultSheet {
        admission_mode: submission.admission_mode,
        position,
        courses: submission.courses.clone(),
        total_units: semester.total_units(),
        quality_points: semester.quality_points(),
        gpa,
        prev_cgpa: submission.prev_cgpa,
        cgpa,
    })
}
