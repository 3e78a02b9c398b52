//! Course records and the per-semester collection the GPA engine reduces.

use serde::{Deserialize, Serialize};

use super::grade::Grade;

/// Largest credit unit a single course may carry.
pub const MAX_COURSE_UNIT: u32 = 6;

/// One course taken in one semester.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Optional course code (e.g. "CSC101"), used only for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Credit units, `1..=MAX_COURSE_UNIT`.
    pub unit: u32,
    pub grade: Grade,
}

impl CourseRecord {
    pub fn new(unit: u32, grade: impl Into<Grade>) -> Self {
        Self {
            code: None,
            unit,
            grade: grade.into(),
        }
    }

    /// Attach a course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Whether the unit lies in the accepted range.
    pub fn has_valid_unit(&self) -> bool {
        (1..=MAX_COURSE_UNIT).contains(&self.unit)
    }
}

/// The courses of one semester, in the order they were entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterResult {
    pub records: Vec<CourseRecord>,
}

impl SemesterResult {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: CourseRecord) {
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of credit units.
    pub fn total_units(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.unit)).sum()
    }

    /// Sum of `unit * points` over all records.
    pub fn quality_points(&self) -> u64 {
        self.records
            .iter()
            .map(|r| u64::from(r.unit) * r.grade.whole_points())
            .sum()
    }

    /// Semester GPA; see [`crate::compute_gpa`].
    pub fn gpa(&self) -> Result<f64, crate::GpaError> {
        crate::gpa::compute_gpa(&self.records)
    }
}

impl FromIterator<CourseRecord> for SemesterResult {
    fn from_iter<I: IntoIterator<Item = CourseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums() {
        let semester: SemesterResult = [
            CourseRecord::new(3, Grade::A),
            CourseRecord::new(2, Grade::B),
            CourseRecord::new(1, Grade::F),
        ]
        .into_iter()
        .collect();

        assert_eq!(semester.total_units(), 6);
        assert_eq!(semester.quality_points(), 23);
    }

    #[test]
    fn unit_range() {
        assert!(!CourseRecord::new(0, "A").has_valid_unit());
        assert!(CourseRecord::new(1, "A").has_valid_unit());
        assert!(CourseRecord::new(MAX_COURSE_UNIT, "A").has_valid_unit());
        assert!(!CourseRecord::new(MAX_COURSE_UNIT + 1, "A").has_valid_unit());
    }

    #[test]
    fn code_is_optional_in_json() {
        let record: CourseRecord = serde_json::from_str(r#"{"unit":3,"grade":"B"}"#).unwrap();
        assert_eq!(record, CourseRecord::new(3, Grade::B));

        let json = serde_json::to_value(CourseRecord::new(2, "A").with_code("MTH101")).unwrap();
        assert_eq!(json["code"], "MTH101");
    }
}
