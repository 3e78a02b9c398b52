//! Semester GPA engine.
//!
//! GPA is the unit-weighted mean of grade points, rounded half up to two
//! decimal places. Units and grade points are both integers, so the
//! weighted sum is exact and the rounding is done in integer arithmetic.

use crate::domain::{CourseRecord, GpaError, MAX_COURSE_UNIT};

/// Slack added before rounding so that values one ulp below a half
/// hundredth still round up.
const HALF_UP_SLACK: f64 = 1e-9;

/// Round a non-negative value half up to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + HALF_UP_SLACK).round() / 100.0
}

/// Compute the GPA of one semester.
///
/// Every unit must be in `1..=MAX_COURSE_UNIT`, otherwise
/// [`GpaError::InvalidUnit`]. An empty slice fails with
/// [`GpaError::DivisionByZero`]. Unrecognized grades count as zero points.
/// The result does not depend on the order of `records`.
pub fn compute_gpa(records: &[CourseRecord]) -> Result<f64, GpaError> {
    if let Some(bad) = records.iter().find(|r| !r.has_valid_unit()) {
        return Err(GpaError::InvalidUnit {
            unit: bad.unit,
            max: MAX_COURSE_UNIT,
        });
    }

    let total_units: u64 = records.iter().map(|r| u64::from(r.unit)).sum();
    if total_units == 0 {
        return Err(GpaError::DivisionByZero);
    }
    let weighted: u64 = records
        .iter()
        .map(|r| u64::from(r.unit) * r.grade.whole_points())
        .sum();

    // floor((weighted / total) * 100 + 1/2)
    let hundredths = (200 * weighted + total_units) / (2 * total_units);
    Ok(hundredths as f64 / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Grade;

    fn rec(unit: u32, grade: &str) -> CourseRecord {
        CourseRecord::new(unit, grade)
    }

    #[test]
    fn empty_is_division_by_zero() {
        assert_eq!(compute_gpa(&[]), Err(GpaError::DivisionByZero));
    }

    #[test]
    fn weighted_mean() {
        // (3*5 + 2*4) / 5
        assert_eq!(compute_gpa(&[rec(3, "A"), rec(2, "B")]), Ok(4.6));
    }

    #[test]
    fn rounds_half_up() {
        // 1 A + 1 B + 6 F over 8 units = 9 / 8 = 1.125
        let records = [rec(1, "A"), rec(1, "B"), rec(6, "F")];
        assert_eq!(compute_gpa(&records), Ok(1.13));

        // 2/3 = 0.666..
        assert_eq!(compute_gpa(&[rec(1, "D"), rec(2, "F")]), Ok(0.67));
        // 1/3 = 0.333..
        assert_eq!(compute_gpa(&[rec(1, "E"), rec(2, "F")]), Ok(0.33));
    }

    #[test]
    fn unrecognized_grade_counts_zero() {
        assert_eq!(compute_gpa(&[rec(2, "A"), rec(2, "P")]), Ok(2.5));
    }

    #[test]
    fn zero_unit_is_invalid_unit() {
        assert_eq!(
            compute_gpa(&[rec(3, "A"), rec(0, "B")]),
            Err(GpaError::InvalidUnit { unit: 0, max: 6 })
        );
    }

    #[test]
    fn oversized_unit_is_invalid_unit() {
        assert!(matches!(
            compute_gpa(&[rec(7, "A")]),
            Err(GpaError::InvalidUnit { unit: 7, .. })
        ));
    }

    #[test]
    fn bounds() {
        assert_eq!(compute_gpa(&[rec(6, "A"), rec(6, "A")]), Ok(5.0));
        assert_eq!(compute_gpa(&[rec(6, "F"), rec(1, "Z")]), Ok(0.0));
    }

    #[test]
    fn order_does_not_matter() {
        let mut records = vec![
            rec(3, "A"),
            rec(2, "C"),
            rec(4, "E"),
            rec(1, "B"),
            rec(3, "F"),
        ];
        let expected = compute_gpa(&records).unwrap();
        for _ in 0..records.len() {
            records.rotate_left(1);
            assert_eq!(compute_gpa(&records).unwrap(), expected);
        }
        records.reverse();
        assert_eq!(compute_gpa(&records).unwrap(), expected);
    }

    #[test]
    fn round2_half_up() {
        assert_eq!(round2(2.9975), 3.0);
        assert_eq!(round2(2.333_333), 2.33);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn matches_float_formula() {
        let records = [rec(3, "B"), rec(2, "C"), rec(4, "A"), rec(1, "D")];
        let total: f64 = records.iter().map(|r| r.unit as f64).sum();
        let weighted: f64 = records
            .iter()
            .map(|r| r.unit as f64 * r.grade.points())
            .sum();
        assert_eq!(compute_gpa(&records).unwrap(), round2(weighted / total));
        assert_eq!(Grade::parse("A").points(), 5.0);
    }
}
