//! CGPA recurrence engine.
//!
//! CGPA is a running mean whose weight is the semester's index along the
//! admission pathway. With `n` the 1-based index of the current position:
//!
//! ```text
//! n = 1:  cgpa = 0
//! n > 1:  cgpa = (prev_cgpa * (n - 1) + gpa) / n
//! ```
//!
//! Standard entry runs n = 1..=12 (level 100 to 600), advanced entry
//! n = 1..=10 (level 200 to 600).

use serde::{Deserialize, Serialize};

use crate::domain::{AcademicPosition, AdmissionMode, CgpaError};
use crate::gpa::round2;

const MAX_POINT: f64 = 5.0;

fn check_range(field: &'static str, value: f64) -> Result<(), CgpaError> {
    if value.is_finite() && (0.0..=MAX_POINT).contains(&value) {
        Ok(())
    } else {
        Err(CgpaError::OutOfRange { field, value })
    }
}

/// Combine the previous CGPA with a new semester GPA at `position`.
///
/// The seed semester of a pathway yields `0.0` whatever the inputs. Other
/// positions require both values in `0.0..=5.0`. The result is rounded
/// half up to two decimal places.
pub fn compute_cgpa(
    position: &AcademicPosition,
    prev_cgpa: f64,
    new_gpa: f64,
) -> Result<f64, CgpaError> {
    let n = position.sequence_index()?;
    if n == 1 {
        return Ok(0.0);
    }
    check_range("prev_cgpa", prev_cgpa)?;
    check_range("gpa", new_gpa)?;

    let weight = f64::from(n - 1);
    Ok(round2((prev_cgpa * weight + new_gpa) / f64::from(n)))
}

/// One semester of a replayed pathway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CgpaStep {
    pub position: AcademicPosition,
    pub gpa: f64,
    pub cgpa: f64,
}

/// Feed `gpas` through the recurrence from the seed of `mode`.
///
/// The i-th GPA belongs to the i-th semester of the pathway and the prior
/// CGPA at the seed is `0.0`. Supplying more GPAs than the pathway has
/// semesters fails with [`CgpaError::InvalidPosition`].
pub fn cgpa_trajectory(mode: AdmissionMode, gpas: &[f64]) -> Result<Vec<CgpaStep>, CgpaError> {
    let max = mode.semester_count() as usize;
    if gpas.len() > max {
        return Err(CgpaError::InvalidPosition(format!(
            "{mode} has {max} semesters, got {} GPAs",
            gpas.len()
        )));
    }

    let mut steps = Vec::with_capacity(gpas.len());
    let mut position = Some(AcademicPosition::seed(mode));
    let mut prev = 0.0;
    for &gpa in gpas {
        let Some(current) = position else {
            break;
        };
        let cgpa = compute_cgpa(&current, prev, gpa)?;
        steps.push(CgpaStep {
            position: current,
            gpa,
            cgpa,
        });
        prev = cgpa;
        position = current.next();
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Level, Semester};

    fn pos(level: u16, semester: u8, mode: AdmissionMode) -> AcademicPosition {
        AcademicPosition::from_raw(level, semester, mode).unwrap()
    }

    #[test]
    fn seed_is_zero_regardless_of_inputs() {
        let seed = pos(100, 1, AdmissionMode::StandardEntry);
        assert_eq!(compute_cgpa(&seed, 0.0, 5.0), Ok(0.0));
        assert_eq!(compute_cgpa(&seed, 4.2, 3.1), Ok(0.0));
        assert_eq!(compute_cgpa(&seed, 99.0, f64::NAN), Ok(0.0));

        let seed = pos(200, 1, AdmissionMode::AdvancedEntry);
        assert_eq!(compute_cgpa(&seed, 3.0, 3.0), Ok(0.0));
    }

    #[test]
    fn level_100_second_semester() {
        let p = pos(100, 2, AdmissionMode::StandardEntry);
        assert_eq!(compute_cgpa(&p, 0.0, 4.0), Ok(2.0));
    }

    #[test]
    fn advanced_entry_level_100_is_invalid() {
        let p = AcademicPosition::new(Level::L100, Semester::First, AdmissionMode::AdvancedEntry);
        assert!(matches!(
            compute_cgpa(&p, 2.0, 3.0),
            Err(CgpaError::InvalidPosition(_))
        ));
    }

    #[test]
    fn out_of_range_inputs() {
        let p = pos(300, 1, AdmissionMode::StandardEntry);
        assert!(matches!(
            compute_cgpa(&p, -0.1, 3.0),
            Err(CgpaError::OutOfRange { field: "prev_cgpa", .. })
        ));
        assert!(matches!(
            compute_cgpa(&p, 3.0, 5.01),
            Err(CgpaError::OutOfRange { field: "gpa", .. })
        ));
        assert!(compute_cgpa(&p, f64::INFINITY, 3.0).is_err());
    }

    #[test]
    fn denominators_match_branch_table() {
        // With prev = 0 the result is gpa / n, so gpa = n * 0.25 gives 0.25
        // exactly when the denominator is n.
        for mode in [AdmissionMode::StandardEntry, AdmissionMode::AdvancedEntry] {
            let mut p = AcademicPosition::seed(mode).next();
            let mut n = 2u32;
            while let Some(current) = p {
                let gpa = f64::from(n) * 0.25;
                assert_eq!(compute_cgpa(&current, 0.0, gpa), Ok(0.25), "{current}");
                // and prev carries weight n - 1
                let expected = round2((2.0 * f64::from(n - 1) + 4.0) / f64::from(n));
                assert_eq!(compute_cgpa(&current, 2.0, 4.0), Ok(expected), "{current}");
                p = current.next();
                n += 1;
            }
            assert_eq!(n - 1, mode.semester_count());
        }
    }

    #[test]
    fn explicit_source_branches() {
        use AdmissionMode::*;
        let cases = [
            (StandardEntry, 200, 1, 3.0),
            (StandardEntry, 300, 2, 6.0),
            (StandardEntry, 600, 2, 12.0),
            (AdvancedEntry, 200, 2, 2.0),
            (AdvancedEntry, 400, 1, 5.0),
            (AdvancedEntry, 600, 2, 10.0),
        ];
        for (mode, level, semester, denominator) in cases {
            let p = pos(level, semester, mode);
            let expected = round2((3.5 * (denominator - 1.0) + 4.5) / denominator);
            assert_eq!(compute_cgpa(&p, 3.5, 4.5), Ok(expected), "{p}");
        }
    }

    #[test]
    fn chained_standard_entry() {
        let mode = AdmissionMode::StandardEntry;
        let s1 = compute_cgpa(&pos(100, 1, mode), 0.0, 3.7).unwrap();
        assert_eq!(s1, 0.0);
        let s2 = compute_cgpa(&pos(100, 2, mode), s1, 4.0).unwrap();
        assert_eq!(s2, 2.0);
        let s3 = compute_cgpa(&pos(200, 1, mode), s2, 3.0).unwrap();
        assert_eq!(s3, 2.33);
        let s4 = compute_cgpa(&pos(200, 2, mode), s3, 5.0).unwrap();
        assert_eq!(s4, 3.0);

        // unrounded: (2 * 2 + 3) / 3 = 7/3, then (7/3 * 3 + 5) / 4 = 3.0
        let exact = ((2.0 * 2.0 + 3.0) / 3.0 * 3.0 + 5.0) / 4.0;
        assert!((s4 - exact).abs() <= 0.005 * (4.0 + 1.0) / 2.0);
    }

    #[test]
    fn rounding_drift_is_bounded() {
        // Each step rounds by at most 0.005; the weighted recurrence keeps the
        // accumulated error at step n within 0.005 * (n + 1) / 2.
        let gpas = [
            3.71, 4.13, 2.87, 4.99, 3.33, 1.67, 4.44, 3.01, 2.22, 4.58, 3.95, 4.06,
        ];
        let steps = cgpa_trajectory(AdmissionMode::StandardEntry, &gpas).unwrap();
        assert_eq!(steps.len(), 12);

        let mut exact = 0.0;
        for (i, step) in steps.iter().enumerate() {
            let n = (i + 1) as f64;
            exact = if i == 0 {
                0.0
            } else {
                (exact * (n - 1.0) + step.gpa) / n
            };
            let bound = 0.005 * (n + 1.0) / 2.0 + 1e-9;
            assert!(
                (step.cgpa - exact).abs() <= bound,
                "step {} drift {} > {}",
                i + 1,
                (step.cgpa - exact).abs(),
                bound
            );
        }
    }

    #[test]
    fn trajectory_positions_and_limits() {
        let steps = cgpa_trajectory(AdmissionMode::AdvancedEntry, &[4.0, 4.0, 3.0]).unwrap();
        assert_eq!(steps[0].position, pos(200, 1, AdmissionMode::AdvancedEntry));
        assert_eq!(steps[0].cgpa, 0.0);
        assert_eq!(steps[1].cgpa, 2.0);
        assert_eq!(steps[2].position, pos(300, 1, AdmissionMode::AdvancedEntry));
        assert_eq!(steps[2].cgpa, 2.33);

        assert!(cgpa_trajectory(AdmissionMode::AdvancedEntry, &[3.0; 11]).is_err());
        assert!(cgpa_trajectory(AdmissionMode::StandardEntry, &[3.0; 12]).is_ok());
        assert!(cgpa_trajectory(AdmissionMode::StandardEntry, &[]).unwrap().is_empty());
    }

    #[test]
    fn idempotent() {
        let p = pos(400, 2, AdmissionMode::AdvancedEntry);
        let a = compute_cgpa(&p, 3.41, 4.12);
        let b = compute_cgpa(&p, 3.41, 4.12);
        assert_eq!(a, b);
    }
}
