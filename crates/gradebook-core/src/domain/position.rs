//! Academic position: where a semester sits in a student's programme.
//!
//! A position is `(level, semester, admission mode)`. The admission mode
//! decides where the pathway starts: standard entry at level 100, advanced
//! (direct) entry at level 200. The 1-based index of a position along its
//! pathway is the weight used by the CGPA recurrence.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CgpaError;

/// Academic year tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Level {
    L100,
    L200,
    L300,
    L400,
    L500,
    L600,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::L100,
        Level::L200,
        Level::L300,
        Level::L400,
        Level::L500,
        Level::L600,
    ];

    /// Numeric level (100..=600).
    pub fn value(self) -> u16 {
        match self {
            Level::L100 => 100,
            Level::L200 => 200,
            Level::L300 => 300,
            Level::L400 => 400,
            Level::L500 => 500,
            Level::L600 => 600,
        }
    }

    /// Zero-based year, 0 for level 100.
    fn year(self) -> u32 {
        u32::from(self.value() / 100) - 1
    }

    fn succ(self) -> Option<Level> {
        Level::ALL.get(self.year() as usize + 1).copied()
    }
}

impl TryFrom<u16> for Level {
    type Error = CgpaError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Level::ALL
            .into_iter()
            .find(|l| l.value() == value)
            .ok_or_else(|| CgpaError::InvalidPosition(format!("level {value} is not 100..=600")))
    }
}

impl From<Level> for u16 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Term within a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Semester {
    First,
    Second,
}

impl Semester {
    pub fn value(self) -> u8 {
        match self {
            Semester::First => 1,
            Semester::Second => 2,
        }
    }
}

impl TryFrom<u8> for Semester {
    type Error = CgpaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Semester::First),
            2 => Ok(Semester::Second),
            other => Err(CgpaError::InvalidPosition(format!(
                "semester {other} is not 1 or 2"
            ))),
        }
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.value()
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// How the student was admitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionMode {
    /// Enters at level 100 (UTME).
    #[default]
    #[serde(alias = "standard", alias = "utme")]
    StandardEntry,
    /// Enters at level 200 with prior credit (direct entry).
    #[serde(alias = "advanced", alias = "direct_entry", alias = "de")]
    AdvancedEntry,
}

impl AdmissionMode {
    /// First level of the pathway.
    pub fn entry_level(self) -> Level {
        match self {
            AdmissionMode::StandardEntry => Level::L100,
            AdmissionMode::AdvancedEntry => Level::L200,
        }
    }

    /// Number of semesters from the seed to level 600 semester 2.
    pub fn semester_count(self) -> u32 {
        2 * (Level::L600.year() - self.entry_level().year() + 1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AdmissionMode::StandardEntry => "standard_entry",
            AdmissionMode::AdvancedEntry => "advanced_entry",
        }
    }
}

impl FromStr for AdmissionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "standard" | "standard_entry" | "utme" => Ok(AdmissionMode::StandardEntry),
            "advanced" | "advanced_entry" | "direct_entry" | "de" => {
                Ok(AdmissionMode::AdvancedEntry)
            }
            other => Err(format!(
                "unknown admission mode '{other}' (expected standard or advanced)"
            )),
        }
    }
}

impl fmt::Display for AdmissionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A semester on a specific admission pathway.
///
/// The fields are public so callers can describe any combination; whether
/// the combination exists is checked by [`AcademicPosition::sequence_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AcademicPosition {
    pub level: Level,
    pub semester: Semester,
    pub mode: AdmissionMode,
}

impl AcademicPosition {
    pub fn new(level: Level, semester: Semester, mode: AdmissionMode) -> Self {
        Self {
            level,
            semester,
            mode,
        }
    }

    /// Build a position from raw numbers, rejecting anything off the table.
    pub fn from_raw(level: u16, semester: u8, mode: AdmissionMode) -> Result<Self, CgpaError> {
        let position = Self::new(Level::try_from(level)?, Semester::try_from(semester)?, mode);
        position.sequence_index()?;
        Ok(position)
    }

    /// Seed position of a pathway (its first semester).
    pub fn seed(mode: AdmissionMode) -> Self {
        Self::new(mode.entry_level(), Semester::First, mode)
    }

    /// 1-based index of this semester along its pathway.
    ///
    /// Fails with [`CgpaError::InvalidPosition`] for advanced entry at
    /// level 100.
    pub fn sequence_index(&self) -> Result<u32, CgpaError> {
        let entry = self.mode.entry_level();
        if self.level < entry {
            return Err(CgpaError::InvalidPosition(format!(
                "{} has no level {} semesters",
                self.mode, self.level
            )));
        }
        let years = self.level.year() - entry.year();
        Ok(2 * years + u32::from(self.semester.value()))
    }

    /// Whether this is the first semester of the pathway.
    pub fn is_seed(&self) -> bool {
        matches!(self.sequence_index(), Ok(1))
    }

    /// The following semester, or `None` after level 600 semester 2.
    pub fn next(&self) -> Option<Self> {
        match self.semester {
            Semester::First => Some(Self::new(self.level, Semester::Second, self.mode)),
            Semester::Second => self
                .level
                .succ()
                .map(|level| Self::new(level, Semester::First, self.mode)),
        }
    }
}

impl fmt::Display for AcademicPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} level {} semester {}",
            self.mode, self.level, self.semester
        )
    }
}
