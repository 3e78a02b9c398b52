//! Letter grades and the fixed grade point table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A letter grade awarded for one course.
///
/// The set is closed: anything that is not `A`..`F` parses to
/// [`Grade::Other`], which carries the original symbol for display and is
/// worth zero points like `F`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    Other(String),
}

impl Grade {
    /// Parse a grade symbol. Never fails.
    ///
    /// Surrounding whitespace is ignored and matching is case-insensitive,
    /// so `" b "` is [`Grade::B`].
    pub fn parse(symbol: &str) -> Self {
        let trimmed = symbol.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "A" => Grade::A,
            "B" => Grade::B,
            "C" => Grade::C,
            "D" => Grade::D,
            "E" => Grade::E,
            "F" => Grade::F,
            _ => Grade::Other(trimmed.to_string()),
        }
    }

    /// Grade points for this grade.
    pub fn points(&self) -> f64 {
        points_for(self)
    }

    /// Integral grade points, used by the GPA engine to sum exactly.
    pub(crate) fn whole_points(&self) -> u64 {
        match self {
            Grade::A => 5,
            Grade::B => 4,
            Grade::C => 3,
            Grade::D => 2,
            Grade::E => 1,
            Grade::F | Grade::Other(_) => 0,
        }
    }

    /// Symbol as written on a result sheet.
    pub fn symbol(&self) -> &str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::Other(s) => s.as_str(),
        }
    }
}

/// Grade point table: A=5, B=4, C=3, D=2, E=1, everything else 0.
///
/// Total over the symbol space; there is no failure case.
pub fn points_for(grade: &Grade) -> f64 {
    grade.whole_points() as f64
}

impl From<&str> for Grade {
    fn from(s: &str) -> Self {
        Grade::parse(s)
    }
}

impl From<String> for Grade {
    fn from(s: String) -> Self {
        Grade::parse(&s)
    }
}

impl From<Grade> for String {
    fn from(g: Grade) -> Self {
        g.symbol().to_string()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
