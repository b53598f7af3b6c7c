//! The closed set of triangle labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category assigned to a triple of side lengths.
///
/// Rendered and parsed as the upper-snake names used in the CSV files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    /// At least one side is zero or negative.
    InvalidNonpositive,
    /// The two shortest sides do not exceed the longest one.
    InvalidTriangleInequality,
    Equilateral,
    /// Exactly two sides equal; wins over right-ness.
    Isosceles,
    /// No equal sides and the Pythagorean identity holds.
    RightScalene,
    Scalene,
}

impl Label {
    /// Every label, in decision order.
    pub const ALL: [Label; 6] = [
        Label::InvalidNonpositive,
        Label::InvalidTriangleInequality,
        Label::Equilateral,
        Label::Isosceles,
        Label::RightScalene,
        Label::Scalene,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::InvalidNonpositive => "INVALID_NONPOSITIVE",
            Label::InvalidTriangleInequality => "INVALID_TRIANGLE_INEQUALITY",
            Label::Equilateral => "EQUILATERAL",
            Label::Isosceles => "ISOSCELES",
            Label::RightScalene => "RIGHT_SCALENE",
            Label::Scalene => "SCALENE",
        }
    }

    /// True for the two labels that reject the input as a triangle.
    pub fn is_invalid(&self) -> bool {
        matches!(
            self,
            Label::InvalidNonpositive | Label::InvalidTriangleInequality
        )
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text that is not one of the six label names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown triangle label: {0:?}")]
pub struct ParseLabelError(pub String);

impl FromStr for Label {
    type Err = ParseLabelError;

    /// Exact, case-sensitive match; surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| ParseLabelError(s.to_string()))
    }
}
