//! Basis path catalog for [`classify`](super::classify).
//!
//! The classifier has five decisions, so its cyclomatic complexity is six and
//! six linearly independent paths cover it. Each path ends in a distinct
//! label, which makes the label a direct witness of the path taken.

use super::{Label, TestVector};
use crate::runner::ExpectedMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decisions in the classifier plus one.
pub const CYCLOMATIC_COMPLEXITY: usize = 6;

/// One independent path through the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BasisPath {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
}

impl BasisPath {
    pub const ALL: [BasisPath; CYCLOMATIC_COMPLEXITY] = [
        BasisPath::P1,
        BasisPath::P2,
        BasisPath::P3,
        BasisPath::P4,
        BasisPath::P5,
        BasisPath::P6,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            BasisPath::P1 => "P1",
            BasisPath::P2 => "P2",
            BasisPath::P3 => "P3",
            BasisPath::P4 => "P4",
            BasisPath::P5 => "P5",
            BasisPath::P6 => "P6",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BasisPath::P1 => "invalid because a side is non-positive",
            BasisPath::P2 => "invalid because triangle inequality fails",
            BasisPath::P3 => "equilateral triangle",
            BasisPath::P4 => "isosceles (but not equilateral)",
            BasisPath::P5 => "right, non-isosceles triangle",
            BasisPath::P6 => "scalene, non-right triangle",
        }
    }

    /// Label returned at the end of this path.
    pub fn label(&self) -> Label {
        match self {
            BasisPath::P1 => Label::InvalidNonpositive,
            BasisPath::P2 => Label::InvalidTriangleInequality,
            BasisPath::P3 => Label::Equilateral,
            BasisPath::P4 => Label::Isosceles,
            BasisPath::P5 => Label::RightScalene,
            BasisPath::P6 => Label::Scalene,
        }
    }

    /// Path that produces `label`.
    pub fn for_label(label: Label) -> Self {
        match label {
            Label::InvalidNonpositive => BasisPath::P1,
            Label::InvalidTriangleInequality => BasisPath::P2,
            Label::Equilateral => BasisPath::P3,
            Label::Isosceles => BasisPath::P4,
            Label::RightScalene => BasisPath::P5,
            Label::Scalene => BasisPath::P6,
        }
    }

    /// Side lengths that drive the classifier down this path.
    pub fn sides(&self) -> (f64, f64, f64) {
        match self {
            BasisPath::P1 => (0.0, 3.0, 4.0),
            BasisPath::P2 => (1.0, 2.0, 3.0),
            BasisPath::P3 => (5.0, 5.0, 5.0),
            BasisPath::P4 => (5.0, 5.0, 6.0),
            BasisPath::P5 => (3.0, 4.0, 5.0),
            BasisPath::P6 => (4.0, 6.0, 7.0),
        }
    }

    /// The canonical test vector for this path, keyed by the path id.
    pub fn vector(&self) -> TestVector {
        let (a, b, c) = self.sides();
        TestVector::new(self.id(), a, b, c)
    }
}

impl fmt::Display for BasisPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// One canonical vector per basis path, in path order.
pub fn canonical_vectors() -> Vec<TestVector> {
    BasisPath::ALL.iter().map(BasisPath::vector).collect()
}

/// Expected labels for [`canonical_vectors`].
pub fn canonical_expected() -> ExpectedMap {
    BasisPath::ALL
        .iter()
        .map(|p| (p.id().to_string(), p.label().to_string()))
        .collect()
}

/// Paths exercised by `labels`, deduplicated and in path order.
pub fn covered_paths<I>(labels: I) -> Vec<BasisPath>
where
    I: IntoIterator<Item = Label>,
{
    let mut seen: Vec<BasisPath> = labels.into_iter().map(BasisPath::for_label).collect();
    seen.sort();
    seen.dedup();
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    #[test]
    fn test_each_path_reaches_its_label() {
        for path in BasisPath::ALL {
            let (a, b, c) = path.sides();
            assert_eq!(classify(a, b, c), path.label(), "{path}");
        }
    }

    #[test]
    fn test_label_round_trip_is_bijective() {
        for path in BasisPath::ALL {
            assert_eq!(BasisPath::for_label(path.label()), path);
        }
        for label in Label::ALL {
            assert_eq!(BasisPath::for_label(label).label(), label);
        }
    }

    #[test]
    fn test_canonical_set_covers_all_paths() {
        let vectors = canonical_vectors();
        assert_eq!(vectors.len(), CYCLOMATIC_COMPLEXITY);
        let covered = covered_paths(vectors.iter().map(TestVector::classify));
        assert_eq!(covered, BasisPath::ALL.to_vec());
    }

    #[test]
    fn test_canonical_expected_matches_vectors() {
        let expected = canonical_expected();
        assert_eq!(expected.len(), CYCLOMATIC_COMPLEXITY);
        for v in canonical_vectors() {
            assert_eq!(
                expected.get(&v.case_id).map(String::as_str),
                Some(v.classify().as_str())
            );
        }
    }

    #[test]
    fn test_covered_paths_partial() {
        let covered = covered_paths([Label::Scalene, Label::Equilateral, Label::Scalene]);
        assert_eq!(covered, vec![BasisPath::P3, BasisPath::P6]);
        assert!(covered_paths(Vec::<Label>::new()).is_empty());
    }
}
