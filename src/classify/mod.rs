//! Triangle classification.
//!
//! A short chain of decisions maps three side lengths to a [`Label`]. The
//! function is total: geometrically invalid inputs get one of the two
//! `INVALID_*` labels rather than an error.
//!
//! Two comparison regimes are in play and must stay separate. Equal-side
//! checks use exact equality on the sides as given; the right-angle check
//! uses the sorted sides and an absolute tolerance on the squared identity.

mod label;
pub mod paths;

pub use label::{Label, ParseLabelError};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Absolute tolerance for `x² + y² − z²` in the right-angle test.
pub const RIGHT_ANGLE_TOLERANCE: f64 = 1e-9;

/// One row of the input batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestVector {
    pub case_id: String,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TestVector {
    pub fn new(case_id: impl Into<String>, a: f64, b: f64, c: f64) -> Self {
        Self {
            case_id: case_id.into(),
            a,
            b,
            c,
        }
    }

    pub fn classify(&self) -> Label {
        classify(self.a, self.b, self.c)
    }
}

/// Label computed for one [`TestVector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub case_id: String,
    pub label: Label,
}

/// Sorts three sides ascending. `total_cmp` keeps this panic-free for NaN.
#[inline]
fn sorted(sides: [f64; 3]) -> [f64; 3] {
    let mut s = sides;
    s.sort_by(f64::total_cmp);
    s
}

/// Classifies the triangle with sides `a`, `b`, `c`.
///
/// Decisions are evaluated in this order, first match wins:
/// 1. any side `<= 0` gives [`Label::InvalidNonpositive`]
/// 2. sorted `x + y <= z` gives [`Label::InvalidTriangleInequality`]
/// 3. `a == b == c` gives [`Label::Equilateral`]
/// 4. two equal sides gives [`Label::Isosceles`], even for a right triangle
/// 5. `|x² + y² − z²| < 1e-9` gives [`Label::RightScalene`]
/// 6. otherwise [`Label::Scalene`]
///
/// NaN compares false everywhere and therefore ends up as `SCALENE`.
pub fn classify(a: f64, b: f64, c: f64) -> Label {
    let sides = [a, b, c];

    if sides.iter().any(|&s| s <= 0.0) {
        return Label::InvalidNonpositive;
    }

    let [x, y, z] = sorted(sides);

    // Degenerate (flat) triangles fail too.
    if x + y <= z {
        return Label::InvalidTriangleInequality;
    }

    if a == b && b == c {
        return Label::Equilateral;
    }

    // Full equality is already excluded, so this means exactly two.
    let is_iso = a == b || b == c || a == c;
    let is_right = (x * x + y * y - z * z).abs() < RIGHT_ANGLE_TOLERANCE;

    if is_iso {
        Label::Isosceles
    } else if is_right {
        Label::RightScalene
    } else {
        Label::Scalene
    }
}

/// Classifies every vector, preserving input order.
pub fn classify_batch(vectors: &[TestVector]) -> Vec<ClassificationResult> {
    vectors
        .iter()
        .map(|v| {
            let label = v.classify();
            trace!(case_id = %v.case_id, a = v.a, b = v.b, c = v.c, %label, "classified");
            ClassificationResult {
                case_id: v.case_id.clone(),
                label,
            }
        })
        .collect()
}
