//! Text renderings of a [`RunSummary`].

use super::RunSummary;
use std::fmt::Write;

/// Body of `report.txt`.
pub fn render_report(summary: &RunSummary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Total cases: {}", summary.total);
    let _ = writeln!(out, "Failures: {}", summary.failures);
    if !summary.mismatches.is_empty() {
        out.push_str("\nMismatch details:\n");
        for mismatch in &summary.mismatches {
            let _ = writeln!(out, "- {}", mismatch);
        }
    }
    out
}

/// Summary printed to stdout at the end of a run.
pub fn render_console(summary: &RunSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Ran {} test cases; failures: {}",
        summary.total, summary.failures
    );
    if summary.mismatches.is_empty() {
        out.push_str("All basis paths passed.\n");
    } else {
        out.push_str("Mismatches:\n");
        for mismatch in &summary.mismatches {
            let _ = writeln!(out, "  {}", mismatch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Label;
    use crate::runner::{Expected, Mismatch};

    fn failing() -> RunSummary {
        RunSummary {
            total: 6,
            failures: 2,
            mismatches: vec![
                Mismatch {
                    case_id: "P4".to_string(),
                    expected: Expected::Known(Label::RightScalene),
                    actual: Label::Isosceles,
                },
                Mismatch {
                    case_id: "P7".to_string(),
                    expected: Expected::Missing,
                    actual: Label::Scalene,
                },
            ],
        }
    }

    fn passing() -> RunSummary {
        RunSummary {
            total: 6,
            failures: 0,
            mismatches: Vec::new(),
        }
    }

    #[test]
    fn test_report_passing() {
        assert_eq!(render_report(&passing()), "Total cases: 6\nFailures: 0\n");
    }

    #[test]
    fn test_report_failing() {
        assert_eq!(
            render_report(&failing()),
            "Total cases: 6\n\
             Failures: 2\n\
             \n\
             Mismatch details:\n\
             - P4: expected RIGHT_SCALENE, got ISOSCELES\n\
             - P7: expected <missing>, got SCALENE\n"
        );
    }

    #[test]
    fn test_console_passing() {
        assert_eq!(
            render_console(&passing()),
            "Ran 6 test cases; failures: 0\nAll basis paths passed.\n"
        );
    }

    #[test]
    fn test_console_failing() {
        assert_eq!(
            render_console(&failing()),
            "Ran 6 test cases; failures: 2\n\
             Mismatches:\n  \
             P4: expected RIGHT_SCALENE, got ISOSCELES\n  \
             P7: expected <missing>, got SCALENE\n"
        );
    }
}
