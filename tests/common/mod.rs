//! Shared helpers for the integration tests.

#![allow(dead_code)]

use basispath::config::HarnessConfig;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// The six canonical rows, one per basis path.
pub const CANONICAL_INPUT: &str = "case_id,a,b,c\n\
P1,0,3,4\n\
P2,1,2,3\n\
P3,5,5,5\n\
P4,5,5,6\n\
P5,3,4,5\n\
P6,4,6,7\n";

/// Expected labels matching [`CANONICAL_INPUT`].
pub const CANONICAL_EXPECTED: &str = "case_id,expected\n\
P1,INVALID_NONPOSITIVE\n\
P2,INVALID_TRIANGLE_INEQUALITY\n\
P3,EQUILATERAL\n\
P4,ISOSCELES\n\
P5,RIGHT_SCALENE\n\
P6,SCALENE\n";

/// A scratch workspace with `data/` inputs and a config pointing into it.
pub struct Workspace {
    pub dir: TempDir,
    pub config: HarnessConfig,
}

impl Workspace {
    pub fn new(input: &str, expected: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("data")).unwrap();
        fs::write(root.join("data/input.csv"), input).unwrap();
        fs::write(root.join("data/expected.csv"), expected).unwrap();

        let mut config = HarnessConfig::default();
        config.paths.input = root.join("data/input.csv");
        config.paths.expected = root.join("data/expected.csv");
        config.paths.actual = root.join("results/actual.csv");
        config.paths.report = root.join("results/report.txt");
        Self { dir, config }
    }

    pub fn canonical() -> Self {
        Self::new(CANONICAL_INPUT, CANONICAL_EXPECTED)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }
}
