//! Triangle classification and a basis path test harness around it.
//!
//! [`mod@classify`] is the pure decision procedure. [`runner`] applies it to a
//! batch and diffs the results against expected labels. [`io`], [`config`]
//! and [`harness`] wire both to CSV files for the `basispath` binary.

/// Triangle classifier and basis path catalog
pub mod classify;
/// Command-line interface
pub mod cli;
/// Run configuration
pub mod config;
/// Error types
pub mod error;
/// File-backed harness pipeline
pub mod harness;
/// CSV and report I/O
pub mod io;
/// Tracing setup
pub mod logging;
/// Batch comparison and reporting
pub mod runner;

pub use classify::{classify, classify_batch, ClassificationResult, Label, TestVector};
pub use error::{HarnessError, Result};
pub use runner::{compare, run_batch, BatchRun, Expected, ExpectedMap, Mismatch, RunSummary};
