//! Setup error definitions.
//!
//! This module defines the error taxonomy for simulator construction. It covers:
//! 1. **Configuration errors:** Non-positive resource limits or latencies.
//! 2. **Program source errors:** Unreadable, unparsable, or empty programs.
//!
//! All variants are fatal at setup: the simulator refuses to start a partial
//! run. There are no recoverable per-cycle errors — an unrecognized
//! instruction word is counted and skipped by the scheduler, and scheduler
//! invariant violations are debug assertions, not `Err` values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported while constructing a simulator.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The scoreboard window size (max in-flight operations) is zero.
    #[error("scoreboard window size must be a positive integer")]
    ZeroWindow,

    /// The execution unit count is zero.
    #[error("execution unit count must be a positive integer")]
    ZeroUnits,

    /// A per-category latency is zero.
    #[error("{category} latency must be a positive integer")]
    ZeroLatency {
        /// Name of the offending instruction category.
        category: &'static str,
    },

    /// The memory delay bound is zero (the uniform draw would be empty).
    #[error("memory delay bound must be a positive integer")]
    ZeroMemDelay,

    /// The program file could not be read.
    #[error("could not read program {path}: {source}")]
    ProgramRead {
        /// Path of the program file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A program line did not parse as a 16-bit hexadecimal word.
    #[error("program line {line} is not a 16-bit hex word: {source}")]
    ProgramParse {
        /// 1-based line number of the offending line.
        line: usize,
        /// Underlying integer-parse error.
        source: std::num::ParseIntError,
    },

    /// The program contained no instruction words.
    #[error("program contains no instruction words")]
    EmptyProgram,
}
