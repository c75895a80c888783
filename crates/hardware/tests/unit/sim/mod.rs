//! Loader and end-to-end simulation tests.

/// Program loading from real files.
pub mod loader_files;

/// End-to-end cycle-count and report scenarios.
pub mod scenarios;
