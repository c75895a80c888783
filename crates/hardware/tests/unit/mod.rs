//! Unit tests for the core's components.
//!
//! The tree mirrors the source layout: decoding under `isa`, scheduler
//! invariants under `core`, loading and end-to-end scenarios under `sim`,
//! plus configuration and statistics at the top level.

/// Configuration validation and deserialization tests.
pub mod config;

/// Scheduler resource-bound invariant tests.
pub mod core;

/// Instruction decode property tests.
pub mod isa;

/// Loader and end-to-end simulation tests.
pub mod sim;

/// Statistics counter and report tests.
pub mod stats;
