//! Cycle-driven scoreboard scheduler simulator library.
//!
//! This crate implements a cycle-accurate model of a small 16-bit MIPS-like
//! core with out-of-order-capable dispatch over a scoreboard:
//! 1. **Core:** Scoreboard queue, register status table, and the per-cycle
//!    scheduler (completion/broadcast, wake-up, execution, dispatch).
//! 2. **ISA:** Decoding and disassembly of the fixed-width instruction set.
//! 3. **Memory:** Asynchronous latency adapter for load/store occupancy.
//! 4. **Simulation:** Program loader, configuration, and statistics.

/// Common types and constants (registers, setup errors).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// Core model (architectural state, scoreboard, cycle scheduler).
pub mod core;
/// Instruction set (decode, field extraction, disassembly).
pub mod isa;
/// Asynchronous memory latency modeling.
pub mod mem;
/// Program loader and top-level simulator.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main core type; holds registers, data memory, program, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new` and drive with `tick`.
pub use crate::sim::Simulator;
