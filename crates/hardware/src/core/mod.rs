//! The simulated core.
//!
//! This module contains the model of the scoreboarded core. It provides:
//! 1. **Architectural state:** Register file, data memory, program, fetch pointer.
//! 2. **Scoreboard:** The in-flight operation queue and register status table.
//! 3. **Scheduler:** The strictly ordered per-cycle phase algorithm.

/// Architectural state: registers, data memory, program storage.
pub mod cpu;
/// The per-cycle scheduling algorithm.
pub mod scheduler;
/// Scoreboard bookkeeping (queue and register status table).
pub mod scoreboard;

pub use cpu::Cpu;
pub use scheduler::Scheduler;
