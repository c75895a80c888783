//! Program loading and the top-level simulation driver.
//!
//! This module ties the core together for a host. It provides:
//! 1. **Loading:** Text program parsing into an instruction-word array.
//! 2. **Simulation:** The `Simulator` owning the CPU, scheduler, and memory
//!    model, driven one `tick` per host clock cycle.

/// Text program loader.
pub mod loader;
/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
