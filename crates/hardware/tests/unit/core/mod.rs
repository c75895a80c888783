//! Scheduler invariant tests.

/// Resource-bound invariants held every cycle of a run.
pub mod scheduler_bounds;
