//! Register status table for data-hazard tracking.
//!
//! Maps each architectural register to the scoreboard entry of its latest
//! in-flight producer, or `None` if the value is architecturally available.
//! This lets dispatch resolve each source operand with a single table lookup
//! instead of scanning the scoreboard queue.

use crate::common::reg::REG_COUNT;
use crate::core::scoreboard::queue::EntryId;

/// Register status table: maps each architectural register to the handle of
/// its latest in-flight producer, or `None` if no incomplete writer exists.
#[derive(Debug)]
pub struct RegisterStatus {
    slots: [Option<EntryId>; REG_COUNT],
}

impl Default for RegisterStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterStatus {
    /// Creates a new status table with all registers clear (no pending writers).
    pub fn new() -> Self {
        Self {
            slots: [None; REG_COUNT],
        }
    }

    /// Returns the handle of the latest pending writer for a register, read
    /// at dispatch time to resolve operand dependencies.
    pub fn snapshot(&self, reg: usize) -> Option<EntryId> {
        self.slots[reg]
    }

    /// Records `id` as the current producer of `reg`, called at dispatch for
    /// instructions with a destination.
    pub fn set(&mut self, reg: usize, id: EntryId) {
        self.slots[reg] = Some(id);
    }

    /// Clears a register's pending writer, but ONLY if the slot still names
    /// `id`. This prevents a completing entry from clearing a slot already
    /// superseded by a later writer of the same register (WAW handling).
    pub fn clear_if_current(&mut self, reg: usize, id: EntryId) {
        if self.slots[reg] == Some(id) {
            self.slots[reg] = None;
        }
    }
}
