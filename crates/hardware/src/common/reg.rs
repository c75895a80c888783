//! Architectural register file.
//!
//! This module provides the `RegFile` struct holding the eight 16-bit
//! architectural registers of the modeled core. It provides:
//! 1. **Storage:** Eight signed 16-bit registers, all zero at reset.
//! 2. **Access:** Index-checked read and write methods.
//! 3. **Observability:** A snapshot accessor for final-state reporting.

/// Number of architectural registers.
pub const REG_COUNT: usize = 8;

/// Number of 16-bit words in data memory.
pub const DATA_WORDS: usize = 65_536;

/// The eight-entry architectural register file.
///
/// Unlike RISC-V there is no hardwired zero register: all eight registers
/// are general purpose and writable.
#[derive(Debug, Clone, Default)]
pub struct RegFile {
    regs: [i16; REG_COUNT],
}

impl RegFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the value of register `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= REG_COUNT`. Register indices come from 3-bit
    /// instruction fields, so decoded indices are always in range.
    #[inline]
    pub fn read(&self, idx: usize) -> i16 {
        self.regs[idx]
    }

    /// Writes `val` to register `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= REG_COUNT`.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i16) {
        self.regs[idx] = val;
    }

    /// Returns a copy of all register values, for final-state reporting.
    pub fn snapshot(&self) -> [i16; REG_COUNT] {
        self.regs
    }
}
