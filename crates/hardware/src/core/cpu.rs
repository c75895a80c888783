//! Architectural state: register file, data memory, program storage and the
//! fetch pointer.

use crate::common::{RegFile, DATA_WORDS};
use crate::stats::SimStats;

/// The architectural core the scheduler operates on.
///
/// All architectural effects (register writes, memory stores) land here;
/// timing lives entirely in the scheduler and the memory model.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose register file.
    pub regs: RegFile,
    /// Word-addressed data memory.
    pub data: Vec<i16>,
    /// The loaded program, one encoded word per instruction.
    pub program: Vec<u16>,
    /// Index of the next instruction to fetch.
    pub pc: usize,
    /// Advisory flag: a memory operation is outstanding. Never gates
    /// dispatch; cleared when the memory model reports completion.
    pub busy: bool,
    /// True once a halt instruction has been fetched.
    pub halted: bool,
    /// Run counters.
    pub stats: SimStats,
}

impl Cpu {
    /// Creates a core with zeroed registers and memory, positioned at the
    /// first instruction of `program`.
    pub fn new(program: Vec<u16>) -> Self {
        Self {
            regs: RegFile::new(),
            data: vec![0; DATA_WORDS],
            program,
            pc: 0,
            busy: false,
            halted: false,
            stats: SimStats::new(),
        }
    }

    /// Returns the word at the fetch pointer without advancing it, or `None`
    /// once the program is exhausted or halted.
    pub fn fetch(&self) -> Option<u16> {
        if self.halted {
            return None;
        }
        self.program.get(self.pc).copied()
    }

    /// True when no further instructions will be fetched.
    pub fn drained(&self) -> bool {
        self.halted || self.pc >= self.program.len()
    }

    /// Reads a data word at the address held in register `reg`.
    pub fn load(&self, addr_reg: usize) -> i16 {
        let addr = self.regs.read(addr_reg) as u16 as usize;
        self.data[addr]
    }

    /// Stores the value of register `src_reg` at the address held in
    /// register `addr_reg`.
    pub fn store(&mut self, addr_reg: usize, src_reg: usize) {
        let addr = self.regs.read(addr_reg) as u16 as usize;
        self.data[addr] = self.regs.read(src_reg);
    }
}
