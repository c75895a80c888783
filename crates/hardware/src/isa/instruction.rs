//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding instruction
//! fields from 16-bit instruction encodings. The word layout is:
//!
//! ```text
//! 15      11 10    8 7     5 4     2 1   0
//! +---------+-------+-------+-------+-----+
//! | opcode  | dest  | src i | src j | --- |
//! +---------+-------+-------+-------+-----+
//!                   |      immediate      |
//!                   +---------------------+
//! ```
//!
//! The top five bits select the mnemonic; register fields are 3 bits each;
//! immediate-load instructions carry an 8-bit immediate in the low byte.

/// Bit mask for the opcode field (bits 11-15, pre-shift).
pub const OPCODE_MASK: u16 = 0xF800;
/// Bit mask for a 3-bit register field after shifting.
pub const REG_MASK: u16 = 0x7;
/// Bit shift for the destination register field (bits 8-10).
pub const DEST_SHIFT: u16 = 8;
/// Bit shift for the first source register field (bits 5-7).
pub const SRC_I_SHIFT: u16 = 5;
/// Bit shift for the second source register field (bits 2-4).
pub const SRC_J_SHIFT: u16 = 2;
/// Bit mask for the 8-bit immediate field (bits 0-7).
pub const IMM_MASK: u16 = 0xFF;

/// Trait for extracting instruction fields from encoded 16-bit words.
pub trait InstructionBits {
    /// Extracts the opcode selector (the word masked to its top five bits).
    ///
    /// The selector is kept unshifted so it compares directly against the
    /// encoding constants in [`crate::isa::decode`].
    fn opcode_bits(&self) -> u16;

    /// Extracts the destination register field (bits 8-10).
    fn dest(&self) -> usize;

    /// Extracts the first source register field (bits 5-7).
    fn src_i(&self) -> usize;

    /// Extracts the second source register field (bits 2-4).
    fn src_j(&self) -> usize;

    /// Extracts the 8-bit immediate field (bits 0-7).
    fn imm(&self) -> u8;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode_bits(&self) -> u16 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn dest(&self) -> usize {
        ((self >> DEST_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn src_i(&self) -> usize {
        ((self >> SRC_I_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn src_j(&self) -> usize {
        ((self >> SRC_J_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm(&self) -> u8 {
        (self & IMM_MASK) as u8
    }
}

/// Instruction mnemonics recognized by the core.
///
/// Branch and jump encodings of the wider ISA are not executed by this core
/// and decode to no mnemonic at all (see [`crate::isa::decode::decode`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Integer addition.
    Add,
    /// Integer subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise NOR.
    Nor,
    /// Integer division.
    Div,
    /// Integer multiplication (result masked to 16 bits).
    Mul,
    /// Integer remainder.
    Mod,
    /// Integer exponentiation (result masked to 16 bits).
    Exp,
    /// Load word from data memory.
    Lw,
    /// Store word to data memory.
    Sw,
    /// Load immediate, zero-extended.
    Liz,
    /// Load immediate, sign-extended.
    Lis,
    /// Load upper immediate.
    Lui,
    /// Halt marker (tracked through the scoreboard; no architectural effect).
    Halt,
    /// Output a register (tracked through the scoreboard; output not modeled).
    Put,
}

/// Dispatch policy class of an instruction category.
///
/// The three classes are deliberately asymmetric and must stay distinct:
/// scoreboard-tracked operations occupy the window and resolve hazards,
/// immediate-effect operations touch the register file combinationally, and
/// memory operations are fire-and-forget latency events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchClass {
    /// Occupies a scoreboard entry until latency elapses (ALU, load-immediate,
    /// halt/put).
    Scoreboard,
    /// Executes combinationally against the architectural register file
    /// (div, mul, mod, exp).
    Immediate,
    /// Issues an asynchronous memory latency event (lw, sw).
    Memory,
}

impl Op {
    /// Returns the dispatch class of this mnemonic.
    pub fn dispatch_class(self) -> DispatchClass {
        match self {
            Op::Add | Op::Sub | Op::And | Op::Nor | Op::Liz | Op::Lis | Op::Lui | Op::Halt
            | Op::Put => DispatchClass::Scoreboard,
            Op::Div | Op::Mul | Op::Mod | Op::Exp => DispatchClass::Immediate,
            Op::Lw | Op::Sw => DispatchClass::Memory,
        }
    }

    /// True when this mnemonic writes a destination register through the
    /// scoreboard (used to decide status-table occupancy).
    pub fn has_dest(self) -> bool {
        !matches!(self, Op::Halt | Op::Put | Op::Sw)
    }

    /// True when this mnemonic reads the two source register fields through
    /// the scoreboard (load-immediate and control operations dispatch with
    /// both operands already available).
    pub fn reads_sources(self) -> bool {
        matches!(self, Op::Add | Op::Sub | Op::And | Op::Nor)
    }

    /// The lowercase mnemonic string.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Sub => "sub",
            Op::And => "and",
            Op::Nor => "nor",
            Op::Div => "div",
            Op::Mul => "mul",
            Op::Mod => "mod",
            Op::Exp => "exp",
            Op::Lw => "lw",
            Op::Sw => "sw",
            Op::Liz => "liz",
            Op::Lis => "lis",
            Op::Lui => "lui",
            Op::Halt => "halt",
            Op::Put => "put",
        }
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Field extraction is unconditional: every decoded word carries all four
/// fields even when the mnemonic ignores some of them, matching the fixed
/// bit layout of the encoding.
#[derive(Debug, Clone, Copy)]
pub struct Decoded {
    /// Raw 16-bit instruction encoding.
    pub word: u16,
    /// Recognized mnemonic, or `None` for unrecognized encodings.
    pub op: Option<Op>,
    /// Destination register index (bits 8-10).
    pub dest: usize,
    /// First source register index (bits 5-7).
    pub src_i: usize,
    /// Second source register index (bits 2-4).
    pub src_j: usize,
    /// 8-bit immediate (bits 0-7).
    pub imm: u8,
}
