//! Instruction set definitions for the 16-bit MIPS-like ISA.
//!
//! This module covers the fixed-width instruction word format. It provides:
//! 1. **Field extraction:** The `InstructionBits` trait and bit-layout constants.
//! 2. **Decoding:** Total, exclusive mapping from words to mnemonics.
//! 3. **Disassembly:** Mnemonic formatting for traces and test diagnostics.

/// Instruction word decoder.
pub mod decode;
/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;
/// Instruction field extraction and mnemonic definitions.
pub mod instruction;

pub use decode::decode;
pub use disasm::disasm;
pub use instruction::{Decoded, DispatchClass, InstructionBits, Op};
