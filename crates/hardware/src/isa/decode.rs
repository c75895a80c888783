//! Instruction decoder.
//!
//! This module maps 16-bit instruction words to mnemonics and extracts the
//! operand fields. Decoding is total and exclusive: the top five bits of the
//! word select exactly one mnemonic, or none for encodings this core does
//! not execute (the wider ISA's branch and jump forms). Decoding has no side
//! effects.

use crate::isa::instruction::{Decoded, InstructionBits, Op};

/// Opcode selector for `add` (bits 15-11 = 0b00000).
pub const OP_ADD: u16 = 0x0000;
/// Opcode selector for `sub` (bits 15-11 = 0b00001).
pub const OP_SUB: u16 = 0x0800;
/// Opcode selector for `and` (bits 15-11 = 0b00010).
pub const OP_AND: u16 = 0x1000;
/// Opcode selector for `nor` (bits 15-11 = 0b00011).
pub const OP_NOR: u16 = 0x1800;
/// Opcode selector for `div` (bits 15-11 = 0b00100).
pub const OP_DIV: u16 = 0x2000;
/// Opcode selector for `mul` (bits 15-11 = 0b00101).
pub const OP_MUL: u16 = 0x2800;
/// Opcode selector for `mod` (bits 15-11 = 0b00110).
pub const OP_MOD: u16 = 0x3000;
/// Opcode selector for `exp` (bits 15-11 = 0b00111).
pub const OP_EXP: u16 = 0x3800;
/// Opcode selector for `lw` (bits 15-11 = 0b01000).
pub const OP_LW: u16 = 0x4000;
/// Opcode selector for `sw` (bits 15-11 = 0b01001).
pub const OP_SW: u16 = 0x4800;
/// Opcode selector for `put` (bits 15-11 = 0b01101).
pub const OP_PUT: u16 = 0x6800;
/// Opcode selector for `halt` (bits 15-11 = 0b01110).
pub const OP_HALT: u16 = 0x7000;
/// Opcode selector for `liz` (bits 15-11 = 0b10000).
pub const OP_LIZ: u16 = 0x8000;
/// Opcode selector for `lis` (bits 15-11 = 0b10001).
pub const OP_LIS: u16 = 0x8800;
/// Opcode selector for `lui` (bits 15-11 = 0b10010).
pub const OP_LUI: u16 = 0x9000;

/// Decodes a 16-bit instruction word into its mnemonic and fields.
///
/// Every representable word maps to exactly one mnemonic or to `None`
/// (unrecognized); the opcode selectors are mutually exclusive bit patterns,
/// enforced by matching on the masked selector.
///
/// # Arguments
///
/// * `word` - The 16-bit instruction encoding to decode.
///
/// # Returns
///
/// A [`Decoded`] structure with the mnemonic and all extracted fields.
pub fn decode(word: u16) -> Decoded {
    let op = match word.opcode_bits() {
        OP_ADD => Some(Op::Add),
        OP_SUB => Some(Op::Sub),
        OP_AND => Some(Op::And),
        OP_NOR => Some(Op::Nor),
        OP_DIV => Some(Op::Div),
        OP_MUL => Some(Op::Mul),
        OP_MOD => Some(Op::Mod),
        OP_EXP => Some(Op::Exp),
        OP_LW => Some(Op::Lw),
        OP_SW => Some(Op::Sw),
        OP_PUT => Some(Op::Put),
        OP_HALT => Some(Op::Halt),
        OP_LIZ => Some(Op::Liz),
        OP_LIS => Some(Op::Lis),
        OP_LUI => Some(Op::Lui),
        _ => None,
    };

    Decoded {
        word,
        op,
        dest: word.dest(),
        src_i: word.src_i(),
        src_j: word.src_j(),
        imm: word.imm(),
    }
}
