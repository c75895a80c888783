//! Instruction disassembler.
//!
//! Converts a 16-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use xsim_core::isa::disasm;
//! assert_eq!(disasm(0x0000 | 1 << 8 | 2 << 5 | 3 << 2), "add r1, r2, r3");
//! assert_eq!(disasm(0x8000 | 5 << 8 | 0x2A), "liz r5, 0x2a");
//! ```

use crate::isa::decode::decode;
use crate::isa::instruction::{DispatchClass, Op};

/// Disassembles a 16-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add r1, r2, r3"` or `"unknown (0x5000)"` for
/// encodings this core does not execute.
pub fn disasm(word: u16) -> String {
    let d = decode(word);
    let Some(op) = d.op else {
        return format!("unknown ({word:#06x})");
    };

    match op {
        Op::Liz | Op::Lis | Op::Lui => {
            format!("{} r{}, {:#04x}", op.mnemonic(), d.dest, d.imm)
        }
        Op::Lw => format!("lw r{}, (r{})", d.dest, d.src_i),
        Op::Sw => format!("sw (r{}), r{}", d.src_i, d.src_j),
        Op::Halt => "halt".to_string(),
        Op::Put => format!("put r{}", d.dest),
        _ => match op.dispatch_class() {
            // add/sub/and/nor and div/mul/mod/exp share the three-register form.
            DispatchClass::Scoreboard | DispatchClass::Immediate => {
                format!("{} r{}, r{}, r{}", op.mnemonic(), d.dest, d.src_i, d.src_j)
            }
            DispatchClass::Memory => unreachable!("memory forms handled above"),
        },
    }
}
