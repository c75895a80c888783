//! Instruction decode properties.
//!
//! Decoding must be total (never panic, every field in range), exclusive
//! (the mnemonic is a function of the top five bits alone), and side-effect
//! free. These properties are checked over random words and exhaustively
//! over the whole 16-bit space.

use proptest::prelude::*;

use xsim_core::isa::decode::decode;
use xsim_core::isa::instruction::InstructionBits;
use xsim_core::isa::{disasm, DispatchClass, Op};

proptest! {
    #[test]
    fn decode_fields_always_in_range(word in any::<u16>()) {
        let d = decode(word);
        prop_assert!(d.dest < 8);
        prop_assert!(d.src_i < 8);
        prop_assert!(d.src_j < 8);
    }

    #[test]
    fn mnemonic_depends_only_on_top_five_bits(word in any::<u16>()) {
        prop_assert_eq!(decode(word).op, decode(word & 0xF800).op);
    }

    #[test]
    fn fields_match_raw_bit_extraction(word in any::<u16>()) {
        let d = decode(word);
        prop_assert_eq!(d.word, word);
        prop_assert_eq!(d.dest, word.dest());
        prop_assert_eq!(d.src_i, word.src_i());
        prop_assert_eq!(d.src_j, word.src_j());
        prop_assert_eq!(d.imm, word.imm());
    }

    #[test]
    fn disasm_never_panics(word in any::<u16>()) {
        let text = disasm(word);
        prop_assert!(!text.is_empty());
    }
}

#[test]
fn test_decode_is_total_over_all_words() {
    for word in 0..=u16::MAX {
        let _ = decode(word);
    }
}

#[test]
fn test_exactly_fifteen_selectors_recognized() {
    let recognized = (0..32u16).filter(|s| decode(s << 11).op.is_some()).count();
    assert_eq!(recognized, 15);
}

#[test]
fn test_selectors_map_to_expected_dispatch_classes() {
    let classes: Vec<(Op, DispatchClass)> = (0..32u16)
        .filter_map(|s| decode(s << 11).op)
        .map(|op| (op, op.dispatch_class()))
        .collect();

    let scoreboard = classes
        .iter()
        .filter(|(_, c)| *c == DispatchClass::Scoreboard)
        .count();
    let immediate = classes
        .iter()
        .filter(|(_, c)| *c == DispatchClass::Immediate)
        .count();
    let memory = classes
        .iter()
        .filter(|(_, c)| *c == DispatchClass::Memory)
        .count();

    // Four ALU + three immediate-loads + halt/put; div/mul/mod/exp; lw/sw.
    assert_eq!(scoreboard, 9);
    assert_eq!(immediate, 4);
    assert_eq!(memory, 2);
}
