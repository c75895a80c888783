//! Statistics counters and the final report.

use xsim_core::isa::Op;
use xsim_core::stats::{Report, SimStats};

const ALL_OPS: [Op; 15] = [
    Op::Add,
    Op::Sub,
    Op::And,
    Op::Nor,
    Op::Div,
    Op::Mul,
    Op::Mod,
    Op::Exp,
    Op::Lw,
    Op::Sw,
    Op::Liz,
    Op::Lis,
    Op::Lui,
    Op::Halt,
    Op::Put,
];

#[test]
fn test_every_mnemonic_has_its_own_counter() {
    let mut stats = SimStats::new();
    for (bumps, op) in ALL_OPS.into_iter().enumerate() {
        for _ in 0..=bumps {
            stats.count_op(op);
        }
    }
    for (bumps, op) in ALL_OPS.into_iter().enumerate() {
        assert_eq!(stats.op_count(op), bumps as u64 + 1, "{}", op.mnemonic());
    }
}

#[test]
fn test_report_copies_all_counters() {
    let mut stats = SimStats::new();
    stats.cycles = 100;
    stats.instructions_retired = 40;
    stats.window_stalls = 3;
    stats.unrecognized = 2;
    stats.count_op(Op::Mod);
    stats.count_op(Op::Mod);

    let report = Report::new([0, 1, -2, 3, -4, 5, -6, 7], &stats);
    assert_eq!(report.registers[2], -2);
    assert_eq!(report.stats.r#mod, 2);
    assert_eq!(report.stats.cycles, 100);
    assert_eq!(report.stats.instructions, 40);
    assert_eq!(report.stats.window_stalls, 3);
    assert_eq!(report.stats.unrecognized, 2);
}

#[test]
fn test_report_json_uses_mnemonic_keys() {
    let stats = SimStats::new();
    let report = Report::new([0; 8], &stats);
    let value = serde_json::to_value(report).unwrap();
    for op in ALL_OPS {
        assert!(
            value["stats"].get(op.mnemonic()).is_some(),
            "missing key {}",
            op.mnemonic()
        );
    }
}
