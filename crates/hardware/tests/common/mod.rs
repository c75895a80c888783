//! Shared helpers for the integration suite.
//!
//! Provides instruction-word encoders for every mnemonic, a deterministic
//! configuration, and a one-call simulator builder so scenario tests read as
//! programs rather than bit manipulation.

use xsim_core::isa::decode as enc;
use xsim_core::{Config, Simulator};

/// Encodes a three-register form word (opcode selector plus dest/i/j).
pub fn r_form(selector: u16, dest: u16, src_i: u16, src_j: u16) -> u16 {
    selector | (dest & 0x7) << 8 | (src_i & 0x7) << 5 | (src_j & 0x7) << 2
}

/// Encodes an immediate-load form word (opcode selector plus dest/imm).
pub fn imm_form(selector: u16, dest: u16, imm: u8) -> u16 {
    selector | (dest & 0x7) << 8 | u16::from(imm)
}

/// `add rd, ri, rj`
pub fn add(d: u16, i: u16, j: u16) -> u16 {
    r_form(enc::OP_ADD, d, i, j)
}

/// `sub rd, ri, rj`
pub fn sub(d: u16, i: u16, j: u16) -> u16 {
    r_form(enc::OP_SUB, d, i, j)
}

/// `div rd, ri, rj`
pub fn div(d: u16, i: u16, j: u16) -> u16 {
    r_form(enc::OP_DIV, d, i, j)
}

/// `mul rd, ri, rj`
pub fn mul(d: u16, i: u16, j: u16) -> u16 {
    r_form(enc::OP_MUL, d, i, j)
}

/// `lw rd, (ri)`
pub fn lw(d: u16, i: u16) -> u16 {
    r_form(enc::OP_LW, d, i, 0)
}

/// `sw (ri), rj`
pub fn sw(i: u16, j: u16) -> u16 {
    r_form(enc::OP_SW, 0, i, j)
}

/// `liz rd, imm`
pub fn liz(d: u16, imm: u8) -> u16 {
    imm_form(enc::OP_LIZ, d, imm)
}

/// `halt`
pub fn halt() -> u16 {
    enc::OP_HALT
}

/// `put rd`
pub fn put(d: u16) -> u16 {
    enc::OP_PUT | (d & 0x7) << 8
}

/// Installs a tracing subscriber honoring `RUST_LOG`, writing through the
/// test harness. Call at the top of a test when debugging a timeline.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A deterministic configuration for hand-computed timelines: default
/// resources and latencies, seeded memory with a small delay bound.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.memory.max_delay = 8;
    config.memory.seed = 42;
    config
}

/// Builds a simulator over `program` with [`test_config`].
pub fn sim(program: Vec<u16>) -> Simulator {
    Simulator::new(program, &test_config()).expect("test setup must be valid")
}
