//! Resource-bound invariants.
//!
//! The window and unit bounds must hold at every cycle of any run, not just
//! at the end, so these tests assert them tick by tick over mixed programs.

use crate::common::{add, div, init_tracing, liz, lw, put, sub, sw};
use xsim_core::{Config, Simulator};

fn tight_config() -> Config {
    let mut config = Config::default();
    config.resources.window_size = 2;
    config.resources.int_units = 1;
    config.latency.int_latency = 2;
    config.memory.max_delay = 16;
    config.memory.seed = 5;
    config
}

fn mixed_program() -> Vec<u16> {
    vec![
        add(1, 2, 3),
        sub(2, 1, 4),
        liz(3, 0x10),
        add(4, 1, 2),
        div(5, 1, 3),
        lw(6, 3),
        sw(3, 6),
        add(7, 6, 5),
        put(7),
    ]
}

#[test]
fn test_window_and_unit_bounds_hold_every_cycle() {
    init_tracing();
    let config = tight_config();
    let mut sim = Simulator::new(mixed_program(), &config).unwrap();

    for _ in 0..10_000 {
        let done = sim.tick();
        assert!(sim.scheduler.in_flight() <= 2, "window bound violated");
        assert!(sim.scheduler.queue().len() <= 2);
        assert!(sim.scheduler.units_busy() <= 1, "unit bound violated");
        if done {
            return;
        }
    }
    panic!("simulation did not terminate");
}

#[test]
fn test_all_instructions_eventually_retire() {
    let config = tight_config();
    let mut sim = Simulator::new(mixed_program(), &config).unwrap();
    sim.run();
    assert_eq!(sim.cpu.stats.instructions_retired, 9);
    assert_eq!(sim.cpu.stats.unrecognized, 0);
}

#[test]
fn test_larger_window_never_runs_slower() {
    let program = mixed_program();

    let mut tight = Simulator::new(program.clone(), &tight_config()).unwrap();
    let tight_cycles = tight.run();

    let mut wide_config = tight_config();
    wide_config.resources.window_size = 8;
    wide_config.resources.int_units = 4;
    let mut wide = Simulator::new(program, &wide_config).unwrap();
    let wide_cycles = wide.run();

    assert!(wide_cycles <= tight_cycles);
    assert!(wide.cpu.stats.window_stalls <= tight.cpu.stats.window_stalls);
}
