//! Top-level simulator: owns the architectural core, the cycle scheduler,
//! and the memory latency model side by side.
//!
//! Keeping the three as siblings lets `tick` split the borrows cleanly: the
//! memory model drains completions into the CPU, then the scheduler drives
//! both.

use tracing::trace;

use crate::common::SetupError;
use crate::config::Config;
use crate::core::{Cpu, Scheduler};
use crate::mem::MemoryLatency;
use crate::stats::Report;

/// The assembled simulator, driven one `tick` per host clock cycle.
#[derive(Debug)]
pub struct Simulator {
    /// Architectural state (registers, data memory, program, stats).
    pub cpu: Cpu,
    /// The per-cycle scheduling engine.
    pub scheduler: Scheduler,
    /// Fire-and-forget memory latency model.
    pub memory: MemoryLatency,
}

impl Simulator {
    /// Creates a simulator over `program` with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`SetupError`] for an invalid configuration or an empty
    /// program; no partial run is attempted.
    pub fn new(program: Vec<u16>, config: &Config) -> Result<Self, SetupError> {
        config.validate()?;
        if program.is_empty() {
            return Err(SetupError::EmptyProgram);
        }
        Ok(Self {
            cpu: Cpu::new(program),
            scheduler: Scheduler::new(config),
            memory: MemoryLatency::new(config.memory.max_delay, config.memory.seed),
        })
    }

    /// Advances the simulation by one clock cycle.
    ///
    /// Due memory completions are drained first, each clearing the advisory
    /// `busy` flag, then the scheduler runs its five phases. Returns true
    /// once the program is exhausted and the scoreboard has drained.
    pub fn tick(&mut self) -> bool {
        self.cpu.stats.cycles += 1;
        let now = self.cpu.stats.cycles;

        let Self {
            cpu,
            scheduler,
            memory,
        } = self;
        memory.drain_completed(now, |request| {
            trace!(?request, "memory completion, clearing busy");
            cpu.busy = false;
        });
        scheduler.cycle(cpu, memory)
    }

    /// Runs the simulation to completion and returns the elapsed cycles.
    pub fn run(&mut self) -> u64 {
        while !self.tick() {}
        self.cpu.stats.cycles
    }

    /// Assembles the final report for the host to serialize.
    pub fn report(&self) -> Report {
        Report::new(self.cpu.regs.snapshot(), &self.cpu.stats)
    }
}
