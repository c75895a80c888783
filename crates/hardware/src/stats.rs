//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the scoreboard simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, retired instructions, and derived metrics.
//! 2. **Instruction mix:** One counter per mnemonic plus unrecognized words.
//! 3. **Stalls:** Structural window stalls.
//! 4. **Reporting:** A human-readable summary and a serializable final report.

use serde::Serialize;
use std::time::Instant;

use crate::common::reg::REG_COUNT;
use crate::isa::Op;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Debug, Clone)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions dispatched (retired).
    pub instructions_retired: u64,
    /// Cycles lost to a full scoreboard window (structural stalls).
    pub window_stalls: u64,
    /// Asynchronous memory requests issued.
    pub mem_requests: u64,
    /// Unrecognized instruction words skipped.
    pub unrecognized: u64,

    /// Count of `add` instructions.
    pub op_add: u64,
    /// Count of `sub` instructions.
    pub op_sub: u64,
    /// Count of `and` instructions.
    pub op_and: u64,
    /// Count of `nor` instructions.
    pub op_nor: u64,
    /// Count of `div` instructions.
    pub op_div: u64,
    /// Count of `mul` instructions.
    pub op_mul: u64,
    /// Count of `mod` instructions.
    pub op_mod: u64,
    /// Count of `exp` instructions.
    pub op_exp: u64,
    /// Count of `lw` instructions.
    pub op_lw: u64,
    /// Count of `sw` instructions.
    pub op_sw: u64,
    /// Count of `liz` instructions.
    pub op_liz: u64,
    /// Count of `lis` instructions.
    pub op_lis: u64,
    /// Count of `lui` instructions.
    pub op_lui: u64,
    /// Count of `halt` instructions.
    pub op_halt: u64,
    /// Count of `put` instructions.
    pub op_put: u64,
}

impl Default for SimStats {
    /// Returns the default value.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            window_stalls: 0,
            mem_requests: 0,
            unrecognized: 0,
            op_add: 0,
            op_sub: 0,
            op_and: 0,
            op_nor: 0,
            op_div: 0,
            op_mul: 0,
            op_mod: 0,
            op_exp: 0,
            op_lw: 0,
            op_sw: 0,
            op_liz: 0,
            op_lis: 0,
            op_lui: 0,
            op_halt: 0,
            op_put: 0,
        }
    }
}

impl SimStats {
    /// Creates a statistics block with all counters zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumps the counter for one dispatched mnemonic.
    pub fn count_op(&mut self, op: Op) {
        let counter = match op {
            Op::Add => &mut self.op_add,
            Op::Sub => &mut self.op_sub,
            Op::And => &mut self.op_and,
            Op::Nor => &mut self.op_nor,
            Op::Div => &mut self.op_div,
            Op::Mul => &mut self.op_mul,
            Op::Mod => &mut self.op_mod,
            Op::Exp => &mut self.op_exp,
            Op::Lw => &mut self.op_lw,
            Op::Sw => &mut self.op_sw,
            Op::Liz => &mut self.op_liz,
            Op::Lis => &mut self.op_lis,
            Op::Lui => &mut self.op_lui,
            Op::Halt => &mut self.op_halt,
            Op::Put => &mut self.op_put,
        };
        *counter += 1;
    }

    /// Returns the counter value for one mnemonic.
    pub fn op_count(&self, op: Op) -> u64 {
        match op {
            Op::Add => self.op_add,
            Op::Sub => self.op_sub,
            Op::And => self.op_and,
            Op::Nor => self.op_nor,
            Op::Div => self.op_div,
            Op::Mul => self.op_mul,
            Op::Mod => self.op_mod,
            Op::Exp => self.op_exp,
            Op::Lw => self.op_lw,
            Op::Sw => self.op_sw,
            Op::Liz => self.op_liz,
            Op::Lis => self.op_lis,
            Op::Lui => self.op_lui,
            Op::Halt => self.op_halt,
            Op::Put => self.op_put,
        }
    }

    /// Prints all statistics to stdout.
    ///
    /// Division by zero is prevented by clamping cycle and instruction
    /// totals to 1 before computing derived metrics.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);
        let ipc = self.instructions_retired as f64 / cyc as f64;
        let cpi = cyc as f64 / instr as f64;

        println!("\n==========================================================");
        println!("SCOREBOARD SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {ipc:.4}");
        println!("sim_cpi                  {cpi:.4}");
        println!("----------------------------------------------------------");
        println!("CORE BREAKDOWN");
        println!(
            "  stalls.window          {} ({:.2}%)",
            self.window_stalls,
            (self.window_stalls as f64 / cyc as f64) * 100.0
        );
        println!("  mem.requests           {}", self.mem_requests);
        println!("  unrecognized           {}", self.unrecognized);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        let mix: [(&str, u64); 15] = [
            ("add", self.op_add),
            ("sub", self.op_sub),
            ("and", self.op_and),
            ("nor", self.op_nor),
            ("div", self.op_div),
            ("mul", self.op_mul),
            ("mod", self.op_mod),
            ("exp", self.op_exp),
            ("lw", self.op_lw),
            ("sw", self.op_sw),
            ("liz", self.op_liz),
            ("lis", self.op_lis),
            ("lui", self.op_lui),
            ("halt", self.op_halt),
            ("put", self.op_put),
        ];
        for (name, count) in mix {
            println!(
                "  op.{name:<20} {count} ({:.2}%)",
                (count as f64 / instr as f64) * 100.0
            );
        }
        println!("==========================================================");
    }
}

/// Final simulation report: register values plus all counters.
///
/// Serialized to JSON by the host driver as the machine-readable output of a
/// run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Final architectural register values, r0 through r7.
    pub registers: [i16; REG_COUNT],
    /// Per-mnemonic and summary counters.
    pub stats: ReportCounters,
}

/// The counter block of a [`Report`].
#[derive(Debug, Clone, Serialize)]
pub struct ReportCounters {
    /// Count of `add` instructions.
    pub add: u64,
    /// Count of `sub` instructions.
    pub sub: u64,
    /// Count of `and` instructions.
    pub and: u64,
    /// Count of `nor` instructions.
    pub nor: u64,
    /// Count of `div` instructions.
    pub div: u64,
    /// Count of `mul` instructions.
    pub mul: u64,
    /// Count of `mod` instructions.
    pub r#mod: u64,
    /// Count of `exp` instructions.
    pub exp: u64,
    /// Count of `lw` instructions.
    pub lw: u64,
    /// Count of `sw` instructions.
    pub sw: u64,
    /// Count of `liz` instructions.
    pub liz: u64,
    /// Count of `lis` instructions.
    pub lis: u64,
    /// Count of `lui` instructions.
    pub lui: u64,
    /// Count of `halt` instructions.
    pub halt: u64,
    /// Count of `put` instructions.
    pub put: u64,
    /// Unrecognized words skipped.
    pub unrecognized: u64,
    /// Structural window stalls.
    pub window_stalls: u64,
    /// Instructions dispatched.
    pub instructions: u64,
    /// Cycles elapsed.
    pub cycles: u64,
}

impl Report {
    /// Assembles a report from final register values and the statistics.
    pub fn new(registers: [i16; REG_COUNT], stats: &SimStats) -> Self {
        Self {
            registers,
            stats: ReportCounters {
                add: stats.op_add,
                sub: stats.op_sub,
                and: stats.op_and,
                nor: stats.op_nor,
                div: stats.op_div,
                mul: stats.op_mul,
                r#mod: stats.op_mod,
                exp: stats.op_exp,
                lw: stats.op_lw,
                sw: stats.op_sw,
                liz: stats.op_liz,
                lis: stats.op_lis,
                lui: stats.op_lui,
                halt: stats.op_halt,
                put: stats.op_put,
                unrecognized: stats.unrecognized,
                window_stalls: stats.window_stalls,
                instructions: stats.instructions_retired,
                cycles: stats.cycles,
            },
        }
    }
}
