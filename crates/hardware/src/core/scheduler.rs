//! The per-cycle scheduling algorithm.
//!
//! One [`Scheduler`] owns the scoreboard queue, the register status table,
//! and the resource counters, and advances the whole model by one cycle per
//! call. A cycle runs five strictly ordered phases:
//! 1. **Completion/broadcast:** finished operations are marked complete,
//!    their status-table slots cleared, and their queue links removed.
//! 2. **Dependency wake-up:** waiting operands whose producer broadcast this
//!    or an earlier cycle become ready.
//! 3. **Execution advance/claim:** ready operations latch operands for one
//!    cycle, then claim an execution unit and start counting down.
//! 4. **Fetch/dispatch:** one new instruction enters per its dispatch class,
//!    or a structural stall holds the fetch pointer.
//! 5. **Counter reconciliation:** window and unit slots freed by this
//!    cycle's completions become usable from the next cycle onward.
//!
//! The phase order is what makes same-cycle forwarding work: a completion in
//! phase 1 wakes its consumers in phase 2 of the same cycle, but a woken
//! consumer cannot claim a unit before it has spent a full cycle in the
//! `reading` state, and freed resources are invisible to phases 3 and 4 of
//! the cycle that freed them.

use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::core::cpu::Cpu;
use crate::core::scoreboard::{Entry, EntryId, RegisterStatus, ScoreboardQueue};
use crate::isa::{decode, disasm, Decoded, DispatchClass, Op};
use crate::mem::MemoryLatency;

/// The cycle scheduler: scoreboard state, resource counters, and latencies.
#[derive(Debug)]
pub struct Scheduler {
    queue: ScoreboardQueue,
    status: RegisterStatus,

    window_limit: usize,
    unit_limit: usize,
    in_flight: usize,
    units_busy: usize,

    int_latency: u16,
    div_latency: u16,
    mul_latency: u16,
    mod_latency: u16,
    exp_latency: u16,

    /// Entries that completed this cycle; their slots are reclaimed and
    /// their window/unit occupancy released in phase 5.
    completed: Vec<EntryId>,
}

impl Scheduler {
    /// Creates a scheduler from a validated configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            queue: ScoreboardQueue::new(),
            status: RegisterStatus::new(),
            window_limit: config.resources.window_size as usize,
            unit_limit: config.resources.int_units as usize,
            in_flight: 0,
            units_busy: 0,
            int_latency: config.latency.int_latency,
            div_latency: config.latency.div_latency,
            mul_latency: config.latency.mul_latency,
            mod_latency: config.latency.mod_latency,
            exp_latency: config.latency.exp_latency,
            completed: Vec::new(),
        }
    }

    /// Number of scoreboard entries currently in flight.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Number of execution units currently held.
    pub fn units_busy(&self) -> usize {
        self.units_busy
    }

    /// Read access to the scoreboard queue, for inspection and tests.
    pub fn queue(&self) -> &ScoreboardQueue {
        &self.queue
    }

    /// Read access to the register status table.
    pub fn status(&self) -> &RegisterStatus {
        &self.status
    }

    /// Runs one full cycle over the simulated state.
    ///
    /// Returns true once the program is exhausted and the scoreboard queue
    /// has drained; the host stops ticking at that point.
    pub fn cycle(&mut self, cpu: &mut Cpu, memory: &mut MemoryLatency) -> bool {
        self.broadcast_completions();
        self.wake_dependents();
        self.advance_execution();
        let finished = self.fetch_dispatch(cpu, memory);
        self.reconcile_counters();
        finished
    }

    /// Phase 1: mark finished operations complete, clear their status-table
    /// slots, and unlink them from the queue.
    fn broadcast_completions(&mut self) {
        let mut cursor = self.queue.head();
        while let Some(id) = cursor {
            cursor = self.queue.next(id);
            let entry = &self.queue[id];
            if entry.executing && entry.remaining_cycles == 0 {
                let dest = entry.dest;
                self.queue[id].complete = true;
                if let Some(reg) = dest {
                    self.status.clear_if_current(reg, id);
                }
                self.queue.unlink(id);
                self.completed.push(id);
                trace!(?id, ?dest, "completion broadcast");
            }
        }
    }

    /// Phase 2: wake operands whose producer has broadcast completion.
    ///
    /// Runs over the post-broadcast queue, so a consumer sees its producer's
    /// completion in the same cycle it happened.
    fn wake_dependents(&mut self) {
        let mut cursor = self.queue.head();
        while let Some(id) = cursor {
            cursor = self.queue.next(id);

            if !self.queue[id].i_ready {
                let producer = self.queue[id].i_producer;
                debug_assert!(producer.is_some(), "unready i operand without a producer");
                if producer.is_some_and(|p| self.queue[p].complete) {
                    let entry = &mut self.queue[id];
                    entry.i_ready = true;
                    entry.i_producer = None;
                    trace!(?id, "i operand woke");
                }
            }
            if !self.queue[id].j_ready {
                let producer = self.queue[id].j_producer;
                debug_assert!(producer.is_some(), "unready j operand without a producer");
                if producer.is_some_and(|p| self.queue[p].complete) {
                    let entry = &mut self.queue[id];
                    entry.j_ready = true;
                    entry.j_producer = None;
                    trace!(?id, "j operand woke");
                }
            }
        }
    }

    /// Phase 3: latch operands, claim execution units, advance countdowns.
    ///
    /// A both-ready entry spends one cycle in `reading` before it may claim
    /// a unit, so it never executes in the cycle it became ready. The claim
    /// compares against the unit count as of the start of the cycle: units
    /// freed by this cycle's completions are not credited until phase 5.
    fn advance_execution(&mut self) {
        let mut cursor = self.queue.head();
        while let Some(id) = cursor {
            cursor = self.queue.next(id);
            let entry = &mut self.queue[id];

            if entry.i_ready && entry.j_ready && !entry.executing {
                if entry.reading {
                    if self.units_busy < self.unit_limit {
                        entry.executing = true;
                        entry.remaining_cycles -= 1;
                        self.units_busy += 1;
                        trace!(?id, "claimed an execution unit");
                    }
                } else {
                    entry.reading = true;
                    trace!(?id, "latched operands");
                }
            } else if entry.executing {
                entry.remaining_cycles -= 1;
            }
        }
        debug_assert!(self.units_busy <= self.unit_limit, "unit limit exceeded");
    }

    /// Phase 4: fetch and dispatch one instruction, or detect termination.
    fn fetch_dispatch(&mut self, cpu: &mut Cpu, memory: &mut MemoryLatency) -> bool {
        if cpu.drained() && self.queue.is_empty() {
            debug!(cycles = cpu.stats.cycles, "program drained, scoreboard empty");
            return true;
        }

        let Some(word) = cpu.fetch() else {
            return false;
        };
        let d = decode(word);
        let Some(op) = d.op else {
            warn!(pc = cpu.pc, "unrecognized instruction word {word:#06x} skipped");
            cpu.stats.unrecognized += 1;
            cpu.pc += 1;
            return false;
        };

        match op.dispatch_class() {
            DispatchClass::Scoreboard => self.dispatch_scoreboard(cpu, op, &d),
            DispatchClass::Immediate => self.dispatch_immediate(cpu, op, &d),
            DispatchClass::Memory => self.dispatch_memory(cpu, memory, op, &d),
        }
        false
    }

    /// Phase 5: release window and unit occupancy of this cycle's
    /// completions and return their slots to the arena.
    ///
    /// Runs after the dispatch decision, so a full window stalls fetch even
    /// in the cycle a slot frees.
    fn reconcile_counters(&mut self) {
        let freed = self.completed.len();
        debug_assert!(
            freed <= self.in_flight && freed <= self.units_busy,
            "resource counters out of step with completions"
        );
        self.in_flight -= freed;
        self.units_busy -= freed;
        for id in self.completed.drain(..) {
            self.queue.reclaim(id);
        }
    }

    /// Dispatches a scoreboard-tracked instruction, or stalls on a full
    /// window.
    fn dispatch_scoreboard(&mut self, cpu: &mut Cpu, op: Op, d: &Decoded) {
        if self.in_flight >= self.window_limit {
            // Structural stall: the fetch pointer stays put and the same
            // word is retried next cycle.
            cpu.stats.window_stalls += 1;
            trace!(pc = cpu.pc, "window full, structural stall");
            return;
        }

        let dest = op.has_dest().then_some(d.dest);
        let mut entry = Entry::new(self.int_latency, dest);
        if op.reads_sources() {
            // Producers are snapshotted before the destination slot is
            // overwritten, so an instruction reading its own destination
            // depends on the previous writer, not on itself.
            if let Some(producer) = self.status.snapshot(d.src_i) {
                entry.i_ready = false;
                entry.i_producer = Some(producer);
            }
            if let Some(producer) = self.status.snapshot(d.src_j) {
                entry.j_ready = false;
                entry.j_producer = Some(producer);
            }
        }

        let id = self.queue.push_back(entry);
        if let Some(reg) = dest {
            self.status.set(reg, id);
        }
        self.in_flight += 1;
        cpu.pc += 1;
        cpu.stats.count_op(op);
        cpu.stats.instructions_retired += 1;
        if op == Op::Halt {
            cpu.halted = true;
        }
        debug!(?id, instr = %disasm(d.word), "dispatched to scoreboard");
    }

    /// Dispatches a divide/multiply/modulo/exponent instruction: executes
    /// combinationally against the register file, no scoreboard residency.
    fn dispatch_immediate(&mut self, cpu: &mut Cpu, op: Op, d: &Decoded) {
        let a = cpu.regs.read(d.src_i);
        let b = cpu.regs.read(d.src_j);
        let (value, latency) = match op {
            // Division or remainder by zero yields zero: simulated-program
            // input must never fault the simulator.
            Op::Div => (if b == 0 { 0 } else { a.wrapping_div(b) }, self.div_latency),
            Op::Mod => (if b == 0 { 0 } else { a.wrapping_rem(b) }, self.mod_latency),
            Op::Mul => (
                (i32::from(a).wrapping_mul(i32::from(b)) & 0xFFFF) as i16,
                self.mul_latency,
            ),
            Op::Exp => (
                (f64::from(a).powf(f64::from(b)) as i64 & 0xFFFF) as i16,
                self.exp_latency,
            ),
            _ => unreachable!("not an immediate-effect mnemonic"),
        };
        cpu.regs.write(d.dest, value);
        if latency > 0 {
            cpu.busy = true;
        }
        cpu.pc += 1;
        cpu.stats.count_op(op);
        cpu.stats.instructions_retired += 1;
        debug!(instr = %disasm(d.word), value, "immediate-effect execution");
    }

    /// Dispatches a load/store: issues a fire-and-forget latency event.
    ///
    /// The architectural effect lands at issue time; the latency event
    /// models occupancy only, never data movement.
    fn dispatch_memory(&mut self, cpu: &mut Cpu, memory: &mut MemoryLatency, op: Op, d: &Decoded) {
        match op {
            Op::Lw => {
                let value = cpu.load(d.src_i);
                cpu.regs.write(d.dest, value);
            }
            Op::Sw => cpu.store(d.src_i, d.src_j),
            _ => unreachable!("not a memory mnemonic"),
        }

        let delay = memory.draw_delay();
        let request = memory.issue(cpu.stats.cycles, delay);
        cpu.busy = true;
        cpu.pc += 1;
        cpu.stats.mem_requests += 1;
        cpu.stats.count_op(op);
        cpu.stats.instructions_retired += 1;
        debug!(?request, delay, instr = %disasm(d.word), "memory latency event issued");
    }
}
