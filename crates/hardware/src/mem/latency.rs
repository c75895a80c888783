//! Fire-and-forget memory latency events.
//!
//! Each load or store issues one timed event: a completion scheduled
//! `delay` cycles in the future, which the host routes to clear the advisory
//! `busy` flag. The adapter never touches architectural memory. Delays are
//! drawn uniformly below a configured bound from a seeded xorshift
//! generator, so runs are reproducible. No ordering holds between
//! outstanding requests beyond each firing once its own delay elapses, and
//! there is no cancellation or timeout.

/// Handle identifying one issued memory request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(pub u64);

#[derive(Debug)]
struct Pending {
    id: RequestId,
    due: u64,
}

/// The memory latency model: the pending completion set plus the delay
/// generator.
#[derive(Debug)]
pub struct MemoryLatency {
    max_delay: u64,
    state: u64,
    next_id: u64,
    pending: Vec<Pending>,
}

impl MemoryLatency {
    /// Creates a model with the given exclusive delay bound and generator
    /// seed. A zero seed is coerced to a fixed non-zero state (the xorshift
    /// state must never be zero).
    pub fn new(max_delay: u64, seed: u64) -> Self {
        Self {
            max_delay,
            state: if seed == 0 { 123_456_789 } else { seed },
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Draws the next uniform delay in `0..max_delay`.
    pub fn draw_delay(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x % self.max_delay
    }

    /// Schedules a completion `delay` cycles after `now` and returns the
    /// request handle. Fire and forget: the request cannot be cancelled.
    pub fn issue(&mut self, now: u64, delay: u64) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due: now + delay,
        });
        id
    }

    /// Invokes `on_complete` for every request due at or before `now`, in
    /// issue order, and drops it from the pending set.
    pub fn drain_completed(&mut self, now: u64, mut on_complete: impl FnMut(RequestId)) {
        self.pending.retain(|p| {
            if p.due <= now {
                on_complete(p.id);
                false
            } else {
                true
            }
        });
    }

    /// Returns the number of requests still outstanding.
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }
}
