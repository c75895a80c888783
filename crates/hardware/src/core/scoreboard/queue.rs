//! Scoreboard queue of in-flight operations.
//!
//! The queue is an arena of entry slots addressed by stable [`EntryId`]
//! handles, threaded into dispatch order by intrusive prev/next links. It
//! provides:
//! 1. **Allocation:** Tail insertion of newly dispatched operations.
//! 2. **Traversal:** Forward cursor iteration in dispatch order.
//! 3. **Removal:** O(1) unlink from any position (middle, head, tail, sole).
//! 4. **Deferred reclaim:** A completed entry's slot stays readable until the
//!    scheduler has finished broadcasting its completion, then returns to the
//!    free list.
//!
//! Handles never dangle mid-cycle: producer back-references held by waiting
//! consumers are dropped in the same cycle their target completes (the
//! wake-up phase always observes the broadcast phase of the same cycle), so
//! reclaiming at end of cycle is safe.

use std::ops::{Index, IndexMut};

/// Stable handle to a scoreboard entry slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub u32);

/// A single in-flight operation tracked by the scoreboard.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Countdown to completion once execution starts.
    pub remaining_cycles: u16,
    /// Destination register, or `None` for operations with no destination.
    pub dest: Option<usize>,
    /// True once the first operand is available.
    pub i_ready: bool,
    /// True once the second operand is available.
    pub j_ready: bool,
    /// Producer of the first operand, if it was in flight at dispatch.
    pub i_producer: Option<EntryId>,
    /// Producer of the second operand, if it was in flight at dispatch.
    pub j_producer: Option<EntryId>,
    /// True once the entry has latched its operands and may claim a unit.
    pub reading: bool,
    /// True once the entry holds an execution unit and is counting down.
    pub executing: bool,
    /// True once the countdown reached zero while executing.
    pub complete: bool,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

impl Entry {
    /// Creates a dispatched entry with both operands available and no
    /// execution state; the scheduler overrides readiness when a producer is
    /// found in the status table.
    pub fn new(remaining_cycles: u16, dest: Option<usize>) -> Self {
        Self {
            remaining_cycles,
            dest,
            i_ready: true,
            j_ready: true,
            i_producer: None,
            j_producer: None,
            reading: false,
            executing: false,
            complete: false,
            prev: None,
            next: None,
        }
    }
}

/// The scoreboard queue: an ordered arena of in-flight operations.
#[derive(Debug, Default)]
pub struct ScoreboardQueue {
    slots: Vec<Option<Entry>>,
    free: Vec<u32>,
    head: Option<EntryId>,
    tail: Option<EntryId>,
    len: usize,
}

impl ScoreboardQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of linked (in-flight) entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries are in flight.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the handle of the oldest in-flight entry.
    #[inline]
    pub fn head(&self) -> Option<EntryId> {
        self.head
    }

    /// Returns the successor of `id` in dispatch order.
    ///
    /// Valid on unlinked-but-unreclaimed entries too: unlinking rewires only
    /// the neighbours, so a traversal cursor standing on a just-removed entry
    /// still advances correctly.
    #[inline]
    pub fn next(&self, id: EntryId) -> Option<EntryId> {
        self[id].next
    }

    /// Appends a dispatched entry at the tail and returns its handle.
    pub fn push_back(&mut self, mut entry: Entry) -> EntryId {
        entry.prev = self.tail;
        entry.next = None;

        let id = match self.free.pop() {
            Some(idx) => {
                debug_assert!(self.slots[idx as usize].is_none());
                self.slots[idx as usize] = Some(entry);
                EntryId(idx)
            }
            None => {
                self.slots.push(Some(entry));
                EntryId((self.slots.len() - 1) as u32)
            }
        };

        match self.tail {
            Some(tail) => self[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        id
    }

    /// Unlinks `id` from the queue, handling all four boundary cases.
    ///
    /// The entry's own links are left untouched so an in-flight traversal
    /// cursor can step past it; the slot itself is reclaimed later via
    /// [`ScoreboardQueue::reclaim`].
    pub fn unlink(&mut self, id: EntryId) {
        let (prev, next) = {
            let entry = &self[id];
            (entry.prev, entry.next)
        };

        match (prev, next) {
            (Some(p), Some(n)) => {
                self[p].next = Some(n);
                self[n].prev = Some(p);
            }
            (None, Some(n)) => {
                self[n].prev = None;
                self.head = Some(n);
            }
            (Some(p), None) => {
                self[p].next = None;
                self.tail = Some(p);
            }
            (None, None) => {
                self.head = None;
                self.tail = None;
            }
        }
        self.len -= 1;
    }

    /// Returns an unlinked entry's slot to the free list.
    pub fn reclaim(&mut self, id: EntryId) {
        debug_assert!(
            self[id].complete,
            "reclaiming a scoreboard slot that never completed"
        );
        self.slots[id.0 as usize] = None;
        self.free.push(id.0);
    }

    /// Returns a reference to the entry if its slot is occupied.
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.slots.get(id.0 as usize).and_then(Option::as_ref)
    }
}

impl Index<EntryId> for ScoreboardQueue {
    type Output = Entry;

    fn index(&self, id: EntryId) -> &Entry {
        match self.slots[id.0 as usize].as_ref() {
            Some(entry) => entry,
            None => panic!("stale scoreboard handle {id:?}"),
        }
    }
}

impl IndexMut<EntryId> for ScoreboardQueue {
    fn index_mut(&mut self, id: EntryId) -> &mut Entry {
        match self.slots[id.0 as usize].as_mut() {
            Some(entry) => entry,
            None => panic!("stale scoreboard handle {id:?}"),
        }
    }
}
