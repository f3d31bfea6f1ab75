//! Reorder Buffer (ROB) for in-order commit over out-of-order completion.
//!
//! The ROB is a circular buffer of slots `1..=capacity`; slot index 0 is
//! reserved to mean "no tag / already resolved", so a slot index is usable
//! directly as a renaming tag. It provides:
//! 1. **Allocation:** Enqueues the next in-flight instruction at the tail.
//! 2. **Completion:** Marks entries ready when their functional unit broadcasts.
//! 3. **In-order Commit:** Retires the head entry once ready, one per cycle.
//!
//! One slot is always kept empty to distinguish full from empty, so at most
//! `capacity - 1` entries are live at once.

use crate::isa::instruction::Op;

/// Renaming tag: the 1-based ROB slot index of an in-flight producer.
///
/// This single integer scheme unifies register renaming, operand waiting,
/// and broadcast addressing: "waiting on tag T" means "will receive the
/// value produced by ROB slot T".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RobTag(pub usize);

/// A single reorder buffer entry.
#[derive(Clone, Debug, Default)]
pub struct RobEntry {
    /// Whether this slot holds an in-flight instruction.
    pub occupied: bool,
    /// Operation kind.
    pub op: Op,
    /// Destination register (None for stores).
    pub dest: Option<usize>,
    /// Result available; the head entry commits only once ready.
    pub ready: bool,
    /// Computed result value (register-producing kinds).
    pub value: i64,
    /// Resolved store address.
    pub store_addr: i64,
    /// Value the store will write at commit.
    pub store_value: i64,
    /// Original instruction text, for display and the schedule table.
    pub text: String,
    /// Cycle the instruction was dispatched.
    pub dispatched_at: u64,
    /// Cycle execution began.
    pub started_at: u64,
    /// Cycle the result was produced. Commit is eligible strictly after.
    pub completed_at: u64,
}

/// Circular reorder buffer; the sole authority over retirement order.
#[derive(Debug)]
pub struct ReorderBuffer {
    /// Slot array; index 0 is unused (reserved as "no tag").
    entries: Vec<RobEntry>,
    /// Slot index of the oldest entry (commit point).
    head: usize,
    /// Slot index where the next entry will be allocated.
    tail: usize,
    capacity: usize,
}

impl ReorderBuffer {
    /// Creates a ROB with `capacity` slots (at most `capacity - 1` live).
    pub fn new(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity + 1);
        entries.resize_with(capacity + 1, RobEntry::default);
        Self {
            entries,
            head: 1,
            tail: 1,
            capacity,
        }
    }

    /// Returns the slot count.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of occupied entries.
    #[inline]
    pub fn len(&self) -> usize {
        (self.tail + self.capacity - self.head) % self.capacity
    }

    /// Returns true if no entries are in flight.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the number of allocatable slots.
    #[inline]
    pub fn free_slots(&self) -> usize {
        self.capacity - self.len() - 1
    }

    /// Slot index of the current head.
    #[inline]
    pub fn head_slot(&self) -> RobTag {
        RobTag(self.head)
    }

    /// Slot index of the current tail.
    #[inline]
    pub fn tail_slot(&self) -> RobTag {
        RobTag(self.tail)
    }

    /// Allocates the tail slot for a new instruction. Returns `None` when
    /// only the reserved empty slot remains.
    pub fn allocate(
        &mut self,
        op: Op,
        dest: Option<usize>,
        store_addr: i64,
        text: &str,
        cycle: u64,
    ) -> Option<RobTag> {
        if self.free_slots() == 0 {
            return None;
        }

        let slot = self.tail;
        self.entries[slot] = RobEntry {
            occupied: true,
            op,
            dest,
            store_addr,
            text: text.to_string(),
            dispatched_at: cycle,
            ..RobEntry::default()
        };
        self.tail = (self.tail % self.capacity) + 1;
        Some(RobTag(slot))
    }

    /// Stamps the cycle execution began for the entry at `tag`.
    pub fn mark_started(&mut self, tag: RobTag, cycle: u64) {
        let entry = &mut self.entries[tag.0];
        if entry.occupied {
            entry.started_at = cycle;
        }
    }

    /// Marks a register-producing entry ready with its result value.
    pub fn complete(&mut self, tag: RobTag, value: i64, cycle: u64) {
        let entry = &mut self.entries[tag.0];
        if entry.occupied {
            entry.ready = true;
            entry.value = value;
            entry.completed_at = cycle;
        }
    }

    /// Marks a store entry ready with its resolved address and data.
    pub fn complete_store(&mut self, tag: RobTag, addr: i64, value: i64, cycle: u64) {
        let entry = &mut self.entries[tag.0];
        if entry.occupied {
            entry.ready = true;
            entry.store_addr = addr;
            entry.store_value = value;
            entry.completed_at = cycle;
        }
    }

    /// Returns the already-produced value of the entry at `tag`, if it has
    /// completed. Dispatch uses this to read an operand whose producer has
    /// broadcast but not yet committed.
    pub fn value_if_ready(&self, tag: RobTag) -> Option<i64> {
        let entry = &self.entries[tag.0];
        (entry.occupied && entry.ready).then_some(entry.value)
    }

    /// Returns the head entry, if any instruction is in flight.
    pub fn peek_head(&self) -> Option<&RobEntry> {
        if self.is_empty() {
            None
        } else {
            Some(&self.entries[self.head])
        }
    }

    /// Commits (retires) the head entry if it is ready. Clears the slot and
    /// advances the head circularly. Returns `None` if the ROB is empty or
    /// the head is still executing.
    pub fn commit_head(&mut self) -> Option<RobEntry> {
        if self.is_empty() || !self.entries[self.head].ready {
            return None;
        }
        let committed = std::mem::take(&mut self.entries[self.head]);
        self.head = (self.head % self.capacity) + 1;
        Some(committed)
    }

    /// Iterates `(slot, entry)` over all slots `1..=capacity`, for the renderer.
    pub fn iter_slots(&self) -> impl Iterator<Item = (usize, &RobEntry)> {
        self.entries.iter().enumerate().skip(1)
    }
}
