//! Load and store buffer pools.
//!
//! These mirror the reservation station shape for memory operations. A load
//! carries only its immediate (the simulator models LOAD as load-immediate,
//! so it has no operand dependency and is execution-ready the cycle after
//! dispatch). A store carries its resolved target address plus a single
//! value operand that may wait on a producer tag.

use crate::core::pipeline::rob::RobTag;
use crate::core::pipeline::station::Operand;

/// One load buffer slot.
#[derive(Clone, Debug, Default)]
pub struct LoadSlot {
    /// Whether the slot holds an in-flight load.
    pub busy: bool,
    /// Immediate value; doubles as the loaded constant.
    pub addr: i64,
    /// Owning ROB slot.
    pub rob: Option<RobTag>,
    /// Execution has begun.
    pub executing: bool,
    /// Execution cycles remaining.
    pub remaining: u64,
    /// Cycle the load was dispatched.
    pub dispatched_at: u64,
}

/// Fixed-size pool of load buffers.
#[derive(Debug)]
pub struct LoadBufferPool {
    slots: Vec<LoadSlot>,
}

impl LoadBufferPool {
    /// Creates a pool of `count` free load buffers.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![LoadSlot::default(); count],
        }
    }

    /// Index of the first free slot, if any.
    pub fn find_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.busy)
    }

    /// Fills a slot at dispatch.
    pub fn dispatch(&mut self, idx: usize, addr: i64, rob: RobTag, cycle: u64) {
        self.slots[idx] = LoadSlot {
            busy: true,
            addr,
            rob: Some(rob),
            executing: false,
            remaining: 0,
            dispatched_at: cycle,
        };
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.busy).count()
    }

    /// Returns the slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.busy)
    }

    /// Read-only slot view.
    pub fn slots(&self) -> &[LoadSlot] {
        &self.slots
    }

    /// Mutable slot view for the execution stages.
    pub fn slots_mut(&mut self) -> &mut [LoadSlot] {
        &mut self.slots
    }
}

/// One store buffer slot.
#[derive(Clone, Debug, Default)]
pub struct StoreSlot {
    /// Whether the slot holds an in-flight store.
    pub busy: bool,
    /// Resolved target address.
    pub addr: i64,
    /// Value to write (V/Q pair).
    pub value: Operand,
    /// Owning ROB slot.
    pub rob: Option<RobTag>,
    /// Execution has begun.
    pub executing: bool,
    /// Execution cycles remaining.
    pub remaining: u64,
    /// Cycle the store was dispatched.
    pub dispatched_at: u64,
}

/// Fixed-size pool of store buffers.
#[derive(Debug)]
pub struct StoreBufferPool {
    slots: Vec<StoreSlot>,
}

impl StoreBufferPool {
    /// Creates a pool of `count` free store buffers.
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![StoreSlot::default(); count],
        }
    }

    /// Index of the first free slot, if any.
    pub fn find_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.busy)
    }

    /// Fills a slot at dispatch.
    pub fn dispatch(&mut self, idx: usize, addr: i64, value: Operand, rob: RobTag, cycle: u64) {
        self.slots[idx] = StoreSlot {
            busy: true,
            addr,
            value,
            rob: Some(rob),
            executing: false,
            remaining: 0,
            dispatched_at: cycle,
        };
    }

    /// Resolves every value operand waiting on `tag` with the broadcast value.
    pub fn broadcast(&mut self, tag: RobTag, value: i64) {
        for slot in &mut self.slots {
            if slot.busy {
                slot.value.capture(tag, value);
            }
        }
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.busy).count()
    }

    /// Returns the slot count.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// True when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| !s.busy)
    }

    /// Read-only slot view.
    pub fn slots(&self) -> &[StoreSlot] {
        &self.slots
    }

    /// Mutable slot view for the execution stages.
    pub fn slots_mut(&mut self) -> &mut [StoreSlot] {
        &mut self.slots
    }
}
