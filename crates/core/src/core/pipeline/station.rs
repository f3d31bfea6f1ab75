//! Reservation station pools for arithmetic operations.
//!
//! A station holds one dispatched arithmetic instruction while its operands
//! resolve and while it executes. Slots are a fixed array addressed by index;
//! a slot is reusable the cycle after its result is broadcast.

use crate::core::pipeline::rob::RobTag;
use crate::isa::instruction::Op;

/// A source operand: a value plus the tag of its pending producer.
/// The operand is ready once the tag is `None`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Operand {
    /// Operand value, meaningful once `tag` is `None`.
    pub value: i64,
    /// Producer tag this operand is waiting on, if unresolved.
    pub tag: Option<RobTag>,
}

impl Operand {
    /// An operand resolved at dispatch time.
    pub fn ready(value: i64) -> Self {
        Self { value, tag: None }
    }

    /// An operand waiting on the producer at `tag`.
    pub fn waiting(tag: RobTag) -> Self {
        Self {
            value: 0,
            tag: Some(tag),
        }
    }

    /// True once the value is usable.
    #[inline]
    pub fn is_ready(self) -> bool {
        self.tag.is_none()
    }

    /// Adopts a broadcast value if this operand waits on `tag`.
    pub fn capture(&mut self, tag: RobTag, value: i64) {
        if self.tag == Some(tag) {
            self.value = value;
            self.tag = None;
        }
    }
}

/// One reservation station slot.
#[derive(Clone, Debug, Default)]
pub struct Station {
    /// Whether the slot holds an in-flight instruction.
    pub busy: bool,
    /// Operation kind.
    pub op: Op,
    /// First operand (Vj/Qj).
    pub j: Operand,
    /// Second operand (Vk/Qk).
    pub k: Operand,
    /// Owning ROB slot; also the tag this station will broadcast.
    pub rob: Option<RobTag>,
    /// Execution has begun.
    pub executing: bool,
    /// Execution cycles remaining.
    pub remaining: u64,
    /// Cycle the instruction was dispatched; execution may start strictly later.
    pub dispatched_at: u64,
}

/// Fixed-size pool of reservation stations.
#[derive(Debug)]
pub struct StationPool {
    /// Pool name for traces and the renderer.
    pub name: &'static str,
    slots: Vec<Station>,
}

impl StationPool {
    /// Creates a pool of `count` free stations.
    pub fn new(name: &'static str, count: usize) -> Self {
        Self {
            name,
            slots: vec![Station::default(); count],
        }
    }

    /// Index of the first free slot, if any (slots are interchangeable,
    /// so scan order is the only tie-break).
    pub fn find_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| !s.busy)
    }

    /// Fills a slot at dispatch.
    pub fn dispatch(
        &mut self,
        idx: usize,
        op: Op,
        j: Operand,
        k: Operand,
        rob: RobTag,
        cycle: u64,
    ) {
        self.slots[idx] = Station {
            busy: true,
            op,
            j,
            k,
            rob: Some(rob),
            executing: false,
            remaining: 0,
            dispatched_at: cycle,
        };
    }

    /// Resolves every operand waiting on `tag` with the broadcast value.
    pub fn broadcast(&mut self, tag: RobTag, value: i64) {
        for slot in &mut self.slots {
            if slot.busy {
                slot.j.capture(tag, value);
                slot.k.capture(tag, value);
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
    pub fn slots(&self) -> &[Station] {
        &self.slots
    }

    /// Mutable slot view for the execution stages.
    pub fn slots_mut(&mut self) -> &mut [Station] {
        &mut self.slots
    }
}
