//! Register file with value + pending-tag entries.
//!
//! Each architectural register holds a committed value and an optional tag
//! naming the reorder buffer slot of its latest in-flight producer. The tag
//! is assigned at dispatch (newest writer wins), opportunistically served a
//! value copy at broadcast, and cleared at commit only when it still names
//! the committing slot, so a later rename is never clobbered by an older
//! producer.

use crate::core::pipeline::rob::RobTag;

/// One architectural register: committed value plus pending producer tag.
#[derive(Clone, Copy, Debug, Default)]
pub struct RegEntry {
    /// Committed (or courtesy-copied, see broadcast) value.
    pub value: i64,
    /// Reorder buffer slot of the latest in-flight producer, if any.
    pub tag: Option<RobTag>,
}

/// The architectural register file.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    entries: Vec<RegEntry>,
}

impl RegisterFile {
    /// Creates a register file of `count` registers, all zero and untagged.
    pub fn new(count: usize) -> Self {
        Self {
            entries: vec![RegEntry::default(); count],
        }
    }

    /// Returns the register count.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the register file has no registers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads a register's value and pending tag. A `None` tag means the
    /// value is final and usable as an operand.
    pub fn read_operand(&self, reg: usize) -> (i64, Option<RobTag>) {
        let entry = &self.entries[reg];
        (entry.value, entry.tag)
    }

    /// Marks `reg` as pending on the producer at `tag`, unconditionally
    /// overwriting any prior tag. Newest writer wins: program order
    /// guarantees an older producer must not reach this register anymore.
    pub fn assign_tag(&mut self, reg: usize, tag: RobTag) {
        self.entries[reg].tag = Some(tag);
    }

    /// Broadcast courtesy copy: every register waiting on `tag` adopts the
    /// value, but the tag stays set. The authoritative write-back happens at
    /// commit, guarded against a later re-rename.
    pub fn capture_broadcast(&mut self, tag: RobTag, value: i64) {
        for entry in &mut self.entries {
            if entry.tag == Some(tag) {
                entry.value = value;
            }
        }
    }

    /// Commit write-back: writes the value and clears the tag only if the
    /// stored tag still equals the committing `tag`. Returns whether the
    /// register was written.
    pub fn commit_write(&mut self, reg: usize, tag: RobTag, value: i64) -> bool {
        let entry = &mut self.entries[reg];
        if entry.tag == Some(tag) {
            entry.value = value;
            entry.tag = None;
            true
        } else {
            false
        }
    }

    /// Directly sets a register's committed value. Used to seed initial state.
    pub fn set(&mut self, reg: usize, value: i64) {
        self.entries[reg].value = value;
    }

    /// Read-only view of all entries, for the renderer.
    pub fn entries(&self) -> &[RegEntry] {
        &self.entries
    }
}
