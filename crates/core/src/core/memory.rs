//! Flat data memory, written only at commit.

use tracing::debug;

/// Flat word-addressed data memory.
///
/// Reads never happen during simulation (loads are modeled as
/// load-immediate); the only mutation is the commit-time store write.
#[derive(Clone, Debug)]
pub struct DataMemory {
    words: Vec<i64>,
}

impl DataMemory {
    /// Creates a zero-filled memory of `words` words.
    pub fn new(words: usize) -> Self {
        Self {
            words: vec![0; words],
        }
    }

    /// Returns the memory size in words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the memory has no words.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Reads a word. Used by tests and the renderer only.
    pub fn read(&self, addr: usize) -> i64 {
        self.words[addr]
    }

    /// Commit-time store write. Out-of-range addresses are silently dropped
    /// (the caller counts them); returns whether the write landed.
    pub fn commit_write(&mut self, addr: i64, value: i64) -> bool {
        let Ok(addr) = usize::try_from(addr) else {
            debug!(addr, value, "store to negative address dropped");
            return false;
        };
        if addr >= self.words.len() {
            debug!(addr, value, "store beyond memory dropped");
            return false;
        }
        self.words[addr] = value;
        true
    }

    /// Non-zero words in `[0, limit)`, for the renderer's memory window.
    pub fn nonzero_window(&self, limit: usize) -> Vec<(usize, i64)> {
        self.words
            .iter()
            .take(limit)
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| (i, v))
            .collect()
    }
}
