//! Local Memory (Cache) Model.
//!
//! This module implements the 256-byte byte-addressable local memory. There is a
//! single storage array; "cache" behavior comes from a parallel validity bitmap:
//! 1. **Presence bits:** Every slot starts invalid. The first load or store to a slot
//!    is a miss and sets its bit; every later access to that slot is a hit.
//! 2. **No replacement:** Bits are never cleared during a run, so there is no
//!    eviction, associativity, or write-back.
//! 3. **Index resolution:** Raw signed 8-bit indices are mapped onto 0-255 according
//!    to the configured [`IndexPolicy`].

use crate::common::constants::CACHE_SIZE;
use crate::config::{IndexPolicy, MemoryConfig};

/// The local memory: 256 signed bytes plus one validity bit per byte.
#[derive(Clone, Debug)]
pub struct Cache {
    /// Cycles charged for a hit.
    pub hit_latency: u64,
    /// Cycles charged for a miss.
    pub miss_latency: u64,
    policy: IndexPolicy,
    data: [i8; CACHE_SIZE],
    valid: [bool; CACHE_SIZE],
}

impl Cache {
    /// Creates a zeroed cache with every slot invalid.
    ///
    /// # Arguments
    ///
    /// * `config` - Memory configuration supplying latencies and the index policy.
    pub const fn new(config: &MemoryConfig) -> Self {
        Self {
            hit_latency: config.hit_latency,
            miss_latency: config.miss_latency,
            policy: config.index_policy,
            data: [0; CACHE_SIZE],
            valid: [false; CACHE_SIZE],
        }
    }

    /// Maps a raw signed index onto a slot.
    ///
    /// Under [`IndexPolicy::Wrap`] the index is taken modulo 256 and always resolves.
    /// Under [`IndexPolicy::Reject`] negative indices return `None`.
    pub fn resolve(&self, raw: i8) -> Option<u8> {
        match self.policy {
            IndexPolicy::Wrap => Some(raw as u8),
            IndexPolicy::Reject => u8::try_from(raw).ok(),
        }
    }

    /// Reads the byte at `index`.
    ///
    /// Returns the stored value and whether the access hit. A miss marks the slot valid.
    pub fn read(&mut self, index: u8) -> (i8, bool) {
        let hit = self.touch(index);
        (self.data[usize::from(index)], hit)
    }

    /// Writes `value` to `index`.
    ///
    /// Returns whether the access hit. A miss marks the slot valid.
    pub fn write(&mut self, index: u8, value: i8) -> bool {
        self.data[usize::from(index)] = value;
        self.touch(index)
    }

    /// Cycle cost of an access with the given outcome.
    pub const fn latency(&self, hit: bool) -> u64 {
        if hit { self.hit_latency } else { self.miss_latency }
    }

    /// Returns the byte at `index` without touching the validity bit.
    pub const fn peek(&self, index: u8) -> i8 {
        self.data[index as usize]
    }

    /// Returns true if `index` has been accessed during this run.
    pub const fn is_valid(&self, index: u8) -> bool {
        self.valid[index as usize]
    }

    /// Number of slots accessed at least once.
    pub fn valid_count(&self) -> usize {
        self.valid.iter().filter(|v| **v).count()
    }

    /// Iterates over `(index, value)` for every valid slot in index order.
    pub fn touched(&self) -> impl Iterator<Item = (u8, i8)> + '_ {
        self.valid
            .iter()
            .zip(self.data.iter())
            .enumerate()
            .filter(|(_, (valid, _))| **valid)
            .map(|(idx, (_, value))| (idx as u8, *value))
    }

    /// Sets the validity bit and reports whether it was already set.
    fn touch(&mut self, index: u8) -> bool {
        std::mem::replace(&mut self.valid[usize::from(index)], true)
    }
}
