// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! BitSet: fixed-capacity packed bits behind a reader/writer lock.
//!
//! Bit `n` is stored in byte `n / 8` at position `n % 8`. The buffer is
//! allocated once at construction and never resized.
//!
//! # Locking
//!
//! A single `parking_lot::RwLock` guards both the byte buffer and the
//! high-water mark. `set` and `clear` update the mark in the same critical
//! section as the bit, so [`BitSet::max_pos`] is exact whenever it is read.
//!
//! [`BitSet::prev`] and [`BitSet::next`] take the read lock once per probe of
//! [`SCAN_STRIDE_BYTES`] bytes rather than across the whole scan. Writers can
//! interleave between probes, so a scan is a best-effort snapshot and not
//! atomic over the range. [`BitSet::preview`] holds one read lock for its
//! whole (bounded) scan.

use parking_lot::RwLock;
use std::fmt;

#[cfg(feature = "profiling")]
use tracing::info_span;

use crate::error::{BitSetError, Result};
use crate::search;

/// Hard maximum number of bits in one set (2^32).
pub const MAX_CAPACITY_BITS: u64 = 1 << 32;

/// Offsets below this bound are listed by [`BitSet::preview`].
pub const PREVIEW_LIMIT: u64 = 100;

/// Bytes examined per read-lock hold during `prev`/`next`.
pub const SCAN_STRIDE_BYTES: usize = 64;

const STRIDE_BITS: u64 = SCAN_STRIDE_BYTES as u64 * 8;

struct Inner {
    /// Packed bits, `capacity / 8` bytes
    storage: Box<[u8]>,

    /// Largest set offset, `None` while the set is empty
    high_water: Option<u64>,
}

/// Fixed-capacity bit-set, safe to share between threads.
///
/// All operations take `&self`; wrap the set in an `Arc` to share it.
pub struct BitSet {
    inner: RwLock<Inner>,

    /// Highest valid offset (inclusive)
    max_offset: u64,
}

/// Byte index and bit mask for an in-range offset.
#[inline]
fn locate(offset: u64) -> (usize, u8) {
    ((offset / 8) as usize, 1 << (offset % 8))
}

impl BitSet {
    /// Create a set holding offsets `0..capacity`.
    ///
    /// `capacity` is rounded up to a multiple of 8. Zero selects
    /// [`MAX_CAPACITY_BITS`].
    ///
    /// # Errors
    /// [`BitSetError::CapacityExceeded`] if the rounded capacity is above
    /// [`MAX_CAPACITY_BITS`].
    pub fn new(capacity: u64) -> Result<Self> {
        #[cfg(feature = "profiling")]
        let span = info_span!("bitset.new", capacity);
        #[cfg(feature = "profiling")]
        let _guard = span.enter();

        let bits = if capacity == 0 {
            MAX_CAPACITY_BITS
        } else {
            capacity.div_ceil(8).saturating_mul(8)
        };

        if bits > MAX_CAPACITY_BITS {
            #[cfg(feature = "profiling")]
            tracing::warn!(capacity, max = MAX_CAPACITY_BITS, "bitset capacity rejected");
            return Err(BitSetError::CapacityExceeded {
                requested: capacity,
                max: MAX_CAPACITY_BITS,
            });
        }

        Ok(Self::with_bits(bits))
    }

    /// Create a set at [`MAX_CAPACITY_BITS`].
    ///
    /// The 512 MiB buffer is zero-initialized; most allocators hand back lazily
    /// mapped pages for this, so untouched regions cost no resident memory.
    pub fn new_max() -> Self {
        Self::with_bits(MAX_CAPACITY_BITS)
    }

    /// `bits` must be a non-zero multiple of 8, at most the hard maximum.
    fn with_bits(bits: u64) -> Self {
        debug_assert!(bits > 0 && bits % 8 == 0 && bits <= MAX_CAPACITY_BITS);
        Self {
            inner: RwLock::new(Inner {
                storage: vec![0u8; (bits / 8) as usize].into_boxed_slice(),
                high_water: None,
            }),
            max_offset: bits - 1,
        }
    }

    /// Set the bit at `offset`.
    ///
    /// Returns `false` without touching the set if `offset > capacity()`.
    pub fn set(&self, offset: u64) -> bool {
        if offset > self.max_offset {
            return false;
        }
        let (index, mask) = locate(offset);

        let mut inner = self.inner.write();
        inner.storage[index] |= mask;
        if inner.high_water.map_or(true, |max| offset > max) {
            inner.high_water = Some(offset);
        }
        true
    }

    /// Clear the bit at `offset`.
    ///
    /// Returns `true` for any in-range offset, whether or not the bit was set,
    /// and `false` if `offset > capacity()`. Clearing the current maximum
    /// rescans downward for the new one while still holding the write lock.
    pub fn clear(&self, offset: u64) -> bool {
        if offset > self.max_offset {
            return false;
        }
        let (index, mask) = locate(offset);

        let mut guard = self.inner.write();
        let inner = &mut *guard;
        inner.storage[index] &= !mask;

        // The mark is exact under the lock; only clearing it can move it.
        if inner.high_water == Some(offset) {
            #[cfg(feature = "profiling")]
            let span = info_span!("bitset.clear.rescan", offset);
            #[cfg(feature = "profiling")]
            let _guard = span.enter();

            inner.high_water = search::prev_set_bit(&inner.storage, 0, offset);

            #[cfg(feature = "profiling")]
            {
                if inner.high_water.is_none() {
                    tracing::debug!(offset, "bitset emptied");
                }
            }
        }
        true
    }

    /// Check if the bit at `offset` is set. Out-of-range offsets are `false`.
    pub fn contains(&self, offset: u64) -> bool {
        if offset > self.max_offset {
            return false;
        }
        let (index, mask) = locate(offset);
        self.inner.read().storage[index] & mask != 0
    }

    /// Highest set offset in `[0, offset]`.
    ///
    /// Offsets past `capacity()` are clamped to it.
    pub fn prev(&self, offset: u64) -> Option<u64> {
        #[cfg(feature = "profiling")]
        let span = info_span!("bitset.prev", offset);
        #[cfg(feature = "profiling")]
        let _guard = span.enter();

        let mut hi = offset.min(self.max_offset);
        loop {
            let lo = hi - hi % STRIDE_BITS;
            let found = search::prev_set_bit(&self.inner.read().storage, lo, hi);
            if found.is_some() {
                return found;
            }
            // Stop before stepping below zero.
            if lo == 0 {
                return None;
            }
            hi = lo - 1;
        }
    }

    /// Lowest set offset in `[offset, capacity()]`.
    pub fn next(&self, offset: u64) -> Option<u64> {
        #[cfg(feature = "profiling")]
        let span = info_span!("bitset.next", offset);
        #[cfg(feature = "profiling")]
        let _guard = span.enter();

        if offset > self.max_offset {
            return None;
        }
        let mut lo = offset;
        loop {
            let hi = (lo - lo % STRIDE_BITS + STRIDE_BITS - 1).min(self.max_offset);
            let found = search::next_set_bit(&self.inner.read().storage, lo, hi);
            if found.is_some() {
                return found;
            }
            if hi == self.max_offset {
                return None;
            }
            lo = hi + 1;
        }
    }

    /// Largest set offset, or `None` if no bit is set.
    pub fn max_pos(&self) -> Option<u64> {
        self.inner.read().high_water
    }

    /// Highest valid offset (inclusive). Fixed for the life of the set.
    pub fn capacity(&self) -> u64 {
        self.max_offset
    }

    /// Length of the backing buffer in bytes.
    pub fn byte_len(&self) -> usize {
        (self.max_offset / 8 + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.max_pos().is_none()
    }

    /// Set offsets below `min(max_pos() + 1, PREVIEW_LIMIT)`, e.g. `[3 10 15]`.
    ///
    /// Diagnostic only: larger offsets are never listed.
    pub fn preview(&self) -> String {
        #[cfg(feature = "profiling")]
        let span = info_span!("bitset.preview");
        #[cfg(feature = "profiling")]
        let _guard = span.enter();

        let inner = self.inner.read();
        let end = match inner.high_water {
            Some(max) => (max + 1).min(PREVIEW_LIMIT),
            None => return "[]".to_string(),
        };

        let mut offsets = Vec::new();
        let mut from = 0;
        while let Some(offset) = search::next_set_bit(&inner.storage, from, end - 1) {
            offsets.push(offset.to_string());
            from = offset + 1;
        }
        drop(inner);

        format!("[{}]", offsets.join(" "))
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.preview())
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitSet")
            .field("capacity", &self.max_offset)
            .field("max_pos", &self.max_pos())
            .field("preview", &self.preview())
            .finish()
    }
}
