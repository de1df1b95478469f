//! Bit scanning over packed byte storage.
//!
//! Bit `n` lives in byte `n / 8` at position `n % 8` (LSB first). Both
//! searches take an inclusive bit range and never index outside `storage`.

/// Bits at or above `bit` within one byte.
#[inline]
fn mask_from(bit: u64) -> u8 {
    0xFF << (bit % 8)
}

/// Bits at or below `bit` within one byte.
#[inline]
fn mask_through(bit: u64) -> u8 {
    0xFF >> (7 - bit % 8)
}

/// Find the lowest set bit in `[lo, hi]`.
///
/// # Returns
/// Offset of the first set bit, or None if the range is empty or all zero
///
/// # Performance
/// O(n / 8) - zero bytes are skipped whole, TZCNT locates the bit
#[inline]
pub(crate) fn next_set_bit(storage: &[u8], lo: u64, hi: u64) -> Option<u64> {
    if lo > hi {
        return None;
    }
    let (first, last) = ((lo / 8) as usize, (hi / 8) as usize);
    let window = storage.get(first..=last)?;

    for (i, &byte) in window.iter().enumerate() {
        let idx = first + i;
        let mut masked = byte;
        if idx == first {
            masked &= mask_from(lo);
        }
        if idx == last {
            masked &= mask_through(hi);
        }
        if masked != 0 {
            return Some(idx as u64 * 8 + u64::from(masked.trailing_zeros()));
        }
    }
    None
}

/// Find the highest set bit in `[lo, hi]`.
///
/// # Returns
/// Offset of the last set bit, or None if the range is empty or all zero
///
/// # Performance
/// O(n / 8) - zero bytes are skipped whole, LZCNT locates the bit
#[inline]
pub(crate) fn prev_set_bit(storage: &[u8], lo: u64, hi: u64) -> Option<u64> {
    if lo > hi {
        return None;
    }
    let (first, last) = ((lo / 8) as usize, (hi / 8) as usize);
    let window = storage.get(first..=last)?;

    for (i, &byte) in window.iter().enumerate().rev() {
        let idx = first + i;
        let mut masked = byte;
        if idx == first {
            masked &= mask_from(lo);
        }
        if idx == last {
            masked &= mask_through(hi);
        }
        if masked != 0 {
            return Some(idx as u64 * 8 + 7 - u64::from(masked.leading_zeros()));
        }
    }
    None
}
