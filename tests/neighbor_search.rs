use proptest::prelude::*;
use shared_bitset::{BitSet, SCAN_STRIDE_BYTES};

const CAPACITY: u64 = SCAN_STRIDE_BYTES as u64 * 8 * 3;

fn build(offsets: &[u64]) -> BitSet {
    let bits = BitSet::new(CAPACITY).unwrap();
    for &offset in offsets {
        bits.set(offset);
    }
    bits
}

fn brute_prev(bits: &BitSet, offset: u64) -> Option<u64> {
    (0..=offset.min(bits.capacity())).rev().find(|&o| bits.contains(o))
}

fn brute_next(bits: &BitSet, offset: u64) -> Option<u64> {
    (offset..=bits.capacity()).find(|&o| bits.contains(o))
}

proptest! {
    #[test]
    fn prev_matches_brute_force(
        offsets in prop::collection::vec(0..CAPACITY, 0..64),
        probe in 0..CAPACITY + 16,
    ) {
        let bits = build(&offsets);
        prop_assert_eq!(bits.prev(probe), brute_prev(&bits, probe));
    }

    #[test]
    fn next_matches_brute_force(
        offsets in prop::collection::vec(0..CAPACITY, 0..64),
        probe in 0..CAPACITY + 16,
    ) {
        let bits = build(&offsets);
        prop_assert_eq!(bits.next(probe), brute_next(&bits, probe));
    }

    #[test]
    fn max_pos_is_largest_set(offsets in prop::collection::vec(0..CAPACITY, 0..64)) {
        let bits = build(&offsets);
        prop_assert_eq!(bits.max_pos(), offsets.iter().copied().max());
    }

    #[test]
    fn clears_keep_max_pos_exact(
        offsets in prop::collection::vec(0..CAPACITY, 1..64),
        cleared in prop::collection::vec(0..CAPACITY, 0..64),
    ) {
        let bits = build(&offsets);
        for &offset in &cleared {
            prop_assert!(bits.clear(offset));
        }
        prop_assert_eq!(bits.max_pos(), brute_prev(&bits, CAPACITY - 1));
    }

    #[test]
    fn preview_lists_set_offsets_below_limit(offsets in prop::collection::vec(0..200u64, 0..32)) {
        let bits = build(&offsets);
        let mut expected: Vec<u64> = offsets.iter().copied().filter(|&o| o < 100).collect();
        expected.sort_unstable();
        expected.dedup();
        let rendered: Vec<String> = expected.iter().map(u64::to_string).collect();
        prop_assert_eq!(bits.preview(), format!("[{}]", rendered.join(" ")));
    }
}
