//! Example: treating a BitSet as an ordered set of offsets

use shared_bitset::{BitSet, BitSetError};
use std::sync::Arc;
use std::thread;

fn main() -> Result<(), BitSetError> {
    let bits = Arc::new(BitSet::new(1000)?);
    println!("Capacity: 0..={}", bits.capacity());

    // Writers on separate threads
    let handles: Vec<_> = (0..4u64)
        .map(|id| {
            let bits = Arc::clone(&bits);
            thread::spawn(move || {
                for offset in (id * 7..1000).step_by(97) {
                    bits.set(offset);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    println!("Preview: {bits}");
    println!("Max position: {:?}", bits.max_pos());

    // Walk every set offset in order
    let mut cursor = 0;
    let mut count = 0;
    while let Some(offset) = bits.next(cursor) {
        count += 1;
        cursor = offset + 1;
    }
    println!("{count} offsets set");

    if let Some(max) = bits.max_pos() {
        bits.clear(max);
        println!("Cleared {max}, new max: {:?}", bits.max_pos());
    }

    match BitSet::new(u64::MAX) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Rejected: {err}"),
    }
    Ok(())
}
