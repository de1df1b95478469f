#![allow(dead_code, unused_imports)]

use shared_bitset::BitSet;
use std::{fs::File, time::Instant};

#[cfg(feature = "profiling")]
use tracing_subscriber::{self, prelude::*};

#[cfg(feature = "profiling")]
#[tracing::instrument(skip(bits))]
fn profile_writes(bits: &BitSet, count: u64) {
    let _span = tracing::info_span!("write_loop", count = count).entered();
    for i in 0..count {
        if i % 100_000 == 0 {
            tracing::info!("Setting bit {}/{}", i, count);
        }
        bits.set(i * 3);
        if i % 2 == 0 {
            bits.clear(i * 3);
        }
    }
}

#[cfg(feature = "profiling")]
#[tracing::instrument(skip(bits))]
fn profile_scans(bits: &BitSet, probes: u64) {
    let stride = bits.capacity() / probes.max(1);
    let mut found = 0u64;
    for i in 0..probes {
        if bits.next(i * stride).is_some() {
            found += 1;
        }
        if bits.prev(i * stride).is_some() {
            found += 1;
        }
    }
    tracing::info!(found, "scan loop complete");
}

#[cfg(feature = "profiling")]
fn main() {
    // Set up tracing subscriber to write to a file
    let file = File::create("trace.json").unwrap();
    let (non_blocking, _guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_max_level(tracing::Level::TRACE)
        .init();

    let bits = BitSet::new(1 << 24).unwrap();
    let _ = BitSet::new(u64::MAX);

    println!("Profiling set/clear...");
    let start = Instant::now();
    profile_writes(&bits, 1_000_000);
    println!("1M writes complete in: {:?}", start.elapsed());

    println!("Profiling neighbor scans...");
    let start = Instant::now();
    profile_scans(&bits, 1_000);
    println!("1k scan pairs complete in: {:?}", start.elapsed());
    println!("Preview: {bits}");
}

#[cfg(not(feature = "profiling"))]
fn main() {
    println!("profile_bitset binary requires --features profiling");
}
