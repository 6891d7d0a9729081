//! Inputs chosen so each 32-bit multiply overflows.
//!
//! Each case is checked against a `u64` rendition that truncates explicitly
//! after every step, and against the reference crate.

use crate::common;
use hashmix::murmur3_32;

const C1: u64 = 0xcc9e_2d51;
const C2: u64 = 0x1b87_3593;
const C3: u64 = 0xe654_6b64;
const C4: u64 = 0x85eb_ca6b;
const C5: u64 = 0xc2b2_ae35;
const MASK: u64 = 0xffff_ffff;

fn rotl(x: u64, r: u32) -> u64 {
    ((x << r) | (x >> (32 - r))) & MASK
}

/// Widened arithmetic with explicit truncation; no wrapping ops involved.
fn widened(data: &[u8], seed: u32) -> u32 {
    let mut h1 = u64::from(seed);
    let mut chunks = data.chunks_exact(4);
    for block in &mut chunks {
        let mut k1 = u64::from(u32::from_le_bytes([block[0], block[1], block[2], block[3]]));
        k1 = (k1 * C1) & MASK;
        k1 = rotl(k1, 15);
        k1 = (k1 * C2) & MASK;
        h1 ^= k1;
        h1 = rotl(h1, 13);
        h1 = (h1 * 5 + C3) & MASK;
    }
    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut k1 = 0u64;
        for (i, byte) in tail.iter().enumerate() {
            k1 |= u64::from(*byte) << (8 * i);
        }
        k1 = (k1 * C1) & MASK;
        k1 = rotl(k1, 15);
        k1 = (k1 * C2) & MASK;
        h1 ^= k1;
    }
    h1 ^= data.len() as u64 & MASK;
    h1 ^= h1 >> 16;
    h1 = (h1 * C4) & MASK;
    h1 ^= h1 >> 13;
    h1 = (h1 * C5) & MASK;
    h1 ^= h1 >> 16;
    h1 as u32
}

fn check(label: &str, data: &[u8], seed: u32) {
    let ours = murmur3_32(data, seed);
    let wide = widened(data, seed);
    let reference = common::reference_murmur3_32(data, seed);
    hashmix::assert_with_log!(ours == wide, label, wide, ours);
    hashmix::assert_with_log!(ours == reference, label, reference, ours);
}

#[test]
fn block_multiplies_overflow() {
    common::init_test_logging();
    hashmix::test_phase!("block_multiplies_overflow");
    // k1 * c1 overflows for any k1 >= 2 and is maximal for all-ones.
    check("all-ones block", &[0xff; 4], 0);
    check("all-ones blocks", &[0xff; 32], 0);
    // h1 * 5 + c3 overflows once the state is above ~0x33333333.
    check("high seed block", &[0x01, 0, 0, 0], 0xffff_fff0);
    check("high seed blocks", &[0x80; 16], 0xdead_beef);
    hashmix::test_complete!("block_multiplies_overflow");
}

#[test]
fn tail_multiplies_overflow() {
    common::init_test_logging();
    hashmix::test_phase!("tail_multiplies_overflow");
    check("one-byte tail", &[0xff], 0);
    check("two-byte tail", &[0xff, 0xff], 0);
    check("three-byte tail", &[0xff, 0xff, 0xff], 0);
    check("block plus tail", &[0xff, 0xff, 0xff, 0xff, 0xfe, 0xfd, 0xfc], 0x8000_0000);
    hashmix::test_complete!("tail_multiplies_overflow");
}

#[test]
fn finalizer_multiplies_overflow() {
    common::init_test_logging();
    hashmix::test_phase!("finalizer_multiplies_overflow");
    for seed in [0xffff_ffff, 0x8000_0001, 0x7fff_ffff, 0x0001_0000] {
        check("empty input with large seed", &[], seed);
    }
    hashmix::test_complete!("finalizer_multiplies_overflow");
}
