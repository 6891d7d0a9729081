//! Common utilities and fixtures for hashing integration tests.

#![allow(dead_code)]

pub use hashmix::test_utils::init_test_logging;

/// SMHasher key set: `key[i] = i` for `i in 0..256`.
#[must_use]
pub fn smhasher_keys() -> Vec<u8> {
    (0u8..=255).collect()
}

/// Bytes `0, 1, 2, ...` of the given length, wrapping at 256.
#[must_use]
pub fn counting_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

/// Hashes `data` with the `murmur3` crate.
#[must_use]
pub fn reference_murmur3_32(data: &[u8], seed: u32) -> u32 {
    murmur3::murmur3_32(&mut std::io::Cursor::new(data), seed).expect("in-memory read")
}
