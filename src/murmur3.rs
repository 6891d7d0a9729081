//! MurmurHash3, x86 32-bit variant.
//!
//! The mixer is a `const fn` over a byte slice and is usable in constant
//! expressions. All arithmetic wraps modulo 2^32.
//!
//! ```
//! use hashmix::murmur3_32;
//!
//! const EMPTY: u32 = murmur3_32(b"", 0);
//! assert_eq!(EMPTY, 0);
//! assert_eq!(murmur3_32(b"hello world", 0), 0x5e92_8f0f);
//! ```

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const C3: u32 = 0xe654_6b64;
const C4: u32 = 0x85eb_ca6b;
const C5: u32 = 0xc2b2_ae35;

/// Bytes consumed per mixing round.
pub const BLOCK_SIZE: usize = 4;

/// Scrambles one input word before it is folded into the state.
#[inline]
const fn scramble(k1: u32) -> u32 {
    k1.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Final avalanche: forces every input bit to affect every output bit.
///
/// This is the finalizer of [`murmur3_32`] without the length fold, exposed
/// for callers that already hold a 32-bit state (e.g. a bucket index mixer).
///
/// ```
/// use hashmix::fmix32;
///
/// assert_eq!(fmix32(0), 0);
/// assert_ne!(fmix32(1), 1);
/// ```
#[inline]
#[must_use]
pub const fn fmix32(mut h1: u32) -> u32 {
    h1 ^= h1 >> 16;
    h1 = h1.wrapping_mul(C4);
    h1 ^= h1 >> 13;
    h1 = h1.wrapping_mul(C5);
    h1 ^= h1 >> 16;
    h1
}

/// Computes the MurmurHash3 x86-32 hash of `data` with `seed`.
///
/// Complete 4-byte blocks are read little-endian and mixed into the state;
/// the 0-3 trailing bytes are scrambled and xored in without a mixing round;
/// the length is folded in before the final avalanche.
#[must_use]
pub const fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut h1 = seed;
    let nblocks = data.len() / BLOCK_SIZE;

    let mut i = 0;
    while i < nblocks {
        let at = i * BLOCK_SIZE;
        let k1 = u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);
        h1 ^= scramble(k1);
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(C3);
        i += 1;
    }

    let tail = nblocks * BLOCK_SIZE;
    let k1 = match data.len() - tail {
        3 => u32::from_le_bytes([data[tail], data[tail + 1], data[tail + 2], 0]),
        2 => u32::from_le_bytes([data[tail], data[tail + 1], 0, 0]),
        1 => u32::from_le_bytes([data[tail], 0, 0, 0]),
        _ => 0,
    };
    // scramble(0) == 0, so an absent tail leaves the state untouched.
    h1 ^= scramble(k1);

    // The reference folds the length in modulo 2^32.
    #[allow(clippy::cast_possible_truncation)]
    let len = data.len() as u32;
    fmix32(h1 ^ len)
}

/// Signed view of [`murmur3_32`], matching the combinators' return type.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn murmur3_32_signed(data: &[u8], seed: u32) -> i32 {
    murmur3_32(data, seed) as i32
}
