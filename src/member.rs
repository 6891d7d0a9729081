//! Per-value hash codes for the multi-value combinators.
//!
//! Every combinator argument contributes one 32-bit code. The convention is:
//!
//! - **Structural** (default): any `T: Hash` is fed to [`MemberHasher`], a
//!   fixed-seed deterministic hasher, and the 64-bit result is folded to 32
//!   bits. Equal values give equal codes in every run, so the combined hash
//!   depends only on the process seed.
//! - **Identity**: wrap a reference in [`ByAddress`] to hash where the value
//!   lives instead of what it contains.
//! - **Custom**: implement `Hash` for your type, or precompute codes and use
//!   [`combine_codes`](crate::combine_codes).
//!
//! Codes that collide here collide in the combined hash too.

use std::hash::{Hash, Hasher};

/// Deterministic, non-cryptographic hasher for member codes.
///
/// Starts from a fixed state and folds each write in with a multiply-xor
/// step. Every integer write is widened to `u64` in value order, so codes do
/// not depend on the run, the pointer width, or the target byte order.
#[derive(Debug, Clone)]
pub struct MemberHasher {
    state: u64,
}

impl MemberHasher {
    /// Initial state of every member code.
    const SEED: u64 = 0x16f1_1fe8_9b0d_677c;
    /// Odd multiplier applied before each write is folded in.
    const MULTIPLIER: u64 = 0x517c_c1b7_2722_0a95;

    #[inline]
    const fn absorb(&mut self, word: u64) {
        self.state = self.state.wrapping_mul(Self::MULTIPLIER) ^ word;
    }

    /// Returns the finished 64-bit state folded to 32 bits.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn finish_u32(&self) -> u32 {
        let h = self.finish();
        (h ^ (h >> 32)) as u32
    }
}

impl Default for MemberHasher {
    fn default() -> Self {
        Self { state: Self::SEED }
    }
}

impl Hasher for MemberHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.absorb(u64::from(byte));
        }
    }

    fn write_u8(&mut self, i: u8) {
        self.absorb(u64::from(i));
    }

    fn write_u16(&mut self, i: u16) {
        self.absorb(u64::from(i));
    }

    fn write_u32(&mut self, i: u32) {
        self.absorb(u64::from(i));
    }

    fn write_u64(&mut self, i: u64) {
        self.absorb(i);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn write_u128(&mut self, i: u128) {
        self.absorb(i as u64);
        self.absorb((i >> 64) as u64);
    }

    fn write_usize(&mut self, i: usize) {
        self.absorb(i as u64);
    }

    fn finish(&self) -> u64 {
        // 64-bit avalanche finalizer.
        let mut h = self.state;
        h ^= h >> 33;
        h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
        h ^= h >> 33;
        h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        h ^= h >> 33;
        h
    }
}

/// Produces the 32-bit code a value contributes to a combined hash.
///
/// Blanket-implemented for every `T: Hash`, including unsized types such as
/// `str` and slices.
///
/// ```
/// use hashmix::MemberHash;
///
/// assert_eq!("abc".member_hash(), String::from("abc").member_hash());
/// assert_eq!(7u64.member_hash(), 7u64.member_hash());
/// ```
pub trait MemberHash {
    /// Returns this value's 32-bit code.
    fn member_hash(&self) -> u32;
}

impl<T: Hash + ?Sized> MemberHash for T {
    #[inline]
    fn member_hash(&self) -> u32 {
        let mut hasher = MemberHasher::default();
        self.hash(&mut hasher);
        hasher.finish_u32()
    }
}

/// Identity wrapper: hashes and compares by address, not contents.
///
/// ```
/// use hashmix::{ByAddress, MemberHash};
///
/// let a = vec![1, 2, 3];
/// let b = a.clone();
/// assert_eq!(a.member_hash(), b.member_hash());
/// assert_ne!(ByAddress(&a).member_hash(), ByAddress(&b).member_hash());
/// assert_eq!(ByAddress(&a).member_hash(), ByAddress(&a).member_hash());
/// ```
#[derive(Debug)]
pub struct ByAddress<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized> ByAddress<'_, T> {
    fn addr(&self) -> usize {
        std::ptr::from_ref(self.0).cast::<()>().addr()
    }
}

impl<T: ?Sized> Clone for ByAddress<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ByAddress<'_, T> {}

impl<T: ?Sized> PartialEq for ByAddress<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl<T: ?Sized> Eq for ByAddress<'_, T> {}

impl<T: ?Sized> Hash for ByAddress<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.addr());
    }
}
