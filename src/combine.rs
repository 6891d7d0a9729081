//! Public combinators.
//!
//! The multi-value combinators hash each argument to a 32-bit code (see
//! [`member`](crate::member)), pack the codes into a stack [`Workspace`] in
//! argument order, and run the mixer over exactly `arity * 4` bytes. The text
//! and byte combinators feed the mixer directly with a caller-supplied seed.
//!
//! Every entry point returns the mixer's 32 bits reinterpreted as `i32`.

use crate::config::{HashConfig, SeedPolicy};
use crate::error::{HashError, HashResult};
use crate::member::MemberHash;
use crate::murmur3::murmur3_32_signed;
use crate::seed::process_seed;
use crate::tracing_compat::debug;
use crate::workspace::Workspace;

/// Multi-value combinators bound to one seed.
///
/// # Example
///
/// ```
/// use hashmix::Combiner;
///
/// let a = Combiner::new(1);
/// let b = Combiner::new(1);
/// assert_eq!(a.hash4('x', 2u16, "three", [4u8]), b.hash4('x', 2u16, "three", [4u8]));
///
/// // The default combiner uses the process seed.
/// assert_eq!(Combiner::default().seed(), hashmix::process_seed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combiner {
    seed: u32,
}

impl Combiner {
    /// Combiner with an explicit seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Combiner bound to the process seed.
    #[must_use]
    pub fn process() -> Self {
        Self::new(process_seed())
    }

    /// Builds a combiner from configuration.
    #[must_use]
    pub fn from_config(config: &HashConfig) -> Self {
        match config.seed {
            SeedPolicy::Process => {
                debug!(policy = "process", "combiner configured");
                Self::process()
            }
            SeedPolicy::Fixed(seed) => {
                debug!(policy = "fixed", "combiner configured");
                Self::new(seed)
            }
        }
    }

    /// The seed this combiner mixes with.
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.seed
    }

    /// Combines precomputed member codes, in order.
    ///
    /// `N` is bounded by [`WORKSPACE_SLOTS`](crate::WORKSPACE_SLOTS) at compile
    /// time.
    #[inline]
    #[must_use]
    pub fn combine_codes<const N: usize>(&self, codes: [u32; N]) -> i32 {
        let workspace = Workspace::pack(codes);
        murmur3_32_signed(workspace.as_bytes(), self.seed)
    }

    /// Combines three values.
    #[must_use]
    pub fn hash3<A, B, C>(&self, a: A, b: B, c: C) -> i32
    where
        A: MemberHash,
        B: MemberHash,
        C: MemberHash,
    {
        self.combine_codes([a.member_hash(), b.member_hash(), c.member_hash()])
    }

    /// Combines four values.
    #[must_use]
    pub fn hash4<A, B, C, D>(&self, a: A, b: B, c: C, d: D) -> i32
    where
        A: MemberHash,
        B: MemberHash,
        C: MemberHash,
        D: MemberHash,
    {
        self.combine_codes([
            a.member_hash(),
            b.member_hash(),
            c.member_hash(),
            d.member_hash(),
        ])
    }

    /// Combines seven values.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
    pub fn hash7<A, B, C, D, E, F, G>(&self, a: A, b: B, c: C, d: D, e: E, f: F, g: G) -> i32
    where
        A: MemberHash,
        B: MemberHash,
        C: MemberHash,
        D: MemberHash,
        E: MemberHash,
        F: MemberHash,
        G: MemberHash,
    {
        self.combine_codes([
            a.member_hash(),
            b.member_hash(),
            c.member_hash(),
            d.member_hash(),
            e.member_hash(),
            f.member_hash(),
            g.member_hash(),
        ])
    }
}

impl Default for Combiner {
    fn default() -> Self {
        Self::process()
    }
}

/// Combines three values with the process seed.
///
/// ```
/// let h = hashmix::hash3(1, "two", 3.5f32.to_bits());
/// assert_eq!(h, hashmix::hash3(1, "two", 3.5f32.to_bits()));
/// ```
#[must_use]
pub fn hash3<A, B, C>(a: A, b: B, c: C) -> i32
where
    A: MemberHash,
    B: MemberHash,
    C: MemberHash,
{
    Combiner::process().hash3(a, b, c)
}

/// Combines four values with the process seed.
#[must_use]
pub fn hash4<A, B, C, D>(a: A, b: B, c: C, d: D) -> i32
where
    A: MemberHash,
    B: MemberHash,
    C: MemberHash,
    D: MemberHash,
{
    Combiner::process().hash4(a, b, c, d)
}

/// Combines seven values with the process seed.
#[must_use]
#[allow(clippy::too_many_arguments, clippy::many_single_char_names)]
pub fn hash7<A, B, C, D, E, F, G>(a: A, b: B, c: C, d: D, e: E, f: F, g: G) -> i32
where
    A: MemberHash,
    B: MemberHash,
    C: MemberHash,
    D: MemberHash,
    E: MemberHash,
    F: MemberHash,
    G: MemberHash,
{
    Combiner::process().hash7(a, b, c, d, e, f, g)
}

/// Combines precomputed member codes with the process seed.
#[must_use]
pub fn combine_codes<const N: usize>(codes: [u32; N]) -> i32 {
    Combiner::process().combine_codes(codes)
}

/// Hashes the UTF-8 bytes of `text` with `seed`.
///
/// ```
/// assert_eq!(hashmix::hash_text("", 0), 0);
/// assert_eq!(hashmix::hash_text("hello world", 0), 0x5e92_8f0f);
/// ```
#[must_use]
pub const fn hash_text(text: &str, seed: i32) -> i32 {
    murmur3_32_signed(text.as_bytes(), seed.cast_unsigned())
}

/// Hashes the first `length` bytes of `buffer` with `seed`.
///
/// Fails with [`HashError::LengthOutOfRange`] if `length > buffer.len()`.
///
/// ```
/// assert_eq!(hashmix::hash_bytes(&[], 0, 0), Ok(0));
/// assert_eq!(
///     hashmix::hash_bytes(b"hello world!!", 11, 0),
///     Ok(hashmix::hash_text("hello world", 0)),
/// );
/// assert!(hashmix::hash_bytes(b"abc", 4, 0).is_err());
/// ```
pub fn hash_bytes(buffer: &[u8], length: usize, seed: i32) -> HashResult<i32> {
    let prefix = buffer
        .get(..length)
        .ok_or_else(|| HashError::length_out_of_range(length, buffer.len()))?;
    Ok(murmur3_32_signed(prefix, seed.cast_unsigned()))
}
