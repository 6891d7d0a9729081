//! Fixed-capacity scratch buffer for multi-value inputs.
//!
//! A [`Workspace`] lives on the caller's stack for the duration of one hash
//! call. Codes are written little-endian so the byte view, and therefore the
//! hash, is identical on every target. Arity is bounded at compile time:
//! packing more than [`WORKSPACE_SLOTS`] codes is a build error, not a panic.
//!
//! ```
//! use hashmix::{murmur3_32, Workspace};
//!
//! let ws = Workspace::pack([1, 2, 3]);
//! assert_eq!(ws.len(), 12);
//! assert_eq!(&ws.as_bytes()[..4], &[1, 0, 0, 0]);
//! let _ = murmur3_32(ws.as_bytes(), 0);
//! ```

/// Number of 32-bit slots available.
pub const WORKSPACE_SLOTS: usize = 8;

const SLOT_BYTES: usize = 4;
const WORKSPACE_BYTES: usize = WORKSPACE_SLOTS * SLOT_BYTES;

/// Packed per-value hash codes ready for the mixer.
#[derive(Clone, Copy)]
pub struct Workspace {
    bytes: [u8; WORKSPACE_BYTES],
    len: usize,
}

impl Workspace {
    /// Writes `codes` into consecutive slots, in order.
    ///
    /// `N` must not exceed [`WORKSPACE_SLOTS`]; larger arities fail to compile.
    #[inline]
    #[must_use]
    pub const fn pack<const N: usize>(codes: [u32; N]) -> Self {
        const {
            assert!(N <= WORKSPACE_SLOTS, "arity exceeds workspace capacity");
        }
        let mut bytes = [0u8; WORKSPACE_BYTES];
        let mut slot = 0;
        while slot < N {
            let word = codes[slot].to_le_bytes();
            let at = slot * SLOT_BYTES;
            bytes[at] = word[0];
            bytes[at + 1] = word[1];
            bytes[at + 2] = word[2];
            bytes[at + 3] = word[3];
            slot += 1;
        }
        Self {
            bytes,
            len: N * SLOT_BYTES,
        }
    }

    /// The written prefix: exactly `arity * 4` bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of bytes written.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no codes were written.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots written.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.len / SLOT_BYTES
    }
}

impl core::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Workspace")
            .field("arity", &self.arity())
            .field("bytes", &self.as_bytes())
            .finish()
    }
}
