//! Hashmix: seeded MurmurHash3 (x86, 32-bit) combinators.
//!
//! # Overview
//!
//! Hashmix folds a handful of heterogeneous values, a UTF-8 string, or a raw
//! byte range into one well-distributed 32-bit integer. It is meant for
//! deduplication keys, composite `GetHashCode`-style equality hashes, and
//! bucket selection. It is **not** a cryptographic hash.
//!
//! # Entry Points
//!
//! - [`hash3`], [`hash4`], [`hash7`]: combine 3, 4 or 7 values with the
//!   process seed
//! - [`hash_text`]: hash UTF-8 text with an explicit seed
//! - [`hash_bytes`]: hash a prefix of a byte buffer with an explicit seed
//! - [`Combiner`]: the same combinators bound to a pinned seed
//! - [`murmur3_32`]: the raw mixer, usable in `const` context
//!
//! # Module Structure
//!
//! - [`murmur3`]: the core mixer
//! - [`workspace`]: fixed 8-slot scratch buffer for multi-value inputs
//! - [`member`]: per-value hash code convention
//! - [`combine`]: public combinators
//! - [`seed`]: once-initialized process seed and seed sources
//! - [`config`]: seed policy configuration
//! - [`error`](mod@error): error types
//! - [`tracing_compat`]: optional tracing integration (requires `tracing-integration` feature)
//!
//! # Example
//!
//! ```
//! use hashmix::{hash_text, Combiner};
//!
//! let pinned = Combiner::new(42);
//! assert_eq!(pinned.hash3(1u8, "two", 3.0f64.to_bits()), pinned.hash3(1u8, "two", 3.0f64.to_bits()));
//!
//! assert_eq!(hash_text("", 0), 0);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod combine;
pub mod config;
pub mod error;
pub mod member;
pub mod murmur3;
pub mod seed;
pub mod tracing_compat;
pub mod workspace;

// ── Test-only modules ───────────────────────────────────────────────────
#[cfg(any(test, feature = "test-internals"))]
pub mod test_utils;

pub use combine::{Combiner, combine_codes, hash_bytes, hash_text, hash3, hash4, hash7};
pub use config::{HashConfig, SeedPolicy};
pub use error::{ErrorKind, HashError, HashResult};
pub use member::{ByAddress, MemberHash, MemberHasher};
pub use murmur3::{fmix32, murmur3_32};
pub use seed::{DEFAULT_SEED, FixedSeed, OsSeed, SeedCell, SeedSource, process_seed};
pub use workspace::{WORKSPACE_SLOTS, Workspace};
