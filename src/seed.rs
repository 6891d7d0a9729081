//! Process seed and seed sources.
//!
//! The default-seeded combinators read one 32-bit seed per process. It is
//! drawn from OS entropy on first use and never changes afterwards; a
//! [`OnceLock`] guarantees that threads racing on first use all observe the
//! same value. Explicit-seed entry points never touch it.
//!
//! If the entropy source is unavailable the seed falls back to
//! [`DEFAULT_SEED`] instead of failing.

use crate::tracing_compat::{debug, warn};
use std::sync::OnceLock;

/// Seed used when the entropy source cannot produce one.
pub const DEFAULT_SEED: u32 = 0x9747_b28c;

/// Core trait for seed providers.
pub trait SeedSource: Send + Sync + 'static {
    /// Produces a seed, or `None` if the source is unavailable.
    fn try_seed(&self) -> Option<u32>;

    /// Stable identifier for tracing and diagnostics.
    fn source_id(&self) -> &'static str;
}

/// OS-backed seed source for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsSeed;

impl SeedSource for OsSeed {
    fn try_seed(&self) -> Option<u32> {
        let mut buf = [0u8; 4];
        getrandom::fill(&mut buf).ok()?;
        Some(u32::from_le_bytes(buf))
    }

    fn source_id(&self) -> &'static str {
        "os"
    }
}

/// Fixed seed source for reproducible runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn try_seed(&self) -> Option<u32> {
        Some(self.0)
    }

    fn source_id(&self) -> &'static str {
        "fixed"
    }
}

/// A seed slot that is initialized at most once.
///
/// The process seed is a `static SeedCell`; separate cells are useful when a
/// component wants its own once-drawn seed.
///
/// ```
/// use hashmix::{FixedSeed, SeedCell};
///
/// let cell = SeedCell::new();
/// assert_eq!(cell.get(), None);
/// assert_eq!(cell.get_or_init_from(&FixedSeed(7)), 7);
/// // Later sources are ignored.
/// assert_eq!(cell.get_or_init_from(&FixedSeed(8)), 7);
/// ```
#[derive(Debug, Default)]
pub struct SeedCell {
    cell: OnceLock<u32>,
}

impl SeedCell {
    /// Creates an empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the seed if it has been initialized.
    #[must_use]
    pub fn get(&self) -> Option<u32> {
        self.cell.get().copied()
    }

    /// Returns the seed, drawing it from `source` if this is the first call.
    ///
    /// Concurrent first calls run at most one draw; every caller gets the
    /// winning value.
    pub fn get_or_init_from(&self, source: &dyn SeedSource) -> u32 {
        *self.cell.get_or_init(|| draw(source))
    }

    /// Returns the seed, drawing it from OS entropy if this is the first call.
    pub fn get_or_init(&self) -> u32 {
        self.get_or_init_from(&OsSeed)
    }
}

fn draw(source: &dyn SeedSource) -> u32 {
    source.try_seed().map_or_else(
        || {
            warn!(
                source = source.source_id(),
                "seed source unavailable, using fallback seed"
            );
            DEFAULT_SEED
        },
        |seed| {
            debug!(source = source.source_id(), "seed initialized");
            seed
        },
    )
}

static PROCESS_SEED: SeedCell = SeedCell::new();

/// The process-wide seed used by default-seeded combinators.
///
/// ```
/// let a = hashmix::process_seed();
/// let b = hashmix::process_seed();
/// assert_eq!(a, b);
/// ```
pub fn process_seed() -> u32 {
    PROCESS_SEED.get_or_init()
}
