//! Seed policy configuration.
//!
//! A [`HashConfig`] decides which seed a [`Combiner`](crate::Combiner) uses.
//! It can be built in code, read from the `HASHMIX_SEED` environment
//! variable, or (with the `config-file` feature) parsed from TOML:
//!
//! ```toml
//! seed = { fixed = 42 }
//! ```

use crate::error::{HashError, HashResult};
use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`HashConfig::from_env`].
pub const SEED_ENV_VAR: &str = "HASHMIX_SEED";

/// Where a combiner's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Use the once-drawn process seed.
    #[default]
    Process,
    /// Use this seed.
    Fixed(u32),
}

/// Configuration for building a [`Combiner`](crate::Combiner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Seed policy.
    pub seed: SeedPolicy,
}

impl HashConfig {
    /// Configuration pinned to `seed`.
    #[must_use]
    pub const fn fixed(seed: u32) -> Self {
        Self {
            seed: SeedPolicy::Fixed(seed),
        }
    }

    /// Reads [`SEED_ENV_VAR`]. Unset or empty means [`SeedPolicy::Process`].
    pub fn from_env() -> HashResult<Self> {
        match std::env::var(SEED_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Ok(Self::fixed(parse_seed(&raw)?)),
            _ => Ok(Self::default()),
        }
    }

    /// Parses a TOML document.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(text: &str) -> HashResult<Self> {
        toml::from_str(text).map_err(|e| HashError::InvalidConfig(e.to_string()))
    }
}

/// Parses a seed written as decimal or `0x`-prefixed hex.
///
/// ```
/// use hashmix::config::parse_seed;
///
/// assert_eq!(parse_seed("42").unwrap(), 42);
/// assert_eq!(parse_seed("0x9747b28c").unwrap(), 0x9747_b28c);
/// assert!(parse_seed("-1").is_err());
/// ```
pub fn parse_seed(raw: &str) -> HashResult<u32> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(&hex.replace('_', ""), 16),
        None => trimmed.replace('_', "").parse::<u32>(),
    };
    parsed.map_err(|_| HashError::invalid_seed(raw))
}
