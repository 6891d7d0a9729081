//! Optional tracing integration.
//!
//! With the `tracing-integration` feature the `tracing` macros are re-exported
//! unchanged. Without it the same names expand to nothing, so call sites do not
//! need their own `cfg` attributes.

#[cfg(feature = "tracing-integration")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing-integration"))]
mod noop {
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }
    // `warn` collides with the builtin lint attribute, so it is defined under
    // another name and renamed on export.
    macro_rules! warn_ {
        ($($arg:tt)*) => {};
    }

    pub(crate) use debug;
    pub(crate) use warn_ as warn;
}

#[cfg(not(feature = "tracing-integration"))]
pub(crate) use noop::{debug, warn};
