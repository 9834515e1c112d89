#![forbid(unsafe_code)]

//! Debug event logging.
//!
//! `debug!` is the `tracing` macro when the `tracing` feature is enabled.
//! Without the feature it expands to nothing, so layout and widget call
//! sites compile unchanged. Spans are opened with `tracing` directly behind
//! `#[cfg(feature = "tracing")]`.

#[cfg(feature = "tracing")]
pub use tracing::debug;

/// No-op debug macro when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
