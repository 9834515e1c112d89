#![forbid(unsafe_code)]

//! Core: geometry, configuration, identifiers, errors, and logging.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id;
pub mod logging;

pub use color::Color;
pub use config::{BadgeMetrics, NavBarConfig, NavBarConfigBuilder};
pub use error::{ConfigurationError, Error, InvalidIdError, Result};
pub use geometry::{Point, Rect, RectF, Size};
pub use id::ItemId;

// Re-export the tracing macro at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::debug;
