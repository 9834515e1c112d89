#![forbid(unsafe_code)]

//! Outline composition for the bar.
//!
//! - [`Path`] - move/line/cubic/close commands with bounds, convexity and
//!   containment queries
//! - [`ShapeComposer`] - turns a [`LayoutResult`](navbar_layout::LayoutResult)
//!   into an [`Outline`]
//! - [`Silhouette`] - the outline as a shadow caster, degraded to its bounds
//!   for backends without concave support

pub mod path;
pub mod shape;

pub use path::{Path, PathCommand};
pub use shape::{Outline, ShapeComposer, Silhouette, SilhouetteShape};
