#![forbid(unsafe_code)]

//! The bottom navigation bar widget and its parts.
//!
//! - [`MenuModel`] - validated, ordered menu items
//! - [`SelectionController`] - selected index and listeners
//! - [`ItemComponent`] - one laid-out item with icon and label
//! - [`Badge`] - numeric or dot indicator anchored to an item icon
//! - [`BottomNavigationBar`] - all of the above behind one API
//!
//! Drawing goes through the [`Surface`] trait so any backend can paint the
//! bar; [`RecordingSurface`] records the calls for inspection.
//!
//! # Feature Flags
//!
//! - `tracing`: spans for layout, outline, badge and rebuild work
//! - `state-persistence` (default): JSON encoding of [`BarState`]

pub mod badge;
pub mod bar;
pub mod drawable;
pub mod item;
pub mod menu;
pub mod selection;
pub mod stateful;
pub mod style;
pub mod text;

pub use badge::{Badge, BadgeGeometry, BadgeShape, MAX_BADGE_NUMBER, OVERFLOW_LABEL};
pub use bar::BottomNavigationBar;
pub use drawable::{DrawOp, Drawable, RecordingSurface, Surface};
pub use item::{ItemComponent, TintedIcon};
pub use menu::{IconRef, Item, MenuItemSpec, MenuModel};
pub use selection::{SelectionController, Transition};
#[cfg(feature = "state-persistence")]
pub use stateful::PersistError;
pub use stateful::{BarState, StateKey, Stateful, VersionedState};
pub use style::{BarStyle, ItemBackground, ItemState, LabelVisibility, TintList};
pub use text::{CellTextMeasurer, TextMeasurer, TextMetrics};
