#![forbid(unsafe_code)]

//! Bottom navigation bar engine.
//!
//! This crate is the stable surface area: it re-exports the types a host
//! needs from the internal crates and offers a small prelude.
//!
//! ```
//! use navbar::prelude::*;
//!
//! let mut bar = BottomNavigationBar::new(NavBarConfig::default());
//! bar.set_menu(vec![
//!     MenuItemSpec::new(ItemId(1), "Home").icon("home"),
//!     MenuItemSpec::new(ItemId(2), "Search").icon("search"),
//!     MenuItemSpec::new(ItemId(3), "Profile").icon("person"),
//! ])?;
//! bar.set_action_slot(Some(ActionSlotComponent::with_natural_size(Size::new(56, 72))))?;
//! bar.set_attach_mode(AttachMode::Hump);
//!
//! let layout = bar.measure(400)?;
//! assert!(layout.hump_enabled);
//! assert_eq!(layout.item_width, 80);
//!
//! bar.get_or_create_badge(ItemId(2))?.set_number(12);
//! let mut surface = RecordingSurface::default();
//! bar.draw(&mut surface);
//! assert_eq!(surface.texts().last(), Some("12"));
//! # Ok::<(), navbar::Error>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use navbar_core::{
    BadgeMetrics, Color, ConfigurationError, Error, InvalidIdError, ItemId, NavBarConfig,
    NavBarConfigBuilder, Point, Rect, RectF, Result, Size,
};

// --- Layout re-exports -----------------------------------------------------

pub use navbar_layout::{
    ActionSlot, ActionSlotComponent, AttachMode, Component, LayoutDirection, LayoutEngine,
    LayoutResult, MeasureSpec, Placeholder, SlotKind, SlotPlan, SlotRole,
};

// --- Render re-exports -----------------------------------------------------

pub use navbar_render::{Outline, Path, PathCommand, ShapeComposer, Silhouette, SilhouetteShape};

// --- Widget re-exports -----------------------------------------------------

#[cfg(feature = "state-persistence")]
pub use navbar_widgets::PersistError;
pub use navbar_widgets::{
    Badge, BadgeGeometry, BadgeShape, BarState, BarStyle, BottomNavigationBar, CellTextMeasurer,
    DrawOp, Drawable, IconRef, Item, ItemBackground, ItemComponent, ItemState, LabelVisibility,
    MenuItemSpec, MenuModel, RecordingSurface, SelectionController, StateKey, Stateful, Surface,
    TextMeasurer, TextMetrics, TintList, Transition, VersionedState,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ActionSlotComponent, AttachMode, BottomNavigationBar, Color, Error, ItemId,
        LabelVisibility, LayoutDirection, MenuItemSpec, NavBarConfig, Point, Rect,
        RecordingSurface, Result, Size, Stateful, Surface, TintList, Transition,
    };

    pub use crate::{core, layout, render, widgets};
}

pub use navbar_core as core;
pub use navbar_layout as layout;
pub use navbar_render as render;
pub use navbar_widgets as widgets;
