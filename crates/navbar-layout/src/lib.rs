#![forbid(unsafe_code)]

//! Layout for a single row of navigation slots.
//!
//! - [`Component`] - the measure/layout capability every child implements
//! - [`SlotPlan`] - where the action slot and placeholder go in the row
//! - [`LayoutEngine`] - one measurement pass producing a [`LayoutResult`]
//!
//! ```
//! use navbar_core::NavBarConfig;
//! use navbar_layout::{Component, LayoutEngine, MeasureSpec, Rect, Size, SlotRole};
//!
//! #[derive(Default)]
//! struct Tab(Size);
//!
//! impl Component for Tab {
//!     fn role(&self) -> SlotRole { SlotRole::Item }
//!     fn measure(&mut self, w: MeasureSpec, h: MeasureSpec) -> Size {
//!         self.0 = Size::new(w.resolve(0), h.resolve(0));
//!         self.0
//!     }
//!     fn measured_size(&self) -> Size { self.0 }
//!     fn layout(&mut self, _rect: Rect) {}
//! }
//!
//! let engine = LayoutEngine::new(NavBarConfig::default());
//! let mut row = vec![Tab::default(), Tab::default(), Tab::default()];
//! let result = engine.measure(100, &mut row).unwrap();
//! assert_eq!(result.bar_width, 99);
//! assert_eq!(result.child_rects[1].x, 33);
//! ```

pub mod component;
pub mod engine;
pub mod slots;

pub use component::{ActionSlotComponent, Component, Placeholder, SlotRole};
pub use engine::{ActionSlot, LayoutEngine, LayoutResult};
pub use navbar_core::geometry::{Rect, Size};
pub use slots::{SlotKind, SlotPlan};

/// Constraint passed to a component along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasureSpec {
    /// The component must be exactly this size.
    Exactly(i32),
    /// The component may be at most this size.
    AtMost(i32),
    /// No constraint; the component reports its natural size.
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a natural size against this constraint.
    ///
    /// ```
    /// use navbar_layout::MeasureSpec;
    ///
    /// assert_eq!(MeasureSpec::Exactly(56).resolve(80), 56);
    /// assert_eq!(MeasureSpec::AtMost(56).resolve(80), 56);
    /// assert_eq!(MeasureSpec::AtMost(56).resolve(40), 40);
    /// assert_eq!(MeasureSpec::Unspecified.resolve(80), 80);
    /// ```
    #[inline]
    pub fn resolve(self, natural: i32) -> i32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(max) => natural.min(max),
            Self::Unspecified => natural,
        }
        .max(0)
    }
}

/// How the action slot attaches to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttachMode {
    /// Constrained to the item height, regardless of its content.
    #[default]
    Embed,
    /// The bar bulges when the action slot is taller than an item.
    Hump,
    /// The action slot overlays the bar without affecting its shape.
    Overlap,
}

/// Horizontal placement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutDirection {
    /// First child on the left.
    #[default]
    Ltr,
    /// First child on the right.
    Rtl,
}
