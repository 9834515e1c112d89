#![forbid(unsafe_code)]

//! Item state, tints and the bar's style bundle.

use bitflags::bitflags;
use navbar_core::color::Color;
use navbar_core::config::NavBarConfig;
use navbar_core::error::{Result, non_negative};
use navbar_core::geometry::Rect;
use navbar_layout::AttachMode;

use crate::drawable::{Drawable, Surface};

bitflags! {
    /// Drawable state of a navigation item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ItemState: u8 {
        /// Selected and checkable.
        const CHECKED  = 0b0000_0001;
        /// Accepts activation.
        const ENABLED  = 0b0000_0010;
        /// Currently selected, checkable or not.
        const SELECTED = 0b0000_0100;
    }
}

/// Per-state colors for icons and labels.
///
/// Resolution order: disabled, then checked, then default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TintList {
    default: Color,
    checked: Color,
    disabled: Color,
}

impl TintList {
    /// The same color in every state.
    #[must_use]
    pub const fn uniform(color: Color) -> Self {
        Self {
            default: color,
            checked: color,
            disabled: color,
        }
    }

    #[must_use]
    pub const fn new(default: Color, checked: Color, disabled: Color) -> Self {
        Self {
            default,
            checked,
            disabled,
        }
    }

    pub fn color_for(&self, state: ItemState) -> Color {
        if !state.contains(ItemState::ENABLED) {
            self.disabled
        } else if state.contains(ItemState::CHECKED) {
            self.checked
        } else {
            self.default
        }
    }
}

impl Default for TintList {
    fn default() -> Self {
        Self::new(
            Color::rgb(0x75, 0x75, 0x75),
            Color::rgb(0x62, 0x00, 0xee),
            Color::rgba(0x75, 0x75, 0x75, 0x61),
        )
    }
}

/// Whether item labels are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelVisibility {
    #[default]
    Always,
    Never,
}

/// Background drawn behind each item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemBackground {
    /// A flat fill.
    Solid(Color),
    /// Press feedback rendered by the host.
    Ripple { color: Color, unbounded: bool },
}

impl Drawable for ItemBackground {
    fn draw(&self, surface: &mut dyn Surface, bounds: Rect) {
        match *self {
            Self::Solid(color) => surface.fill_rect(bounds.to_f32(), color),
            Self::Ripple { color, unbounded } => surface.draw_ripple(bounds, color, unbounded),
        }
    }
}

/// Style bundle applied to the bar and its items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle {
    pub(crate) background: Color,
    pub(crate) icon_size: i32,
    pub(crate) icon_tint: TintList,
    pub(crate) label_tint: TintList,
    pub(crate) content_spacing: i32,
    pub(crate) item_background: Option<ItemBackground>,
    pub(crate) label_visibility: LabelVisibility,
    pub(crate) attach_mode: AttachMode,
    pub(crate) hump_padding: i32,
    pub(crate) elevation: f32,
}

impl BarStyle {
    /// Defaults seeded from the configured dimensions.
    #[must_use]
    pub fn from_config(config: &NavBarConfig) -> Self {
        Self {
            background: Color::WHITE,
            icon_size: config.icon_size(),
            icon_tint: TintList::default(),
            label_tint: TintList::default(),
            content_spacing: config.content_spacing(),
            item_background: None,
            label_visibility: LabelVisibility::Always,
            attach_mode: AttachMode::Embed,
            hump_padding: config.hump_padding(),
            elevation: 8.0,
        }
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// # Errors
    ///
    /// Rejects a negative size.
    pub fn icon_size(mut self, px: i32) -> Result<Self> {
        self.icon_size = non_negative("icon_size", px)?;
        Ok(self)
    }

    #[must_use]
    pub fn icon_tint(mut self, tint: TintList) -> Self {
        self.icon_tint = tint;
        self
    }

    #[must_use]
    pub fn label_tint(mut self, tint: TintList) -> Self {
        self.label_tint = tint;
        self
    }

    /// # Errors
    ///
    /// Rejects negative spacing.
    pub fn content_spacing(mut self, px: i32) -> Result<Self> {
        self.content_spacing = non_negative("content_spacing", px)?;
        Ok(self)
    }

    #[must_use]
    pub fn item_background(mut self, background: Option<ItemBackground>) -> Self {
        self.item_background = background;
        self
    }

    #[must_use]
    pub fn label_visibility(mut self, visibility: LabelVisibility) -> Self {
        self.label_visibility = visibility;
        self
    }

    #[must_use]
    pub fn attach_mode(mut self, mode: AttachMode) -> Self {
        self.attach_mode = mode;
        self
    }

    /// # Errors
    ///
    /// Rejects negative padding.
    pub fn hump_padding(mut self, px: i32) -> Result<Self> {
        self.hump_padding = non_negative("hump_padding", px)?;
        Ok(self)
    }

    #[must_use]
    pub fn elevation(mut self, elevation: f32) -> Self {
        self.elevation = elevation.max(0.0);
        self
    }

    #[inline]
    pub fn background_color(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn icon_size_px(&self) -> i32 {
        self.icon_size
    }

    #[inline]
    pub fn content_spacing_px(&self) -> i32 {
        self.content_spacing
    }

    #[inline]
    pub fn label_visibility_mode(&self) -> LabelVisibility {
        self.label_visibility
    }

    #[inline]
    pub fn attach_mode_value(&self) -> AttachMode {
        self.attach_mode
    }

    #[inline]
    pub fn hump_padding_px(&self) -> i32 {
        self.hump_padding
    }

    #[inline]
    pub fn elevation_value(&self) -> f32 {
        self.elevation
    }
}

impl Default for BarStyle {
    fn default() -> Self {
        Self::from_config(&NavBarConfig::default())
    }
}
