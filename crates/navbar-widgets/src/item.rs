#![forbid(unsafe_code)]

//! A navigation item as a layout child.
//!
//! With labels shown, the icon and label are stacked and centered as one
//! block:
//!
//! ```text
//! content = icon + ascent + spacing
//! icon.top = rect.top + (rect.height - content) / 2
//! baseline = icon.bottom + spacing + ascent
//! ```
//!
//! Without labels the icon is centered both ways.

use std::rc::Rc;

use navbar_core::geometry::{Point, Rect, Size};
use navbar_layout::{Component, MeasureSpec, SlotRole};

use crate::drawable::{Drawable, Surface};
use crate::menu::{IconRef, Item};
use crate::style::{BarStyle, ItemBackground, ItemState, LabelVisibility, TintList};
use crate::text::TextMeasurer;

/// An icon tinted by item state.
#[derive(Debug, Clone, PartialEq)]
pub struct TintedIcon {
    icon: IconRef,
    tint: TintList,
    state: ItemState,
    size: i32,
}

impl TintedIcon {
    pub fn new(icon: IconRef, tint: TintList, size: i32) -> Self {
        Self {
            icon,
            tint,
            state: ItemState::ENABLED,
            size,
        }
    }

    #[inline]
    pub fn icon(&self) -> &IconRef {
        &self.icon
    }
}

impl Drawable for TintedIcon {
    fn draw(&self, surface: &mut dyn Surface, bounds: Rect) {
        surface.draw_icon(&self.icon, bounds, self.tint.color_for(self.state));
    }

    fn set_state(&mut self, state: ItemState) -> bool {
        let changed = self.tint.color_for(self.state) != self.tint.color_for(state);
        self.state = state;
        changed
    }

    fn intrinsic_size(&self) -> Option<Size> {
        Some(Size::new(self.size, self.size))
    }
}

/// Layout child for one menu item.
pub struct ItemComponent {
    item: Item,
    state: ItemState,
    icon: Option<TintedIcon>,
    background: Option<ItemBackground>,
    label_tint: TintList,
    label_visibility: LabelVisibility,
    icon_size: i32,
    content_spacing: i32,
    label_size: f32,
    measurer: Rc<dyn TextMeasurer>,
    measured: Size,
    rect: Rect,
    icon_bounds: Rect,
    label_origin: Option<Point>,
}

impl ItemComponent {
    pub fn new(
        item: Item,
        style: &BarStyle,
        label_size: f32,
        measurer: Rc<dyn TextMeasurer>,
        selected: bool,
    ) -> Self {
        let mut component = Self {
            icon: item
                .icon()
                .map(|icon| TintedIcon::new(icon.clone(), style.icon_tint, style.icon_size)),
            item,
            state: ItemState::empty(),
            background: style.item_background,
            label_tint: style.label_tint,
            label_visibility: style.label_visibility,
            icon_size: style.icon_size,
            content_spacing: style.content_spacing,
            label_size,
            measurer,
            measured: Size::ZERO,
            rect: Rect::default(),
            icon_bounds: Rect::default(),
            label_origin: None,
        };
        component.sync_state(selected);
        component
    }

    #[inline]
    pub fn item(&self) -> &Item {
        &self.item
    }

    #[inline]
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Last placement.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Icon placement; the badge anchor.
    #[inline]
    pub fn icon_bounds(&self) -> Rect {
        self.icon_bounds
    }

    /// Label baseline origin, `None` when labels are hidden.
    #[inline]
    pub fn label_origin(&self) -> Option<Point> {
        self.label_origin
    }

    pub fn is_selected(&self) -> bool {
        self.state.contains(ItemState::SELECTED)
    }

    /// Update the selected flag. Returns `true` if the appearance changed.
    pub fn set_selected(&mut self, selected: bool) -> bool {
        self.sync_state(selected)
    }

    /// Apply a new style bundle; takes effect at the next layout pass.
    pub fn apply_style(&mut self, style: &BarStyle) {
        self.icon = self
            .item
            .icon()
            .map(|icon| TintedIcon::new(icon.clone(), style.icon_tint, style.icon_size));
        self.background = style.item_background;
        self.label_tint = style.label_tint;
        self.label_visibility = style.label_visibility;
        self.icon_size = style.icon_size;
        self.content_spacing = style.content_spacing;
        self.sync_state(self.is_selected());
    }

    pub(crate) fn item_mut(&mut self) -> &mut Item {
        &mut self.item
    }

    /// Recompute the state flags from the item and `selected`.
    pub(crate) fn sync_state(&mut self, selected: bool) -> bool {
        let mut state = ItemState::empty();
        state.set(ItemState::ENABLED, self.item.is_enabled());
        state.set(ItemState::SELECTED, selected);
        state.set(ItemState::CHECKED, selected && self.item.is_checkable());
        let changed = state != self.state;
        self.state = state;
        if let Some(icon) = self.icon.as_mut() {
            icon.set_state(state);
        }
        changed
    }

    fn content_height(&self) -> i32 {
        match self.label_visibility {
            LabelVisibility::Always => {
                let ascent = self.label_ascent();
                self.icon_size + ascent.ceil() as i32 + self.content_spacing
            }
            LabelVisibility::Never => self.icon_size,
        }
    }

    fn label_ascent(&self) -> f32 {
        self.measurer
            .measure(self.item.title(), self.label_size)
            .ascent
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.item.is_visible() || self.rect.is_empty() {
            return;
        }
        if let Some(background) = &self.background {
            background.draw(surface, self.rect);
        }
        if let Some(icon) = &self.icon {
            icon.draw(surface, self.icon_bounds);
        }
        if let Some(origin) = self.label_origin {
            surface.draw_text(
                self.item.title(),
                origin,
                self.label_size,
                self.label_tint.color_for(self.state),
            );
        }
    }
}

impl Component for ItemComponent {
    fn role(&self) -> SlotRole {
        SlotRole::Item
    }

    fn is_visible(&self) -> bool {
        self.item.is_visible()
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.measured = Size::new(
            width.resolve(self.icon_size),
            height.resolve(self.content_height()),
        );
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, rect: Rect) {
        self.rect = rect;
        let icon_left = rect.center_x() - self.icon_size / 2;
        match self.label_visibility {
            LabelVisibility::Always => {
                let ascent = self.label_ascent();
                let icon_top = rect.top() + (rect.height - self.content_height()) / 2;
                self.icon_bounds = Rect::new(icon_left, icon_top, self.icon_size, self.icon_size);
                let baseline =
                    self.icon_bounds.bottom() as f32 + self.content_spacing as f32 + ascent;
                self.label_origin = Some(Point::new(
                    rect.x as f32 + rect.width as f32 / 2.0,
                    baseline,
                ));
            }
            LabelVisibility::Never => {
                let icon_top = rect.top() + (rect.height - self.icon_size) / 2;
                self.icon_bounds = Rect::new(icon_left, icon_top, self.icon_size, self.icon_size);
                self.label_origin = None;
            }
        }
    }
}

impl core::fmt::Debug for ItemComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemComponent")
            .field("item", &self.item)
            .field("state", &self.state)
            .field("rect", &self.rect)
            .field("icon_bounds", &self.icon_bounds)
            .field("label_origin", &self.label_origin)
            .finish_non_exhaustive()
    }
}
