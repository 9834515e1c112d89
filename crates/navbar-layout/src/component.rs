#![forbid(unsafe_code)]

//! The measure/layout capability shared by every child of the bar.

use crate::MeasureSpec;
use navbar_core::geometry::{Rect, Size};

/// What a child is to the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotRole {
    /// A navigable item.
    Item,
    /// The center action slot.
    Action,
    /// An empty slot keeping the action slot centered.
    Placeholder,
    /// Anything else. The bar refuses these.
    Other(&'static str),
}

impl SlotRole {
    /// Whether the bar knows how to lay out this role.
    #[inline]
    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Item => "Item",
            Self::Action => "Action",
            Self::Placeholder => "Placeholder",
            Self::Other(name) => name,
        }
    }
}

/// A child that can be measured and placed.
///
/// The engine calls [`measure`](Component::measure) once per pass, then
/// [`layout`](Component::layout) with the final rectangle. Hidden children
/// are skipped by both.
pub trait Component {
    /// Role of this child in the row.
    fn role(&self) -> SlotRole;

    /// Whether this child takes part in layout.
    fn is_visible(&self) -> bool {
        true
    }

    /// Measure under the given constraints and remember the result.
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Size recorded by the last [`measure`](Component::measure).
    fn measured_size(&self) -> Size;

    /// Accept the final placement.
    fn layout(&mut self, rect: Rect);
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn role(&self) -> SlotRole {
        (**self).role()
    }

    fn is_visible(&self) -> bool {
        (**self).is_visible()
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        (**self).measure(width, height)
    }

    fn measured_size(&self) -> Size {
        (**self).measured_size()
    }

    fn layout(&mut self, rect: Rect) {
        (**self).layout(rect)
    }
}

/// Zero-content slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placeholder {
    measured: Size,
    rect: Rect,
}

impl Placeholder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last placement.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Component for Placeholder {
    fn role(&self) -> SlotRole {
        SlotRole::Placeholder
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.measured = Size::new(width.resolve(0), height.resolve(0));
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

type Measurer = Box<dyn FnMut(MeasureSpec, MeasureSpec) -> Size>;

/// The center action slot.
///
/// Its natural size comes from a host-supplied measurement callback; the
/// component only resolves that size against the engine's constraints.
pub struct ActionSlotComponent {
    measurer: Measurer,
    visible: bool,
    measured: Size,
    rect: Rect,
}

impl ActionSlotComponent {
    /// Create an action slot backed by a host measurement callback.
    pub fn new(measurer: impl FnMut(MeasureSpec, MeasureSpec) -> Size + 'static) -> Self {
        Self {
            measurer: Box::new(measurer),
            visible: true,
            measured: Size::ZERO,
            rect: Rect::default(),
        }
    }

    /// Create an action slot whose content has a fixed natural size.
    pub fn with_natural_size(natural: Size) -> Self {
        Self::new(move |_, _| natural)
    }

    /// Show or hide the slot.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Last placement.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl core::fmt::Debug for ActionSlotComponent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ActionSlotComponent")
            .field("visible", &self.visible)
            .field("measured", &self.measured)
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}

impl Component for ActionSlotComponent {
    fn role(&self) -> SlotRole {
        SlotRole::Action
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let natural = (self.measurer)(width, height);
        self.measured = Size::new(width.resolve(natural.width), height.resolve(natural.height));
        self.measured
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn layout(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_takes_exact_constraints() {
        let mut p = Placeholder::new();
        let size = p.measure(MeasureSpec::Exactly(40), MeasureSpec::Exactly(56));
        assert_eq!(size, Size::new(40, 56));
        assert_eq!(p.measured_size(), size);
        assert_eq!(p.role(), SlotRole::Placeholder);
    }

    #[test]
    fn action_slot_resolves_natural_size() {
        let mut slot = ActionSlotComponent::with_natural_size(Size::new(64, 72));
        let size = slot.measure(MeasureSpec::Exactly(80), MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(80, 72));
        let size = slot.measure(MeasureSpec::Exactly(80), MeasureSpec::Exactly(56));
        assert_eq!(size, Size::new(80, 56));
    }

    #[test]
    fn action_slot_sees_constraints() {
        let mut slot = ActionSlotComponent::new(|w, _| match w {
            MeasureSpec::Exactly(w) => Size::new(w, w),
            _ => Size::ZERO,
        });
        let size = slot.measure(MeasureSpec::Exactly(48), MeasureSpec::Unspecified);
        assert_eq!(size, Size::new(48, 48));
    }

    #[test]
    fn roles_are_recognized() {
        assert!(SlotRole::Item.is_recognized());
        assert!(SlotRole::Action.is_recognized());
        assert!(SlotRole::Placeholder.is_recognized());
        assert!(!SlotRole::Other("Overlay").is_recognized());
        assert_eq!(SlotRole::Other("Overlay").name(), "Overlay");
    }

    #[test]
    fn boxed_component_delegates() {
        let mut boxed: Box<dyn Component> = Box::new(Placeholder::new());
        boxed.measure(MeasureSpec::Exactly(3), MeasureSpec::Exactly(4));
        boxed.layout(Rect::new(1, 2, 3, 4));
        assert_eq!(boxed.measured_size(), Size::new(3, 4));
        assert_eq!(boxed.role(), SlotRole::Placeholder);
    }
}
