#![forbid(unsafe_code)]

//! The measurement pass.
//!
//! # Contract
//!
//! 1. Every visible slot is `floor(available_width / visible_slots)` wide.
//!    The remainder is dropped: the published bar width is the sum of the
//!    measured widths, which may be smaller than the available width.
//! 2. Regular slots are exactly `item_height` tall and bottom-aligned.
//! 3. The action slot is sized per [`AttachMode`] and vertically centered.
//! 4. A pass never mutates a previous [`LayoutResult`]; each call returns a
//!    fresh one.

use crate::component::{Component, SlotRole};
use crate::{AttachMode, LayoutDirection, MeasureSpec};
use navbar_core::config::NavBarConfig;
use navbar_core::error::{Result, non_negative};
use navbar_core::geometry::Rect;

/// How the action slot is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionSlot {
    attach_mode: AttachMode,
    hump_padding: i32,
}

impl ActionSlot {
    /// Create an action slot configuration.
    ///
    /// # Errors
    ///
    /// A negative `hump_padding` is a configuration error.
    pub fn new(attach_mode: AttachMode, hump_padding: i32) -> Result<Self> {
        Ok(Self {
            attach_mode,
            hump_padding: non_negative("hump_padding", hump_padding)?,
        })
    }

    #[inline]
    pub const fn attach_mode(&self) -> AttachMode {
        self.attach_mode
    }

    #[inline]
    pub const fn hump_padding(&self) -> i32 {
        self.hump_padding
    }
}

/// Output of one measurement pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutResult {
    /// Sum of the visible children's measured widths.
    pub bar_width: i32,
    /// Height of the whole bar, hump or overlapping action slot included.
    pub bar_height: i32,
    /// Width every slot was measured at.
    pub item_width: i32,
    /// Height every regular slot was measured at.
    pub item_height: i32,
    /// Placement of each child, index-aligned with the children passed in.
    /// Hidden children get an empty rectangle.
    pub child_rects: Vec<Rect>,
    /// Whether the outline bulges around the action slot.
    pub hump_enabled: bool,
    /// Hump width; zero when disabled.
    pub hump_width: f32,
    /// Hump height; zero when disabled.
    pub hump_height: f32,
    /// Attach mode in effect, `None` when no action slot took part.
    pub attach_mode: Option<AttachMode>,
}

impl LayoutResult {
    /// The bar's own bounds.
    #[inline]
    pub fn bar_rect(&self) -> Rect {
        Rect::new(0, 0, self.bar_width, self.bar_height)
    }

    /// Hump `(width, height)` when enabled.
    #[inline]
    pub fn hump(&self) -> Option<(f32, f32)> {
        self.hump_enabled
            .then_some((self.hump_width, self.hump_height))
    }
}

/// Measures and places a single row of slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    config: NavBarConfig,
    action: ActionSlot,
    direction: LayoutDirection,
}

impl LayoutEngine {
    /// Create an engine; the action slot defaults to [`AttachMode::Embed`]
    /// with the configured hump padding.
    #[must_use]
    pub fn new(config: NavBarConfig) -> Self {
        Self {
            action: ActionSlot {
                attach_mode: AttachMode::Embed,
                hump_padding: config.hump_padding(),
            },
            config,
            direction: LayoutDirection::Ltr,
        }
    }

    /// Set how the action slot attaches.
    #[must_use]
    pub fn with_action_slot(mut self, action: ActionSlot) -> Self {
        self.action = action;
        self
    }

    /// Set the horizontal placement order.
    #[must_use]
    pub fn with_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn set_action_slot(&mut self, action: ActionSlot) {
        self.action = action;
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    #[inline]
    pub fn config(&self) -> &NavBarConfig {
        &self.config
    }

    #[inline]
    pub fn action_slot(&self) -> ActionSlot {
        self.action
    }

    #[inline]
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Run one measurement pass over `children` and place them.
    ///
    /// # Errors
    ///
    /// A negative `available_width` is a configuration error; nothing is
    /// measured in that case.
    pub fn measure<C: Component>(
        &self,
        available_width: i32,
        children: &mut [C],
    ) -> Result<LayoutResult> {
        let available_width = non_negative("available_width", available_width)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout_measure",
            available_width,
            children = children.len(),
            mode = ?self.action.attach_mode
        )
        .entered();

        let item_height = self.config.item_height();
        let visible = children.iter().filter(|c| c.is_visible()).count();
        let has_visible_items = children
            .iter()
            .any(|c| c.is_visible() && c.role() == SlotRole::Item);
        let divisor = if has_visible_items { visible } else { 1 };
        let item_width = available_width / divisor as i32;

        let item_width_spec = MeasureSpec::Exactly(item_width);
        let item_height_spec = MeasureSpec::Exactly(item_height);
        let mode = self.action.attach_mode;

        let mut bar_width = 0;
        let mut action_height = None;
        let mut hump_enabled = false;
        let mut hump_width = 0.0;
        let mut hump_height = 0;

        for child in children.iter_mut().filter(|c| c.is_visible()) {
            let size = if child.role() == SlotRole::Action {
                let height_spec = match mode {
                    AttachMode::Embed => item_height_spec,
                    AttachMode::Hump | AttachMode::Overlap => MeasureSpec::Unspecified,
                };
                let size = child.measure(item_width_spec, height_spec);
                action_height = Some(size.height);
                if mode == AttachMode::Hump && size.height > item_height {
                    hump_enabled = true;
                    hump_width = item_width as f32 * 1.5;
                    hump_height = size
                        .height
                        .saturating_sub(item_height)
                        .saturating_add(self.action.hump_padding)
                        .min(self.config.max_hump_height());
                }
                size
            } else {
                child.measure(item_width_spec, item_height_spec)
            };
            bar_width += size.width;
        }

        let bar_height = match (action_height, mode) {
            (None, _) | (Some(_), AttachMode::Embed) => item_height,
            (Some(_), AttachMode::Hump) => item_height + hump_height,
            (Some(action), AttachMode::Overlap) => item_height.max(action),
        };

        let mut child_rects = vec![Rect::default(); children.len()];
        let mut used = 0;
        for (child, slot) in children.iter_mut().zip(child_rects.iter_mut()) {
            if !child.is_visible() {
                continue;
            }
            let size = child.measured_size();
            let left = match self.direction {
                LayoutDirection::Ltr => used,
                LayoutDirection::Rtl => bar_width - used - size.width,
            };
            let rect = if child.role() == SlotRole::Action {
                Rect::new(left, (bar_height - size.height) / 2, size.width, size.height)
            } else {
                Rect::new(left, bar_height - item_height, size.width, item_height)
            };
            child.layout(rect);
            *slot = rect;
            used += size.width;
        }

        navbar_core::debug!(
            bar_width,
            bar_height,
            item_width,
            hump_enabled,
            "layout pass complete"
        );

        Ok(LayoutResult {
            bar_width,
            bar_height,
            item_width,
            item_height,
            child_rects,
            hump_enabled,
            hump_width,
            hump_height: hump_height as f32,
            attach_mode: action_height.map(|_| mode),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ActionSlotComponent, Placeholder};
    use navbar_core::geometry::Size;

    /// Test child with a configurable role and natural height.
    #[derive(Debug, Clone)]
    struct TestSlot {
        role: SlotRole,
        natural: Size,
        visible: bool,
        measured: Size,
        placed: Option<Rect>,
        specs: Option<(MeasureSpec, MeasureSpec)>,
    }

    impl TestSlot {
        fn item() -> Self {
            Self {
                role: SlotRole::Item,
                natural: Size::ZERO,
                visible: true,
                measured: Size::ZERO,
                placed: None,
                specs: None,
            }
        }

        fn action(height: i32) -> Self {
            Self {
                role: SlotRole::Action,
                natural: Size::new(48, height),
                ..Self::item()
            }
        }

        fn placeholder() -> Self {
            Self {
                role: SlotRole::Placeholder,
                ..Self::item()
            }
        }

        fn hidden(mut self) -> Self {
            self.visible = false;
            self
        }
    }

    impl Component for TestSlot {
        fn role(&self) -> SlotRole {
            self.role
        }

        fn is_visible(&self) -> bool {
            self.visible
        }

        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
            self.specs = Some((width, height));
            self.measured = Size::new(
                width.resolve(self.natural.width),
                height.resolve(self.natural.height),
            );
            self.measured
        }

        fn measured_size(&self) -> Size {
            self.measured
        }

        fn layout(&mut self, rect: Rect) {
            self.placed = Some(rect);
        }
    }

    fn config() -> NavBarConfig {
        NavBarConfig::builder()
            .item_height(56)
            .max_hump_height(20)
            .build()
            .unwrap()
    }

    fn engine(mode: AttachMode, padding: i32) -> LayoutEngine {
        LayoutEngine::new(config()).with_action_slot(ActionSlot::new(mode, padding).unwrap())
    }

    fn with_action(height: i32) -> Vec<TestSlot> {
        vec![
            TestSlot::item(),
            TestSlot::item(),
            TestSlot::action(height),
            TestSlot::item(),
            TestSlot::item(),
        ]
    }

    #[test]
    fn items_share_width_and_remainder_is_dropped() {
        let mut row = vec![TestSlot::item(), TestSlot::item(), TestSlot::item()];
        let result = LayoutEngine::new(config()).measure(100, &mut row).unwrap();
        assert_eq!(result.item_width, 33);
        assert_eq!(result.bar_width, 99);
        assert_eq!(result.bar_height, 56);
        assert!(!result.hump_enabled);
        assert_eq!(result.attach_mode, None);
        for child in &row {
            assert_eq!(child.measured, Size::new(33, 56));
        }
    }

    #[test]
    fn ltr_places_left_to_right_bottom_aligned() {
        let mut row = vec![TestSlot::item(), TestSlot::item(), TestSlot::item()];
        let result = LayoutEngine::new(config()).measure(90, &mut row).unwrap();
        assert_eq!(
            result.child_rects,
            vec![
                Rect::new(0, 0, 30, 56),
                Rect::new(30, 0, 30, 56),
                Rect::new(60, 0, 30, 56),
            ]
        );
        assert_eq!(row[1].placed, Some(Rect::new(30, 0, 30, 56)));
    }

    #[test]
    fn rtl_mirrors_placement() {
        let mut row = vec![TestSlot::item(), TestSlot::item(), TestSlot::item()];
        let result = LayoutEngine::new(config())
            .with_direction(LayoutDirection::Rtl)
            .measure(100, &mut row)
            .unwrap();
        assert_eq!(result.child_rects[0], Rect::new(66, 0, 33, 56));
        assert_eq!(result.child_rects[2], Rect::new(0, 0, 33, 56));
    }

    #[test]
    fn embed_constrains_action_to_item_height() {
        let mut row = with_action(80);
        let result = engine(AttachMode::Embed, 8).measure(400, &mut row).unwrap();
        assert_eq!(row[2].measured, Size::new(80, 56));
        assert_eq!(
            row[2].specs,
            Some((MeasureSpec::Exactly(80), MeasureSpec::Exactly(56)))
        );
        assert_eq!(result.bar_height, 56);
        assert!(!result.hump_enabled);
        assert_eq!(result.attach_mode, Some(AttachMode::Embed));
    }

    #[test]
    fn hump_enabled_when_action_is_taller() {
        let mut row = with_action(66);
        let result = engine(AttachMode::Hump, 4).measure(400, &mut row).unwrap();
        assert_eq!(row[2].specs.unwrap().1, MeasureSpec::Unspecified);
        assert!(result.hump_enabled);
        assert_eq!(result.hump_width, 120.0);
        // 66 - 56 + 4
        assert_eq!(result.hump_height, 14.0);
        assert_eq!(result.bar_height, 70);
        assert_eq!(result.hump(), Some((120.0, 14.0)));
    }

    #[test]
    fn hump_height_is_capped() {
        let mut row = with_action(100);
        let result = engine(AttachMode::Hump, 8).measure(400, &mut row).unwrap();
        assert_eq!(result.hump_height, 20.0);
        assert_eq!(result.bar_height, 76);
    }

    #[test]
    fn hump_height_saturates_for_huge_action() {
        let mut row = with_action(i32::MAX);
        let result = engine(AttachMode::Hump, i32::MAX).measure(400, &mut row).unwrap();
        assert!(result.hump_enabled);
        assert_eq!(result.hump_height, 20.0);
        assert_eq!(result.bar_height, 76);
    }

    #[test]
    fn action_and_placeholder_count_toward_item_width() {
        // 4 items + action share 400 px five ways.
        let mut row = with_action(56);
        let result = engine(AttachMode::Embed, 0).measure(400, &mut row).unwrap();
        assert_eq!(result.item_width, 80);
        assert_eq!(result.bar_width, 400);
    }

    #[test]
    fn hump_disabled_when_action_fits() {
        let mut row = with_action(56);
        let result = engine(AttachMode::Hump, 8).measure(400, &mut row).unwrap();
        assert!(!result.hump_enabled);
        assert_eq!(result.hump_height, 0.0);
        assert_eq!(result.hump_width, 0.0);
        assert_eq!(result.bar_height, 56);
    }

    #[test]
    fn overlap_grows_bar_without_hump() {
        let mut row = with_action(90);
        let result = engine(AttachMode::Overlap, 8).measure(400, &mut row).unwrap();
        assert!(!result.hump_enabled);
        assert_eq!(result.bar_height, 90);
        // Items bottom-aligned, action centered.
        assert_eq!(result.child_rects[0], Rect::new(0, 34, 80, 56));
        assert_eq!(result.child_rects[2], Rect::new(160, 0, 80, 90));
    }

    #[test]
    fn overlap_with_short_action_keeps_item_height() {
        let mut row = with_action(40);
        let result = engine(AttachMode::Overlap, 8).measure(400, &mut row).unwrap();
        assert_eq!(result.bar_height, 56);
        assert_eq!(result.child_rects[2], Rect::new(160, 8, 80, 40));
    }

    #[test]
    fn hump_action_is_centered_in_bar() {
        let mut row = with_action(66);
        let result = engine(AttachMode::Hump, 4).measure(400, &mut row).unwrap();
        // bar 70 tall, action 66 tall
        assert_eq!(result.child_rects[2], Rect::new(160, 2, 80, 66));
        assert_eq!(result.child_rects[4], Rect::new(320, 14, 80, 56));
    }

    #[test]
    fn hidden_children_are_skipped() {
        let mut row = vec![TestSlot::item(), TestSlot::item().hidden(), TestSlot::item(), TestSlot::item()];
        let result = LayoutEngine::new(config()).measure(90, &mut row).unwrap();
        assert_eq!(result.item_width, 30);
        assert_eq!(result.bar_width, 90);
        assert_eq!(result.child_rects[1], Rect::default());
        assert_eq!(row[1].placed, None);
        assert_eq!(result.child_rects[2], Rect::new(30, 0, 30, 56));
    }

    #[test]
    fn no_visible_items_uses_full_width() {
        let mut row = vec![TestSlot::item().hidden(), TestSlot::placeholder()];
        let result = LayoutEngine::new(config()).measure(90, &mut row).unwrap();
        assert_eq!(result.item_width, 90);
        assert_eq!(result.bar_width, 90);
    }

    #[test]
    fn placeholder_takes_a_slot() {
        let mut row = vec![
            TestSlot::item(),
            TestSlot::item(),
            TestSlot::action(56),
            TestSlot::item(),
            TestSlot::placeholder(),
        ];
        let result = engine(AttachMode::Embed, 0).measure(500, &mut row).unwrap();
        assert_eq!(result.item_width, 100);
        assert_eq!(result.child_rects[4], Rect::new(400, 0, 100, 56));
    }

    #[test]
    fn negative_width_rejected_before_measuring() {
        let mut row = vec![TestSlot::item(), TestSlot::item(), TestSlot::item()];
        let err = LayoutEngine::new(config()).measure(-1, &mut row).unwrap_err();
        assert!(err.is_configuration());
        assert!(row.iter().all(|c| c.specs.is_none()));
    }

    #[test]
    fn negative_hump_padding_rejected() {
        assert!(ActionSlot::new(AttachMode::Hump, -2).is_err());
    }

    #[test]
    fn zero_width_is_valid() {
        let mut row = vec![TestSlot::item(), TestSlot::item(), TestSlot::item()];
        let result = LayoutEngine::new(config()).measure(0, &mut row).unwrap();
        assert_eq!(result.bar_width, 0);
        assert_eq!(result.bar_height, 56);
    }

    #[test]
    fn works_with_library_components() {
        let mut row: Vec<Box<dyn Component>> = vec![
            Box::new(Placeholder::new()),
            Box::new(ActionSlotComponent::with_natural_size(Size::new(40, 70))),
            Box::new(Placeholder::new()),
        ];
        let result = engine(AttachMode::Hump, 0).measure(300, &mut row).unwrap();
        // No regular items are visible, so the width is not divided.
        assert_eq!(result.item_width, 300);
        assert!(result.hump_enabled);
        assert_eq!(result.hump_height, 14.0);
    }

    #[test]
    fn result_is_fresh_per_pass() {
        let engine = engine(AttachMode::Hump, 4);
        let mut tall = with_action(66);
        let first = engine.measure(400, &mut tall).unwrap();
        let mut short = with_action(50);
        let second = engine.measure(400, &mut short).unwrap();
        assert!(first.hump_enabled);
        assert!(!second.hump_enabled);
        assert_eq!(first.bar_height, 70);
    }
}
