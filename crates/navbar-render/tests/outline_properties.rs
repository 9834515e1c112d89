//! Outline invariants over real layout passes.
//!
//! 1. The hump apex sits at `(hump_start + hump_width / 2, 0)`.
//! 2. Both hump curves meet the flanks at `y == hump_height`.
//! 3. The outline's bounds equal the bar rectangle.
//! 4. Every child rect's bottom edge is inside the outline.

use navbar_core::NavBarConfig;
use navbar_core::geometry::{Point, Rect, Size};
use navbar_layout::{
    ActionSlot, ActionSlotComponent, AttachMode, Component, LayoutEngine, LayoutResult,
    MeasureSpec, Placeholder, SlotKind, SlotPlan, SlotRole,
};
use navbar_render::{Outline, PathCommand, ShapeComposer};
use proptest::prelude::*;

#[derive(Default)]
struct Tab(Size);

impl Component for Tab {
    fn role(&self) -> SlotRole {
        SlotRole::Item
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.0 = Size::new(width.resolve(0), height.resolve(0));
        self.0
    }

    fn measured_size(&self) -> Size {
        self.0
    }

    fn layout(&mut self, _rect: Rect) {}
}

fn run(available: i32, items: usize, action_height: i32, mode: AttachMode) -> LayoutResult {
    let mut children: Vec<Box<dyn Component>> = SlotPlan::new(items, true)
        .slots()
        .iter()
        .map(|slot| -> Box<dyn Component> {
            match slot {
                SlotKind::Action => Box::new(ActionSlotComponent::with_natural_size(Size::new(
                    56,
                    action_height,
                ))),
                SlotKind::Item(_) => Box::new(Tab::default()),
                SlotKind::Placeholder => Box::new(Placeholder::new()),
            }
        })
        .collect();
    LayoutEngine::new(NavBarConfig::default())
        .with_action_slot(ActionSlot::new(mode, 8).unwrap())
        .measure(available, &mut children)
        .unwrap()
}

proptest! {
    #[test]
    fn hump_apex_and_flanks(
        available in 120i32..2000,
        items in 2usize..=4,
        action_height in 57i32..160,
    ) {
        let layout = run(available, items, action_height, AttachMode::Hump);
        prop_assert!(layout.hump_enabled);
        let Outline::Hump(path) = ShapeComposer::new().compose(&layout) else {
            return Err(TestCaseError::fail("expected a hump outline"));
        };

        let start = (layout.bar_width as f32 - layout.hump_width) / 2.0;
        let commands = path.commands();
        prop_assert_eq!(
            commands[1],
            PathCommand::LineTo(Point::new(start, layout.hump_height))
        );
        let PathCommand::CubicTo { to: apex, .. } = commands[2] else {
            return Err(TestCaseError::fail("expected a cubic"));
        };
        prop_assert!((apex.x - (start + layout.hump_width / 2.0)).abs() < 1e-3);
        prop_assert_eq!(apex.y, 0.0);
        let PathCommand::CubicTo { to: end, .. } = commands[3] else {
            return Err(TestCaseError::fail("expected a cubic"));
        };
        prop_assert!((end.x - (start + layout.hump_width)).abs() < 1e-3);
        prop_assert_eq!(end.y, layout.hump_height);
    }

    #[test]
    fn bounds_match_bar(
        available in 120i32..2000,
        items in 2usize..=4,
        action_height in 0i32..160,
        mode in prop_oneof![
            Just(AttachMode::Embed),
            Just(AttachMode::Hump),
        ],
    ) {
        let layout = run(available, items, action_height, mode);
        let outline = ShapeComposer::new().compose(&layout);
        let bounds = outline.bounds();
        prop_assert!((bounds.width() - layout.bar_width as f32).abs() < 1e-3);
        prop_assert!((bounds.height() - layout.bar_height as f32).abs() < 1e-3);
    }

    #[test]
    fn item_bottoms_inside_outline(
        available in 120i32..2000,
        items in 2usize..=4,
        action_height in 0i32..160,
        mode in prop_oneof![
            Just(AttachMode::Embed),
            Just(AttachMode::Hump),
            Just(AttachMode::Overlap),
        ],
    ) {
        let layout = run(available, items, action_height, mode);
        let outline = ShapeComposer::new().compose(&layout);
        for rect in layout.child_rects.iter().filter(|r| !r.is_empty()) {
            let sample = Point::new(
                rect.x as f32 + rect.width as f32 / 2.0,
                layout.bar_height as f32 - 1.0,
            );
            prop_assert!(outline.contains(sample));
        }
    }
}
