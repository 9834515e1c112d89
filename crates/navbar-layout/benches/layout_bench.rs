//! Benchmarks for the measurement pass.
//!
//! Run with: cargo bench -p navbar-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navbar_core::NavBarConfig;
use navbar_layout::{
    ActionSlot, ActionSlotComponent, AttachMode, Component, LayoutEngine, Placeholder, Size,
    SlotKind, SlotPlan,
};
use std::hint::black_box;

fn children(items: usize, has_action: bool) -> Vec<Box<dyn Component>> {
    SlotPlan::new(items, has_action)
        .slots()
        .iter()
        .map(|slot| -> Box<dyn Component> {
            match slot {
                SlotKind::Action => {
                    Box::new(ActionSlotComponent::with_natural_size(Size::new(56, 72)))
                }
                _ => Box::new(Placeholder::new()),
            }
        })
        .collect()
}

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/measure");

    for mode in [AttachMode::Embed, AttachMode::Hump, AttachMode::Overlap] {
        let engine = LayoutEngine::new(NavBarConfig::default())
            .with_action_slot(ActionSlot::new(mode, 8).unwrap());
        let mut row = children(4, true);
        group.bench_with_input(
            BenchmarkId::new("with_action", format!("{mode:?}")),
            &mode,
            |b, _| b.iter(|| engine.measure(black_box(1080), &mut row)),
        );
    }

    let engine = LayoutEngine::new(NavBarConfig::default());
    let mut row = children(5, false);
    group.bench_function("five_items", |b| {
        b.iter(|| engine.measure(black_box(1080), &mut row))
    });

    group.finish();
}

fn bench_slot_plan(c: &mut Criterion) {
    c.bench_function("layout/slot_plan", |b| {
        b.iter(|| SlotPlan::new(black_box(3), black_box(true)))
    });
}

criterion_group!(benches, bench_measure, bench_slot_plan);
criterion_main!(benches);
