//! Property-based invariant tests for the divided box layout engine.
//!
//! 1. Boxes plus visible dividers fill the container after any resize.
//! 2. Refresh on a settled layout changes nothing.
//! 3. Redistribution respects min/max bounds whenever the container allows it.
//! 4. Fixed boxes keep their size while unfixed boxes can absorb the change.
//! 5. Drags keep every box inside its bounds and never overshoot the pointer.

use divbox_layout::{Axis, BoxConfig, DividedBox, EngineSettings, MemoryHost, TrackEvent};
use proptest::prelude::*;

const EPS: f64 = 1e-6;
const DIVIDER: f64 = 4.0;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Sample {
    size: f64,
    config: BoxConfig,
}

/// A box whose bounds contain its starting size
fn bounded_box() -> impl Strategy<Value = Sample> {
    (0u32..400, 0u32..=100, proptest::option::of(0u32..300)).prop_map(|(size, min_pct, extra)| {
        let size = f64::from(size);
        let mut config = BoxConfig::new().with_min(size * f64::from(min_pct) / 100.0);
        if let Some(extra) = extra {
            config = config.with_max(size + f64::from(extra));
        }
        Sample { size, config }
    })
}

fn free_box() -> impl Strategy<Value = Sample> {
    (0u32..400).prop_map(|size| Sample {
        size: f64::from(size),
        config: BoxConfig::default(),
    })
}

fn dividers_for(samples: &[Sample]) -> f64 {
    DIVIDER * samples.len().saturating_sub(1) as f64
}

fn build(samples: &[Sample]) -> DividedBox<MemoryHost> {
    let container = samples.iter().map(|s| s.size).sum::<f64>() + dividers_for(samples);
    let mut host = MemoryHost::new(Axis::Horizontal, container);
    let boxes: Vec<_> = samples.iter().map(|s| (host.add(s.size), s.config)).collect();
    let settings = EngineSettings {
        divider_size: DIVIDER,
        ..EngineSettings::default()
    };
    DividedBox::init(host, Axis::Horizontal, boxes, settings).unwrap()
}

fn resize_container(layout: &mut DividedBox<MemoryHost>, size: f64) {
    layout.host_mut().set_container_size(size);
    layout.container_resized().unwrap();
}

/// Pick a value in [lo, hi] from a per-mille fraction
fn between(lo: f64, hi: f64, per_mille: u32) -> f64 {
    lo + (hi - lo) * f64::from(per_mille) / 1000.0
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Container is always filled
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resize_fills_container(
        samples in proptest::collection::vec(bounded_box(), 1..8),
        fixed in proptest::collection::vec(any::<bool>(), 8),
        container in 0u32..3000,
    ) {
        let samples: Vec<Sample> = samples
            .into_iter()
            .zip(fixed)
            .map(|(mut s, fixed)| {
                s.config.fixed_size = fixed;
                s
            })
            .collect();
        let mut layout = build(&samples);
        let container = f64::from(container) + dividers_for(&samples);
        resize_container(&mut layout, container);

        let total = layout.total_size().unwrap();
        prop_assert!(
            (total - container).abs() < EPS * 100.0,
            "total {} != container {}", total, container
        );
        prop_assert!(layout.snapshot().unwrap().boxes.iter().all(|b| b.size >= 0.0));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Refresh is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn refresh_is_idempotent(
        samples in proptest::collection::vec(bounded_box(), 1..8),
        container in 0u32..3000,
    ) {
        let mut layout = build(&samples);
        resize_container(&mut layout, f64::from(container) + dividers_for(&samples));
        let before = layout.snapshot().unwrap();
        layout.refresh().unwrap();
        let after = layout.snapshot().unwrap();

        for (a, b) in before.boxes.iter().zip(&after.boxes) {
            prop_assert!((a.size - b.size).abs() < EPS);
            prop_assert!((a.position - b.position).abs() < EPS);
        }
        prop_assert_eq!(before.dividers.len(), after.dividers.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Bounds hold when the container can satisfy them
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn redistribution_respects_bounds(
        samples in proptest::collection::vec(bounded_box(), 1..8),
        per_mille in 0u32..=1000,
    ) {
        let lo: f64 = samples.iter().map(|s| s.config.lower()).sum();
        let hi: f64 = samples
            .iter()
            .map(|s| s.config.max_size.unwrap_or(s.size + 1000.0))
            .sum();
        let container = between(lo, hi, per_mille) + dividers_for(&samples);

        let mut layout = build(&samples);
        resize_container(&mut layout, container);

        let snapshot = layout.snapshot().unwrap();
        for (b, sample) in snapshot.boxes.iter().zip(&samples) {
            prop_assert!(b.size >= sample.config.lower() - EPS, "{} below min {}", b.size, sample.config.lower());
            prop_assert!(b.size <= sample.config.upper() + EPS, "{} above max {}", b.size, sample.config.upper());
        }
        prop_assert!((snapshot.total() - container).abs() < EPS * 100.0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Fixed boxes are left alone
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn fixed_boxes_keep_their_size(
        samples in proptest::collection::vec(free_box(), 2..8),
        fixed in proptest::collection::vec(any::<bool>(), 8),
        grow in 0u32..2000,
        per_mille in 0u32..=1000,
    ) {
        // At least one unfixed box must remain
        let mut fixed: Vec<bool> = fixed.into_iter().take(samples.len()).collect();
        fixed[0] = false;
        let samples: Vec<Sample> = samples
            .into_iter()
            .zip(&fixed)
            .map(|(mut s, &fixed)| {
                s.config.fixed_size = fixed;
                s
            })
            .collect();

        let pinned: f64 = samples.iter().filter(|s| s.config.fixed_size).map(|s| s.size).sum();
        let current: f64 = samples.iter().map(|s| s.size).sum();
        let container = between(pinned, current + f64::from(grow), per_mille) + dividers_for(&samples);

        let mut layout = build(&samples);
        resize_container(&mut layout, container);

        for (b, sample) in layout.snapshot().unwrap().boxes.iter().zip(&samples) {
            if sample.config.fixed_size {
                prop_assert!((b.size - sample.size).abs() < EPS, "fixed box moved: {} -> {}", sample.size, b.size);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Drags stay within bounds and follow the pointer monotonically
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn drag_respects_bounds(
        samples in proptest::collection::vec(bounded_box(), 2..6),
        pick in any::<prop::sample::Index>(),
        moves in proptest::collection::vec(-600i32..600, 1..12),
    ) {
        let mut layout = build(&samples);
        let before = layout.total_size().unwrap();
        let dividers = layout.divider_ids();
        let index = pick.index(dividers.len());
        let divider = dividers[index];
        let start = layout.snapshot().unwrap().dividers[index].position;

        prop_assert!(layout.divider_track_start(divider).unwrap());
        for delta in moves {
            let delta = f64::from(delta);
            let target = start + delta;
            let old_edge = layout.snapshot().unwrap().dividers[index].position;
            layout.track(divider, TrackEvent::moved(delta, target)).unwrap();
            let new_edge = layout.snapshot().unwrap().dividers[index].position;

            prop_assert!(
                (new_edge - target).abs() <= (old_edge - target).abs() + EPS,
                "edge moved away from pointer: {} -> {} (target {})", old_edge, new_edge, target
            );
            for (b, sample) in layout.snapshot().unwrap().boxes.iter().zip(&samples) {
                prop_assert!(b.size >= sample.config.lower() - EPS);
                prop_assert!(b.size <= sample.config.upper() + EPS);
            }
            prop_assert!((layout.total_size().unwrap() - before).abs() < EPS * 100.0);
        }
        layout.track(divider, TrackEvent::end(0.0, start)).unwrap();
        prop_assert!(!layout.is_dragging());
    }
}
