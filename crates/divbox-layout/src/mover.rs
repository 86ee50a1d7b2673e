// ABOUTME: Moves a divider group by a delta, clamped to what its end boxes allow.
// ABOUTME: The travel window comes from the end boxes' min/max sizes and can be cached per drag.

use crate::engine::{DividedBox, LayoutError};
use crate::group::{resolve, DividerGroup};
use crate::host::BoxHost;

/// Allowed range for the leading edge of a divider group, which is where
/// the box before the group ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelWindow {
    pub lower: f64,
    pub upper: f64,
}

impl TravelWindow {
    /// How far an edge at `edge` may actually move when asked to move by
    /// `delta`. Never moves against the requested direction, so a drag held
    /// past an exhausted bound stays put instead of bouncing.
    pub fn clamp_delta(&self, edge: f64, delta: f64, tolerance: f64) -> f64 {
        if delta == 0.0 || self.lower > self.upper + tolerance {
            return 0.0;
        }
        let upper = self.upper.max(self.lower);
        let applied = (edge + delta).clamp(self.lower, upper) - edge;
        if applied.abs() <= tolerance || applied.signum() != delta.signum() {
            0.0
        } else {
            applied
        }
    }
}

impl<H: BoxHost> DividedBox<H> {
    /// Window for the group's leading edge, or None when one end has no box
    pub(crate) fn travel_window(&self, group: &DividerGroup) -> Result<Option<TravelWindow>, LayoutError> {
        let Some((prev, next)) = group.ends() else {
            return Ok(None);
        };
        let (Some(prev_pane), Some(next_pane)) = (self.slots[prev].as_box(), self.slots[next].as_box()) else {
            return Ok(None);
        };
        let (prev_config, next_config) = (prev_pane.config, next_pane.config);

        let edge = self.trailing_edge(prev)?;
        let prev_size = self.outer_size(prev)?;
        let next_size = self.outer_size(next)?;

        // The next box starts wherever the group ends, but only its size
        // matters: it shrinks by exactly what the edge advances
        let lower = edge + (prev_config.lower() - prev_size).max(next_size - next_config.upper());
        let upper = edge + (next_size - next_config.lower()).min(prev_config.upper() - prev_size);
        Ok(Some(TravelWindow { lower, upper }))
    }

    /// Move the divider at `divider` (and whatever moves with it) by `delta`.
    /// Returns the delta actually applied.
    pub(crate) fn move_divider(&mut self, delta: f64, divider: usize) -> Result<f64, LayoutError> {
        let group = resolve(&self.slots, divider);
        self.move_group(delta, &group, None)
    }

    /// Move a resolved group by `delta`. A cached `window` (from a drag
    /// session) is used as is; otherwise it is computed from current sizes.
    pub(crate) fn move_group(
        &mut self,
        delta: f64,
        group: &DividerGroup,
        window: Option<TravelWindow>,
    ) -> Result<f64, LayoutError> {
        let Some((prev, next)) = group.ends() else {
            tracing::debug!("Divider group has no box on one side; move ignored");
            return Ok(0.0);
        };
        let window = match window {
            Some(window) => window,
            None => match self.travel_window(group)? {
                Some(window) => window,
                None => return Ok(0.0),
            },
        };

        let edge = self.trailing_edge(prev)?;
        let applied = window.clamp_delta(edge, delta, self.settings.tolerance);
        if applied == 0.0 {
            return Ok(0.0);
        }

        let prev_size = self.outer_size(prev)?;
        self.set_outer_size(prev, prev_size + applied)?;
        for slot in prev + 1..next {
            self.shift(slot, applied)?;
        }
        let next_size = self.outer_size(next)?;
        self.set_outer_size(next, next_size - applied)?;
        self.shift(next, applied)?;

        tracing::trace!("Moved {} dividers by {} (asked {})", group.dividers.len(), applied, delta);
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::{assert_sizes, layout, layout_with};
    use divbox_core::BoxConfig;

    #[test]
    fn clamp_stays_inside_window() {
        let window = TravelWindow { lower: 10.0, upper: 90.0 };
        assert_eq!(window.clamp_delta(50.0, 100.0, 1e-9), 40.0);
        assert_eq!(window.clamp_delta(50.0, -100.0, 1e-9), -40.0);
        assert_eq!(window.clamp_delta(50.0, 5.0, 1e-9), 5.0);
    }

    #[test]
    fn exhausted_direction_is_noop() {
        let window = TravelWindow { lower: 10.0, upper: 90.0 };
        assert_eq!(window.clamp_delta(90.0, 20.0, 1e-9), 0.0);
        // Outside the window already: never pulled backwards
        assert_eq!(window.clamp_delta(95.0, 1.0, 1e-9), 0.0);
    }

    #[test]
    fn empty_window_is_noop() {
        let window = TravelWindow { lower: 60.0, upper: 40.0 };
        assert_eq!(window.clamp_delta(50.0, 5.0, 1e-9), 0.0);
    }

    #[test]
    fn window_from_min_and_max() {
        let layout = layout_with(&[100.0, 100.0], 200.0, |i| match i {
            0 => BoxConfig::new().with_min(30.0).with_max(150.0),
            _ => BoxConfig::new().with_min(20.0).with_max(180.0),
        });
        let group = resolve(&layout.slots, 1);
        let window = layout.travel_window(&group).unwrap().unwrap();
        // prev min 30 vs next max 180 -> lower = max(30, 200 - 180)
        assert_eq!(window.lower, 30.0);
        // next min 20 vs prev max 150 -> upper = min(180, 150)
        assert_eq!(window.upper, 150.0);
    }

    #[test]
    fn move_resizes_neighbours() {
        let mut layout = layout(&[100.0, 100.0, 100.0], 300.0);
        let applied = layout.move_divider(30.0, 1).unwrap();
        assert_eq!(applied, 30.0);
        assert_sizes(&layout, &[130.0, 70.0, 100.0]);
        assert_eq!(layout.position(1).unwrap(), 130.0);
        assert_eq!(layout.position(2).unwrap(), 130.0);
    }

    #[test]
    fn move_clamps_at_zero() {
        let mut layout = layout(&[100.0, 100.0], 200.0);
        let applied = layout.move_divider(-500.0, 1).unwrap();
        assert_eq!(applied, -100.0);
        assert_sizes(&layout, &[0.0, 200.0]);
    }

    #[test]
    fn move_carries_fixed_box() {
        let mut layout = layout_with(&[100.0, 100.0, 100.0, 100.0], 400.0, |i| {
            if i == 1 { BoxConfig::new().fixed() } else { BoxConfig::default() }
        });
        let applied = layout.move_divider(40.0, 1).unwrap();
        assert_eq!(applied, 40.0);
        assert_sizes(&layout, &[140.0, 100.0, 60.0, 100.0]);
        assert_eq!(layout.position(2).unwrap(), 140.0);
        assert_eq!(layout.position(3).unwrap(), 240.0);
    }

    #[test]
    fn move_against_boundary_pinned_run_is_noop() {
        let mut layout = layout_with(&[100.0, 100.0], 200.0, |i| {
            if i == 1 { BoxConfig::new().fixed() } else { BoxConfig::default() }
        });
        assert_eq!(layout.move_divider(20.0, 1).unwrap(), 0.0);
        assert_sizes(&layout, &[100.0, 100.0]);
    }
}
