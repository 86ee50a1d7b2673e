// ABOUTME: Divider drag sessions driven by pointer track events.
// ABOUTME: One session at a time; the group and travel window are fixed when the drag starts.

use divbox_core::{BoxId, DividerId};

use crate::engine::{DividedBox, LayoutError};
use crate::group::{resolve, DividerGroup};
use crate::host::BoxHost;
use crate::model::LayoutEvent;
use crate::mover::TravelWindow;
use crate::topology::find_divider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackPhase {
    Start,
    Move,
    End,
}

/// One pointer track event scoped to a divider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackEvent {
    pub phase: TrackPhase,
    /// Pointer travel along the axis since the gesture started
    pub delta: f64,
    /// Absolute pointer position along the axis
    pub position: f64,
}

impl TrackEvent {
    pub fn start(position: f64) -> Self {
        Self {
            phase: TrackPhase::Start,
            delta: 0.0,
            position,
        }
    }

    pub fn moved(delta: f64, position: f64) -> Self {
        Self {
            phase: TrackPhase::Move,
            delta,
            position,
        }
    }

    pub fn end(delta: f64, position: f64) -> Self {
        Self {
            phase: TrackPhase::End,
            delta,
            position,
        }
    }
}

/// State held between track start and track end
#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    divider: DividerId,
    group: DividerGroup,
    window: TravelWindow,
    start_edge: f64,
    prev: BoxId,
    next: BoxId,
    dividers: Vec<DividerId>,
}

impl<H: BoxHost> DividedBox<H> {
    /// Dispatch a track event to the start/move/end handlers
    pub fn track(&mut self, divider: DividerId, event: TrackEvent) -> Result<(), LayoutError> {
        match event.phase {
            TrackPhase::Start => {
                self.divider_track_start(divider)?;
            }
            TrackPhase::Move => {
                self.divider_track_move(divider, event.delta)?;
            }
            TrackPhase::End => self.divider_track_end(divider),
        }
        Ok(())
    }

    /// Begin dragging `divider`. Returns whether a session was opened; fixed,
    /// hidden, and unknown dividers are ignored.
    pub fn divider_track_start(&mut self, divider: DividerId) -> Result<bool, LayoutError> {
        self.end_drag();

        let Some(slot) = find_divider(&self.slots, divider) else {
            tracing::debug!("Drag ignored: unknown {}", divider);
            return Ok(false);
        };
        match self.slots[slot].as_divider() {
            Some(d) if d.visible && !d.fixed => {}
            _ => {
                tracing::debug!("Drag ignored: {} is fixed or hidden", divider);
                return Ok(false);
            }
        }

        let group = resolve(&self.slots, slot);
        let Some((prev, next)) = group.ends() else {
            return Ok(false);
        };
        let Some(window) = self.travel_window(&group)? else {
            return Ok(false);
        };
        let start_edge = self.trailing_edge(prev)?;

        let id_of = |slot: usize| self.slots[slot].as_box().map(|pane| pane.id);
        let (Some(prev), Some(next)) = (id_of(prev), id_of(next)) else {
            return Ok(false);
        };
        let dividers: Vec<DividerId> = group
            .dividers
            .iter()
            .filter_map(|&d| self.slots[d].as_divider().map(|d| d.id))
            .collect();

        tracing::debug!(
            "Drag started on {} ({} -> {}, window {}..{})",
            divider,
            prev,
            next,
            window.lower,
            window.upper
        );
        self.events.push(LayoutEvent::DragStarted {
            prev,
            next,
            dividers: dividers.clone(),
        });
        self.drag = Some(DragSession {
            divider,
            group,
            window,
            start_edge,
            prev,
            next,
            dividers,
        });
        Ok(true)
    }

    /// Follow the pointer: `delta` is the travel since the drag started.
    /// Returns the step applied by this event.
    pub fn divider_track_move(&mut self, divider: DividerId, delta: f64) -> Result<f64, LayoutError> {
        let Some(session) = self.drag.take() else {
            return Ok(0.0);
        };
        if session.divider != divider {
            self.drag = Some(session);
            return Ok(0.0);
        }

        let result = self.drag_step(&session, delta);
        // A move clamped to nothing is not reported
        match result {
            Ok(applied) if applied != 0.0 => self.events.push(LayoutEvent::DragMoved {
                prev: session.prev,
                next: session.next,
                dividers: session.dividers.clone(),
                delta: applied,
            }),
            _ => {}
        }
        self.drag = Some(session);
        result
    }

    fn drag_step(&mut self, session: &DragSession, delta: f64) -> Result<f64, LayoutError> {
        let Some(prev) = session.group.prev else {
            return Ok(0.0);
        };
        let edge = self.trailing_edge(prev)?;
        let step = session.start_edge + delta - edge;
        self.move_group(step, &session.group, Some(session.window))
    }

    pub fn divider_track_end(&mut self, divider: DividerId) {
        if self.drag.as_ref().is_some_and(|s| s.divider == divider) {
            self.end_drag();
        }
    }

    /// Abandon the current drag where it stands
    pub fn cancel_drag(&mut self) {
        self.end_drag();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub(crate) fn end_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            tracing::debug!("Drag ended on {}", session.divider);
            self.events.push(LayoutEvent::DragEnded {
                prev: session.prev,
                next: session.next,
                dividers: session.dividers,
            });
        }
    }
}
