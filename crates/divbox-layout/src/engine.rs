// ABOUTME: The divided box: an ordered row (or column) of boxes separated by dividers.
// ABOUTME: Keeps box sizes plus visible divider sizes equal to the container size.

use divbox_core::{Axis, BoxConfig, BoxId, DividerId, EngineSettings, LayoutSnapshot};
use divbox_core::{BoxSnapshot, DividerSnapshot};

use crate::drag::DragSession;
use crate::host::{BoxHost, HostError};
use crate::model::{Divider, HiddenDivider, LayoutEvent, Pane, Slot};
use crate::topology::{
    adjacent_divider, box_slots, find_box, find_divider, next_box, next_divider, nth_box,
    prev_box, prev_divider,
};

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("Host geometry error: {0}")]
    Host(#[from] HostError),
}

/// How a resize splits its size change between the box's two dividers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResizeOptions {
    /// Share taken by the previous divider (0.0 = all from the next divider,
    /// 1.0 = all from the previous). Falls back to the engine's default.
    pub partition: Option<f64>,
}

impl ResizeOptions {
    pub fn partition(partition: f64) -> Self {
        Self {
            partition: Some(partition),
        }
    }
}

/// Resizable multi-pane layout over a host box model
pub struct DividedBox<H: BoxHost> {
    pub(crate) host: H,
    pub(crate) axis: Axis,
    pub(crate) settings: EngineSettings,
    pub(crate) slots: Vec<Slot<H::Element>>,
    /// Sum of box and visible divider sizes as of the last adjustment
    pub(crate) managed_size: f64,
    pub(crate) drag: Option<DragSession>,
    pub(crate) events: Vec<LayoutEvent>,
    next_box_id: u64,
    next_divider_id: u64,
}

impl<H: BoxHost> DividedBox<H> {
    /// Take over an existing ordered list of boxes
    pub fn init<I>(host: H, axis: Axis, boxes: I, settings: EngineSettings) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (H::Element, BoxConfig)>,
    {
        let mut layout = Self {
            host,
            axis,
            settings,
            slots: Vec::new(),
            managed_size: 0.0,
            drag: None,
            events: Vec::new(),
            next_box_id: 0,
            next_divider_id: 0,
        };

        for (element, config) in boxes {
            let pane = layout.new_pane(element, config)?;
            layout.slots.push(Slot::Box(pane));
        }

        for slot in 0..layout.slots.len() {
            if layout.slots[slot].as_box().is_some_and(|pane| pane.hidden) {
                layout.set_outer_size(slot, 0.0)?;
            }
            layout.managed_size += layout.outer_size(slot)?;
            if let Some(pane) = layout.slots[slot].as_box_mut() {
                pane.managed = true;
            }
        }

        tracing::debug!(
            "Initialized {} divided box with {} boxes, measured size {}",
            axis.label(),
            layout.box_count(),
            layout.managed_size
        );

        layout.refresh()?;
        Ok(layout)
    }

    fn new_pane(&mut self, element: H::Element, config: BoxConfig) -> Result<Pane<H::Element>, LayoutError> {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid bounds for {:?}: {}", element, e);
                config.sanitized()
            }
        };
        let hidden = self.host.is_hidden(element)?;
        let id = BoxId(self.next_box_id);
        self.next_box_id += 1;
        Ok(Pane::new(id, element, config, hidden))
    }

    fn new_divider(&mut self) -> Divider {
        let id = DividerId(self.next_divider_id);
        self.next_divider_id += 1;
        Divider::new(id, self.settings.divider_size)
    }

    /// Bring derived state in line after a structural change, then fit the
    /// container's current size
    pub fn refresh(&mut self) -> Result<(), LayoutError> {
        self.adopt_new_boxes()?;
        self.insert_missing_dividers();
        self.claim_dividers_for_hidden_boxes();
        self.layout_positions()?;
        self.update_fixed_dividers();
        self.adjust()
    }

    fn adopt_new_boxes(&mut self) -> Result<(), LayoutError> {
        for slot in 0..self.slots.len() {
            if self.slots[slot].as_box().is_some_and(|pane| !pane.managed) {
                self.managed_size += self.outer_size(slot)?;
                if let Some(pane) = self.slots[slot].as_box_mut() {
                    pane.managed = true;
                }
            }
        }
        Ok(())
    }

    fn insert_missing_dividers(&mut self) {
        let mut slot = 0;
        while slot + 1 < self.slots.len() {
            if self.slots[slot].is_box() && self.slots[slot + 1].is_box() {
                let divider = self.new_divider();
                self.managed_size += divider.extent();
                tracing::trace!("Created {} after slot {}", divider.id, slot);
                self.slots.insert(slot + 1, Slot::Divider(divider));
            }
            slot += 1;
        }
    }

    /// Hidden boxes that arrived hidden, or lost their hidden divider to a
    /// removal, hide one adjacent divider. The divider's space leaves the
    /// managed record and is redistributed by the next adjustment.
    fn claim_dividers_for_hidden_boxes(&mut self) {
        for slot in 0..self.slots.len() {
            let Some(pane) = self.slots[slot].as_box() else {
                continue;
            };
            if !pane.hidden || !pane.needs_divider_claim {
                continue;
            }
            let claimed = [(false, true), (true, false)]
                .into_iter()
                .find_map(|(forward, forward_adjust)| {
                    adjacent_divider(&self.slots, slot, forward).map(|d| (d, forward_adjust))
                });
            if let Some((divider_slot, forward_adjust)) = claimed {
                if let Some(divider) = self.slots[divider_slot].as_divider_mut() {
                    divider.visible = false;
                    self.managed_size -= divider.size;
                    let claim = HiddenDivider {
                        divider: divider.id,
                        forward_adjust,
                    };
                    if let Some(pane) = self.slots[slot].as_box_mut() {
                        pane.hidden_divider = Some(claim);
                    }
                }
            }
            if let Some(pane) = self.slots[slot].as_box_mut() {
                pane.needs_divider_claim = false;
            }
        }
    }

    /// Lay every slot end to end from the container's origin
    pub(crate) fn layout_positions(&mut self) -> Result<(), LayoutError> {
        let mut position = 0.0;
        for slot in 0..self.slots.len() {
            self.set_position(slot, position)?;
            position += self.extent(slot)?;
        }
        Ok(())
    }

    /// A divider is fixed when every visible box on one side of it, out to
    /// the layout boundary, is fixed: dragging it would resize a fixed box.
    fn update_fixed_dividers(&mut self) {
        let all_fixed = |slots: &[Slot<H::Element>], range: &mut dyn Iterator<Item = usize>| {
            range
                .filter_map(|i| slots[i].as_box())
                .filter(|pane| !pane.hidden)
                .all(|pane| pane.fixed)
        };
        for slot in 0..self.slots.len() {
            if !self.slots[slot].is_divider() {
                continue;
            }
            let fixed = all_fixed(&self.slots, &mut (0..slot).rev())
                || all_fixed(&self.slots, &mut (slot + 1..self.slots.len()));
            if let Some(divider) = self.slots[slot].as_divider_mut() {
                divider.fixed = fixed;
            }
        }
    }

    /// Reconcile the layout against the container's current size
    pub(crate) fn adjust(&mut self) -> Result<(), LayoutError> {
        let container = self.host.container_size(self.axis)?;
        let delta = container - self.managed_size;
        if delta.abs() > self.settings.tolerance {
            tracing::debug!(
                "Adjusting layout from {} to {} (delta {})",
                self.managed_size,
                container,
                delta
            );
            let remain = self.redistribute(delta)?;
            if remain.abs() > self.settings.tolerance {
                self.absorb_overflow(remain)?;
            }
        }
        self.managed_size = self.total_size()?;
        Ok(())
    }

    /// Container size changed: redistribute the difference
    pub fn container_resized(&mut self) -> Result<(), LayoutError> {
        self.adjust()
    }

    /// Push a delta nothing could take proportionally onto the last visible
    /// boxes, unfixed ones first, never below zero
    fn absorb_overflow(&mut self, remain: f64) -> Result<(), LayoutError> {
        tracing::warn!(
            "No box can absorb {} within its bounds; overriding constraints",
            remain
        );
        let visible: Vec<usize> = box_slots(&self.slots)
            .filter(|&i| self.slots[i].as_box().is_some_and(|pane| !pane.hidden))
            .collect();
        let order: Vec<usize> = visible
            .iter()
            .rev()
            .filter(|&&i| self.slots[i].as_box().is_some_and(|pane| !pane.fixed))
            .chain(
                visible
                    .iter()
                    .rev()
                    .filter(|&&i| self.slots[i].as_box().is_some_and(|pane| pane.fixed)),
            )
            .copied()
            .collect();

        let mut left = remain;
        for slot in order {
            if left.abs() <= self.settings.tolerance {
                break;
            }
            let size = self.outer_size(slot)?;
            let target = (size + left).max(0.0);
            self.set_outer_size(slot, target)?;
            left -= target - size;
        }
        self.layout_positions()
    }

    /// Add a box at `index` among the boxes (appended when out of range)
    pub fn insert(&mut self, index: usize, element: H::Element, config: BoxConfig) -> Result<BoxId, LayoutError> {
        self.end_drag();
        let pane = self.new_pane(element, config)?;
        let id = pane.id;
        let hidden = pane.hidden;
        let slot = nth_box(&self.slots, index).unwrap_or(self.slots.len());
        self.slots.insert(slot, Slot::Box(pane));

        let natural = if hidden {
            0.0
        } else {
            self.host.outer_size(element, self.axis)?
        };
        self.set_outer_size(slot, natural)?;
        tracing::debug!("Inserted {} at index {} with size {}", id, index, natural);

        self.refresh()?;
        Ok(id)
    }

    /// Remove the box at `index` along with the divider that governs it.
    /// Returns the host element that is no longer managed.
    pub fn remove(&mut self, index: usize) -> Result<Option<H::Element>, LayoutError> {
        let Some(slot) = nth_box(&self.slots, index) else {
            tracing::debug!("Remove ignored: no box at index {}", index);
            return Ok(None);
        };
        self.end_drag();

        let size = self.outer_size(slot)?;
        let claimed = self.slots[slot]
            .as_box()
            .and_then(|pane| pane.hidden_divider)
            .and_then(|claim| find_divider(&self.slots, claim.divider));
        let divider_slot = claimed.or_else(|| {
            if slot > 0 && self.slots[slot - 1].is_divider() {
                Some(slot - 1)
            } else if self.slots.get(slot + 1).is_some_and(|s| s.is_divider()) {
                Some(slot + 1)
            } else {
                None
            }
        });

        self.managed_size -= size;
        if let Some(divider_slot) = divider_slot {
            if let Some(divider) = self.slots[divider_slot].as_divider() {
                self.managed_size -= divider.extent();
                let removed = divider.id;
                self.release_claims_on(removed);
            }
        }

        let element = match divider_slot {
            Some(d) if d > slot => {
                self.slots.remove(d);
                self.slots.remove(slot)
            }
            Some(d) => {
                let element = self.slots.remove(slot);
                self.slots.remove(d);
                element
            }
            None => self.slots.remove(slot),
        };
        let element = element.as_box().map(|pane| pane.element);
        tracing::debug!("Removed box at index {}, freeing {}", index, size);

        self.refresh()?;
        Ok(element)
    }

    /// Hidden boxes whose hidden divider is going away must hide another
    fn release_claims_on(&mut self, divider: DividerId) {
        for slot in self.slots.iter_mut() {
            if let Some(pane) = slot.as_box_mut() {
                if pane.hidden_divider.is_some_and(|claim| claim.divider == divider) {
                    pane.hidden_divider = None;
                    pane.needs_divider_claim = pane.hidden;
                }
            }
        }
    }

    /// Resize a box by moving its dividers. `None` sizes it to its contents.
    pub fn resize(&mut self, id: BoxId, size: Option<f64>, options: ResizeOptions) -> Result<(), LayoutError> {
        let Some(slot) = find_box(&self.slots, id) else {
            tracing::debug!("Resize ignored: unknown {}", id);
            return Ok(());
        };
        let prev = prev_divider(&self.slots, slot);
        let next = next_divider(&self.slots, slot);
        if prev.is_none() && next.is_none() {
            tracing::debug!("Resize ignored: {} has no dividers to move", id);
            return Ok(());
        }

        let target = match size {
            Some(size) => size,
            None => self.content_extent(slot)?,
        }
        .max(0.0);
        let current = self.outer_size(slot)?;
        let need = target - current;
        if need.abs() <= self.settings.tolerance {
            return Ok(());
        }
        let partition = options
            .partition
            .unwrap_or(self.settings.default_partition)
            .clamp(0.0, 1.0);

        let was_fixed = self.slots[slot]
            .as_box_mut()
            .map(|pane| std::mem::replace(&mut pane.fixed, false))
            .unwrap_or(false);
        let result = self.grow_between(prev, next, need, partition);
        if let Some(pane) = self.slots[slot].as_box_mut() {
            pane.fixed = was_fixed;
        }
        result
    }

    /// Grow (or shrink) the box bounded by `prev`/`next` dividers by `need`.
    /// Whatever one divider cannot supply is asked of the other.
    fn grow_between(
        &mut self,
        prev: Option<usize>,
        next: Option<usize>,
        need: f64,
        partition: f64,
    ) -> Result<(), LayoutError> {
        let (via_prev, via_next) = match (prev, next) {
            (Some(_), Some(_)) => (need * partition, need * (1.0 - partition)),
            (Some(_), None) => (need, 0.0),
            (None, Some(_)) => (0.0, need),
            (None, None) => return Ok(()),
        };
        let tolerance = self.settings.tolerance;

        let mut left_over = via_next;
        if let Some(divider) = next {
            if via_next.abs() > tolerance {
                left_over -= self.move_divider(via_next, divider)?;
            }
        }
        let wanted = via_prev + left_over;
        left_over = wanted;
        if let Some(divider) = prev {
            if wanted.abs() > tolerance {
                left_over += self.move_divider(-wanted, divider)?;
            }
        }
        if let Some(divider) = next {
            if left_over.abs() > tolerance {
                self.move_divider(left_over, divider)?;
            }
        }
        Ok(())
    }

    pub fn minimize(&mut self, id: BoxId, options: ResizeOptions) -> Result<(), LayoutError> {
        self.resize(id, Some(0.0), options)
    }

    pub fn maximize(&mut self, id: BoxId) -> Result<(), LayoutError> {
        let container = self.host.container_size(self.axis)?;
        self.resize(id, Some(container), ResizeOptions::partition(0.5))
    }

    pub fn fit_to_contents(&mut self, id: BoxId, options: ResizeOptions) -> Result<(), LayoutError> {
        self.resize(id, None, options)
    }

    /// Collapse a box and hide one of its dividers
    pub fn hide(&mut self, id: BoxId, options: ResizeOptions) -> Result<(), LayoutError> {
        let Some(slot) = find_box(&self.slots, id) else {
            tracing::debug!("Hide ignored: unknown {}", id);
            return Ok(());
        };
        if self.slots[slot].as_box().is_some_and(|pane| pane.hidden) {
            return Ok(());
        }

        self.resize(id, Some(0.0), options)?;
        let left = self.outer_size(slot)?;
        if left > self.settings.tolerance {
            // Bounds kept it open; let the next adjustment hand its space out
            self.set_outer_size(slot, 0.0)?;
            self.managed_size -= left;
        }

        let element = match self.slots[slot].as_box_mut() {
            Some(pane) => {
                pane.hidden = true;
                pane.element
            }
            None => return Ok(()),
        };
        self.host.set_hidden(element, true)?;

        let claimed = match adjacent_divider(&self.slots, slot, false) {
            Some(divider) => Some((divider, true)),
            None => adjacent_divider(&self.slots, slot, true).map(|divider| (divider, false)),
        };
        if let Some((divider_slot, forward_adjust)) = claimed {
            self.hide_divider_slot(divider_slot, forward_adjust)?;
            if let (Some(divider), Some(pane)) = (
                self.slots[divider_slot].as_divider().map(|d| d.id),
                self.slots[slot].as_box_mut(),
            ) {
                pane.hidden_divider = Some(HiddenDivider {
                    divider,
                    forward_adjust,
                });
            }
        }
        if let Some(pane) = self.slots[slot].as_box_mut() {
            pane.needs_divider_claim = false;
        }
        tracing::debug!("Hid {}", id);
        self.refresh()
    }

    /// Reverse `hide`, then size the box to its contents
    pub fn show(&mut self, id: BoxId, options: ResizeOptions) -> Result<(), LayoutError> {
        let Some(slot) = find_box(&self.slots, id) else {
            tracing::debug!("Show ignored: unknown {}", id);
            return Ok(());
        };
        let Some(pane) = self.slots[slot].as_box_mut() else {
            return Ok(());
        };
        if !pane.hidden {
            return Ok(());
        }
        pane.hidden = false;
        pane.needs_divider_claim = false;
        let element = pane.element;
        let claim = pane.hidden_divider.take();
        self.host.set_hidden(element, false)?;

        if let Some(claim) = claim {
            if let Some(divider_slot) = find_divider(&self.slots, claim.divider) {
                self.show_divider_slot(divider_slot, claim.forward_adjust)?;
            }
        }
        self.refresh()?;
        tracing::debug!("Showed {}", id);
        self.fit_to_contents(id, options)
    }

    pub fn fix_size(&mut self, id: BoxId) -> Result<(), LayoutError> {
        self.set_fixed(id, true)
    }

    pub fn unfix_size(&mut self, id: BoxId) -> Result<(), LayoutError> {
        self.set_fixed(id, false)
    }

    fn set_fixed(&mut self, id: BoxId, fixed: bool) -> Result<(), LayoutError> {
        let Some(pane) = find_box(&self.slots, id).and_then(|slot| self.slots[slot].as_box_mut()) else {
            tracing::debug!("Fix toggle ignored: unknown {}", id);
            return Ok(());
        };
        pane.fixed = fixed;
        self.refresh()
    }

    /// Show a divider, taking its space from the box before it
    /// (`forward_adjust`) or after it
    pub fn show_divider(&mut self, id: DividerId, forward_adjust: bool) -> Result<(), LayoutError> {
        let Some(slot) = find_divider(&self.slots, id) else {
            tracing::debug!("Show ignored: unknown {}", id);
            return Ok(());
        };
        if self.slots[slot].as_divider().is_some_and(|d| d.visible) {
            return Ok(());
        }
        for slot in self.slots.iter_mut() {
            if let Some(pane) = slot.as_box_mut() {
                if pane.hidden_divider.is_some_and(|claim| claim.divider == id) {
                    pane.hidden_divider = None;
                }
            }
        }
        self.show_divider_slot(slot, forward_adjust)?;
        self.refresh()
    }

    /// Hide a divider, giving its space to the box before it
    /// (`forward_adjust`) or after it
    pub fn hide_divider(&mut self, id: DividerId, forward_adjust: bool) -> Result<(), LayoutError> {
        let Some(slot) = find_divider(&self.slots, id) else {
            tracing::debug!("Hide ignored: unknown {}", id);
            return Ok(());
        };
        if self.slots[slot].as_divider().is_some_and(|d| !d.visible) {
            return Ok(());
        }
        self.hide_divider_slot(slot, forward_adjust)?;
        self.refresh()
    }

    fn hide_divider_slot(&mut self, slot: usize, forward_adjust: bool) -> Result<(), LayoutError> {
        let target = if forward_adjust {
            prev_box(&self.slots, slot)
        } else {
            next_box(&self.slots, slot)
        };
        let Some(divider) = self.slots[slot].as_divider_mut() else {
            return Ok(());
        };
        divider.visible = false;
        let freed = divider.size;
        match target {
            Some(target) => {
                let size = self.outer_size(target)?;
                self.set_outer_size(target, size + freed)?;
            }
            None => self.managed_size -= freed,
        }
        Ok(())
    }

    fn show_divider_slot(&mut self, slot: usize, forward_adjust: bool) -> Result<(), LayoutError> {
        let target = if forward_adjust {
            prev_box(&self.slots, slot)
        } else {
            next_box(&self.slots, slot)
        };
        let Some(divider) = self.slots[slot].as_divider_mut() else {
            return Ok(());
        };
        divider.visible = true;
        let needed = divider.size;
        let taken = match target {
            Some(target) => {
                let size = self.outer_size(target)?;
                let shrunk = (size - needed).max(0.0);
                self.set_outer_size(target, shrunk)?;
                size - shrunk
            }
            None => 0.0,
        };
        self.managed_size += needed - taken;
        Ok(())
    }

    /// Sum of box sizes and visible divider sizes
    pub fn total_size(&self) -> Result<f64, LayoutError> {
        let mut total = 0.0;
        for slot in 0..self.slots.len() {
            total += self.extent(slot)?;
        }
        Ok(total)
    }

    /// Whether the boxes and visible dividers exactly fill the container
    pub fn check_invariant(&self) -> Result<bool, LayoutError> {
        let container = self.host.container_size(self.axis)?;
        let slack = self.settings.tolerance * (self.slots.len() as f64 + 1.0);
        Ok((self.total_size()? - container).abs() <= slack)
    }

    pub fn snapshot(&self) -> Result<LayoutSnapshot, LayoutError> {
        let mut boxes = Vec::new();
        let mut dividers = Vec::new();
        for (slot, item) in self.slots.iter().enumerate() {
            match item {
                Slot::Box(pane) => boxes.push(BoxSnapshot {
                    id: pane.id,
                    position: self.position(slot)?,
                    size: self.outer_size(slot)?,
                    fixed: pane.fixed,
                    hidden: pane.hidden,
                }),
                Slot::Divider(divider) => dividers.push(DividerSnapshot {
                    id: divider.id,
                    position: divider.position,
                    size: divider.size,
                    visible: divider.visible,
                    fixed: divider.fixed,
                }),
            }
        }
        Ok(LayoutSnapshot {
            axis: self.axis,
            container: self.host.container_size(self.axis)?,
            boxes,
            dividers,
        })
    }

    /// Take the queued notifications
    pub fn drain_events(&mut self) -> Vec<LayoutEvent> {
        std::mem::take(&mut self.events)
    }

    /// Tear down: generated dividers and virtual sizes are discarded and the
    /// host handed back
    pub fn dispose(mut self) -> H {
        self.drag = None;
        self.slots.clear();
        self.host
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Direct host access, e.g. to change the container size before
    /// `container_resized`. Box geometry must not be changed behind the
    /// engine's back.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn box_count(&self) -> usize {
        box_slots(&self.slots).count()
    }

    pub fn box_ids(&self) -> Vec<BoxId> {
        self.slots.iter().filter_map(|s| s.as_box()).map(|p| p.id).collect()
    }

    pub fn divider_ids(&self) -> Vec<DividerId> {
        self.slots.iter().filter_map(|s| s.as_divider()).map(|d| d.id).collect()
    }

    pub fn box_index(&self, id: BoxId) -> Option<usize> {
        self.box_ids().iter().position(|&b| b == id)
    }

    pub fn pane(&self, id: BoxId) -> Option<&Pane<H::Element>> {
        find_box(&self.slots, id).and_then(|slot| self.slots[slot].as_box())
    }

    pub fn divider(&self, id: DividerId) -> Option<&Divider> {
        find_divider(&self.slots, id).and_then(|slot| self.slots[slot].as_divider())
    }

    /// Current outer size of a box
    pub fn size_of(&self, id: BoxId) -> Result<Option<f64>, LayoutError> {
        match find_box(&self.slots, id) {
            Some(slot) => Ok(Some(self.outer_size(slot)?)),
            None => Ok(None),
        }
    }

    /// The visible dividers before and after a box
    pub fn dividers_of(&self, id: BoxId) -> (Option<DividerId>, Option<DividerId>) {
        let Some(slot) = find_box(&self.slots, id) else {
            return (None, None);
        };
        let id_at = |d: usize| self.slots[d].as_divider().map(|d| d.id);
        (
            prev_divider(&self.slots, slot).and_then(id_at),
            next_divider(&self.slots, slot).and_then(id_at),
        )
    }

    /// The visible divider separating two neighbouring visible boxes
    pub fn divider_between(&self, a: BoxId, b: BoxId) -> Option<DividerId> {
        let (a, b) = (find_box(&self.slots, a)?, find_box(&self.slots, b)?);
        let (first, second) = (a.min(b), a.max(b));
        let divider = next_divider(&self.slots, first)?;
        (next_box(&self.slots, divider) == Some(second))
            .then(|| self.slots[divider].as_divider().map(|d| d.id))
            .flatten()
    }
}
