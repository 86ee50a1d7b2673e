// ABOUTME: Reads and writes box geometry along the layout axis through the host.
// ABOUTME: Tracks a virtual size when a box is asked to be smaller than its border + padding.

use crate::engine::{DividedBox, LayoutError};
use crate::host::BoxHost;
use crate::model::{LayoutEvent, Slot};

impl<H: BoxHost> DividedBox<H> {
    /// Outer size of the box at `slot`: the virtual size when one is recorded
    pub(crate) fn outer_size(&self, slot: usize) -> Result<f64, LayoutError> {
        match &self.slots[slot] {
            Slot::Box(pane) => match pane.virtual_size {
                Some(size) => Ok(size),
                None => Ok(self.host.outer_size(pane.element, self.axis)?),
            },
            Slot::Divider(divider) => Ok(divider.size),
        }
    }

    /// Set the outer size of the box at `slot`. A size below the box's chrome
    /// renders as zero content and is remembered as the virtual size.
    /// `SizeChanged` fires only when the rendered content changes.
    pub(crate) fn set_outer_size(&mut self, slot: usize, size: f64) -> Result<(), LayoutError> {
        let Slot::Box(pane) = &self.slots[slot] else {
            return Ok(());
        };
        let (id, element, was_virtual) = (pane.id, pane.element, pane.virtual_size.is_some());
        let size = size.max(0.0);
        let old = self.outer_size(slot)?;
        let chrome = self.host.chrome(element, self.axis)?;
        let old_content = if was_virtual { 0.0 } else { (old - chrome).max(0.0) };

        let content = size - chrome;
        let virtual_size = if content < 0.0 {
            self.host.set_size(element, self.axis, 0.0)?;
            Some(size)
        } else {
            self.host.set_size(element, self.axis, content)?;
            None
        };
        if let Some(pane) = self.slots[slot].as_box_mut() {
            pane.virtual_size = virtual_size;
        }

        // Virtual sizes all render as bare chrome
        if (old_content - content.max(0.0)).abs() > self.settings.tolerance {
            tracing::trace!("{} resized {} -> {}", id, old, size);
            self.events.push(LayoutEvent::SizeChanged { id, old, new: size });
        }
        Ok(())
    }

    /// Space the slot takes along the axis; hidden dividers take none
    pub(crate) fn extent(&self, slot: usize) -> Result<f64, LayoutError> {
        match &self.slots[slot] {
            Slot::Box(_) => self.outer_size(slot),
            Slot::Divider(divider) => Ok(divider.extent()),
        }
    }

    pub(crate) fn position(&self, slot: usize) -> Result<f64, LayoutError> {
        match &self.slots[slot] {
            Slot::Box(pane) => Ok(self.host.position(pane.element, self.axis)?),
            Slot::Divider(divider) => Ok(divider.position),
        }
    }

    pub(crate) fn set_position(&mut self, slot: usize, position: f64) -> Result<(), LayoutError> {
        match &mut self.slots[slot] {
            Slot::Box(pane) => {
                let element = pane.element;
                self.host.set_position(element, self.axis, position)?;
            }
            Slot::Divider(divider) => divider.position = position,
        }
        Ok(())
    }

    pub(crate) fn shift(&mut self, slot: usize, by: f64) -> Result<(), LayoutError> {
        let position = self.position(slot)?;
        self.set_position(slot, position + by)
    }

    /// Where the box at `slot` ends along the axis
    pub(crate) fn trailing_edge(&self, slot: usize) -> Result<f64, LayoutError> {
        Ok(self.position(slot)? + self.outer_size(slot)?)
    }

    /// Size the box would need to show all of its content
    pub(crate) fn content_extent(&self, slot: usize) -> Result<f64, LayoutError> {
        match &self.slots[slot] {
            Slot::Box(pane) => {
                let content = self.host.content_size(pane.element, self.axis)?;
                let chrome = self.host.chrome(pane.element, self.axis)?;
                Ok(content + chrome)
            }
            Slot::Divider(divider) => Ok(divider.size),
        }
    }
}
