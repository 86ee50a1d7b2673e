// ABOUTME: In-memory box model implementing BoxHost.
// ABOUTME: Backs the scenario runner and tests; supports detaching elements to simulate read failures.

use divbox_core::Axis;

use crate::host::{BoxHost, HostError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Debug, Clone)]
struct Element {
    size: f64,
    chrome: f64,
    position: f64,
    content: f64,
    hidden: bool,
    detached: bool,
}

/// A container and its children, measured along a single axis
#[derive(Debug, Clone)]
pub struct MemoryHost {
    axis: Axis,
    container: f64,
    elements: Vec<Element>,
}

impl MemoryHost {
    pub fn new(axis: Axis, container: f64) -> Self {
        Self {
            axis,
            container,
            elements: Vec::new(),
        }
    }

    /// Add an element with the given outer size and no chrome
    pub fn add(&mut self, outer: f64) -> ElementId {
        self.add_element(outer, 0.0, outer)
    }

    /// Add an element with explicit chrome (border + padding) and content extent
    pub fn add_element(&mut self, outer: f64, chrome: f64, content: f64) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            size: (outer - chrome).max(0.0),
            chrome,
            position: 0.0,
            content,
            hidden: false,
            detached: false,
        });
        id
    }

    /// Add several chrome-less elements at once
    pub fn add_all(&mut self, sizes: &[f64]) -> Vec<ElementId> {
        sizes.iter().map(|&s| self.add(s)).collect()
    }

    pub fn container(&self) -> f64 {
        self.container
    }

    pub fn set_container_size(&mut self, size: f64) {
        self.container = size;
    }

    /// Mark an element hidden before it is handed to the engine
    pub fn preset_hidden(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get_mut(element.0) {
            el.hidden = true;
        }
    }

    /// Make every later geometry read of `element` fail
    pub fn detach(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get_mut(element.0) {
            el.detached = true;
        }
    }

    /// Rendered content size, floored at zero
    pub fn rendered_size(&self, element: ElementId) -> Option<f64> {
        self.elements.get(element.0).map(|el| el.size)
    }

    fn get(&self, element: ElementId, axis: Axis) -> Result<&Element, HostError> {
        let el = self
            .elements
            .get(element.0)
            .ok_or_else(|| HostError::Unknown(format!("{element:?}")))?;
        if el.detached {
            return Err(HostError::Detached(format!("{element:?}")));
        }
        if axis != self.axis {
            return Err(HostError::Unknown(format!(
                "{element:?} has no {} in this container",
                axis.size_field()
            )));
        }
        Ok(el)
    }

    fn get_mut(&mut self, element: ElementId, axis: Axis) -> Result<&mut Element, HostError> {
        self.get(element, axis)?;
        Ok(&mut self.elements[element.0])
    }
}

impl BoxHost for MemoryHost {
    type Element = ElementId;

    fn container_size(&self, axis: Axis) -> Result<f64, HostError> {
        if axis != self.axis {
            return Err(HostError::Unknown(format!(
                "container has no {} along this axis",
                axis.size_field()
            )));
        }
        Ok(self.container)
    }

    fn outer_size(&self, element: ElementId, axis: Axis) -> Result<f64, HostError> {
        let el = self.get(element, axis)?;
        Ok(el.size + el.chrome)
    }

    fn chrome(&self, element: ElementId, axis: Axis) -> Result<f64, HostError> {
        Ok(self.get(element, axis)?.chrome)
    }

    fn set_size(&mut self, element: ElementId, axis: Axis, size: f64) -> Result<(), HostError> {
        self.get_mut(element, axis)?.size = size.max(0.0);
        Ok(())
    }

    fn position(&self, element: ElementId, axis: Axis) -> Result<f64, HostError> {
        Ok(self.get(element, axis)?.position)
    }

    fn set_position(
        &mut self,
        element: ElementId,
        axis: Axis,
        position: f64,
    ) -> Result<(), HostError> {
        self.get_mut(element, axis)?.position = position;
        Ok(())
    }

    fn content_size(&self, element: ElementId, axis: Axis) -> Result<f64, HostError> {
        Ok(self.get(element, axis)?.content)
    }

    fn is_hidden(&self, element: ElementId) -> Result<bool, HostError> {
        let axis = self.axis;
        Ok(self.get(element, axis)?.hidden)
    }

    fn set_hidden(&mut self, element: ElementId, hidden: bool) -> Result<(), HostError> {
        let axis = self.axis;
        self.get_mut(element, axis)?.hidden = hidden;
        Ok(())
    }
}
