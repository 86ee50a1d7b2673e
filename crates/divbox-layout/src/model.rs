// ABOUTME: Records the engine keeps for boxes and dividers, and the notifications it emits.
// ABOUTME: Boxes and dividers live interleaved in one ordered slot list.

use divbox_core::{BoxConfig, BoxId, DividerId};

/// A divider hidden on behalf of a hidden box, and the side whose box
/// took over its space (true = the box before the divider)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenDivider {
    pub divider: DividerId,
    pub forward_adjust: bool,
}

/// A managed box
#[derive(Debug, Clone)]
pub struct Pane<E> {
    pub(crate) id: BoxId,
    pub(crate) element: E,
    pub(crate) config: BoxConfig,
    /// Sticky pin set by the caller
    pub(crate) fixed: bool,
    /// Transient pin held for the length of one redistribution
    pub(crate) keep: bool,
    pub(crate) hidden: bool,
    /// Footprint recorded when the requested size is smaller than the chrome
    pub(crate) virtual_size: Option<f64>,
    /// Counted in the engine's managed size record
    pub(crate) managed: bool,
    pub(crate) hidden_divider: Option<HiddenDivider>,
    /// Hidden without having hidden one of its dividers yet
    pub(crate) needs_divider_claim: bool,
}

impl<E: Copy> Pane<E> {
    pub(crate) fn new(id: BoxId, element: E, config: BoxConfig, hidden: bool) -> Self {
        Self {
            id,
            element,
            config,
            fixed: config.fixed_size,
            keep: false,
            hidden,
            virtual_size: None,
            managed: false,
            hidden_divider: None,
            needs_divider_claim: hidden,
        }
    }

    pub fn id(&self) -> BoxId {
        self.id
    }

    pub fn element(&self) -> E {
        self.element
    }

    pub fn config(&self) -> &BoxConfig {
        &self.config
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn virtual_size(&self) -> Option<f64> {
        self.virtual_size
    }
}

impl<E> Pane<E> {
    /// Size must not change while a neighbouring divider moves
    pub(crate) fn is_pinned(&self) -> bool {
        self.fixed || self.keep
    }

    /// Takes part in proportional redistribution
    pub(crate) fn is_unfixed(&self) -> bool {
        !self.fixed && !self.keep && !self.hidden
    }
}

#[derive(Debug, Clone)]
pub struct Divider {
    pub(crate) id: DividerId,
    pub(crate) size: f64,
    pub(crate) position: f64,
    pub(crate) visible: bool,
    /// Derived on every refresh: moving it would resize a fixed box
    pub(crate) fixed: bool,
}

impl Divider {
    pub(crate) fn new(id: DividerId, size: f64) -> Self {
        Self {
            id,
            size,
            position: 0.0,
            visible: true,
            fixed: false,
        }
    }

    pub fn id(&self) -> DividerId {
        self.id
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Space taken along the axis
    pub(crate) fn extent(&self) -> f64 {
        if self.visible {
            self.size
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone)]
pub enum Slot<E> {
    Box(Pane<E>),
    Divider(Divider),
}

impl<E> Slot<E> {
    pub fn as_box(&self) -> Option<&Pane<E>> {
        match self {
            Slot::Box(pane) => Some(pane),
            Slot::Divider(_) => None,
        }
    }

    pub fn as_box_mut(&mut self) -> Option<&mut Pane<E>> {
        match self {
            Slot::Box(pane) => Some(pane),
            Slot::Divider(_) => None,
        }
    }

    pub fn as_divider(&self) -> Option<&Divider> {
        match self {
            Slot::Divider(divider) => Some(divider),
            Slot::Box(_) => None,
        }
    }

    pub fn as_divider_mut(&mut self) -> Option<&mut Divider> {
        match self {
            Slot::Divider(divider) => Some(divider),
            Slot::Box(_) => None,
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self, Slot::Box(_))
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, Slot::Divider(_))
    }
}

/// Notifications queued for the host, drained with `DividedBox::drain_events`
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// A box's outer size changed
    SizeChanged { id: BoxId, old: f64, new: f64 },
    /// A divider drag began; `prev`/`next` are the boxes that will resize
    DragStarted {
        prev: BoxId,
        next: BoxId,
        dividers: Vec<DividerId>,
    },
    /// A drag step was applied
    DragMoved {
        prev: BoxId,
        next: BoxId,
        dividers: Vec<DividerId>,
        delta: f64,
    },
    DragEnded {
        prev: BoxId,
        next: BoxId,
        dividers: Vec<DividerId>,
    },
}
