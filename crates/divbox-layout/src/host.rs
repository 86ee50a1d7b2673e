// ABOUTME: The box model the engine drives: sizes, positions, content extents.
// ABOUTME: Implemented by the embedding UI; geometry read failures surface as HostError.

use divbox_core::Axis;
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("Element {0} is detached and cannot report geometry")]
    Detached(String),

    #[error("Unknown element {0}")]
    Unknown(String),
}

/// Geometry access for the container and its child boxes.
///
/// Sizes passed to `set_size` are content sizes: the host adds its own
/// border and padding ("chrome") on top, so the outer size of an element is
/// `size + chrome`. The engine never sets a negative content size.
pub trait BoxHost {
    /// Handle for one child element
    type Element: Copy + Eq + Hash + Debug;

    /// Client size of the container along `axis`
    fn container_size(&self, axis: Axis) -> Result<f64, HostError>;

    /// Outer size (content + border + padding) of an element along `axis`
    fn outer_size(&self, element: Self::Element, axis: Axis) -> Result<f64, HostError>;

    /// Border + padding of an element along `axis`
    fn chrome(&self, element: Self::Element, axis: Axis) -> Result<f64, HostError>;

    /// Set the content size of an element along `axis`
    fn set_size(&mut self, element: Self::Element, axis: Axis, size: f64) -> Result<(), HostError>;

    fn position(&self, element: Self::Element, axis: Axis) -> Result<f64, HostError>;

    fn set_position(
        &mut self,
        element: Self::Element,
        axis: Axis,
        position: f64,
    ) -> Result<(), HostError>;

    /// Intrinsic content extent: the scroll size, or the preferred size
    /// reported by a collapsible companion. Excludes chrome.
    fn content_size(&self, element: Self::Element, axis: Axis) -> Result<f64, HostError>;

    fn is_hidden(&self, element: Self::Element) -> Result<bool, HostError>;

    fn set_hidden(&mut self, element: Self::Element, hidden: bool) -> Result<(), HostError>;
}
