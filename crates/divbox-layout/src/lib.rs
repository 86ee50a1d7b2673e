// ABOUTME: Divided box layout engine: boxes in a row or column separated by draggable dividers.
// ABOUTME: Sizes are spread across boxes on container resize and moved between neighbours on drag.

mod drag;
mod engine;
mod geometry;
mod group;
mod host;
mod memory;
mod model;
mod mover;
mod redistribute;
mod topology;

pub use divbox_core::{Axis, BoxConfig, BoxId, DividerId, EngineSettings, LayoutSnapshot};
pub use drag::{TrackEvent, TrackPhase};
pub use engine::{DividedBox, LayoutError, ResizeOptions};
pub use host::{BoxHost, HostError};
pub use memory::{ElementId, MemoryHost};
pub use model::{Divider, LayoutEvent, Pane};
pub use mover::TravelWindow;
