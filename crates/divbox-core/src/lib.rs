// ABOUTME: Shared types and configuration for the divided box layout engine.
// ABOUTME: Defines the layout axis, box/divider ids, settings, and snapshots.

pub mod axis;
pub mod config;
pub mod ids;
pub mod snapshot;

pub use axis::Axis;
pub use config::{BoxConfig, ConfigError, EngineSettings};
pub use ids::{BoxId, DividerId};
pub use snapshot::{BoxSnapshot, DividerSnapshot, LayoutSnapshot};
