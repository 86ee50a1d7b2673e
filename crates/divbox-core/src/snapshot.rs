// ABOUTME: Serializable picture of a divided box's current geometry.
// ABOUTME: Used for logging, the scenario runner's output, and test assertions.

use serde::{Deserialize, Serialize};

use crate::{Axis, BoxId, DividerId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSnapshot {
    pub id: BoxId,
    pub position: f64,
    pub size: f64,
    pub fixed: bool,
    pub hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerSnapshot {
    pub id: DividerId,
    pub position: f64,
    pub size: f64,
    pub visible: bool,
    pub fixed: bool,
}

/// Boxes and dividers in layout order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub axis: Axis,
    pub container: f64,
    pub boxes: Vec<BoxSnapshot>,
    pub dividers: Vec<DividerSnapshot>,
}

impl LayoutSnapshot {
    /// Sum of box sizes plus visible divider sizes
    pub fn total(&self) -> f64 {
        let boxes: f64 = self.boxes.iter().map(|b| b.size).sum();
        let dividers: f64 = self
            .dividers
            .iter()
            .filter(|d| d.visible)
            .map(|d| d.size)
            .sum();
        boxes + dividers
    }

    pub fn sizes(&self) -> Vec<f64> {
        self.boxes.iter().map(|b| b.size).collect()
    }

    pub fn find(&self, id: BoxId) -> Option<&BoxSnapshot> {
        self.boxes.iter().find(|b| b.id == id)
    }
}
