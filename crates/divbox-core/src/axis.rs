// ABOUTME: The single dimension a divided box lays its children out along.
// ABOUTME: Sizes are widths for horizontal layouts and heights for vertical ones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Boxes sit side by side; sizes are widths, positions are lefts
    #[default]
    Horizontal,
    /// Boxes are stacked; sizes are heights, positions are tops
    Vertical,
}

impl Axis {
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }

    /// The geometry field holding the size along this axis
    pub fn size_field(&self) -> &'static str {
        match self {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        }
    }
}
