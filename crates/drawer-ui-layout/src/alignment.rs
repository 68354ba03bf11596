//! Vertical placement of a drawer inside its container

use crate::Margins;

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Align to the top edge, below the top margin.
    #[default]
    Top,
    /// Center in the container, pushed back inside the margins when it
    /// would overflow them.
    CenterVertically,
    /// Align to the bottom edge, above the bottom margin.
    Bottom,
}

impl VerticalAlignment {
    /// Computes the top coordinate for a child of `child_height` inside a
    /// container of `available` height.
    pub fn place(&self, available: i32, child_height: i32, margins: Margins) -> i32 {
        match self {
            VerticalAlignment::Top => margins.top,
            VerticalAlignment::Bottom => available - margins.bottom - child_height,
            VerticalAlignment::CenterVertically => {
                let top = (available - child_height) / 2;
                if top < margins.top {
                    margins.top
                } else if top + child_height > available - margins.bottom {
                    available - margins.bottom - child_height
                } else {
                    top
                }
            }
        }
    }
}
