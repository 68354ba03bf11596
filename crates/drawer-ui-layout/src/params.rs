//! Per-child layout parameters supplied by the container

use crate::Gravity;

/// Vertical margins of a child. Horizontal margins are ignored for drawers,
/// which always hug their edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Margins {
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    pub const fn vertical(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }
}

/// Layout parameters the container attaches to each child.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ChildLayoutParams {
    pub gravity: Gravity,
    pub margins: Margins,
}

impl ChildLayoutParams {
    pub const fn new(gravity: Gravity, margins: Margins) -> Self {
        Self { gravity, margins }
    }
}
