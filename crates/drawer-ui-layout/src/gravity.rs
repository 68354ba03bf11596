//! Gravity bit sets and their resolution against the layout direction.
//!
//! The bit layout follows the platform convention so values coming from a
//! host toolkit can be passed through unchanged: the low nibble encodes the
//! horizontal axis, the next nibble the vertical axis, and bit 23 marks the
//! horizontal bits as relative (start/end) instead of absolute (left/right).

use crate::VerticalAlignment;

/// Direction in which a container lays out its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Raw gravity bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Gravity(pub u32);

impl Gravity {
    pub const NO_GRAVITY: Self = Self(0);

    pub const LEFT: Self = Self(0x03);
    pub const RIGHT: Self = Self(0x05);
    pub const CENTER_HORIZONTAL: Self = Self(0x01);

    pub const TOP: Self = Self(0x30);
    pub const BOTTOM: Self = Self(0x50);
    pub const CENTER_VERTICAL: Self = Self(0x10);

    pub const RELATIVE_LAYOUT_DIRECTION: Self = Self(0x0080_0000);
    pub const START: Self = Self(0x0080_0003);
    pub const END: Self = Self(0x0080_0005);

    pub const HORIZONTAL_MASK: u32 = 0x07;
    pub const VERTICAL_MASK: u32 = 0x70;
    pub const RELATIVE_HORIZONTAL_MASK: u32 = Self::START.0 | Self::END.0;

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn union(self, other: Gravity) -> Self {
        Self(self.0 | other.0)
    }

    /// True when this gravity names exactly one horizontal side, either
    /// absolute (left/right) or relative (start/end).
    pub fn is_horizontal_edge(&self) -> bool {
        matches!(*self, Self::LEFT | Self::RIGHT | Self::START | Self::END)
    }

    /// Replaces relative start/end bits by absolute left/right ones.
    pub fn absolute(self, direction: LayoutDirection) -> Self {
        let mut result = self.0;
        if result & Self::RELATIVE_LAYOUT_DIRECTION.0 == 0 {
            return self;
        }
        let rtl = direction == LayoutDirection::Rtl;
        if result & Self::START.0 == Self::START.0 {
            result &= !Self::START.0;
            result |= if rtl { Self::RIGHT.0 } else { Self::LEFT.0 };
        } else if result & Self::END.0 == Self::END.0 {
            result &= !Self::END.0;
            result |= if rtl { Self::LEFT.0 } else { Self::RIGHT.0 };
        }
        Self(result & !Self::RELATIVE_LAYOUT_DIRECTION.0)
    }

    /// Vertical component as an alignment; anything unrecognised aligns to
    /// the top.
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        match self.0 & Self::VERTICAL_MASK {
            v if v == Self::BOTTOM.0 => VerticalAlignment::Bottom,
            v if v == Self::CENTER_VERTICAL.0 => VerticalAlignment::CenterVertically,
            _ => VerticalAlignment::Top,
        }
    }
}

/// Screen edge a drawer is attached to once relative gravity is resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AbsoluteEdge {
    Left,
    Right,
}

impl AbsoluteEdge {
    /// Resolves a horizontal edge gravity. Returns `None` for gravities that
    /// do not name a single horizontal side.
    pub fn resolve(gravity: Gravity, direction: LayoutDirection) -> Option<Self> {
        if !gravity.is_horizontal_edge() {
            return None;
        }
        match gravity.absolute(direction) {
            Gravity::LEFT => Some(AbsoluteEdge::Left),
            Gravity::RIGHT => Some(AbsoluteEdge::Right),
            _ => None,
        }
    }

    #[inline]
    pub fn is_left(self) -> bool {
        matches!(self, AbsoluteEdge::Left)
    }
}

#[cfg(test)]
#[path = "tests/gravity_tests.rs"]
mod tests;
