//! Pure math/data for drawing & units used by the drawer crates
//!
//! This crate contains the integer geometry primitives views are laid out
//! with, packed ARGB colors, and density-independent units.

mod color;
mod geometry;
mod unit;

pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::ArgbColor;
    pub use crate::geometry::{IntRect, IntSize, Point};
    pub use crate::unit::Dp;
}
