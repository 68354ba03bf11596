//! Layout contracts & policies for drawer containers

mod alignment;
mod gravity;
mod params;

pub use alignment::*;
pub use gravity::*;
pub use params::*;

pub mod prelude {
    pub use crate::alignment::VerticalAlignment;
    pub use crate::gravity::{AbsoluteEdge, Gravity, LayoutDirection};
    pub use crate::params::{ChildLayoutParams, Margins};
}
