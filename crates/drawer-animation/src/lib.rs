//! Animation primitives for drawer motion
//!
//! Provides easing curves and a time-based [`Scroller`] that interpolates a
//! view's integer position toward a settle target.

mod easing;
mod scroller;

pub use easing::*;
pub use scroller::*;

pub mod prelude {
    pub use crate::easing::{AnimationSpec, Easing, Lerp};
    pub use crate::scroller::Scroller;
}
