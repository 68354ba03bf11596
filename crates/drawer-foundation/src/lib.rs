//! Pointer input, velocity tracking and view dragging for drawers
//!
//! The centrepiece is [`DragHelper`], a reusable state machine that turns a
//! stream of pointer events into captured-view drags, edge swipes and
//! settle animations. Policy decisions (which view may be dragged, how far,
//! where it settles) are delegated to a [`DragCallback`].

pub mod drag;
pub mod gesture_constants;
pub mod input;
pub mod velocity_tracker;

pub use drag::{
    DragCallback, DragDirection, DragError, DragHelper, DragHelperConfig, DragState, EdgeFlags,
    ViewHost, ViewId,
};
pub use drawer_animation::Easing;
pub use drawer_ui_graphics::{IntRect, IntSize, Point};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker;

pub mod prelude {
    pub use crate::drag::{
        DragCallback, DragDirection, DragHelper, DragHelperConfig, DragState, EdgeFlags,
        ViewHost, ViewId,
    };
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId};
}
