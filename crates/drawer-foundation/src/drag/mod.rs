//! View dragging primitives: the [`DragHelper`] state machine, the
//! [`DragCallback`] policy it consults, and the [`ViewHost`] it moves views
//! within.

mod helper;
mod pointer;

pub use helper::{DragHelper, DragHelperConfig};

use drawer_ui_graphics::IntRect;
use std::fmt;

use crate::input::PointerId;

/// Stable handle of a child view inside its container.
pub type ViewId = usize;

/// State of the drag helper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragState {
    /// No view is being dragged or animated.
    #[default]
    Idle,
    /// A view is following a pointer.
    Dragging,
    /// A view is animating toward a settle position.
    Settling,
}

/// Set of container edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct EdgeFlags(u8);

impl EdgeFlags {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const TOP: Self = Self(1 << 2);
    pub const BOTTOM: Self = Self(1 << 3);

    pub fn contains(&self, other: EdgeFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn intersection(self, other: EdgeFlags) -> Self {
        Self(self.0 & other.0)
    }

    pub fn insert(&mut self, other: EdgeFlags) {
        self.0 |= other.0;
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// Axes considered by a touch slop check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    Horizontal,
    Vertical,
    All,
}

impl DragDirection {
    pub fn horizontal(self) -> bool {
        matches!(self, DragDirection::Horizontal | DragDirection::All)
    }

    pub fn vertical(self) -> bool {
        matches!(self, DragDirection::Vertical | DragDirection::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragError {
    /// `settle_captured_view_at` was called outside `on_view_released`.
    SettleOutsideRelease,
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DragError::SettleOutsideRelease => {
                write!(f, "settle_captured_view_at called outside on_view_released")
            }
        }
    }
}

impl std::error::Error for DragError {}

/// The container whose children the helper drags.
///
/// Coordinates are container-local; children are ordered back to front.
pub trait ViewHost {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn child_count(&self) -> usize;

    fn child_at(&self, index: usize) -> ViewId;

    fn view_bounds(&self, view: ViewId) -> IntRect;

    /// Moves a child without a layout pass.
    fn offset_view(&mut self, view: ViewId, dx: i32, dy: i32);

    /// Pixels per dp.
    fn density(&self) -> f32;

    /// Milliseconds on a monotonic clock, the same clock pointer events are
    /// stamped with.
    fn uptime_millis(&self) -> u64;
}

/// Policy and notifications for a [`DragHelper`].
///
/// Only [`try_capture_view`](DragCallback::try_capture_view) is required;
/// the default ranges and clamps keep a captured view in place.
pub trait DragCallback<H: ViewHost> {
    /// Whether `view` may be captured by `pointer`.
    fn try_capture_view(&mut self, host: &H, view: ViewId, pointer: PointerId) -> bool;

    fn view_horizontal_drag_range(&self, _host: &H, _view: ViewId) -> i32 {
        0
    }

    fn view_vertical_drag_range(&self, _host: &H, _view: ViewId) -> i32 {
        0
    }

    fn clamp_view_position_horizontal(
        &self,
        _host: &H,
        _view: ViewId,
        _left: i32,
        _dx: i32,
    ) -> i32 {
        0
    }

    fn clamp_view_position_vertical(
        &self,
        _host: &H,
        _view: ViewId,
        _top: i32,
        _dy: i32,
    ) -> i32 {
        0
    }

    fn on_view_captured(&mut self, _host: &mut H, _view: ViewId, _pointer: PointerId) {}

    /// The captured view was let go. Call
    /// [`DragHelper::settle_captured_view_at`] from here to animate it.
    fn on_view_released(
        &mut self,
        _helper: &mut DragHelper,
        _host: &mut H,
        _view: ViewId,
        _xvel: f32,
        _yvel: f32,
    ) {
    }

    /// `captured` is the view that was captured when the state changed; it
    /// is cleared right after an `Idle` notification.
    fn on_view_drag_state_changed(
        &mut self,
        _host: &mut H,
        _state: DragState,
        _captured: Option<ViewId>,
    ) {
    }

    fn on_view_position_changed(
        &mut self,
        _host: &mut H,
        _view: ViewId,
        _left: i32,
        _top: i32,
        _dx: i32,
        _dy: i32,
    ) {
    }

    /// A pointer went down inside the tracked edge strip.
    fn on_edge_touched(&mut self, _host: &mut H, _edges: EdgeFlags, _pointer: PointerId) {}

    /// Return true to lock out edge drags on `edges` for the current
    /// gesture when the pointer moves mostly along the edge.
    fn on_edge_lock(&mut self, _edges: EdgeFlags) -> bool {
        false
    }

    /// A pointer that started on a tracked edge moved past the touch slop
    /// away from it, with no view captured yet.
    fn on_edge_drag_started(
        &mut self,
        _helper: &mut DragHelper,
        _host: &mut H,
        _edges: EdgeFlags,
        _pointer: PointerId,
    ) {
    }
}
