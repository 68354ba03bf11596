//! The container a drawer lives in, as seen by its controller.

use drawer_foundation::{DragState, PointerEvent, ViewHost, ViewId};
use drawer_ui_graphics::{ArgbColor, IntRect, IntSize};
use drawer_ui_layout::{ChildLayoutParams, LayoutDirection};

/// View visibility. Invisible views keep their layout slot; gone views
/// do not take part in layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Invisible,
    Gone,
}

/// Whether assistive technology should see a view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessibilityImportance {
    Yes,
    /// Hidden together with all of its descendants.
    NoHideDescendants,
}

/// View an accessibility event is sent from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessibilitySource {
    /// The root of the window the container is attached to.
    Root,
    /// The container itself.
    Container,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessibilityEventType {
    WindowStateChanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Slides a closed drawer partly into view after an edge touch.
    Peek,
    /// Advances a settle animation by one frame.
    Settle,
}

/// Deferred work posted through the host. Equal tasks are the same task:
/// posting one that is already queued replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduledTask {
    pub drawer: ViewId,
    pub kind: TaskKind,
}

impl ScheduledTask {
    pub fn peek(drawer: ViewId) -> Self {
        Self {
            drawer,
            kind: TaskKind::Peek,
        }
    }

    pub fn settle(drawer: ViewId) -> Self {
        Self {
            drawer,
            kind: TaskKind::Settle,
        }
    }
}

/// Notifications about a drawer's motion and state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerEvent {
    /// The open fraction changed.
    Slide(f32),
    Opened,
    Closed,
    StateChanged(DragState),
}

/// What a scrim paints: a solid rectangle in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ScrimPaint {
    pub bounds: IntRect,
    pub color: ArgbColor,
}

/// Drawing capabilities the scrim backends need.
pub trait ScrimHost {
    /// True when the container has an overlay layer drawn above its
    /// children.
    fn supports_overlay(&self) -> bool;

    /// Adds or replaces the overlay entry owned by `owner`.
    fn overlay_put(&mut self, owner: ViewId, paint: ScrimPaint);

    fn overlay_remove(&mut self, owner: ViewId);

    /// Inserts a full-size child directly below `below`, above every child
    /// that was already below it. Returns the new child's handle.
    fn insert_scrim_view(&mut self, below: ViewId) -> ViewId;

    fn set_scrim_view_paint(&mut self, view: ViewId, paint: ScrimPaint);

    fn set_scrim_view_visible(&mut self, view: ViewId, visible: bool);
}

/// Everything a drawer controller needs from its container.
///
/// Implemented by the integration layer over a real toolkit, and by
/// `drawer-testing` over an in-memory container.
pub trait ContainerHost: ViewHost + ScrimHost {
    fn layout_direction(&self) -> LayoutDirection;

    fn measured_size(&self, view: ViewId) -> IntSize;

    fn layout_params(&self, view: ViewId) -> ChildLayoutParams;

    /// Places a child at absolute bounds.
    fn layout_view(&mut self, view: ViewId, bounds: IntRect);

    fn visibility(&self, view: ViewId) -> Visibility;

    fn set_visibility(&mut self, view: ViewId, visibility: Visibility);

    fn set_accessibility_importance(&mut self, view: ViewId, importance: AccessibilityImportance);

    fn has_window_focus(&self) -> bool;

    fn send_accessibility_event(
        &mut self,
        source: AccessibilitySource,
        event: AccessibilityEventType,
    );

    fn request_focus(&mut self, view: ViewId) -> bool;

    /// Schedules a redraw of the container.
    fn invalidate(&mut self);

    /// Delivers `event` to a child's own touch handling.
    fn dispatch_touch_event(&mut self, view: ViewId, event: &PointerEvent) -> bool;

    fn post_delayed(&mut self, task: ScheduledTask, delay_millis: u64);

    /// Runs `task` before the next frame is drawn.
    fn post_on_animation(&mut self, task: ScheduledTask);

    fn remove_callbacks(&mut self, task: ScheduledTask);

    fn on_drawer_event(&mut self, _drawer: ViewId, _event: DrawerEvent) {}
}
