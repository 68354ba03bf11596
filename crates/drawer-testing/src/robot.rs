//! Gesture robot for driving a drawer inside a [`HeadlessContainer`].
//!
//! The robot plays the container's part in touch dispatch: it offers each
//! event to the drawer behavior for interception, routes it to a content
//! child that consumes touches, and falls back to the behavior's own touch
//! handling when nothing else claims the gesture. Time only moves when the
//! test says so.
//!
//! # Example
//!
//! ```
//! use drawer_behavior::DrawerConfig;
//! use drawer_testing::{DrawerRobot, HeadlessContainer};
//! use drawer_ui_graphics::IntSize;
//! use drawer_ui_layout::{ChildLayoutParams, Gravity, Margins};
//!
//! let mut container = HeadlessContainer::new(1000, 600);
//! container.add_content();
//! let drawer = container.add_view(
//!     IntSize::new(300, 600),
//!     ChildLayoutParams::new(Gravity::END, Margins::default()),
//! );
//!
//! let mut robot = DrawerRobot::new(container, drawer, DrawerConfig::default()).unwrap();
//! robot.open(true);
//! robot.settle();
//! assert_eq!(robot.on_screen(), 1.0);
//! ```

use drawer_behavior::{
    ContainerHost, DrawerBehavior, DrawerConfig, DrawerController, DrawerError, ScrimPaint,
    Visibility,
};
use drawer_foundation::{PointerEvent, PointerEventKind, PointerId, ViewHost, ViewId};
use drawer_ui_graphics::{ArgbColor, Point};

use crate::HeadlessContainer;

/// Length of one animation frame.
pub const FRAME_MILLIS: u64 = 16;

/// Upper bound on frames [`DrawerRobot::settle`] runs.
const MAX_SETTLE_FRAMES: usize = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TouchTarget {
    None,
    Content(ViewId),
    Behavior,
}

/// Drives one drawer with pointer gestures and frame ticks.
pub struct DrawerRobot {
    container: HeadlessContainer,
    behavior: DrawerBehavior,
    drawer: ViewId,
    target: TouchTarget,
    positions: Vec<(PointerId, Point)>,
}

impl DrawerRobot {
    /// Attaches a drawer behavior to `drawer` and runs a first layout pass.
    pub fn new(
        container: HeadlessContainer,
        drawer: ViewId,
        config: DrawerConfig,
    ) -> Result<Self, DrawerError> {
        let behavior = DrawerBehavior::new(config)?;
        let mut robot = Self {
            container,
            behavior,
            drawer,
            target: TouchTarget::None,
            positions: Vec::new(),
        };
        robot.layout();
        Ok(robot)
    }

    pub fn drawer(&self) -> ViewId {
        self.drawer
    }

    pub fn container(&self) -> &HeadlessContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut HeadlessContainer {
        &mut self.container
    }

    pub fn behavior(&self) -> &DrawerBehavior {
        &self.behavior
    }

    /// Runs a layout pass over the drawer.
    pub fn layout(&mut self) -> bool {
        self.behavior.on_layout_child(&mut self.container, self.drawer)
    }

    /// The drawer's controller. Exists once the robot has been created,
    /// unless the drawer was gone at the first layout.
    pub fn controller(&self) -> Option<&DrawerController> {
        self.behavior.controller(self.drawer)
    }

    pub fn on_screen(&self) -> f32 {
        self.controller().map_or(0.0, |c| c.on_screen())
    }

    pub fn drawer_left(&self) -> i32 {
        self.container.view_bounds(self.drawer).left
    }

    pub fn drawer_visibility(&self) -> Visibility {
        self.container.view(self.drawer).visibility
    }

    /// Scrim paint and visibility as last set by the controller.
    pub fn scrim(&self) -> Option<(ScrimPaint, bool)> {
        self.controller().map(|c| c.scrim())
    }

    pub fn open(&mut self, animate: bool) {
        self.behavior.open_drawer(&mut self.container, self.drawer, animate);
    }

    pub fn close(&mut self, animate: bool) {
        self.behavior.close_drawer(&mut self.container, self.drawer, animate);
    }

    pub fn set_scrim_color(&mut self, color: impl Into<ArgbColor>) {
        self.behavior
            .set_scrim_color(&mut self.container, self.drawer, color.into());
    }

    pub fn down(&mut self, x: f32, y: f32) -> &mut Self {
        self.positions.clear();
        self.send(PointerEventKind::Down, 0, Point::new(x, y))
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.send(PointerEventKind::Move, 0, Point::new(x, y))
    }

    pub fn up(&mut self) -> &mut Self {
        let position = self.position_of(0);
        self.send(PointerEventKind::Up, 0, position)
    }

    pub fn up_at(&mut self, x: f32, y: f32) -> &mut Self {
        self.send(PointerEventKind::Up, 0, Point::new(x, y))
    }

    pub fn cancel(&mut self) -> &mut Self {
        let position = self.position_of(0);
        self.send(PointerEventKind::Cancel, 0, position)
    }

    /// An additional pointer joining the gesture.
    pub fn pointer_down(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        self.send(PointerEventKind::PointerDown, id, Point::new(x, y))
    }

    pub fn pointer_move(&mut self, id: PointerId, x: f32, y: f32) -> &mut Self {
        self.send(PointerEventKind::Move, id, Point::new(x, y))
    }

    pub fn pointer_up(&mut self, id: PointerId) -> &mut Self {
        let position = self.position_of(id);
        self.send(PointerEventKind::PointerUp, id, position)
    }

    /// Presses at `from`, moves to `to` in `steps` moves spread over
    /// `duration_millis`, and lifts.
    pub fn drag(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        steps: u32,
        duration_millis: u64,
    ) -> &mut Self {
        self.down(from.0, from.1);
        let steps = steps.max(1);
        let step_millis = duration_millis / steps as u64;
        for i in 1..=steps {
            self.advance(step_millis);
            let t = i as f32 / steps as f32;
            self.move_to(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        }
        self.up()
    }

    /// A fast drag: five moves in 40ms, released without pausing.
    pub fn fling(&mut self, from: (f32, f32), to: (f32, f32)) -> &mut Self {
        self.drag(from, to, 5, 40)
    }

    /// A drag that rests for a while before lifting, so it carries no
    /// velocity.
    pub fn slow_drag(&mut self, from: (f32, f32), to: (f32, f32)) -> &mut Self {
        self.down(from.0, from.1);
        self.advance(FRAME_MILLIS);
        self.move_to(to.0, to.1);
        self.advance(100);
        self.up()
    }

    /// Moves the clock forward frame by frame, running due tasks each frame.
    pub fn advance(&mut self, millis: u64) -> &mut Self {
        let end = self.container.now() + millis;
        while self.container.now() < end {
            let step = (end - self.container.now()).min(FRAME_MILLIS);
            self.container.advance_clock(step);
            self.run_due_tasks();
        }
        self
    }

    pub fn advance_frame(&mut self) -> &mut Self {
        self.advance(FRAME_MILLIS)
    }

    /// Runs frames until no animation is pending.
    pub fn settle(&mut self) -> &mut Self {
        for _ in 0..MAX_SETTLE_FRAMES {
            if !self.container.has_animation_tasks() {
                break;
            }
            self.advance_frame();
        }
        self
    }

    fn run_due_tasks(&mut self) {
        for task in self.container.take_due_tasks() {
            self.behavior.run_task(&mut self.container, task);
        }
    }

    fn position_of(&self, id: PointerId) -> Point {
        self.positions
            .iter()
            .find(|(pointer, _)| *pointer == id)
            .map_or(Point::ZERO, |(_, position)| *position)
    }

    fn record_position(&mut self, id: PointerId, kind: PointerEventKind, position: Point) {
        self.positions.retain(|(pointer, _)| *pointer != id);
        if !matches!(kind, PointerEventKind::PointerUp | PointerEventKind::Up) {
            self.positions.push((id, position));
        }
    }

    fn send(&mut self, kind: PointerEventKind, id: PointerId, position: Point) -> &mut Self {
        self.record_position(id, kind, position);
        let event = PointerEvent::new(kind, position, self.container.now()).with_id(id);
        self.dispatch(&event);
        if matches!(kind, PointerEventKind::Up | PointerEventKind::Cancel) {
            self.target = TouchTarget::None;
        }
        self
    }

    fn dispatch(&mut self, event: &PointerEvent) {
        let drawer = self.drawer;
        let container = &mut self.container;

        if event.kind == PointerEventKind::Down {
            self.target = TouchTarget::None;
            let intercepted = self
                .behavior
                .on_intercept_touch_event(container, drawer, event);
            if !intercepted {
                if let Some(view) = consuming_child_under(container, drawer, event) {
                    self.target = TouchTarget::Content(view);
                    return;
                }
            }
            self.behavior.on_touch_event(container, drawer, event);
            self.target = TouchTarget::Behavior;
            return;
        }

        match self.target {
            TouchTarget::Behavior => {
                self.behavior.on_touch_event(container, drawer, event);
            }
            TouchTarget::Content(view) => {
                if self
                    .behavior
                    .on_intercept_touch_event(container, drawer, event)
                {
                    let cancel = PointerEvent::cancel(container.now());
                    container.dispatch_touch_event(view, &cancel);
                    self.target = TouchTarget::Behavior;
                } else {
                    container.dispatch_touch_event(view, event);
                }
            }
            TouchTarget::None => {
                log::warn!("{:?} without a gesture in progress", event.kind);
                self.behavior.on_touch_event(container, drawer, event);
            }
        }
    }
}

/// Topmost child other than the drawer that is under the event and takes
/// the touch.
fn consuming_child_under(
    container: &mut HeadlessContainer,
    drawer: ViewId,
    event: &PointerEvent,
) -> Option<ViewId> {
    let (x, y) = (event.x().trunc(), event.y().trunc());
    let candidates: Vec<ViewId> = container
        .children()
        .iter()
        .rev()
        .copied()
        .filter(|&child| child != drawer && container.view_bounds(child).contains(x, y))
        .collect();
    candidates
        .into_iter()
        .find(|&child| container.dispatch_touch_event(child, event))
}
