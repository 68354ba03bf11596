//! Per-drawer gesture and layout state machine.

use drawer_foundation::{
    DragCallback, DragDirection, DragHelper, DragState, EdgeFlags, PointerEvent,
    PointerEventKind, PointerId, ViewHost, ViewId,
};
use drawer_ui_graphics::{ArgbColor, IntRect, Point};
use drawer_ui_layout::AbsoluteEdge;

use crate::config::DrawerConfig;
use crate::host::{
    AccessibilityEventType, AccessibilityImportance, AccessibilitySource, ContainerHost,
    DrawerEvent, ScheduledTask, ScrimPaint, TaskKind, Visibility,
};
use crate::scrim::{create_scrim_surface, ScrimSurface};

/// Where a drawer is in its open/close life cycle.
///
/// `Opened` and `Closing` count as open: the drawer reported itself opened
/// and has not reported closed since.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpenState {
    #[default]
    Closed,
    /// Settling toward open from closed.
    Opening,
    Opened,
    /// Settling toward closed from open.
    Closing,
}

impl OpenState {
    pub fn is_open(self) -> bool {
        matches!(self, OpenState::Opened | OpenState::Closing)
    }

    /// State once a settle toward open (`opening`) or closed starts.
    fn settling_toward(self, opening: bool) -> Self {
        match (self, opening) {
            (OpenState::Closed, true) => OpenState::Opening,
            (OpenState::Closing, true) => OpenState::Opened,
            (OpenState::Opened, false) => OpenState::Closing,
            (OpenState::Opening, false) => OpenState::Closed,
            (state, _) => state,
        }
    }
}

/// Open fraction of a drawer whose visible part is `edge` pixels wide.
pub(crate) fn fraction_for(edge: i32, child_width: i32) -> f32 {
    if child_width <= 0 {
        return 0.0;
    }
    (edge as f32 / child_width as f32).clamp(0.0, 1.0)
}

/// Left coordinate of a drawer showing `fraction` of its width.
pub(crate) fn left_for_fraction(
    edge: AbsoluteEdge,
    parent_width: i32,
    child_width: i32,
    fraction: f32,
) -> i32 {
    let shown = (child_width as f32 * fraction) as i32;
    match edge {
        AbsoluteEdge::Left => -child_width + shown,
        AbsoluteEdge::Right => parent_width - shown,
    }
}

pub(crate) fn open_left(edge: AbsoluteEdge, parent_width: i32, child_width: i32) -> i32 {
    left_for_fraction(edge, parent_width, child_width, 1.0)
}

pub(crate) fn closed_left(edge: AbsoluteEdge, parent_width: i32, child_width: i32) -> i32 {
    left_for_fraction(edge, parent_width, child_width, 0.0)
}

/// Settle target after a release. Direction wins; without velocity the
/// drawer opens only when more than half of it shows.
pub(crate) fn settle_target_left(
    edge: AbsoluteEdge,
    parent_width: i32,
    child_width: i32,
    fraction: f32,
    xvel: f32,
) -> i32 {
    let by_position = xvel == 0.0 && fraction > 0.5;
    let open = match edge {
        AbsoluteEdge::Left => xvel > 0.0 || by_position,
        AbsoluteEdge::Right => xvel < 0.0 || by_position,
    };
    if open {
        open_left(edge, parent_width, child_width)
    } else {
        closed_left(edge, parent_width, child_width)
    }
}

/// Open fraction and scrim rectangle for a drawer whose left edge is at
/// `left`. The scrim covers everything between the drawer's inner edge
/// and the opposite side of the container.
pub(crate) fn position_geometry(
    edge: AbsoluteEdge,
    parent_width: i32,
    parent_height: i32,
    child_width: i32,
    left: i32,
) -> (f32, IntRect) {
    match edge {
        AbsoluteEdge::Left => {
            let inner = child_width + left;
            (
                fraction_for(inner, child_width),
                IntRect::new(inner, 0, parent_width, parent_height),
            )
        }
        AbsoluteEdge::Right => {
            let inner = parent_width - left;
            (
                fraction_for(inner, child_width),
                IntRect::new(0, 0, left, parent_height),
            )
        }
    }
}

/// Drawer policy for the drag helper, plus the state it reads and writes.
///
/// Kept apart from the [`DragHelper`] so the helper can call back into it
/// while being driven by the controller.
struct DrawerDelegate {
    drawer: ViewId,
    edge: AbsoluteEdge,
    open_state: OpenState,
    peeking: bool,
    on_screen: f32,
    drawer_state: DragState,
    scrim_color: ArgbColor,
    scrim: Box<dyn ScrimSurface>,
    initial_motion: Point,
    children_canceled_touch: bool,
    peek_delay_ms: u64,
}

impl DrawerDelegate {
    fn is_closed(&self) -> bool {
        self.on_screen <= f32::EPSILON
    }

    fn is_fully_open(&self) -> bool {
        self.on_screen >= 1.0 - f32::EPSILON
    }

    fn settle_task(&self) -> ScheduledTask {
        ScheduledTask::settle(self.drawer)
    }

    fn peek_task(&self) -> ScheduledTask {
        ScheduledTask::peek(self.drawer)
    }

    fn begin_settle(&mut self, opening: bool) {
        let next = self.open_state.settling_toward(opening);
        if next != self.open_state {
            log::debug!(
                "drawer {}: {:?} -> {:?}",
                self.drawer,
                self.open_state,
                next
            );
            self.open_state = next;
        }
    }

    fn set_on_screen<H: ContainerHost>(&mut self, host: &mut H, fraction: f32) {
        if fraction != self.on_screen {
            self.on_screen = fraction;
            host.on_drawer_event(self.drawer, DrawerEvent::Slide(fraction));
        }
    }

    /// Recomputes everything that follows from the drawer's left edge.
    fn apply_position<H: ContainerHost>(&mut self, host: &mut H, left: i32) {
        let child_width = host.view_bounds(self.drawer).width();
        let (fraction, scrim_bounds) =
            position_geometry(self.edge, host.width(), host.height(), child_width, left);
        log::trace!("drawer {}: left {left}, on screen {fraction}", self.drawer);

        self.scrim.set_bounds(&mut *host, scrim_bounds);
        self.scrim
            .set_color(&mut *host, self.scrim_color.scale_alpha(fraction));

        self.set_on_screen(host, fraction);
        let hidden = self.is_closed();
        host.set_visibility(
            self.drawer,
            if hidden {
                Visibility::Invisible
            } else {
                Visibility::Visible
            },
        );
        self.scrim.set_visible(&mut *host, !hidden);
        host.invalidate();
    }

    fn update_drawer_state<H: ContainerHost>(
        &mut self,
        host: &mut H,
        state: DragState,
        captured: Option<ViewId>,
    ) {
        if captured.is_some() && state == DragState::Idle {
            if self.is_closed() {
                self.dispatch_closed(host);
            } else if self.is_fully_open() {
                self.dispatch_opened(host);
            }
        }

        if state != self.drawer_state {
            self.drawer_state = state;
            host.on_drawer_event(self.drawer, DrawerEvent::StateChanged(state));
        }
    }

    fn dispatch_closed<H: ContainerHost>(&mut self, host: &mut H) {
        match self.open_state {
            OpenState::Closed => {}
            OpenState::Opening => self.open_state = OpenState::Closed,
            OpenState::Opened | OpenState::Closing => {
                log::debug!("drawer {} closed", self.drawer);
                self.open_state = OpenState::Closed;
                self.update_children_important_for_accessibility(host, false);

                if host.has_window_focus() {
                    host.send_accessibility_event(
                        AccessibilitySource::Root,
                        AccessibilityEventType::WindowStateChanged,
                    );
                }
                host.on_drawer_event(self.drawer, DrawerEvent::Closed);
            }
        }
    }

    fn dispatch_opened<H: ContainerHost>(&mut self, host: &mut H) {
        match self.open_state {
            OpenState::Opened => {}
            OpenState::Closing => self.open_state = OpenState::Opened,
            OpenState::Closed | OpenState::Opening => {
                log::debug!("drawer {} opened", self.drawer);
                self.open_state = OpenState::Opened;
                self.update_children_important_for_accessibility(host, true);

                if host.has_window_focus() {
                    host.send_accessibility_event(
                        AccessibilitySource::Container,
                        AccessibilityEventType::WindowStateChanged,
                    );
                }
                host.request_focus(self.drawer);
                host.on_drawer_event(self.drawer, DrawerEvent::Opened);
            }
        }
    }

    /// An open drawer is the only thing assistive technology sees; a closed
    /// one is hidden from it.
    fn update_children_important_for_accessibility<H: ContainerHost>(
        &self,
        host: &mut H,
        drawer_open: bool,
    ) {
        for index in 0..host.child_count() {
            let child = host.child_at(index);
            let is_drawer = child == self.drawer;
            let importance = if is_drawer == drawer_open {
                AccessibilityImportance::Yes
            } else {
                AccessibilityImportance::NoHideDescendants
            };
            host.set_accessibility_importance(child, importance);
        }
    }

    /// Sends a cancel to every sibling of the drawer, at most once per
    /// gesture.
    fn cancel_child_view_touch<H: ContainerHost>(&mut self, host: &mut H) {
        if self.children_canceled_touch {
            return;
        }
        let cancel = PointerEvent::cancel(host.uptime_millis());
        for index in 0..host.child_count() {
            let child = host.child_at(index);
            if child != self.drawer {
                host.dispatch_touch_event(child, &cancel);
            }
        }
        self.children_canceled_touch = true;
    }
}

impl<H: ContainerHost> DragCallback<H> for DrawerDelegate {
    fn try_capture_view(&mut self, _host: &H, view: ViewId, _pointer: PointerId) -> bool {
        view == self.drawer
    }

    fn view_horizontal_drag_range(&self, host: &H, view: ViewId) -> i32 {
        if view == self.drawer {
            host.view_bounds(view).width()
        } else {
            0
        }
    }

    fn clamp_view_position_horizontal(&self, host: &H, view: ViewId, left: i32, _dx: i32) -> i32 {
        let child_width = host.view_bounds(view).width();
        match self.edge {
            AbsoluteEdge::Left => left.min(0).max(-child_width),
            AbsoluteEdge::Right => {
                let width = host.width();
                left.min(width).max(width - child_width)
            }
        }
    }

    fn clamp_view_position_vertical(&self, host: &H, view: ViewId, _top: i32, _dy: i32) -> i32 {
        host.view_bounds(view).top
    }

    fn on_view_captured(&mut self, host: &mut H, _view: ViewId, pointer: PointerId) {
        log::debug!("drawer {} captured by pointer {pointer}", self.drawer);
        self.peeking = false;
        host.remove_callbacks(self.peek_task());
    }

    fn on_view_released(
        &mut self,
        helper: &mut DragHelper,
        host: &mut H,
        view: ViewId,
        xvel: f32,
        _yvel: f32,
    ) {
        let bounds = host.view_bounds(view);
        let parent_width = host.width();
        let target = settle_target_left(
            self.edge,
            parent_width,
            bounds.width(),
            self.on_screen,
            xvel,
        );
        let opening = target == open_left(self.edge, parent_width, bounds.width());
        log::debug!(
            "drawer {} released at {} with velocity {xvel}, settling {}",
            self.drawer,
            bounds.left,
            if opening { "open" } else { "closed" }
        );

        match helper.settle_captured_view_at(self, host, target, bounds.top) {
            Ok(true) => self.begin_settle(opening),
            Ok(false) => {}
            Err(err) => log::warn!("drawer {}: {err}", self.drawer),
        }
        host.post_on_animation(self.settle_task());
    }

    fn on_view_drag_state_changed(
        &mut self,
        host: &mut H,
        state: DragState,
        captured: Option<ViewId>,
    ) {
        self.update_drawer_state(host, state, captured);
    }

    fn on_view_position_changed(
        &mut self,
        host: &mut H,
        _view: ViewId,
        left: i32,
        _top: i32,
        _dx: i32,
        _dy: i32,
    ) {
        self.apply_position(host, left);
    }

    fn on_edge_touched(&mut self, host: &mut H, _edges: EdgeFlags, _pointer: PointerId) {
        host.post_delayed(self.peek_task(), self.peek_delay_ms);
    }

    fn on_edge_drag_started(
        &mut self,
        helper: &mut DragHelper,
        host: &mut H,
        edges: EdgeFlags,
        pointer: PointerId,
    ) {
        let matches_side = match self.edge {
            AbsoluteEdge::Left => edges.contains(EdgeFlags::LEFT),
            AbsoluteEdge::Right => edges.contains(EdgeFlags::RIGHT),
        };
        if matches_side {
            let drawer = self.drawer;
            helper.capture_child_view(self, host, drawer, pointer);
        }
    }
}

/// Gesture, layout and scrim controller for one drawer view.
///
/// The container forwards layout passes, touch events and the tasks the
/// controller posts. Everything runs on the container's thread.
pub struct DrawerController {
    dragger: DragHelper,
    delegate: DrawerDelegate,
}

impl DrawerController {
    /// Creates the controller for `drawer`, attaching its scrim to `host`.
    pub fn new<H: ContainerHost>(
        host: &mut H,
        drawer: ViewId,
        edge: AbsoluteEdge,
        config: &DrawerConfig,
    ) -> Self {
        let mut dragger = DragHelper::new(config.drag_helper_config(), host.density());
        dragger.set_edge_tracking_enabled(match edge {
            AbsoluteEdge::Left => EdgeFlags::LEFT,
            AbsoluteEdge::Right => EdgeFlags::RIGHT,
        });
        let scrim = create_scrim_surface(&mut *host, drawer);
        log::debug!("drawer {drawer}: controller attached on the {edge:?} edge");

        Self {
            dragger,
            delegate: DrawerDelegate {
                drawer,
                edge,
                open_state: OpenState::Closed,
                peeking: false,
                on_screen: 0.0,
                drawer_state: DragState::Idle,
                scrim_color: config.scrim_color,
                scrim,
                initial_motion: Point::ZERO,
                children_canceled_touch: false,
                peek_delay_ms: config.peek_delay_ms,
            },
        }
    }

    pub fn drawer(&self) -> ViewId {
        self.delegate.drawer
    }

    pub fn edge(&self) -> AbsoluteEdge {
        self.delegate.edge
    }

    /// Open fraction, from 0 (hidden) to 1 (fully shown).
    pub fn on_screen(&self) -> f32 {
        self.delegate.on_screen
    }

    pub fn open_state(&self) -> OpenState {
        self.delegate.open_state
    }

    pub fn is_open(&self) -> bool {
        self.delegate.open_state.is_open()
    }

    pub fn is_peeking(&self) -> bool {
        self.delegate.peeking
    }

    /// Latest drag state reported by the drag helper.
    pub fn drag_state(&self) -> DragState {
        self.delegate.drawer_state
    }

    pub fn scrim_color(&self) -> ArgbColor {
        self.delegate.scrim_color
    }

    /// Last scrim bounds and color, and whether the scrim is showing.
    pub fn scrim(&self) -> (ScrimPaint, bool) {
        let scrim = &self.delegate.scrim;
        (scrim.paint(), scrim.is_visible())
    }

    pub fn drag_helper(&self) -> &DragHelper {
        &self.dragger
    }

    /// Changes the scrim color, repainting the scrim at the current
    /// fraction.
    pub fn set_scrim_color<H: ContainerHost>(&mut self, host: &mut H, color: ArgbColor) {
        let delegate = &mut self.delegate;
        delegate.scrim_color = color;
        let scaled = color.scale_alpha(delegate.on_screen);
        delegate.scrim.set_color(&mut *host, scaled);
        host.invalidate();
    }

    pub fn on_intercept_touch_event<H: ContainerHost>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
    ) -> bool {
        let intercept_for_drag = self
            .dragger
            .should_intercept_touch_event(&mut self.delegate, host, event);
        let mut intercept_for_tap = false;

        match event.kind {
            PointerEventKind::Down => {
                self.delegate.initial_motion = event.position;
                if self.delegate.on_screen > 0.0 {
                    let touched = self
                        .dragger
                        .find_top_child_under(host, event.x(), event.y());
                    if touched.is_some_and(|child| child != self.delegate.drawer) {
                        intercept_for_tap = true;
                    }
                }
                self.delegate.children_canceled_touch = false;
            }
            PointerEventKind::Move => {
                // Past the slop the touch is a drag, not a press on the edge.
                if self.dragger.check_touch_slop(DragDirection::All) {
                    host.remove_callbacks(self.delegate.peek_task());
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.close_drawers(host, true);
                self.delegate.children_canceled_touch = false;
            }
            _ => {}
        }

        intercept_for_drag
            || intercept_for_tap
            || self.delegate.peeking
            || self.delegate.children_canceled_touch
    }

    pub fn on_touch_event<H: ContainerHost>(&mut self, host: &mut H, event: &PointerEvent) -> bool {
        self.dragger.process_touch_event(&mut self.delegate, host, event);

        match event.kind {
            PointerEventKind::Down => {
                self.delegate.initial_motion = event.position;
                self.delegate.children_canceled_touch = false;
            }
            PointerEventKind::Up => {
                let tap_closes = self.is_tap_on_content(host, event.position)
                    && self.delegate.open_state == OpenState::Opened;
                self.close_drawers(host, !tap_closes);
            }
            PointerEventKind::Cancel => {
                self.close_drawers(host, false);
                self.delegate.children_canceled_touch = false;
            }
            _ => {}
        }

        true
    }

    /// True when `position` lands on a view other than the drawer and is
    /// within the touch slop of where the gesture went down.
    fn is_tap_on_content<H: ContainerHost>(&self, host: &H, position: Point) -> bool {
        let touched = self
            .dragger
            .find_top_child_under(host, position.x, position.y);
        if !touched.is_some_and(|child| child != self.delegate.drawer) {
            return false;
        }
        let dx = position.x - self.delegate.initial_motion.x;
        let dy = position.y - self.delegate.initial_motion.y;
        let slop = self.dragger.touch_slop() as f32;
        dx * dx + dy * dy < slop * slop
    }

    /// Slides the drawer closed. With `peeking_only`, only a peeking drawer
    /// is closed.
    pub fn close_drawers<H: ContainerHost>(&mut self, host: &mut H, peeking_only: bool) {
        // A gesture that ends before the peek delay never peeks.
        host.remove_callbacks(self.delegate.peek_task());
        if peeking_only && !self.delegate.peeking {
            return;
        }

        let drawer = self.delegate.drawer;
        let bounds = host.view_bounds(drawer);
        let target = closed_left(self.delegate.edge, host.width(), bounds.width());
        let needs_settle = self.dragger.smooth_slide_view_to(
            &mut self.delegate,
            host,
            drawer,
            target,
            bounds.top,
        );
        self.delegate.peeking = false;

        if needs_settle {
            self.delegate.begin_settle(false);
            host.post_on_animation(self.delegate.settle_task());
        }
    }

    /// Slides a closed drawer in by the edge size so the user sees it is
    /// there.
    pub fn peek_drawer<H: ContainerHost>(&mut self, host: &mut H) {
        let drawer = self.delegate.drawer;
        let bounds = host.view_bounds(drawer);
        let peek_distance = self.dragger.edge_size();
        let (target, more_visible) = match self.delegate.edge {
            AbsoluteEdge::Left => {
                let target = -bounds.width() + peek_distance;
                (target, bounds.left < target)
            }
            AbsoluteEdge::Right => {
                let target = host.width() - peek_distance;
                (target, bounds.left > target)
            }
        };

        if more_visible {
            log::debug!("drawer {drawer}: peeking");
            self.dragger
                .smooth_slide_view_to(&mut self.delegate, host, drawer, target, bounds.top);
            host.post_on_animation(self.delegate.settle_task());
            self.delegate.peeking = true;

            self.delegate.cancel_child_view_touch(host);
        }
    }

    /// Advances a settle animation, re-posting itself while it runs.
    pub fn continue_settle<H: ContainerHost>(&mut self, host: &mut H) {
        if self.dragger.continue_settling(&mut self.delegate, host) {
            host.post_on_animation(self.delegate.settle_task());
        }
    }

    /// Runs a task this controller posted earlier.
    pub fn run_task<H: ContainerHost>(&mut self, host: &mut H, kind: TaskKind) {
        match kind {
            TaskKind::Peek => self.peek_drawer(host),
            TaskKind::Settle => self.continue_settle(host),
        }
    }

    /// Opens the drawer, sliding it in when `animate` is set.
    pub fn open<H: ContainerHost>(&mut self, host: &mut H, animate: bool) {
        self.move_to_end(host, true, animate);
    }

    /// Closes the drawer, sliding it out when `animate` is set.
    pub fn close<H: ContainerHost>(&mut self, host: &mut H, animate: bool) {
        self.move_to_end(host, false, animate);
    }

    fn move_to_end<H: ContainerHost>(&mut self, host: &mut H, open: bool, animate: bool) {
        let drawer = self.delegate.drawer;
        host.remove_callbacks(self.delegate.peek_task());
        self.delegate.peeking = false;

        if animate {
            let bounds = host.view_bounds(drawer);
            let target = self.end_left(host, bounds.width(), open);
            if self
                .dragger
                .smooth_slide_view_to(&mut self.delegate, host, drawer, target, bounds.top)
            {
                self.delegate.begin_settle(open);
                host.post_on_animation(self.delegate.settle_task());
            }
            return;
        }

        self.dragger.stop_settling(&mut self.delegate, host);
        host.remove_callbacks(self.delegate.settle_task());

        let bounds = host.view_bounds(drawer);
        let target = self.end_left(host, bounds.width(), open);
        if target != bounds.left {
            host.offset_view(drawer, target - bounds.left, 0);
        }
        self.delegate.apply_position(host, target);
        if open {
            self.delegate.dispatch_opened(host);
        } else {
            self.delegate.dispatch_closed(host);
        }
    }

    fn end_left<H: ContainerHost>(&self, host: &H, child_width: i32, open: bool) -> i32 {
        if open {
            open_left(self.delegate.edge, host.width(), child_width)
        } else {
            closed_left(self.delegate.edge, host.width(), child_width)
        }
    }

    /// Lays the drawer out at its current open fraction. Always returns
    /// true: the drawer is positioned by this controller alone.
    pub fn on_layout_child<H: ContainerHost>(&mut self, host: &mut H) -> bool {
        let drawer = self.delegate.drawer;
        let parent_width = host.width();
        let parent_height = host.height();
        let size = host.measured_size(drawer);

        let child_left =
            left_for_fraction(self.delegate.edge, parent_width, size.width, self.delegate.on_screen);
        let (new_offset, _) = position_geometry(
            self.delegate.edge,
            parent_width,
            parent_height,
            size.width,
            child_left,
        );

        let params = host.layout_params(drawer);
        let child_top = params
            .gravity
            .vertical_alignment()
            .place(parent_height, size.height, params.margins);
        host.layout_view(drawer, IntRect::from_origin_size(child_left, child_top, size));

        self.delegate.set_on_screen(host, new_offset);

        let visibility = if self.delegate.is_closed() {
            Visibility::Invisible
        } else {
            Visibility::Visible
        };
        if host.visibility(drawer) != visibility {
            host.set_visibility(drawer, visibility);
        }
        true
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
