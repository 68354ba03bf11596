use std::f32::consts::FRAC_PI_2;

use drawer_animation::{AnimationSpec, Easing, Scroller};
use drawer_ui_graphics::{Dp, Point};

use super::pointer::PointerTracker;
use super::{DragCallback, DragDirection, DragError, DragState, EdgeFlags, ViewHost, ViewId};
use crate::gesture_constants::{
    BASE_SETTLE_DURATION_MS, DRAG_THRESHOLD, EDGE_SIZE, MAX_FLING_VELOCITY,
    MAX_SETTLE_DURATION_MS, MIN_FLING_VELOCITY,
};
use crate::input::{PointerEvent, PointerEventKind, PointerId};

/// Density-independent tuning of a [`DragHelper`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragHelperConfig {
    pub edge_size: Dp,
    pub touch_slop: Dp,
    /// Per second. Slower releases are reported as zero velocity.
    pub min_fling_velocity: Dp,
    /// Per second.
    pub max_fling_velocity: Dp,
    pub base_settle_duration_ms: u64,
    pub max_settle_duration_ms: u64,
    pub settle_easing: Easing,
}

impl Default for DragHelperConfig {
    fn default() -> Self {
        Self {
            edge_size: Dp(EDGE_SIZE),
            touch_slop: Dp(DRAG_THRESHOLD),
            min_fling_velocity: Dp(MIN_FLING_VELOCITY),
            max_fling_velocity: Dp(MAX_FLING_VELOCITY),
            base_settle_duration_ms: BASE_SETTLE_DURATION_MS,
            max_settle_duration_ms: MAX_SETTLE_DURATION_MS,
            settle_easing: Easing::QuinticOut,
        }
    }
}

/// Drags child views of a [`ViewHost`] in response to pointer events.
///
/// The helper tracks every pointer that is down, detects touch slop and
/// swipes that start on a tracked container edge, captures at most one
/// view at a time and, once that view is released, animates it toward a
/// settle position with [`continue_settling`](Self::continue_settling).
///
/// All decisions about *which* view moves and *where* it may go are made
/// by the [`DragCallback`] passed into each call, so the helper itself is
/// free of any widget policy.
#[derive(Debug)]
pub struct DragHelper {
    config: DragHelperConfig,
    edge_size: i32,
    touch_slop: i32,
    min_velocity: f32,
    max_velocity: f32,
    drag_state: DragState,
    tracking_edges: EdgeFlags,
    active_pointer: Option<PointerId>,
    pointers: PointerTracker,
    captured_view: Option<ViewId>,
    scroller: Scroller,
    release_in_progress: bool,
    release_velocity: (f32, f32),
}

impl DragHelper {
    /// Creates a helper with pixel thresholds resolved for `density`.
    pub fn new(config: DragHelperConfig, density: f32) -> Self {
        Self {
            edge_size: config.edge_size.round_to_px(density),
            touch_slop: config.touch_slop.round_to_px(density),
            min_velocity: config.min_fling_velocity.to_px(density),
            max_velocity: config.max_fling_velocity.to_px(density),
            config,
            drag_state: DragState::Idle,
            tracking_edges: EdgeFlags::NONE,
            active_pointer: None,
            pointers: PointerTracker::default(),
            captured_view: None,
            scroller: Scroller::new(),
            release_in_progress: false,
            release_velocity: (0.0, 0.0),
        }
    }

    /// Enables edge tracking for the given edges. Touches that start within
    /// [`edge_size`](Self::edge_size) of a tracked edge are reported through
    /// [`DragCallback::on_edge_touched`].
    pub fn set_edge_tracking_enabled(&mut self, edges: EdgeFlags) {
        self.tracking_edges = edges;
    }

    /// Minimum release velocity in px/s.
    pub fn set_min_velocity(&mut self, min_velocity: f32) {
        self.min_velocity = min_velocity;
    }

    pub fn min_velocity(&self) -> f32 {
        self.min_velocity
    }

    pub fn edge_size(&self) -> i32 {
        self.edge_size
    }

    pub fn touch_slop(&self) -> i32 {
        self.touch_slop
    }

    pub fn view_drag_state(&self) -> DragState {
        self.drag_state
    }

    pub fn captured_view(&self) -> Option<ViewId> {
        self.captured_view
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    pub fn is_pointer_down(&self, pointer: PointerId) -> bool {
        self.pointers.is_down(pointer)
    }

    /// Forgets all pointer state. Equivalent to the start of a new gesture.
    pub fn cancel(&mut self) {
        self.active_pointer = None;
        self.pointers.clear();
    }

    /// Cancels the gesture and stops any settle animation in place at its
    /// final position.
    pub fn abort<H, C>(&mut self, cb: &mut C, host: &mut H)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        self.cancel();
        if self.drag_state == DragState::Settling {
            self.scroller.abort_animation();
            if let Some(view) = self.captured_view {
                let bounds = host.view_bounds(view);
                let (x, y) = (self.scroller.curr_x(), self.scroller.curr_y());
                let (dx, dy) = (x - bounds.left, y - bounds.top);
                if dx != 0 || dy != 0 {
                    host.offset_view(view, dx, dy);
                    cb.on_view_position_changed(host, view, x, y, dx, dy);
                }
            }
        }
        self.set_drag_state(cb, host, DragState::Idle);
    }

    /// Cancels the gesture and stops any settle animation where the view is
    /// now. The view is released before going idle, so the callback sees no
    /// captured view and the position is left untouched.
    pub fn stop_settling<H, C>(&mut self, cb: &mut C, host: &mut H)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        self.cancel();
        self.scroller.force_finished();
        self.captured_view = None;
        self.set_drag_state(cb, host, DragState::Idle);
    }

    /// Animates `view` to `(final_left, final_top)` without it having been
    /// captured by a pointer.
    ///
    /// Returns true if an animation started; the caller must then call
    /// [`continue_settling`](Self::continue_settling) on every frame.
    pub fn smooth_slide_view_to<H, C>(
        &mut self,
        cb: &mut C,
        host: &mut H,
        view: ViewId,
        final_left: i32,
        final_top: i32,
    ) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        self.captured_view = Some(view);
        self.active_pointer = None;

        let continue_sliding =
            self.force_settle_captured_view_at(cb, host, final_left, final_top, 0.0, 0.0);
        if !continue_sliding && self.drag_state == DragState::Idle {
            self.captured_view = None;
        }
        continue_sliding
    }

    /// Animates the captured view to `(final_left, final_top)`, starting
    /// with the release velocity. Only valid inside
    /// [`DragCallback::on_view_released`].
    pub fn settle_captured_view_at<H, C>(
        &mut self,
        cb: &mut C,
        host: &mut H,
        final_left: i32,
        final_top: i32,
    ) -> Result<bool, DragError>
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        if !self.release_in_progress {
            return Err(DragError::SettleOutsideRelease);
        }
        let (xvel, yvel) = self.release_velocity;
        Ok(self.force_settle_captured_view_at(cb, host, final_left, final_top, xvel, yvel))
    }

    fn force_settle_captured_view_at<H, C>(
        &mut self,
        cb: &mut C,
        host: &mut H,
        final_left: i32,
        final_top: i32,
        xvel: f32,
        yvel: f32,
    ) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let Some(view) = self.captured_view else {
            return false;
        };
        let bounds = host.view_bounds(view);
        let dx = final_left - bounds.left;
        let dy = final_top - bounds.top;

        if dx == 0 && dy == 0 {
            self.scroller.abort_animation();
            self.set_drag_state(cb, host, DragState::Idle);
            return false;
        }

        let duration = self.compute_settle_duration(cb, host, view, dx, dy, xvel, yvel);
        log::trace!(
            "settling view {view} from ({}, {}) by ({dx}, {dy}) over {duration}ms",
            bounds.left,
            bounds.top
        );
        self.scroller.start_scroll(
            bounds.left,
            bounds.top,
            dx,
            dy,
            AnimationSpec::tween(duration, self.config.settle_easing),
            host.uptime_millis(),
        );
        self.set_drag_state(cb, host, DragState::Settling);
        true
    }

    #[allow(clippy::too_many_arguments)]
    fn compute_settle_duration<H, C>(
        &self,
        cb: &C,
        host: &H,
        view: ViewId,
        dx: i32,
        dy: i32,
        xvel: f32,
        yvel: f32,
    ) -> u64
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let xvel = clamp_mag(xvel, self.min_velocity, self.max_velocity);
        let yvel = clamp_mag(yvel, self.min_velocity, self.max_velocity);
        let (abs_dx, abs_dy) = (dx.abs() as f32, dy.abs() as f32);
        let (abs_xvel, abs_yvel) = (xvel.abs(), yvel.abs());
        let added_vel = abs_xvel + abs_yvel;
        let added_distance = abs_dx + abs_dy;

        let xweight = if xvel != 0.0 {
            abs_xvel / added_vel
        } else {
            abs_dx / added_distance
        };
        let yweight = if yvel != 0.0 {
            abs_yvel / added_vel
        } else {
            abs_dy / added_distance
        };

        let xduration = self.compute_axis_duration(
            host.width(),
            dx,
            xvel,
            cb.view_horizontal_drag_range(host, view),
        );
        let yduration = self.compute_axis_duration(
            host.height(),
            dy,
            yvel,
            cb.view_vertical_drag_range(host, view),
        );

        (xduration as f32 * xweight + yduration as f32 * yweight) as u64
    }

    fn compute_axis_duration(&self, extent: i32, delta: i32, velocity: f32, range: i32) -> u64 {
        if delta == 0 {
            return 0;
        }
        let max = self.config.max_settle_duration_ms;

        let half = extent.max(1) as f32 / 2.0;
        let distance_ratio = (delta.abs() as f32 / extent.max(1) as f32).min(1.0);
        let distance = half + half * distance_influence_for_snap_duration(distance_ratio);

        let velocity = velocity.abs();
        let duration = if velocity > 0.0 {
            4 * (1000.0 * (distance / velocity).abs()).round() as u64
        } else if range > 0 {
            let range_fraction = delta.abs() as f32 / range as f32;
            ((range_fraction + 1.0) * self.config.base_settle_duration_ms as f32) as u64
        } else {
            max
        };
        duration.min(max)
    }

    /// Advances a settle animation to the host's current time.
    ///
    /// Returns true while the view is still settling; the caller should call
    /// again on the next frame.
    pub fn continue_settling<H, C>(&mut self, cb: &mut C, host: &mut H) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        if self.drag_state == DragState::Settling {
            let Some(view) = self.captured_view else {
                self.set_drag_state(cb, host, DragState::Idle);
                return false;
            };

            let mut keep_going = self.scroller.compute_scroll_offset(host.uptime_millis());
            let (x, y) = (self.scroller.curr_x(), self.scroller.curr_y());
            let bounds = host.view_bounds(view);
            let (dx, dy) = (x - bounds.left, y - bounds.top);

            if dx != 0 || dy != 0 {
                host.offset_view(view, dx, dy);
                cb.on_view_position_changed(host, view, x, y, dx, dy);
            }

            if keep_going && x == self.scroller.final_x() && y == self.scroller.final_y() {
                self.scroller.abort_animation();
                keep_going = false;
            }

            if !keep_going {
                self.set_drag_state(cb, host, DragState::Idle);
            }
        }

        self.drag_state == DragState::Settling
    }

    /// Captures `view` for dragging by `pointer`, bypassing
    /// [`DragCallback::try_capture_view`].
    pub fn capture_child_view<H, C>(
        &mut self,
        cb: &mut C,
        host: &mut H,
        view: ViewId,
        pointer: PointerId,
    ) where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        self.captured_view = Some(view);
        self.active_pointer = Some(pointer);
        cb.on_view_captured(host, view, pointer);
        self.set_drag_state(cb, host, DragState::Dragging);
    }

    fn try_capture_view_for_drag<H, C>(
        &mut self,
        cb: &mut C,
        host: &mut H,
        to_capture: Option<ViewId>,
        pointer: PointerId,
    ) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let Some(view) = to_capture else {
            return false;
        };
        if self.captured_view == Some(view) && self.active_pointer == Some(pointer) {
            return true;
        }
        if cb.try_capture_view(host, view, pointer) {
            self.capture_child_view(cb, host, view, pointer);
            return true;
        }
        false
    }

    fn set_drag_state<H, C>(&mut self, cb: &mut C, host: &mut H, state: DragState)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        if self.drag_state != state {
            log::trace!("drag state {:?} -> {:?}", self.drag_state, state);
            self.drag_state = state;
            cb.on_view_drag_state_changed(host, state, self.captured_view);
            if state == DragState::Idle {
                self.captured_view = None;
            }
        }
    }

    /// Feeds an event seen while the container decides whether to intercept
    /// the gesture. Returns true once a view is being dragged.
    pub fn should_intercept_touch_event<H, C>(
        &mut self,
        cb: &mut C,
        host: &mut H,
        event: &PointerEvent,
    ) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let id = event.id;
        let position = event.position;

        match event.kind {
            PointerEventKind::Down => {
                self.cancel();
                self.save_initial_motion(host, id, position);
                self.pointers.add_movement(id, event.uptime_millis, position);

                let to_capture = self.find_top_child_under(host, position.x, position.y);
                if to_capture.is_some()
                    && to_capture == self.captured_view
                    && self.drag_state == DragState::Settling
                {
                    self.try_capture_view_for_drag(cb, host, to_capture, id);
                }
                self.report_edge_touch(cb, host, id);
            }
            PointerEventKind::PointerDown => {
                self.save_initial_motion(host, id, position);
                self.pointers.add_movement(id, event.uptime_millis, position);

                match self.drag_state {
                    DragState::Idle => self.report_edge_touch(cb, host, id),
                    DragState::Settling => {
                        let to_capture = self.find_top_child_under(host, position.x, position.y);
                        if to_capture.is_some() && to_capture == self.captured_view {
                            self.try_capture_view_for_drag(cb, host, to_capture, id);
                        }
                    }
                    DragState::Dragging => {}
                }
            }
            PointerEventKind::Move => {
                self.pointers.add_movement(id, event.uptime_millis, position);
                if self.is_valid_pointer_for_move(id) {
                    self.intercept_move(cb, host, id, position);
                    self.pointers.save_last(id, position);
                }
            }
            PointerEventKind::PointerUp => {
                self.pointers.remove(id);
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                self.cancel();
            }
        }

        self.drag_state == DragState::Dragging
    }

    fn intercept_move<H, C>(&mut self, cb: &mut C, host: &mut H, id: PointerId, position: Point)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let Some(history) = self.pointers.get(id) else {
            return;
        };
        let dx = position.x - history.initial.x;
        let dy = position.y - history.initial.y;

        let to_capture = self.find_top_child_under(host, position.x, position.y);
        let past_slop = to_capture
            .is_some_and(|view| self.check_view_touch_slop(cb, host, view, dx, dy));

        if past_slop {
            if let Some(view) = to_capture {
                // Don't intercept if the drag would not move the view, so
                // nested content can still scroll.
                let bounds = host.view_bounds(view);
                let new_left =
                    cb.clamp_view_position_horizontal(host, view, bounds.left + dx as i32, dx as i32);
                let new_top =
                    cb.clamp_view_position_vertical(host, view, bounds.top + dy as i32, dy as i32);
                let horizontal_range = cb.view_horizontal_drag_range(host, view);
                let vertical_range = cb.view_vertical_drag_range(host, view);
                if (horizontal_range == 0 || (horizontal_range > 0 && new_left == bounds.left))
                    && (vertical_range == 0 || (vertical_range > 0 && new_top == bounds.top))
                {
                    return;
                }
            }
        }

        self.report_new_edge_drags(cb, host, dx, dy, id);
        if self.drag_state == DragState::Dragging {
            return;
        }
        if past_slop {
            self.try_capture_view_for_drag(cb, host, to_capture, id);
        }
    }

    /// Feeds an event the container is handling itself, moving the captured
    /// view as the active pointer moves.
    pub fn process_touch_event<H, C>(&mut self, cb: &mut C, host: &mut H, event: &PointerEvent)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let id = event.id;
        let position = event.position;

        match event.kind {
            PointerEventKind::Down => {
                self.cancel();
                let to_capture = self.find_top_child_under(host, position.x, position.y);
                self.save_initial_motion(host, id, position);
                self.pointers.add_movement(id, event.uptime_millis, position);
                self.try_capture_view_for_drag(cb, host, to_capture, id);
                self.report_edge_touch(cb, host, id);
            }
            PointerEventKind::PointerDown => {
                self.save_initial_motion(host, id, position);
                self.pointers.add_movement(id, event.uptime_millis, position);

                if self.drag_state == DragState::Idle {
                    let to_capture = self.find_top_child_under(host, position.x, position.y);
                    self.try_capture_view_for_drag(cb, host, to_capture, id);
                    self.report_edge_touch(cb, host, id);
                } else if self.is_captured_view_under(host, position.x, position.y) {
                    let captured = self.captured_view;
                    self.try_capture_view_for_drag(cb, host, captured, id);
                }
            }
            PointerEventKind::Move => {
                self.pointers.add_movement(id, event.uptime_millis, position);
                if !self.is_valid_pointer_for_move(id) {
                    return;
                }
                if self.drag_state == DragState::Dragging {
                    if self.active_pointer == Some(id) {
                        self.drag_active_pointer(cb, host, id, position);
                    }
                } else {
                    self.track_unclaimed_move(cb, host, id, position);
                }
                self.pointers.save_last(id, position);
            }
            PointerEventKind::PointerUp => {
                if self.drag_state == DragState::Dragging && self.active_pointer == Some(id) {
                    let handed_over = self.hand_over_active_pointer(cb, host, id);
                    if !handed_over {
                        self.release_view_for_pointer_up(cb, host);
                    }
                }
                self.pointers.remove(id);
            }
            PointerEventKind::Up => {
                self.pointers.add_movement(id, event.uptime_millis, position);
                if self.drag_state == DragState::Dragging {
                    self.release_view_for_pointer_up(cb, host);
                }
                self.cancel();
            }
            PointerEventKind::Cancel => {
                if self.drag_state == DragState::Dragging {
                    self.dispatch_view_released(cb, host, 0.0, 0.0);
                }
                self.cancel();
            }
        }
    }

    fn drag_active_pointer<H, C>(&mut self, cb: &mut C, host: &mut H, id: PointerId, position: Point)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let (Some(history), Some(view)) = (self.pointers.get(id), self.captured_view) else {
            return;
        };
        let idx = (position.x - history.last.x) as i32;
        let idy = (position.y - history.last.y) as i32;
        let bounds = host.view_bounds(view);
        self.drag_to(cb, host, view, bounds.left + idx, bounds.top + idy, idx, idy);
    }

    fn track_unclaimed_move<H, C>(&mut self, cb: &mut C, host: &mut H, id: PointerId, position: Point)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let Some(history) = self.pointers.get(id) else {
            return;
        };
        let dx = position.x - history.initial.x;
        let dy = position.y - history.initial.y;

        self.report_new_edge_drags(cb, host, dx, dy, id);
        if self.drag_state == DragState::Dragging {
            // An edge drag callback captured a view.
            return;
        }

        let to_capture = self.find_top_child_under(host, position.x, position.y);
        if to_capture.is_some_and(|view| self.check_view_touch_slop(cb, host, view, dx, dy)) {
            self.try_capture_view_for_drag(cb, host, to_capture, id);
        }
    }

    /// Lets another pointer that is still over the captured view take over
    /// the drag when the active pointer lifts.
    fn hand_over_active_pointer<H, C>(&mut self, cb: &mut C, host: &mut H, lifted: PointerId) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        for other in self.pointers.ids() {
            if other == lifted {
                continue;
            }
            let Some(last) = self.pointers.get(other).map(|history| history.last) else {
                continue;
            };
            let under = self.find_top_child_under(host, last.x, last.y);
            if under.is_some()
                && under == self.captured_view
                && self.try_capture_view_for_drag(cb, host, under, other)
            {
                return true;
            }
        }
        false
    }

    fn release_view_for_pointer_up<H, C>(&mut self, cb: &mut C, host: &mut H)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let (xvel, yvel) = self
            .active_pointer
            .and_then(|id| self.pointers.get(id))
            .map(|history| history.velocity(self.max_velocity))
            .unwrap_or((0.0, 0.0));
        let xvel = clamp_mag(xvel, self.min_velocity, self.max_velocity);
        let yvel = clamp_mag(yvel, self.min_velocity, self.max_velocity);
        self.dispatch_view_released(cb, host, xvel, yvel);
    }

    fn dispatch_view_released<H, C>(&mut self, cb: &mut C, host: &mut H, xvel: f32, yvel: f32)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let Some(view) = self.captured_view else {
            return;
        };
        self.release_in_progress = true;
        self.release_velocity = (xvel, yvel);
        cb.on_view_released(self, host, view, xvel, yvel);
        self.release_in_progress = false;

        if self.drag_state == DragState::Dragging {
            // The callback did not settle the view.
            self.set_drag_state(cb, host, DragState::Idle);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn drag_to<H, C>(
        &mut self,
        cb: &mut C,
        host: &mut H,
        view: ViewId,
        left: i32,
        top: i32,
        dx: i32,
        dy: i32,
    ) where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let bounds = host.view_bounds(view);
        let mut clamped_x = left;
        let mut clamped_y = top;

        if dx != 0 {
            clamped_x = cb.clamp_view_position_horizontal(host, view, left, dx);
            host.offset_view(view, clamped_x - bounds.left, 0);
        }
        if dy != 0 {
            clamped_y = cb.clamp_view_position_vertical(host, view, top, dy);
            host.offset_view(view, 0, clamped_y - bounds.top);
        }

        if dx != 0 || dy != 0 {
            cb.on_view_position_changed(
                host,
                view,
                clamped_x,
                clamped_y,
                clamped_x - bounds.left,
                clamped_y - bounds.top,
            );
        }
    }

    fn report_edge_touch<H, C>(&mut self, cb: &mut C, host: &mut H, id: PointerId)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let Some(history) = self.pointers.get(id) else {
            return;
        };
        let edges = history.initial_edges_touched.intersection(self.tracking_edges);
        if !edges.is_empty() {
            cb.on_edge_touched(host, edges, id);
        }
    }

    fn report_new_edge_drags<H, C>(&mut self, cb: &mut C, host: &mut H, dx: f32, dy: f32, id: PointerId)
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let mut started = EdgeFlags::NONE;
        for (edge, delta, odelta) in [
            (EdgeFlags::LEFT, dx, dy),
            (EdgeFlags::TOP, dy, dx),
            (EdgeFlags::RIGHT, dx, dy),
            (EdgeFlags::BOTTOM, dy, dx),
        ] {
            if self.check_new_edge_drag::<H, C>(cb, delta, odelta, id, edge) {
                started.insert(edge);
            }
        }

        if !started.is_empty() {
            if let Some(history) = self.pointers.get_mut(id) {
                history.edge_drags_in_progress.insert(started);
            }
            cb.on_edge_drag_started(self, host, started, id);
        }
    }

    fn check_new_edge_drag<H, C>(
        &mut self,
        cb: &mut C,
        delta: f32,
        odelta: f32,
        id: PointerId,
        edge: EdgeFlags,
    ) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let Some(history) = self.pointers.get(id) else {
            return false;
        };
        let abs_delta = delta.abs();
        let abs_odelta = odelta.abs();
        let slop = self.touch_slop as f32;

        if !history.initial_edges_touched.contains(edge)
            || !self.tracking_edges.contains(edge)
            || history.edge_drags_locked.contains(edge)
            || history.edge_drags_in_progress.contains(edge)
            || (abs_delta <= slop && abs_odelta <= slop)
        {
            return false;
        }

        if abs_delta < abs_odelta * 0.5 && cb.on_edge_lock(edge) {
            if let Some(history) = self.pointers.get_mut(id) {
                history.edge_drags_locked.insert(edge);
            }
            return false;
        }

        abs_delta > slop
    }

    fn check_view_touch_slop<H, C>(&self, cb: &C, host: &H, view: ViewId, dx: f32, dy: f32) -> bool
    where
        H: ViewHost,
        C: DragCallback<H> + ?Sized,
    {
        let horizontal = cb.view_horizontal_drag_range(host, view) > 0;
        let vertical = cb.view_vertical_drag_range(host, view) > 0;
        self.exceeds_slop(horizontal, vertical, dx, dy)
    }

    fn exceeds_slop(&self, horizontal: bool, vertical: bool, dx: f32, dy: f32) -> bool {
        let slop = self.touch_slop as f32;
        match (horizontal, vertical) {
            (true, true) => dx * dx + dy * dy > slop * slop,
            (true, false) => dx.abs() > slop,
            (false, true) => dy.abs() > slop,
            (false, false) => false,
        }
    }

    /// True if any pointer that is down has moved past the touch slop along
    /// `direction` since it went down.
    pub fn check_touch_slop(&self, direction: DragDirection) -> bool {
        self.pointers
            .iter()
            .any(|history| self.check_touch_slop_for_pointer(direction, history.id))
    }

    pub fn check_touch_slop_for_pointer(&self, direction: DragDirection, pointer: PointerId) -> bool {
        let Some(history) = self.pointers.get(pointer) else {
            return false;
        };
        let (dx, dy) = history.last_delta();
        self.exceeds_slop(direction.horizontal(), direction.vertical(), dx, dy)
    }

    /// Topmost child whose bounds contain the point, comparing in whole
    /// pixels.
    pub fn find_top_child_under<H: ViewHost>(&self, host: &H, x: f32, y: f32) -> Option<ViewId> {
        let (x, y) = (x.trunc(), y.trunc());
        (0..host.child_count())
            .rev()
            .map(|index| host.child_at(index))
            .find(|&child| host.view_bounds(child).contains(x, y))
    }

    fn is_captured_view_under<H: ViewHost>(&self, host: &H, x: f32, y: f32) -> bool {
        let (x, y) = (x.trunc(), y.trunc());
        self.captured_view
            .is_some_and(|view| host.view_bounds(view).contains(x, y))
    }

    fn edges_touched<H: ViewHost>(&self, host: &H, x: f32, y: f32) -> EdgeFlags {
        let edge = self.edge_size as f32;
        let mut result = EdgeFlags::NONE;
        if x < edge {
            result.insert(EdgeFlags::LEFT);
        }
        if y < edge {
            result.insert(EdgeFlags::TOP);
        }
        if x > host.width() as f32 - edge {
            result.insert(EdgeFlags::RIGHT);
        }
        if y > host.height() as f32 - edge {
            result.insert(EdgeFlags::BOTTOM);
        }
        result
    }

    fn save_initial_motion<H: ViewHost>(&mut self, host: &H, id: PointerId, position: Point) {
        let edges = self.edges_touched(host, position.x, position.y);
        self.pointers.save_initial(id, position, edges);
    }

    fn is_valid_pointer_for_move(&self, id: PointerId) -> bool {
        if !self.pointers.is_down(id) {
            log::warn!("ignoring move for pointer {id}: no down event was received for it");
            return false;
        }
        true
    }
}

/// Zero below `abs_min`, capped to `abs_max`, sign preserved.
fn clamp_mag(value: f32, abs_min: f32, abs_max: f32) -> f32 {
    let abs_value = value.abs();
    if abs_value < abs_min {
        0.0
    } else if abs_value > abs_max {
        abs_max.copysign(value)
    } else {
        value
    }
}

/// Longer moves take proportionally less extra time, so a full-width
/// settle is not twice as slow as a half-width one.
fn distance_influence_for_snap_duration(fraction: f32) -> f32 {
    let f = (fraction - 0.5) * 0.3 * FRAC_PI_2;
    f.sin()
}

#[cfg(test)]
#[path = "../tests/drag_helper_tests.rs"]
mod tests;
