use super::{clamp_mag, distance_influence_for_snap_duration, DragHelper, DragHelperConfig};
use crate::drag::{DragCallback, DragDirection, DragError, DragState, EdgeFlags, ViewHost, ViewId};
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use drawer_ui_graphics::{IntRect, Point};

const CONTENT: ViewId = 0;
const PANEL: ViewId = 1;

struct TestHost {
    width: i32,
    height: i32,
    views: Vec<IntRect>,
    now: u64,
}

impl TestHost {
    /// Full-size content under a 200px panel whose left edge is `panel_left`.
    fn new(panel_left: i32) -> Self {
        Self {
            width: 400,
            height: 800,
            views: vec![
                IntRect::new(0, 0, 400, 800),
                IntRect::new(panel_left, 0, panel_left + 200, 800),
            ],
            now: 0,
        }
    }

    fn panel_left(&self) -> i32 {
        self.views[PANEL].left
    }
}

impl ViewHost for TestHost {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn child_count(&self) -> usize {
        self.views.len()
    }

    fn child_at(&self, index: usize) -> ViewId {
        index
    }

    fn view_bounds(&self, view: ViewId) -> IntRect {
        self.views[view]
    }

    fn offset_view(&mut self, view: ViewId, dx: i32, dy: i32) {
        self.views[view] = self.views[view].translate(dx, dy);
    }

    fn density(&self) -> f32 {
        1.0
    }

    fn uptime_millis(&self) -> u64 {
        self.now
    }
}

#[derive(Default)]
struct TestCallback {
    capturable: Option<ViewId>,
    min_left: i32,
    max_left: i32,
    settle_to: Option<i32>,
    settle_result: Option<Result<bool, DragError>>,
    lock_edges: bool,
    capture_on_edge_drag: Option<ViewId>,
    events: Vec<String>,
}

impl TestCallback {
    fn dragging(min_left: i32, max_left: i32) -> Self {
        Self {
            capturable: Some(PANEL),
            min_left,
            max_left,
            ..Default::default()
        }
    }

    fn saw(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event)
    }
}

impl DragCallback<TestHost> for TestCallback {
    fn try_capture_view(&mut self, _host: &TestHost, view: ViewId, _pointer: PointerId) -> bool {
        self.capturable == Some(view)
    }

    fn view_horizontal_drag_range(&self, _host: &TestHost, view: ViewId) -> i32 {
        if view == PANEL {
            self.max_left - self.min_left
        } else {
            0
        }
    }

    fn clamp_view_position_horizontal(
        &self,
        _host: &TestHost,
        _view: ViewId,
        left: i32,
        _dx: i32,
    ) -> i32 {
        left.clamp(self.min_left, self.max_left)
    }

    fn clamp_view_position_vertical(
        &self,
        host: &TestHost,
        view: ViewId,
        _top: i32,
        _dy: i32,
    ) -> i32 {
        host.view_bounds(view).top
    }

    fn on_view_captured(&mut self, _host: &mut TestHost, view: ViewId, pointer: PointerId) {
        self.events.push(format!("captured {view} by {pointer}"));
    }

    fn on_view_released(
        &mut self,
        helper: &mut DragHelper,
        host: &mut TestHost,
        view: ViewId,
        xvel: f32,
        _yvel: f32,
    ) {
        self.events.push(format!("released {view} {xvel}"));
        if let Some(target) = self.settle_to {
            let top = host.view_bounds(view).top;
            self.settle_result = Some(helper.settle_captured_view_at(self, host, target, top));
        }
    }

    fn on_view_drag_state_changed(
        &mut self,
        _host: &mut TestHost,
        state: DragState,
        captured: Option<ViewId>,
    ) {
        self.events.push(format!("{state:?} {captured:?}"));
    }

    fn on_edge_touched(&mut self, _host: &mut TestHost, edges: EdgeFlags, _pointer: PointerId) {
        self.events.push(format!("edge touched {edges:?}"));
    }

    fn on_edge_lock(&mut self, _edges: EdgeFlags) -> bool {
        self.lock_edges
    }

    fn on_edge_drag_started(
        &mut self,
        helper: &mut DragHelper,
        host: &mut TestHost,
        edges: EdgeFlags,
        pointer: PointerId,
    ) {
        self.events.push(format!("edge drag {edges:?}"));
        if let Some(view) = self.capture_on_edge_drag {
            helper.capture_child_view(self, host, view, pointer);
        }
    }
}

fn event(kind: PointerEventKind, x: f32, y: f32, time: u64) -> PointerEvent {
    PointerEvent::new(kind, Point::new(x, y), time)
}

fn helper() -> DragHelper {
    DragHelper::new(DragHelperConfig::default(), 1.0)
}

#[test]
fn thresholds_scale_with_density() {
    let helper = DragHelper::new(DragHelperConfig::default(), 2.0);
    assert_eq!(helper.edge_size(), 40);
    assert_eq!(helper.touch_slop(), 16);
    assert_eq!(helper.min_velocity(), 800.0);
    assert_eq!(helper.view_drag_state(), DragState::Idle);
}

#[test]
fn find_top_child_prefers_last_child() {
    let host = TestHost::new(0);
    let helper = helper();
    assert_eq!(helper.find_top_child_under(&host, 100.0, 10.0), Some(PANEL));
    assert_eq!(helper.find_top_child_under(&host, 300.0, 10.0), Some(CONTENT));
    assert_eq!(helper.find_top_child_under(&host, 500.0, 10.0), None);
    // Truncated to whole pixels: 199.9 is still inside [0, 200).
    assert_eq!(helper.find_top_child_under(&host, 199.9, 10.0), Some(PANEL));
}

#[test]
fn drag_moves_captured_view_and_settles_on_release() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    cb.settle_to = Some(0);
    let mut helper = helper();

    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Down, 100.0, 100.0, 0));
    assert_eq!(helper.view_drag_state(), DragState::Dragging);
    assert_eq!(helper.captured_view(), Some(PANEL));
    assert!(cb.saw("captured 1 by 0"));

    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Move, 130.0, 100.0, 10));
    assert_eq!(host.panel_left(), 30);

    // A long pause before lifting leaves no velocity.
    host.now = 200;
    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Up, 130.0, 100.0, 200));
    assert!(cb.saw("released 1 0"));
    assert_eq!(cb.settle_result, Some(Ok(true)));
    assert_eq!(helper.view_drag_state(), DragState::Settling);

    host.now = 200 + 100;
    assert!(helper.continue_settling(&mut cb, &mut host));
    assert!(host.panel_left() < 30 && host.panel_left() > 0);

    host.now = 200 + 1_000;
    assert!(!helper.continue_settling(&mut cb, &mut host));
    assert_eq!(host.panel_left(), 0);
    assert_eq!(helper.view_drag_state(), DragState::Idle);
    assert_eq!(helper.captured_view(), None);
    assert!(cb.saw("Idle Some(1)"));
}

#[test]
fn drag_is_clamped_by_callback() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 50);
    let mut helper = helper();

    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Down, 100.0, 100.0, 0));
    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Move, 300.0, 100.0, 10));
    assert_eq!(host.panel_left(), 50);
}

#[test]
fn fast_release_reports_velocity() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Down, 50.0, 100.0, 0));
    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Move, 100.0, 100.0, 10));
    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Move, 150.0, 100.0, 20));
    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Up, 150.0, 100.0, 30));

    let released = cb
        .events
        .iter()
        .find_map(|e| e.strip_prefix("released 1 "))
        .and_then(|v| v.parse::<f32>().ok())
        .expect("view was released");
    assert!(released > 1_000.0, "expected a fling, got {released}");
    assert!(released <= 8_000.0);
    // Nothing settled it, so the helper returns to idle by itself.
    assert_eq!(helper.view_drag_state(), DragState::Idle);
}

#[test]
fn settling_outside_release_is_rejected() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    let result = helper.settle_captured_view_at(&mut cb, &mut host, 100, 0);
    assert_eq!(result, Err(DragError::SettleOutsideRelease));
}

#[test]
fn cancel_while_dragging_releases_without_velocity() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Down, 50.0, 100.0, 0));
    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Move, 100.0, 100.0, 5));
    helper.process_touch_event(&mut cb, &mut host, &PointerEvent::cancel(10));

    assert!(cb.saw("released 1 0"));
    assert_eq!(helper.view_drag_state(), DragState::Idle);
    assert_eq!(helper.active_pointer(), None);
}

#[test]
fn lifting_active_pointer_hands_drag_to_remaining_pointer() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Down, 50.0, 100.0, 0));
    let second = event(PointerEventKind::PointerDown, 60.0, 200.0, 5).with_id(1);
    helper.process_touch_event(&mut cb, &mut host, &second);
    assert_eq!(helper.active_pointer(), Some(1));

    let lift = event(PointerEventKind::PointerUp, 60.0, 200.0, 10).with_id(1);
    helper.process_touch_event(&mut cb, &mut host, &lift);
    assert_eq!(helper.active_pointer(), Some(0));
    assert_eq!(helper.view_drag_state(), DragState::Dragging);
    assert!(!cb.events.iter().any(|e| e.starts_with("released")));

    helper.process_touch_event(&mut cb, &mut host, &event(PointerEventKind::Move, 80.0, 100.0, 15));
    assert_eq!(host.panel_left(), 30);
}

#[test]
fn move_without_down_is_ignored() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    let stray = event(PointerEventKind::Move, 120.0, 100.0, 0).with_id(7);
    helper.process_touch_event(&mut cb, &mut host, &stray);
    assert!(!helper.should_intercept_touch_event(&mut cb, &mut host, &stray));
    assert_eq!(helper.view_drag_state(), DragState::Idle);
    assert_eq!(host.panel_left(), 0);
}

#[test]
fn intercept_waits_for_touch_slop() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    let down = event(PointerEventKind::Down, 100.0, 100.0, 0);
    assert!(!helper.should_intercept_touch_event(&mut cb, &mut host, &down));

    let small = event(PointerEventKind::Move, 106.0, 100.0, 5);
    assert!(!helper.should_intercept_touch_event(&mut cb, &mut host, &small));
    assert!(!helper.check_touch_slop(DragDirection::Horizontal));

    let past = event(PointerEventKind::Move, 120.0, 100.0, 10);
    assert!(helper.should_intercept_touch_event(&mut cb, &mut host, &past));
    assert!(helper.check_touch_slop(DragDirection::Horizontal));
    assert!(!helper.check_touch_slop(DragDirection::Vertical));
    assert_eq!(helper.captured_view(), Some(PANEL));
}

#[test]
fn intercept_skips_drags_that_cannot_move_the_view() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    let down = event(PointerEventKind::Down, 100.0, 100.0, 0);
    helper.should_intercept_touch_event(&mut cb, &mut host, &down);
    // Already at its minimum; pulling further left clamps to the same spot.
    let left = event(PointerEventKind::Move, 60.0, 100.0, 10);
    assert!(!helper.should_intercept_touch_event(&mut cb, &mut host, &left));
    assert_eq!(helper.view_drag_state(), DragState::Idle);
}

#[test]
fn edge_swipe_reports_touch_and_drag_start() {
    let mut host = TestHost::new(-200);
    let mut cb = TestCallback::dragging(-200, 0);
    cb.capture_on_edge_drag = Some(PANEL);
    let mut helper = helper();
    helper.set_edge_tracking_enabled(EdgeFlags::LEFT);

    let down = event(PointerEventKind::Down, 5.0, 300.0, 0);
    assert!(!helper.should_intercept_touch_event(&mut cb, &mut host, &down));
    assert!(cb.saw("edge touched EdgeFlags(1)"));

    let swipe = event(PointerEventKind::Move, 20.0, 300.0, 10);
    assert!(helper.should_intercept_touch_event(&mut cb, &mut host, &swipe));
    assert!(cb.saw("edge drag EdgeFlags(1)"));
    assert_eq!(helper.captured_view(), Some(PANEL));
}

#[test]
fn untracked_edges_are_not_reported() {
    let mut host = TestHost::new(-200);
    let mut cb = TestCallback::dragging(-200, 0);
    let mut helper = helper();
    helper.set_edge_tracking_enabled(EdgeFlags::RIGHT);

    let down = event(PointerEventKind::Down, 5.0, 300.0, 0);
    helper.should_intercept_touch_event(&mut cb, &mut host, &down);
    let swipe = event(PointerEventKind::Move, 40.0, 300.0, 10);
    helper.should_intercept_touch_event(&mut cb, &mut host, &swipe);

    assert!(!cb.events.iter().any(|e| e.starts_with("edge")));
}

#[test]
fn edge_lock_suppresses_later_edge_drag() {
    let mut host = TestHost::new(-200);
    let mut cb = TestCallback::dragging(-200, 0);
    cb.lock_edges = true;
    cb.capture_on_edge_drag = Some(PANEL);
    let mut helper = helper();
    helper.set_edge_tracking_enabled(EdgeFlags::LEFT);

    let down = event(PointerEventKind::Down, 5.0, 300.0, 0);
    helper.should_intercept_touch_event(&mut cb, &mut host, &down);
    // Mostly along the edge: locked.
    let along = event(PointerEventKind::Move, 7.0, 330.0, 10);
    helper.should_intercept_touch_event(&mut cb, &mut host, &along);
    let away = event(PointerEventKind::Move, 60.0, 330.0, 20);
    assert!(!helper.should_intercept_touch_event(&mut cb, &mut host, &away));

    assert!(!cb.events.iter().any(|e| e.starts_with("edge drag")));
}

#[test]
fn smooth_slide_to_current_position_does_nothing() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    assert!(!helper.smooth_slide_view_to(&mut cb, &mut host, PANEL, 0, 0));
    assert_eq!(helper.captured_view(), None);
    assert_eq!(helper.view_drag_state(), DragState::Idle);
    assert!(cb.events.is_empty());
}

#[test]
fn smooth_slide_duration_follows_drag_range() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    // (100 / 200 + 1) * 256 = 384ms
    assert!(helper.smooth_slide_view_to(&mut cb, &mut host, PANEL, 100, 0));
    assert_eq!(helper.view_drag_state(), DragState::Settling);

    host.now = 192;
    assert!(helper.continue_settling(&mut cb, &mut host));
    assert!(host.panel_left() > 0 && host.panel_left() < 100);

    host.now = 384;
    assert!(!helper.continue_settling(&mut cb, &mut host));
    assert_eq!(host.panel_left(), 100);
}

#[test]
fn abort_jumps_to_settle_target() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    helper.smooth_slide_view_to(&mut cb, &mut host, PANEL, 150, 0);
    helper.abort(&mut cb, &mut host);

    assert_eq!(host.panel_left(), 150);
    assert_eq!(helper.view_drag_state(), DragState::Idle);
    assert!(!helper.continue_settling(&mut cb, &mut host));
}

#[test]
fn stop_settling_leaves_view_in_place() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    helper.smooth_slide_view_to(&mut cb, &mut host, PANEL, 150, 0);
    host.now = 50;
    helper.continue_settling(&mut cb, &mut host);
    let reached = host.panel_left();
    assert!(reached > 0 && reached < 150);

    helper.stop_settling(&mut cb, &mut host);

    assert_eq!(host.panel_left(), reached);
    assert_eq!(helper.view_drag_state(), DragState::Idle);
    assert_eq!(helper.captured_view(), None);
    assert!(cb.saw("Idle None"));
    host.now = 1_000;
    assert!(!helper.continue_settling(&mut cb, &mut host));
    assert_eq!(host.panel_left(), reached);
}

#[test]
fn touching_a_settling_view_catches_it() {
    let mut host = TestHost::new(0);
    let mut cb = TestCallback::dragging(0, 200);
    let mut helper = helper();

    helper.smooth_slide_view_to(&mut cb, &mut host, PANEL, 150, 0);
    host.now = 50;
    helper.continue_settling(&mut cb, &mut host);

    let x = host.panel_left() as f32 + 10.0;
    let down = event(PointerEventKind::Down, x, 100.0, 50);
    assert!(helper.should_intercept_touch_event(&mut cb, &mut host, &down));
    assert_eq!(helper.view_drag_state(), DragState::Dragging);
}

#[test]
fn clamp_mag_zeroes_slow_and_caps_fast_values() {
    assert_eq!(clamp_mag(100.0, 400.0, 8_000.0), 0.0);
    assert_eq!(clamp_mag(-500.0, 400.0, 8_000.0), -500.0);
    assert_eq!(clamp_mag(9_000.0, 400.0, 8_000.0), 8_000.0);
    assert_eq!(clamp_mag(-9_000.0, 400.0, 8_000.0), -8_000.0);
}

#[test]
fn distance_influence_is_centered_on_half_distance() {
    assert_eq!(distance_influence_for_snap_duration(0.5), 0.0);
    assert!(distance_influence_for_snap_duration(1.0) > 0.0);
    assert!(distance_influence_for_snap_duration(0.0) < 0.0);
}
