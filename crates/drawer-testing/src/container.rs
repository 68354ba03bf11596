//! In-memory container implementing [`ContainerHost`].

use drawer_behavior::{
    AccessibilityEventType, AccessibilityImportance, AccessibilitySource, ContainerHost,
    DrawerEvent, ScheduledTask, ScrimHost, ScrimPaint, Visibility,
};
use drawer_foundation::{PointerEvent, PointerEventKind, ViewHost, ViewId};
use drawer_ui_graphics::{IntRect, IntSize};
use drawer_ui_layout::{ChildLayoutParams, LayoutDirection};
use rustc_hash::FxHashMap;

/// A child of a [`HeadlessContainer`].
#[derive(Clone, Debug, Default)]
pub struct HeadlessView {
    pub bounds: IntRect,
    pub measured: IntSize,
    pub params: ChildLayoutParams,
    pub visibility: Visibility,
    pub importance: Option<AccessibilityImportance>,
    /// Set for scrim views inserted by a drawer.
    pub scrim: Option<ScrimPaint>,
    /// Whether the view handles the touches dispatched to it.
    pub consumes_touches: bool,
    /// Kinds of touch events dispatched to the view, oldest first.
    pub received: Vec<PointerEventKind>,
}

/// Container with a manual clock and recorded side effects.
///
/// Tasks posted through [`ContainerHost`] are queued, not run: the caller
/// collects due ones with [`take_due_tasks`](Self::take_due_tasks) after
/// moving the clock.
#[derive(Debug)]
pub struct HeadlessContainer {
    width: i32,
    height: i32,
    density: f32,
    direction: LayoutDirection,
    now: u64,
    window_focus: bool,
    overlay_supported: bool,
    views: Vec<HeadlessView>,
    order: Vec<ViewId>,
    overlay: FxHashMap<ViewId, ScrimPaint>,
    delayed: Vec<(u64, ScheduledTask)>,
    animation: Vec<ScheduledTask>,
    accessibility_events: Vec<(AccessibilitySource, AccessibilityEventType)>,
    drawer_events: Vec<(ViewId, DrawerEvent)>,
    focus_requests: Vec<ViewId>,
    invalidations: usize,
}

impl HeadlessContainer {
    /// An empty LTR container at density 1 with an overlay layer and window
    /// focus.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            density: 1.0,
            direction: LayoutDirection::Ltr,
            now: 0,
            window_focus: true,
            overlay_supported: true,
            views: Vec::new(),
            order: Vec::new(),
            overlay: FxHashMap::default(),
            delayed: Vec::new(),
            animation: Vec::new(),
            accessibility_events: Vec::new(),
            drawer_events: Vec::new(),
            focus_requests: Vec::new(),
            invalidations: 0,
        }
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Forces drawers to use a sibling scrim view.
    pub fn without_overlay(mut self) -> Self {
        self.overlay_supported = false;
        self
    }

    pub fn set_window_focus(&mut self, focused: bool) {
        self.window_focus = focused;
    }

    fn push_view(&mut self, view: HeadlessView) -> ViewId {
        let id = self.views.len();
        self.views.push(view);
        self.order.push(id);
        id
    }

    /// Adds a full-size content child on top of the existing children.
    pub fn add_content(&mut self) -> ViewId {
        let size = IntSize::new(self.width, self.height);
        self.push_view(HeadlessView {
            bounds: IntRect::from_origin_size(0, 0, size),
            measured: size,
            ..Default::default()
        })
    }

    /// Adds a child measured at `measured`, not yet laid out.
    pub fn add_view(&mut self, measured: IntSize, params: ChildLayoutParams) -> ViewId {
        self.push_view(HeadlessView {
            measured,
            params,
            ..Default::default()
        })
    }

    pub fn view(&self, id: ViewId) -> &HeadlessView {
        &self.views[id]
    }

    pub fn view_mut(&mut self, id: ViewId) -> &mut HeadlessView {
        &mut self.views[id]
    }

    /// Children back to front.
    pub fn children(&self) -> &[ViewId] {
        &self.order
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn advance_clock(&mut self, millis: u64) {
        self.now += millis;
    }

    pub fn overlay(&self, owner: ViewId) -> Option<ScrimPaint> {
        self.overlay.get(&owner).copied()
    }

    pub fn scrim_views(&self) -> Vec<ViewId> {
        self.order
            .iter()
            .copied()
            .filter(|&id| self.views[id].scrim.is_some())
            .collect()
    }

    pub fn accessibility_events(&self) -> &[(AccessibilitySource, AccessibilityEventType)] {
        &self.accessibility_events
    }

    pub fn drawer_events(&self) -> &[(ViewId, DrawerEvent)] {
        &self.drawer_events
    }

    pub fn take_drawer_events(&mut self) -> Vec<(ViewId, DrawerEvent)> {
        std::mem::take(&mut self.drawer_events)
    }

    pub fn focus_requests(&self) -> &[ViewId] {
        &self.focus_requests
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations
    }

    pub fn is_posted(&self, task: ScheduledTask) -> bool {
        self.animation.contains(&task) || self.delayed.iter().any(|(_, t)| *t == task)
    }

    pub fn has_animation_tasks(&self) -> bool {
        !self.animation.is_empty()
    }

    pub fn has_pending_tasks(&self) -> bool {
        self.has_animation_tasks() || !self.delayed.is_empty()
    }

    /// Removes and returns the delayed tasks that are due, followed by every
    /// animation task. Tasks posted while running these wait for the next
    /// call.
    pub fn take_due_tasks(&mut self) -> Vec<ScheduledTask> {
        let now = self.now;
        let mut due = Vec::new();
        self.delayed.retain(|&(at, task)| {
            if at <= now {
                due.push(task);
                false
            } else {
                true
            }
        });
        due.append(&mut self.animation);
        due
    }
}

impl ViewHost for HeadlessContainer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn child_count(&self) -> usize {
        self.order.len()
    }

    fn child_at(&self, index: usize) -> ViewId {
        self.order[index]
    }

    fn view_bounds(&self, view: ViewId) -> IntRect {
        self.views[view].bounds
    }

    fn offset_view(&mut self, view: ViewId, dx: i32, dy: i32) {
        let bounds = &mut self.views[view].bounds;
        *bounds = bounds.translate(dx, dy);
    }

    fn density(&self) -> f32 {
        self.density
    }

    fn uptime_millis(&self) -> u64 {
        self.now
    }
}

impl ScrimHost for HeadlessContainer {
    fn supports_overlay(&self) -> bool {
        self.overlay_supported
    }

    fn overlay_put(&mut self, owner: ViewId, paint: ScrimPaint) {
        self.overlay.insert(owner, paint);
    }

    fn overlay_remove(&mut self, owner: ViewId) {
        self.overlay.remove(&owner);
    }

    fn insert_scrim_view(&mut self, below: ViewId) -> ViewId {
        let size = IntSize::new(self.width, self.height);
        let id = self.views.len();
        self.views.push(HeadlessView {
            bounds: IntRect::from_origin_size(0, 0, size),
            measured: size,
            visibility: Visibility::Invisible,
            scrim: Some(ScrimPaint::default()),
            ..Default::default()
        });
        let index = self
            .order
            .iter()
            .position(|&child| child == below)
            .unwrap_or(self.order.len());
        self.order.insert(index, id);
        id
    }

    fn set_scrim_view_paint(&mut self, view: ViewId, paint: ScrimPaint) {
        self.views[view].scrim = Some(paint);
    }

    fn set_scrim_view_visible(&mut self, view: ViewId, visible: bool) {
        self.views[view].visibility = if visible {
            Visibility::Visible
        } else {
            Visibility::Invisible
        };
    }
}

impl ContainerHost for HeadlessContainer {
    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn measured_size(&self, view: ViewId) -> IntSize {
        self.views[view].measured
    }

    fn layout_params(&self, view: ViewId) -> ChildLayoutParams {
        self.views[view].params
    }

    fn layout_view(&mut self, view: ViewId, bounds: IntRect) {
        self.views[view].bounds = bounds;
    }

    fn visibility(&self, view: ViewId) -> Visibility {
        self.views[view].visibility
    }

    fn set_visibility(&mut self, view: ViewId, visibility: Visibility) {
        self.views[view].visibility = visibility;
    }

    fn set_accessibility_importance(&mut self, view: ViewId, importance: AccessibilityImportance) {
        self.views[view].importance = Some(importance);
    }

    fn has_window_focus(&self) -> bool {
        self.window_focus
    }

    fn send_accessibility_event(
        &mut self,
        source: AccessibilitySource,
        event: AccessibilityEventType,
    ) {
        self.accessibility_events.push((source, event));
    }

    fn request_focus(&mut self, view: ViewId) -> bool {
        self.focus_requests.push(view);
        true
    }

    fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    fn dispatch_touch_event(&mut self, view: ViewId, event: &PointerEvent) -> bool {
        let view = &mut self.views[view];
        view.received.push(event.kind);
        view.consumes_touches
    }

    fn post_delayed(&mut self, task: ScheduledTask, delay_millis: u64) {
        self.delayed.retain(|&(_, queued)| queued != task);
        self.delayed.push((self.now + delay_millis, task));
    }

    fn post_on_animation(&mut self, task: ScheduledTask) {
        if !self.animation.contains(&task) {
            self.animation.push(task);
        }
    }

    fn remove_callbacks(&mut self, task: ScheduledTask) {
        self.delayed.retain(|&(_, queued)| queued != task);
        self.animation.retain(|&queued| queued != task);
    }

    fn on_drawer_event(&mut self, drawer: ViewId, event: DrawerEvent) {
        self.drawer_events.push((drawer, event));
    }
}
