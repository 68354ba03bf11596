use drawer_behavior::{ContainerHost, ScheduledTask, ScrimHost, ViewHost, Visibility};
use drawer_foundation::{PointerEvent, PointerEventKind};
use drawer_testing::HeadlessContainer;
use drawer_ui_graphics::{IntRect, IntSize, Point};
use drawer_ui_layout::ChildLayoutParams;

#[test]
fn delayed_tasks_run_once_due() {
    let mut container = HeadlessContainer::new(100, 100);
    let peek = ScheduledTask::peek(1);
    container.post_delayed(peek, 50);
    container.post_delayed(peek, 80);

    container.advance_clock(60);
    assert!(container.take_due_tasks().is_empty());

    container.advance_clock(20);
    assert_eq!(container.take_due_tasks(), vec![peek]);
    assert!(!container.has_pending_tasks());
}

#[test]
fn animation_tasks_are_posted_once_and_removable() {
    let mut container = HeadlessContainer::new(100, 100);
    let settle = ScheduledTask::settle(1);
    container.post_on_animation(settle);
    container.post_on_animation(settle);
    assert_eq!(container.take_due_tasks(), vec![settle]);

    container.post_on_animation(settle);
    container.post_delayed(ScheduledTask::peek(1), 10);
    container.remove_callbacks(settle);
    assert!(!container.has_animation_tasks());
    assert!(container.is_posted(ScheduledTask::peek(1)));
}

#[test]
fn scrim_view_is_inserted_below_its_drawer() {
    let mut container = HeadlessContainer::new(100, 100).without_overlay();
    let content = container.add_content();
    let drawer = container.add_view(IntSize::new(40, 100), ChildLayoutParams::default());

    assert!(!container.supports_overlay());
    let scrim = container.insert_scrim_view(drawer);
    assert_eq!(container.children(), &[content, scrim, drawer]);
    assert_eq!(container.view_bounds(scrim), IntRect::new(0, 0, 100, 100));
    assert_eq!(container.visibility(scrim), Visibility::Invisible);

    container.set_scrim_view_visible(scrim, true);
    assert_eq!(container.visibility(scrim), Visibility::Visible);
}

#[test]
fn dispatched_touches_are_recorded() {
    let mut container = HeadlessContainer::new(100, 100);
    let content = container.add_content();
    let down = PointerEvent::new(PointerEventKind::Down, Point::new(5.0, 5.0), 0);

    assert!(!container.dispatch_touch_event(content, &down));
    container.view_mut(content).consumes_touches = true;
    assert!(container.dispatch_touch_event(content, &PointerEvent::cancel(1)));
    assert_eq!(
        container.view(content).received,
        vec![PointerEventKind::Down, PointerEventKind::Cancel]
    );
}
