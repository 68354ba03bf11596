//! Open/close dispatch, accessibility side effects and drawer events.

mod common;

use common::*;
use drawer_behavior::{
    AccessibilityEventType, AccessibilityImportance, AccessibilitySource, DragState, DrawerEvent,
    OpenState,
};
use drawer_testing::robot_assertions::assert_on_screen;

const OPENED_EVENT: (AccessibilitySource, AccessibilityEventType) = (
    AccessibilitySource::Container,
    AccessibilityEventType::WindowStateChanged,
);
const CLOSED_EVENT: (AccessibilitySource, AccessibilityEventType) = (
    AccessibilitySource::Root,
    AccessibilityEventType::WindowStateChanged,
);

#[test]
fn opening_twice_has_one_set_of_side_effects() {
    let Fixture {
        mut robot,
        content,
        drawer,
    } = trailing_drawer();

    robot.open(false);
    robot.open(false);
    robot.open(true);
    robot.settle();

    let container = robot.container();
    assert_eq!(container.accessibility_events(), &[OPENED_EVENT]);
    assert_eq!(container.focus_requests(), &[drawer]);
    assert_eq!(
        container.view(drawer).importance,
        Some(AccessibilityImportance::Yes)
    );
    assert_eq!(
        container.view(content).importance,
        Some(AccessibilityImportance::NoHideDescendants)
    );
    let opened = container
        .drawer_events()
        .iter()
        .filter(|(_, event)| *event == DrawerEvent::Opened)
        .count();
    assert_eq!(opened, 1);
}

#[test]
fn closing_twice_has_one_set_of_side_effects() {
    let Fixture {
        mut robot,
        content,
        drawer,
    } = trailing_drawer();
    robot.open(false);

    robot.close(false);
    robot.close(false);
    robot.close(true);
    robot.settle();

    let container = robot.container();
    assert_eq!(container.accessibility_events(), &[OPENED_EVENT, CLOSED_EVENT]);
    assert_eq!(
        container.view(drawer).importance,
        Some(AccessibilityImportance::NoHideDescendants)
    );
    assert_eq!(
        container.view(content).importance,
        Some(AccessibilityImportance::Yes)
    );
}

#[test]
fn closing_a_drawer_that_never_opened_reports_nothing() {
    let Fixture { mut robot, drawer, .. } = trailing_drawer();
    robot.close(false);

    let container = robot.container();
    assert!(container.accessibility_events().is_empty());
    assert!(container.drawer_events().is_empty());
    assert_eq!(container.view(drawer).importance, None);
}

#[test]
fn no_accessibility_event_without_window_focus() {
    let Fixture { mut robot, drawer, .. } = trailing_drawer();
    robot.container_mut().set_window_focus(false);

    robot.open(false);
    robot.close(false);

    let container = robot.container();
    assert!(container.accessibility_events().is_empty());
    assert_eq!(container.focus_requests(), &[drawer]);
    assert_eq!(
        container.view(drawer).importance,
        Some(AccessibilityImportance::NoHideDescendants)
    );
}

#[test]
fn animated_open_reports_opened_once_settled() {
    let Fixture { mut robot, .. } = trailing_drawer();

    robot.open(true);
    assert_eq!(
        robot.controller().map(|c| c.open_state()),
        Some(OpenState::Opening)
    );
    assert!(robot.container().accessibility_events().is_empty());

    robot.settle();
    assert_on_screen(&robot, 1.0, "after animated open");
    assert_eq!(robot.container().accessibility_events(), &[OPENED_EVENT]);
    assert!(robot.controller().is_some_and(|c| c.is_open()));
}

#[test]
fn reversing_an_opening_settle_reports_nothing() {
    let Fixture { mut robot, .. } = trailing_drawer();

    robot.open(true);
    robot.advance(64);
    assert!(robot.on_screen() > 0.0);

    robot.close(true);
    assert_eq!(
        robot.controller().map(|c| c.open_state()),
        Some(OpenState::Closed)
    );
    robot.settle();

    assert_on_screen(&robot, 0.0, "after reversing");
    assert!(robot.container().accessibility_events().is_empty());
    assert!(!robot
        .container()
        .drawer_events()
        .iter()
        .any(|(_, event)| matches!(event, DrawerEvent::Opened | DrawerEvent::Closed)));
}

#[test]
fn reversing_a_closing_settle_stays_open() {
    let Fixture { mut robot, .. } = trailing_drawer();
    robot.open(false);

    robot.close(true);
    assert_eq!(
        robot.controller().map(|c| c.open_state()),
        Some(OpenState::Closing)
    );
    assert!(robot.controller().is_some_and(|c| c.is_open()));
    robot.advance(64);

    robot.open(true);
    assert_eq!(
        robot.controller().map(|c| c.open_state()),
        Some(OpenState::Opened)
    );
    robot.settle();

    assert_on_screen(&robot, 1.0, "after reversing");
    assert_eq!(robot.container().accessibility_events(), &[OPENED_EVENT]);
}

#[test]
fn edge_swipe_reports_state_changes_around_opened() {
    let Fixture {
        mut robot, drawer, ..
    } = trailing_drawer();

    robot.fling((995.0, 300.0), (700.0, 300.0));
    robot.settle();

    let events = robot.container_mut().take_drawer_events();
    assert!(events.iter().all(|&(view, _)| view == drawer));

    let states: Vec<DrawerEvent> = events
        .iter()
        .map(|&(_, event)| event)
        .filter(|event| !matches!(event, DrawerEvent::Slide(_)))
        .collect();
    assert_eq!(
        states,
        vec![
            DrawerEvent::StateChanged(DragState::Dragging),
            DrawerEvent::StateChanged(DragState::Settling),
            DrawerEvent::Opened,
            DrawerEvent::StateChanged(DragState::Idle),
        ]
    );

    let slides: Vec<f32> = events
        .iter()
        .filter_map(|&(_, event)| match event {
            DrawerEvent::Slide(fraction) => Some(fraction),
            _ => None,
        })
        .collect();
    assert!(slides.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(slides.last(), Some(&1.0));
}

#[test]
fn programmatic_moves_do_not_repeat_slide_events() {
    let Fixture { mut robot, .. } = trailing_drawer();

    robot.open(false);
    robot.open(false);

    let slides: Vec<DrawerEvent> = robot
        .container()
        .drawer_events()
        .iter()
        .map(|&(_, event)| event)
        .filter(|event| matches!(event, DrawerEvent::Slide(_)))
        .collect();
    assert_eq!(slides, vec![DrawerEvent::Slide(1.0)]);
}

#[test]
fn snapping_closed_mid_open_reports_nothing() {
    let Fixture { mut robot, .. } = trailing_drawer();

    robot.open(true);
    robot.advance_frame();
    assert!(robot.on_screen() > 0.0 && robot.on_screen() < 1.0);

    robot.close(false);
    robot.settle();

    assert_on_screen(&robot, 0.0, "after snapping closed");
    assert_eq!(
        robot.controller().map(|c| c.open_state()),
        Some(OpenState::Closed)
    );
    let container = robot.container();
    assert!(container.accessibility_events().is_empty());
    assert!(container.focus_requests().is_empty());
    assert!(!container
        .drawer_events()
        .iter()
        .any(|(_, event)| matches!(event, DrawerEvent::Opened | DrawerEvent::Closed)));
}

#[test]
fn snapping_open_mid_close_stays_open() {
    let Fixture {
        mut robot, drawer, ..
    } = trailing_drawer();
    robot.open(false);

    robot.close(true);
    robot.advance_frame();
    assert!(robot.on_screen() > 0.0 && robot.on_screen() < 1.0);

    robot.open(false);
    robot.settle();

    assert_on_screen(&robot, 1.0, "after snapping open");
    assert_eq!(
        robot.controller().map(|c| c.open_state()),
        Some(OpenState::Opened)
    );
    let container = robot.container();
    assert_eq!(container.accessibility_events(), &[OPENED_EVENT]);
    assert_eq!(container.focus_requests(), &[drawer]);
    assert_eq!(
        container.view(drawer).importance,
        Some(AccessibilityImportance::Yes)
    );
    assert!(!container
        .drawer_events()
        .iter()
        .any(|(_, event)| *event == DrawerEvent::Closed));
}
