//! Assertion utilities for drawer robot tests

use drawer_behavior::{ScrimPaint, Visibility};
use drawer_ui_graphics::IntRect;

use crate::DrawerRobot;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert the drawer's open fraction.
pub fn assert_on_screen(robot: &DrawerRobot, expected: f32, msg: &str) {
    assert_approx_eq(robot.on_screen(), expected, 0.001, msg);
}

/// Assert the drawer is hidden exactly when it is fully closed, and that
/// its fraction is in range.
pub fn assert_visibility_matches_fraction(robot: &DrawerRobot, msg: &str) {
    let fraction = robot.on_screen();
    assert!(
        (0.0..=1.0).contains(&fraction),
        "{}: fraction {} out of range",
        msg,
        fraction
    );
    let expected = if fraction == 0.0 {
        Visibility::Invisible
    } else {
        Visibility::Visible
    };
    assert_eq!(
        robot.drawer_visibility(),
        expected,
        "{}: visibility at fraction {}",
        msg,
        fraction
    );
}

fn scrim_of(robot: &DrawerRobot, msg: &str) -> (ScrimPaint, bool) {
    match robot.scrim() {
        Some(scrim) => scrim,
        None => panic!("{}: drawer has no controller", msg),
    }
}

/// Assert the scrim is showing with the given bounds.
pub fn assert_scrim_bounds(robot: &DrawerRobot, expected: IntRect, msg: &str) {
    let (paint, visible) = scrim_of(robot, msg);
    assert!(visible, "{}: scrim hidden", msg);
    assert_eq!(paint.bounds, expected, "{}: scrim bounds", msg);
}

/// Assert the scrim's alpha channel.
pub fn assert_scrim_alpha(robot: &DrawerRobot, expected: u8, msg: &str) {
    let (paint, _) = scrim_of(robot, msg);
    assert_eq!(
        paint.color.alpha(),
        expected,
        "{}: scrim alpha {:#04x}",
        msg,
        paint.color.alpha()
    );
}

/// Assert the scrim is not showing.
pub fn assert_scrim_hidden(robot: &DrawerRobot, msg: &str) {
    let (_, visible) = scrim_of(robot, msg);
    assert!(!visible, "{}: scrim still showing", msg);
}
