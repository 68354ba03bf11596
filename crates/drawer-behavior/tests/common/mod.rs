#![allow(dead_code)]

use drawer_behavior::{DrawerConfig, Gravity, ViewId};
use drawer_testing::{DrawerRobot, HeadlessContainer};
use drawer_ui_graphics::IntSize;
use drawer_ui_layout::{ChildLayoutParams, Margins};

pub const WIDTH: i32 = 1000;
pub const HEIGHT: i32 = 600;
pub const DRAWER_WIDTH: i32 = 300;

/// A content child under a single drawer.
pub struct Fixture {
    pub robot: DrawerRobot,
    pub content: ViewId,
    pub drawer: ViewId,
}

pub fn drawer_in(mut container: HeadlessContainer, gravity: Gravity, width: i32) -> Fixture {
    let content = container.add_content();
    let drawer = container.add_view(
        IntSize::new(width, HEIGHT),
        ChildLayoutParams::new(gravity, Margins::default()),
    );
    let config = DrawerConfig::default().with_gravity(gravity);
    let robot = DrawerRobot::new(container, drawer, config).expect("edge gravity");
    Fixture {
        robot,
        content,
        drawer,
    }
}

pub fn trailing_drawer() -> Fixture {
    drawer_in(HeadlessContainer::new(WIDTH, HEIGHT), Gravity::END, DRAWER_WIDTH)
}

pub fn leading_drawer(width: i32) -> Fixture {
    drawer_in(HeadlessContainer::new(WIDTH, HEIGHT), Gravity::START, width)
}

/// Swipes in from the right edge until the drawer's left edge is at `left`.
/// The pointer stays down.
pub fn edge_drag_trailing_to(robot: &mut DrawerRobot, left: i32) {
    robot.down(995.0, 300.0);
    robot.advance(16);
    // Past the slop: the edge drag captures the drawer without moving it.
    robot.move_to(980.0, 300.0);
    robot.advance(16);
    robot.move_to((left - 20) as f32, 300.0);
}

/// Swipes in from the left edge until the drawer's left edge is at `left`.
/// The pointer stays down.
pub fn edge_drag_leading_to(robot: &mut DrawerRobot, drawer_width: i32, left: i32) {
    robot.down(5.0, 300.0);
    robot.advance(16);
    robot.move_to(20.0, 300.0);
    robot.advance(16);
    robot.move_to((left + drawer_width + 20) as f32, 300.0);
}

/// Rests long enough for the release to carry no velocity, then lifts.
pub fn rest_and_lift(robot: &mut DrawerRobot) {
    robot.advance(100);
    robot.up();
}
