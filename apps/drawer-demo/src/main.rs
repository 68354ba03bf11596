use drawer_behavior::{DrawerConfig, DrawerEvent, Gravity, LayoutDirection, ViewId};
use drawer_testing::{DrawerRobot, HeadlessContainer};
use drawer_ui_graphics::IntSize;
use drawer_ui_layout::{ChildLayoutParams, Margins};

const WIDTH: i32 = 1080;
const HEIGHT: i32 = 720;
const DRAWER_WIDTH: i32 = 320;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Drawer Behavior Demo ===");
    println!("Scripted gestures against a headless {WIDTH}x{HEIGHT} container.");
    println!("Set RUST_LOG=debug to see state transitions, trace for every frame.");
    println!();

    trailing_drawer_session()?;
    rtl_start_drawer_session()?;
    Ok(())
}

fn drawer_robot(mut container: HeadlessContainer, gravity: Gravity) -> anyhow::Result<DrawerRobot> {
    container.add_content();
    let drawer = container.add_view(
        IntSize::new(DRAWER_WIDTH, HEIGHT),
        ChildLayoutParams::new(gravity, Margins::default()),
    );
    let config = DrawerConfig::default().with_gravity(gravity);
    Ok(DrawerRobot::new(container, drawer, config)?)
}

fn trailing_drawer_session() -> anyhow::Result<()> {
    println!("-- END drawer, left-to-right --");
    let mut robot = drawer_robot(HeadlessContainer::new(WIDTH, HEIGHT), Gravity::END)?;
    let edge = WIDTH as f32 - 4.0;
    let y = HEIGHT as f32 / 2.0;

    robot.down(edge, y);
    robot.advance(200);
    report(&mut robot, "holding the edge");
    robot.up();
    robot.settle();
    report(&mut robot, "released the peek");

    robot.fling((edge, y), (edge - 260.0, y));
    robot.settle();
    report(&mut robot, "edge fling");

    robot.down(100.0, y);
    robot.up_at(102.0, y);
    robot.settle();
    report(&mut robot, "tap on content");

    robot.open(true);
    robot.settle();
    report(&mut robot, "animated open");

    robot.set_scrim_color(0xcc10_2040);
    report(&mut robot, "new scrim color");

    robot.close(false);
    report(&mut robot, "instant close");
    println!();
    Ok(())
}

fn rtl_start_drawer_session() -> anyhow::Result<()> {
    println!("-- START drawer, right-to-left --");
    let container =
        HeadlessContainer::new(WIDTH, HEIGHT).with_layout_direction(LayoutDirection::Rtl);
    let mut robot = drawer_robot(container, Gravity::START)?;
    let y = HEIGHT as f32 / 2.0;

    robot.slow_drag((WIDTH as f32 - 4.0, y), (WIDTH as f32 - 200.0, y));
    robot.settle();
    report(&mut robot, "short slow drag");

    robot.open(false);
    report(&mut robot, "instant open");
    Ok(())
}

fn report(robot: &mut DrawerRobot, step: &str) {
    let drawer = robot.drawer();
    let Some(controller) = robot.controller() else {
        log::warn!("{step}: drawer {drawer} has no controller");
        return;
    };
    let (scrim, showing) = controller.scrim();
    println!(
        "{step:>18}: {:>5.1}% open, {:?}, left {}, scrim {:#010x}{}",
        controller.on_screen() * 100.0,
        controller.open_state(),
        robot.drawer_left(),
        scrim.color.argb(),
        if showing { "" } else { " (hidden)" }
    );
    log_events(drawer, robot.container_mut().take_drawer_events());
}

fn log_events(drawer: ViewId, events: Vec<(ViewId, DrawerEvent)>) {
    let slides = events
        .iter()
        .filter(|(_, event)| matches!(event, DrawerEvent::Slide(_)))
        .count();
    for (_, event) in events.iter().filter(|(_, e)| !matches!(e, DrawerEvent::Slide(_))) {
        log::info!("drawer {drawer}: {event:?}");
    }
    if slides > 0 {
        log::debug!("drawer {drawer}: {slides} slide updates");
    }
}
