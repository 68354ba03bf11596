//! Testing utilities and harness for drawers

pub mod container;
pub mod robot;
pub mod robot_assertions;

pub use container::{HeadlessContainer, HeadlessView};
pub use robot::{DrawerRobot, FRAME_MILLIS};

pub mod prelude {
    pub use crate::container::{HeadlessContainer, HeadlessView};
    pub use crate::robot::*;
    pub use crate::robot_assertions;
}
