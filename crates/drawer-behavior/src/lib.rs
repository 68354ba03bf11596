//! Edge drawer behavior for layout containers
//!
//! A [`DrawerBehavior`] turns a child of a container into a drawer that
//! slides in from the left or right edge. Each drawer gets a
//! [`DrawerController`] which arbitrates touches between the container and
//! its content, drags and flings the drawer with a
//! [`DragHelper`](drawer_foundation::DragHelper), dims the content with a
//! [`ScrimSurface`] and keeps accessibility importance in step with the
//! open state.
//!
//! The container is abstracted as a [`ContainerHost`].

mod behavior;
mod config;
mod controller;
mod error;
mod host;
mod scrim;

pub use behavior::DrawerBehavior;
pub use config::{DrawerConfig, EdgeGravity, DEFAULT_SCRIM_COLOR, PEEK_DELAY_MS};
pub use controller::{DrawerController, OpenState};
pub use error::DrawerError;
pub use host::{
    AccessibilityEventType, AccessibilityImportance, AccessibilitySource, ContainerHost,
    DrawerEvent, ScheduledTask, ScrimHost, ScrimPaint, TaskKind, Visibility,
};
pub use scrim::{create_scrim_surface, OverlayScrim, ScrimSurface, ViewScrim};

pub use drawer_foundation::{
    DragState, Easing, PointerEvent, PointerEventKind, ViewHost, ViewId,
};
pub use drawer_ui_layout::{AbsoluteEdge, Gravity, LayoutDirection};

pub mod prelude {
    pub use crate::behavior::DrawerBehavior;
    pub use crate::config::DrawerConfig;
    pub use crate::controller::{DrawerController, OpenState};
    pub use crate::host::{ContainerHost, DrawerEvent, ScheduledTask, Visibility};
}
