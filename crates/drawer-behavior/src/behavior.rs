//! Container-level registry of drawer controllers.

use drawer_foundation::{PointerEvent, ViewId};
use drawer_ui_graphics::ArgbColor;
use rustc_hash::FxHashMap;

use crate::config::{DrawerConfig, EdgeGravity};
use crate::controller::DrawerController;
use crate::host::{ContainerHost, ScheduledTask, Visibility};
use crate::DrawerError;

/// Layout behavior attached to drawer children of a container.
///
/// The container forwards layout passes and touch events for each child the
/// behavior is attached to; a [`DrawerController`] is created for a child
/// the first time it is seen and kept for the container's lifetime.
pub struct DrawerBehavior {
    config: DrawerConfig,
    gravity: EdgeGravity,
    controllers: FxHashMap<ViewId, DrawerController>,
}

impl DrawerBehavior {
    pub fn new(config: DrawerConfig) -> Result<Self, DrawerError> {
        let gravity = config.validate()?;
        Ok(Self {
            config,
            gravity,
            controllers: FxHashMap::default(),
        })
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Controller for `child`, if one was created.
    pub fn controller(&self, child: ViewId) -> Option<&DrawerController> {
        self.controllers.get(&child)
    }

    fn controller_for<H: ContainerHost>(
        &mut self,
        host: &mut H,
        child: ViewId,
    ) -> &mut DrawerController {
        let config = &self.config;
        let gravity = self.gravity;
        self.controllers.entry(child).or_insert_with(|| {
            let edge = gravity.resolve(host.layout_direction());
            DrawerController::new(host, child, edge, config)
        })
    }

    /// Lays out `child`. Gone children are skipped without creating a
    /// controller.
    pub fn on_layout_child<H: ContainerHost>(&mut self, host: &mut H, child: ViewId) -> bool {
        host.visibility(child) == Visibility::Gone
            || self.controller_for(host, child).on_layout_child(host)
    }

    pub fn on_intercept_touch_event<H: ContainerHost>(
        &mut self,
        host: &mut H,
        child: ViewId,
        event: &PointerEvent,
    ) -> bool {
        self.controller_for(host, child).on_intercept_touch_event(host, event)
    }

    pub fn on_touch_event<H: ContainerHost>(
        &mut self,
        host: &mut H,
        child: ViewId,
        event: &PointerEvent,
    ) -> bool {
        self.controller_for(host, child).on_touch_event(host, event)
    }

    /// Runs a task posted through the host. Tasks for unknown drawers are
    /// dropped.
    pub fn run_task<H: ContainerHost>(&mut self, host: &mut H, task: ScheduledTask) {
        match self.controllers.get_mut(&task.drawer) {
            Some(controller) => controller.run_task(host, task.kind),
            None => log::warn!("dropping {task:?}: no controller for that drawer"),
        }
    }

    pub fn open_drawer<H: ContainerHost>(&mut self, host: &mut H, child: ViewId, animate: bool) {
        self.controller_for(host, child).open(host, animate);
    }

    pub fn close_drawer<H: ContainerHost>(&mut self, host: &mut H, child: ViewId, animate: bool) {
        self.controller_for(host, child).close(host, animate);
    }

    pub fn set_scrim_color<H: ContainerHost>(
        &mut self,
        host: &mut H,
        child: ViewId,
        color: ArgbColor,
    ) {
        self.controller_for(host, child).set_scrim_color(host, color);
    }
}
