//! The dimming rectangle drawn over content while a drawer is open.
//!
//! Two backends realise the same [`ScrimSurface`] contract. Containers with
//! an overlay layer get an [`OverlayScrim`]; others get a [`ViewScrim`], a
//! sibling view inserted right below the drawer. The backend is picked once
//! by [`create_scrim_surface`].

use drawer_foundation::ViewId;
use drawer_ui_graphics::{ArgbColor, IntRect};

use crate::host::{ScrimHost, ScrimPaint};

/// A colored rectangle the drawer controller resizes and recolors as the
/// drawer moves.
///
/// Updates made while the scrim is hidden are remembered and shown when it
/// becomes visible.
pub trait ScrimSurface {
    fn set_color(&mut self, host: &mut dyn ScrimHost, color: ArgbColor);

    fn set_bounds(&mut self, host: &mut dyn ScrimHost, bounds: IntRect);

    fn set_visible(&mut self, host: &mut dyn ScrimHost, visible: bool);

    /// Last bounds and color set, whether or not they are showing.
    fn paint(&self) -> ScrimPaint;

    fn is_visible(&self) -> bool;
}

/// Picks the backend for `drawer` from the host's capabilities.
pub fn create_scrim_surface(host: &mut dyn ScrimHost, drawer: ViewId) -> Box<dyn ScrimSurface> {
    if host.supports_overlay() {
        log::debug!("drawer {drawer}: scrim drawn in the container overlay");
        Box::new(OverlayScrim::new(drawer))
    } else {
        let view = host.insert_scrim_view(drawer);
        log::debug!("drawer {drawer}: scrim drawn by sibling view {view}");
        Box::new(ViewScrim::new(view))
    }
}

/// Scrim drawn in the container's overlay layer, above all children.
///
/// The overlay entry only exists while visible.
#[derive(Debug)]
pub struct OverlayScrim {
    owner: ViewId,
    paint: ScrimPaint,
    visible: bool,
}

impl OverlayScrim {
    pub fn new(owner: ViewId) -> Self {
        Self {
            owner,
            paint: ScrimPaint::default(),
            visible: false,
        }
    }

    fn push(&self, host: &mut dyn ScrimHost) {
        if self.visible {
            host.overlay_put(self.owner, self.paint);
        }
    }
}

impl ScrimSurface for OverlayScrim {
    fn set_color(&mut self, host: &mut dyn ScrimHost, color: ArgbColor) {
        self.paint.color = color;
        self.push(host);
    }

    fn set_bounds(&mut self, host: &mut dyn ScrimHost, bounds: IntRect) {
        self.paint.bounds = bounds;
        self.push(host);
    }

    fn set_visible(&mut self, host: &mut dyn ScrimHost, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if visible {
            host.overlay_put(self.owner, self.paint);
        } else {
            host.overlay_remove(self.owner);
        }
    }

    fn paint(&self) -> ScrimPaint {
        self.paint
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Scrim painted by a dedicated sibling view stacked between the content
/// and the drawer.
#[derive(Debug)]
pub struct ViewScrim {
    view: ViewId,
    paint: ScrimPaint,
    visible: bool,
}

impl ViewScrim {
    pub fn new(view: ViewId) -> Self {
        Self {
            view,
            paint: ScrimPaint::default(),
            visible: false,
        }
    }

    pub fn view(&self) -> ViewId {
        self.view
    }
}

impl ScrimSurface for ViewScrim {
    fn set_color(&mut self, host: &mut dyn ScrimHost, color: ArgbColor) {
        self.paint.color = color;
        host.set_scrim_view_paint(self.view, self.paint);
    }

    fn set_bounds(&mut self, host: &mut dyn ScrimHost, bounds: IntRect) {
        self.paint.bounds = bounds;
        host.set_scrim_view_paint(self.view, self.paint);
    }

    fn set_visible(&mut self, host: &mut dyn ScrimHost, visible: bool) {
        if self.visible != visible {
            host.set_scrim_view_visible(self.view, visible);
            self.visible = visible;
        }
    }

    fn paint(&self) -> ScrimPaint {
        self.paint
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
#[path = "tests/scrim_tests.rs"]
mod tests;
