//! Drawer configuration built by the integration layer.

use drawer_foundation::gesture_constants::{DRAG_THRESHOLD, EDGE_SIZE, MIN_FLING_VELOCITY};
use drawer_foundation::{DragHelperConfig, Easing};
use drawer_ui_graphics::{ArgbColor, Dp};
use drawer_ui_layout::{AbsoluteEdge, Gravity, LayoutDirection};

use crate::DrawerError;

/// Black at 60% opacity.
pub const DEFAULT_SCRIM_COLOR: ArgbColor = ArgbColor(0x9900_0000);

/// Delay between a touch landing on the drawer's edge and the peek.
pub const PEEK_DELAY_MS: u64 = 160;

/// Settings shared by every drawer a [`DrawerBehavior`](crate::DrawerBehavior)
/// manages.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Side the drawer slides in from. Relative gravities are resolved
    /// against the container's layout direction.
    pub gravity: Gravity,
    /// Scrim color at full openness; its alpha is scaled by the open
    /// fraction.
    pub scrim_color: ArgbColor,
    /// Per second. Slower releases settle by position instead of direction.
    pub min_fling_velocity: Dp,
    pub peek_delay_ms: u64,
    pub edge_size: Dp,
    pub touch_slop: Dp,
    /// Curve for settles after a release and for programmatic slides.
    pub settle_easing: Easing,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            gravity: Gravity::END,
            scrim_color: DEFAULT_SCRIM_COLOR,
            min_fling_velocity: Dp(MIN_FLING_VELOCITY),
            peek_delay_ms: PEEK_DELAY_MS,
            edge_size: Dp(EDGE_SIZE),
            touch_slop: Dp(DRAG_THRESHOLD),
            settle_easing: Easing::QuinticOut,
        }
    }
}

impl DrawerConfig {
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_scrim_color(mut self, color: impl Into<ArgbColor>) -> Self {
        self.scrim_color = color.into();
        self
    }

    pub fn with_min_fling_velocity(mut self, velocity: Dp) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    pub fn with_peek_delay(mut self, millis: u64) -> Self {
        self.peek_delay_ms = millis;
        self
    }

    pub fn with_edge_size(mut self, size: Dp) -> Self {
        self.edge_size = size;
        self
    }

    pub fn with_touch_slop(mut self, slop: Dp) -> Self {
        self.touch_slop = slop;
        self
    }

    pub fn with_settle_easing(mut self, easing: Easing) -> Self {
        self.settle_easing = easing;
        self
    }

    /// Checks the settings and resolves the gravity into an [`EdgeGravity`].
    pub fn validate(&self) -> Result<EdgeGravity, DrawerError> {
        let velocity = self.min_fling_velocity.0;
        if !velocity.is_finite() || velocity <= 0.0 {
            return Err(DrawerError::InvalidFlingVelocity { value: velocity });
        }
        EdgeGravity::new(self.gravity)
    }

    pub(crate) fn drag_helper_config(&self) -> DragHelperConfig {
        DragHelperConfig {
            edge_size: self.edge_size,
            touch_slop: self.touch_slop,
            min_fling_velocity: self.min_fling_velocity,
            settle_easing: self.settle_easing,
            ..DragHelperConfig::default()
        }
    }
}

/// A gravity known to name a single horizontal side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeGravity(Gravity);

impl EdgeGravity {
    pub fn new(gravity: Gravity) -> Result<Self, DrawerError> {
        if gravity.is_horizontal_edge() {
            Ok(Self(gravity))
        } else {
            Err(DrawerError::UnsupportedGravity { gravity })
        }
    }

    pub fn gravity(&self) -> Gravity {
        self.0
    }

    pub fn resolve(&self, direction: LayoutDirection) -> AbsoluteEdge {
        // Checked in new(); every edge gravity resolves.
        AbsoluteEdge::resolve(self.0, direction).unwrap_or(AbsoluteEdge::Right)
    }
}
