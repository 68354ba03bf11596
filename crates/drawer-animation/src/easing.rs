/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for i32 {
    /// Rounds to the nearest pixel so that a fraction of 1.0 always lands
    /// exactly on `target`.
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        let delta = (*target - *self) as f32;
        *self + (delta * fraction).round() as i32
    }
}

/// Curve applied to the linear time fraction of a settle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Quintic ease-out, `1 + (t - 1)^5`. Decelerates hard toward the end,
    /// which keeps a released view tracking the finger's speed at first.
    #[default]
    QuinticOut,
}

impl Easing {
    /// Eased value of `fraction`, clamped to [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuinticOut => {
                let t = t - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Eased progress after `elapsed_millis`, reaching 1.0 at the end of the
    /// duration. A zero duration completes immediately.
    pub fn progress(&self, elapsed_millis: u64) -> f32 {
        if self.duration_millis == 0 || elapsed_millis >= self.duration_millis {
            return 1.0;
        }
        let linear = elapsed_millis as f32 / self.duration_millis as f32;
        self.easing.transform(linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(256, Easing::QuinticOut)
    }
}
