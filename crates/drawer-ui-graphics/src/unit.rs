//! Unit types: Dp and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Converts to whole pixels, rounding half up like platform dimension
    /// resources do.
    pub fn round_to_px(&self, density: f32) -> i32 {
        (self.to_px(density) + 0.5) as i32
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_with_density() {
        assert_eq!(Dp(400.0).to_px(2.0), 800.0);
        assert_eq!(Dp(20.0).round_to_px(1.5), 30);
        assert_eq!(Dp(8.0).round_to_px(1.33), 11);
        assert_eq!(Dp::from_px(60.0, 3.0), Dp(20.0));
    }
}
