//! Packed ARGB color representation

/// A color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ArgbColor(pub u32);

impl ArgbColor {
    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn argb(&self) -> u32 {
        self.0
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Returns the same RGB channels with a replaced alpha.
    pub const fn with_alpha(&self, alpha: u8) -> Self {
        Self((alpha as u32) << 24 | (self.0 & 0x00ff_ffff))
    }

    /// Scales the alpha channel linearly by `fraction`, rounding to the
    /// nearest step. Fractions outside `[0, 1]` are clamped.
    pub fn scale_alpha(&self, fraction: f32) -> Self {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let alpha = (self.alpha() as f32 * fraction).round() as u8;
        self.with_alpha(alpha)
    }

    // Common color constants
    pub const BLACK: ArgbColor = ArgbColor(0xff00_0000);
    pub const WHITE: ArgbColor = ArgbColor(0xffff_ffff);
    pub const TRANSPARENT: ArgbColor = ArgbColor(0x0000_0000);
}

impl From<u32> for ArgbColor {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack() {
        let color = ArgbColor::from_argb(0x99, 0x12, 0x34, 0x56);
        assert_eq!(color.argb(), 0x9912_3456);
        assert_eq!(color.alpha(), 0x99);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
    }

    #[test]
    fn scale_alpha_keeps_rgb() {
        let color = ArgbColor(0x9912_3456);
        assert_eq!(color.scale_alpha(1.0), color);
        assert_eq!(color.scale_alpha(0.0), ArgbColor(0x0012_3456));
        assert_eq!(color.scale_alpha(0.5).alpha(), 77);
    }

    #[test]
    fn scale_alpha_two_thirds_of_default_scrim() {
        let scrim = ArgbColor(0x9900_0000);
        let scaled = scrim.scale_alpha(200.0 / 300.0);
        assert_eq!(scaled.alpha(), 0x66);
    }

    #[test]
    fn scale_alpha_clamps_out_of_range() {
        let color = ArgbColor(0x8000_0000);
        assert_eq!(color.scale_alpha(2.0).alpha(), 0x80);
        assert_eq!(color.scale_alpha(-1.0).alpha(), 0);
        assert_eq!(color.scale_alpha(f32::NAN).alpha(), 0);
    }
}
