//! Minimal linear RGBA color used by the fill color animation.

/// Color with `f32` channels in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Opacity
    pub a: f32,
}

impl Rgba {
    /// Opaque white
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

    /// Construct a color from all four channels
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Construct a fully opaque color
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Channelwise linear interpolation.
    ///
    /// `t` isn't clamped so overshooting timing functions overshoot the color as well;
    /// the resulting channels are clamped back into `[0, 1]`.
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let t = t as f32;
        let mix = |a: f32, b: f32| (a + (b - a) * t).clamp(0.0, 1.0);
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}
