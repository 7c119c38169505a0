//! Conversions between normalized unit-square coordinates and the editor's pixel space.
//!
//! The curve editor stores every point relative to a unit square and only maps it into
//! pixels when something needs to be drawn or hit tested.
//! Both directions are componentwise: `pixel = normalized * size` and `normalized = pixel / size`.

use nalgebra::Vector2;

/// A point relative to the unit square.
///
/// Values are *not* clamped: control points outside `[0, 1]` describe overshooting curves.
pub type NormalizedPoint = Vector2<f64>;

/// A point in the editor's local pixel space, with `y` growing downwards.
pub type PixelPoint = Vector2<f64>;

/// Extent of the container the curve is drawn into.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent in pixels
    pub width: f64,
    /// Vertical extent in pixels
    pub height: f64,
}

impl Size {
    /// A container without any extent
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Construct a size from its two extents
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// The size as a vector `(width, height)`
    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.width, self.height)
    }

    /// Map a normalized point into pixel space.
    ///
    /// A zero extent collapses the axis to `0`.
    pub fn scale(&self, point: &NormalizedPoint) -> PixelPoint {
        point.component_mul(&self.as_vector())
    }

    /// Map a pixel position back into the unit square.
    ///
    /// An axis without extent can't be inverted, so its component is taken from `fallback`
    /// instead of producing `NaN` or an infinity.
    pub fn normalize(&self, pixel: &PixelPoint, fallback: &NormalizedPoint) -> NormalizedPoint {
        let x = if self.width == 0.0 {
            fallback.x
        } else {
            pixel.x / self.width
        };
        let y = if self.height == 0.0 {
            fallback.y
        } else {
            pixel.y / self.height
        };
        NormalizedPoint::new(x, y)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Size { width, height }
    }
}
