//! Draw a path in a svg

use crate::draw::DrawPath;
use crate::geometry::PixelPoint;
use crate::path::{CurvePath, PathCommand};
use std::fmt::Write;
use std::marker::PhantomData;

/// Helper trait implemented by [`Absolute`] and [`Relative`] to choose
/// how the coordinates are interpreted in the svg's path.
///
/// This effectively toggles between lower and upper case letters for the path commands.
pub trait CoordRepr {
    /// Character to use for the MoveTo command
    const M: &'static str;

    /// Character to use for the LineTo command
    const L: &'static str;

    /// Character to use for the Cubic Bezier Curve command
    const C: &'static str;

    /// Whether coordinates are written relative to the current point
    const RELATIVE: bool;
}

/// Interpret the svg path's coordinates as absolute.
pub struct Absolute;
impl CoordRepr for Absolute {
    const M: &'static str = "M";
    const L: &'static str = "L";
    const C: &'static str = "C";
    const RELATIVE: bool = false;
}

/// Interpret the svg path's coordinates as relative.
pub struct Relative;
impl CoordRepr for Relative {
    const M: &'static str = "m";
    const L: &'static str = "l";
    const C: &'static str = "c";
    const RELATIVE: bool = true;
}

/// This type wraps a mutable String reference and implements [`DrawPath`] on it.
/// The [`DrawPath::add_path`] writes the path to the string
/// using the path commands used in a svg `<path>`'s d attribute
///
/// ```
/// use easings::draw::DrawPath;
/// use easings::draw::svg::SVGAbsolutePath;
/// use easings::{BezierCurveModel, Size};
///
/// let path = BezierCurveModel::default().path(Size::new(100.0, 100.0));
/// let mut d = String::new();
/// SVGAbsolutePath::from(&mut d).add_path(&path);
/// assert_eq!(d, "M 0,100 C 25,25 75,75 100,0");
/// ```
pub struct SVGPath<'s, R: CoordRepr>(&'s mut String, PhantomData<&'s R>);

/// Wrapper for writing a path to a svg's path using absolute coordinates
pub type SVGAbsolutePath<'s> = SVGPath<'s, Absolute>;

/// Wrapper for writing a path to a svg's path using relative coordinates
pub type SVGRelativePath<'s> = SVGPath<'s, Relative>;

impl<'s, R: CoordRepr> From<&'s mut String> for SVGPath<'s, R> {
    fn from(string: &'s mut String) -> Self {
        SVGPath(string, PhantomData)
    }
}

impl<'s, R: CoordRepr> DrawPath for SVGPath<'s, R> {
    fn add_path(&mut self, path: &CurvePath) {
        // Relative commands are offset by the point the previous command ended at
        let mut current = PixelPoint::zeros();

        for command in path.commands() {
            if !self.0.is_empty() {
                self.0.push(' ');
            }
            match *command {
                PathCommand::MoveTo(to) => {
                    let p = offset::<R>(to, &current);
                    let _ = write!(self.0, "{} {},{}", R::M, p.x, p.y);
                    current = to;
                }
                PathCommand::LineTo(to) => {
                    let p = offset::<R>(to, &current);
                    let _ = write!(self.0, "{} {},{}", R::L, p.x, p.y);
                    current = to;
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => {
                    let (c1, c2, p) = (
                        offset::<R>(control1, &current),
                        offset::<R>(control2, &current),
                        offset::<R>(to, &current),
                    );
                    let _ = write!(
                        self.0,
                        "{} {},{} {},{} {},{}",
                        R::C,
                        c1.x,
                        c1.y,
                        c2.x,
                        c2.y,
                        p.x,
                        p.y
                    );
                    current = to;
                }
            }
        }
    }
}

fn offset<R: CoordRepr>(point: PixelPoint, current: &PixelPoint) -> PixelPoint {
    if R::RELATIVE {
        point - current
    } else {
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_cubic() {
        let path = CurvePath::cubic(
            PixelPoint::new(0.0, 100.0),
            PixelPoint::new(25.0, 25.0),
            PixelPoint::new(75.0, 75.0),
            PixelPoint::new(100.0, 0.0),
        );
        let mut d = String::new();
        SVGAbsolutePath::from(&mut d).add_path(&path);
        assert_eq!(d, "M 0,100 C 25,25 75,75 100,0");
    }

    #[test]
    fn relative_line_appends() {
        let path = CurvePath::line(PixelPoint::new(10.0, 10.0), PixelPoint::new(30.0, 5.0));
        let mut d = String::from("M 0,0");
        SVGRelativePath::from(&mut d).add_path(&path);
        assert_eq!(d, "M 0,0 m 10,10 l 20,-5");
    }
}
