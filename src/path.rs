//! Pixel space path commands handed to renderers and animation engines.

use crate::geometry::PixelPoint;
use smallvec::SmallVec;

/// A single drawing command of a [`CurvePath`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new sub path at the given point
    MoveTo(PixelPoint),

    /// Draw a straight line to the given point
    LineTo(PixelPoint),

    /// Draw a cubic bezier curve from the current point
    CubicTo {
        /// Control point attached to the current point
        control1: PixelPoint,
        /// Control point attached to `to`
        control2: PixelPoint,
        /// End of the segment
        to: PixelPoint,
    },
}

/// Ordered list of [`PathCommand`]s.
///
/// Every path the editor produces is a single move followed by a single segment,
/// so the commands never leave the stack.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurvePath(SmallVec<[PathCommand; 2]>);

impl CurvePath {
    /// Path of a single cubic segment
    pub fn cubic(
        start: PixelPoint,
        control1: PixelPoint,
        control2: PixelPoint,
        end: PixelPoint,
    ) -> Self {
        let mut commands = SmallVec::new();
        commands.push(PathCommand::MoveTo(start));
        commands.push(PathCommand::CubicTo {
            control1,
            control2,
            to: end,
        });
        CurvePath(commands)
    }

    /// Path of a single straight segment
    pub fn line(start: PixelPoint, end: PixelPoint) -> Self {
        let mut commands = SmallVec::new();
        commands.push(PathCommand::MoveTo(start));
        commands.push(PathCommand::LineTo(end));
        CurvePath(commands)
    }

    /// The path's commands in drawing order
    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cubic_commands() {
        let path = CurvePath::cubic(
            PixelPoint::new(0.0, 100.0),
            PixelPoint::new(25.0, 75.0),
            PixelPoint::new(75.0, 25.0),
            PixelPoint::new(100.0, 0.0),
        );
        assert_eq!(
            path.commands(),
            &[
                PathCommand::MoveTo(PixelPoint::new(0.0, 100.0)),
                PathCommand::CubicTo {
                    control1: PixelPoint::new(25.0, 75.0),
                    control2: PixelPoint::new(75.0, 25.0),
                    to: PixelPoint::new(100.0, 0.0),
                },
            ]
        );
    }
}
