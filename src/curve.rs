//! The editable cubic curve in normalized coordinates.

use crate::geometry::{NormalizedPoint, PixelPoint, Size};
use crate::nbezier::CubicCurve;
use crate::path::CurvePath;

/// Identifies one of the curve's two movable control points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlPoint {
    /// Control point attached to the curve's start
    Start,
    /// Control point attached to the curve's end
    End,
}

impl ControlPoint {
    /// Both control points, start first
    pub const ALL: [ControlPoint; 2] = [ControlPoint::Start, ControlPoint::End];
}

/// Bottom left corner, as the editor's `y` axis grows downwards
pub const DEFAULT_START_POINT: [f64; 2] = [0.0, 1.0];
/// Top right corner
pub const DEFAULT_END_POINT: [f64; 2] = [1.0, 0.0];
/// Start control of the initial ease-in-ease-out curve
pub const DEFAULT_START_CONTROL: [f64; 2] = [0.25, 0.25];
/// End control of the initial ease-in-ease-out curve
pub const DEFAULT_END_CONTROL: [f64; 2] = [0.75, 0.75];

/// Cubic bezier curve with two fixed endpoints and two movable controls.
///
/// All four points live in the unit square. The model additionally caches the curve's
/// path for the last size it was told about, which is refreshed by every mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct BezierCurveModel {
    start_point: NormalizedPoint,
    end_point: NormalizedPoint,
    start_control: NormalizedPoint,
    end_control: NormalizedPoint,
    size: Size,
    renderable_path: CurvePath,
    revision: u64,
}

impl BezierCurveModel {
    /// Construct a model from all four points with a zero sized container.
    pub fn new(
        start_point: NormalizedPoint,
        start_control: NormalizedPoint,
        end_control: NormalizedPoint,
        end_point: NormalizedPoint,
    ) -> Self {
        let mut model = BezierCurveModel {
            start_point,
            end_point,
            start_control,
            end_control,
            size: Size::ZERO,
            renderable_path: CurvePath::default(),
            revision: 0,
        };
        model.update_path();
        model
    }

    /// Fixed point the curve starts at
    pub fn start_point(&self) -> NormalizedPoint {
        self.start_point
    }

    /// Fixed point the curve ends at
    pub fn end_point(&self) -> NormalizedPoint {
        self.end_point
    }

    /// Control attached to the start point
    pub fn start_control(&self) -> NormalizedPoint {
        self.start_control
    }

    /// Control attached to the end point
    pub fn end_control(&self) -> NormalizedPoint {
        self.end_control
    }

    /// Current value of a control point
    pub fn control(&self, which: ControlPoint) -> NormalizedPoint {
        match which {
            ControlPoint::Start => self.start_control,
            ControlPoint::End => self.end_control,
        }
    }

    /// The fixed endpoint a control point is attached to
    pub fn anchor(&self, which: ControlPoint) -> NormalizedPoint {
        match which {
            ControlPoint::Start => self.start_point,
            ControlPoint::End => self.end_point,
        }
    }

    /// Replace the curve's fixed endpoints.
    pub fn set_endpoints(&mut self, start: NormalizedPoint, end: NormalizedPoint) {
        self.start_point = start;
        self.end_point = end;
        self.revision += 1;
        self.update_path();
    }

    /// Move a control point.
    ///
    /// The point is taken as is. Values outside the unit square are valid and describe
    /// curves overshooting their endpoints.
    pub fn set_control(&mut self, which: ControlPoint, point: NormalizedPoint) {
        match which {
            ControlPoint::Start => self.start_control = point,
            ControlPoint::End => self.end_control = point,
        }
        self.revision += 1;
        self.update_path();
    }

    /// Last known container size
    pub fn size(&self) -> Size {
        self.size
    }

    /// Tell the model about a new container size.
    ///
    /// Only the cached path changes, the curve's points stay the same.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.update_path();
    }

    /// The curve's path scaled to the last known container size
    pub fn renderable_path(&self) -> &CurvePath {
        &self.renderable_path
    }

    /// Number of mutations applied to the curve's points so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Scale all four points into `size` and describe them as a path:
    /// a move to the start followed by a cubic segment to the end.
    pub fn path(&self, size: Size) -> CurvePath {
        CurvePath::cubic(
            size.scale(&self.start_point),
            size.scale(&self.start_control),
            size.scale(&self.end_control),
            size.scale(&self.end_point),
        )
    }

    /// The curve scaled into `size` as an evaluatable bezier curve
    pub fn bezier(&self, size: Size) -> CubicCurve {
        CubicCurve::cubic(
            size.scale(&self.start_point),
            size.scale(&self.start_control),
            size.scale(&self.end_control),
            size.scale(&self.end_point),
        )
    }

    /// Point on the curve at parameter `t`, scaled into `size`
    pub fn point_at(&self, t: f64, size: Size) -> PixelPoint {
        self.bezier(size).castlejau_eval(t)
    }

    fn update_path(&mut self) {
        self.renderable_path = self.path(self.size);
    }
}

impl Default for BezierCurveModel {
    fn default() -> Self {
        BezierCurveModel::new(
            DEFAULT_START_POINT.into(),
            DEFAULT_START_CONTROL.into(),
            DEFAULT_END_CONTROL.into(),
            DEFAULT_END_POINT.into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathCommand;

    #[test]
    fn default_path() {
        let model = BezierCurveModel::default();
        assert_eq!(
            model.path(Size::new(100.0, 100.0)).commands(),
            &[
                PathCommand::MoveTo(PixelPoint::new(0.0, 100.0)),
                PathCommand::CubicTo {
                    control1: PixelPoint::new(25.0, 25.0),
                    control2: PixelPoint::new(75.0, 75.0),
                    to: PixelPoint::new(100.0, 0.0),
                },
            ]
        );
    }

    #[test]
    fn path_scales_componentwise() {
        let mut model = BezierCurveModel::default();
        model.set_control(ControlPoint::Start, NormalizedPoint::new(-0.5, 1.5));
        let path = model.path(Size::new(200.0, 10.0));
        assert_eq!(
            path.commands()[1],
            PathCommand::CubicTo {
                control1: PixelPoint::new(-100.0, 15.0),
                control2: PixelPoint::new(150.0, 7.5),
                to: PixelPoint::new(200.0, 0.0),
            }
        );
    }

    #[test]
    fn zero_size_path_is_all_zero() {
        let model = BezierCurveModel::default();
        for command in model.path(Size::ZERO).commands() {
            let points = match command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![*p],
                PathCommand::CubicTo {
                    control1,
                    control2,
                    to,
                } => vec![*control1, *control2, *to],
            };
            for p in points {
                assert_eq!(p, PixelPoint::zeros());
            }
        }
    }

    #[test]
    fn renderable_path_follows_mutations() {
        let mut model = BezierCurveModel::default();
        let size = Size::new(50.0, 80.0);
        model.set_size(size);
        assert_eq!(model.renderable_path(), &model.path(size));

        model.set_control(ControlPoint::End, NormalizedPoint::new(0.9, -0.2));
        assert_eq!(model.renderable_path(), &model.path(size));

        model.set_endpoints(NormalizedPoint::new(0.0, 0.5), NormalizedPoint::new(1.0, 0.5));
        assert_eq!(model.renderable_path(), &model.path(size));
        assert_eq!(model.revision(), 2);
    }

    #[test]
    fn control_and_anchor_lookup() {
        let model = BezierCurveModel::default();
        let point = |p: [f64; 2]| NormalizedPoint::from(p);
        assert_eq!(model.control(ControlPoint::Start), point(DEFAULT_START_CONTROL));
        assert_eq!(model.control(ControlPoint::End), point(DEFAULT_END_CONTROL));
        assert_eq!(model.anchor(ControlPoint::Start), point(DEFAULT_START_POINT));
        assert_eq!(model.anchor(ControlPoint::End), point(DEFAULT_END_POINT));
    }

    #[test]
    fn point_at_endpoints() {
        let model = BezierCurveModel::default();
        let size = Size::new(100.0, 100.0);
        assert_eq!(model.point_at(0.0, size), PixelPoint::new(0.0, 100.0));
        assert_eq!(model.point_at(1.0, size), PixelPoint::new(100.0, 0.0));
    }
}
