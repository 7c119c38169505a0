#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod animation;
pub mod color;
pub mod config;
pub mod curve;
pub mod draw;
pub mod driver;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod nbezier;
pub mod npolynomial;
pub mod path;
pub mod timing;

pub use crate::config::EasingConfig;
pub use crate::curve::{BezierCurveModel, ControlPoint};
pub use crate::driver::AnimationDriver;
pub use crate::editor::{CurveEditor, CurveEditorObserver};
pub use crate::geometry::{NormalizedPoint, PixelPoint, Size};
pub use crate::path::{CurvePath, PathCommand};
pub use crate::timing::TimingFunction;

#[cfg(test)]
mod tests {
    use crate::path::PathCommand;
    use crate::{ControlPoint, CurveEditor, NormalizedPoint, PixelPoint, Size, TimingFunction};

    #[test]
    fn default_curve_scenario() {
        let mut editor = CurveEditor::default();
        editor.layout_changed(Size::new(100.0, 100.0));

        let model = editor.model();
        assert_eq!(model.start_point(), NormalizedPoint::new(0.0, 1.0));
        assert_eq!(model.end_point(), NormalizedPoint::new(1.0, 0.0));
        assert_eq!(
            model.renderable_path().commands(),
            &[
                PathCommand::MoveTo(PixelPoint::new(0.0, 100.0)),
                PathCommand::CubicTo {
                    control1: PixelPoint::new(25.0, 25.0),
                    control2: PixelPoint::new(75.0, 75.0),
                    to: PixelPoint::new(100.0, 0.0),
                },
            ]
        );
        assert_eq!(
            editor.timing_function(),
            TimingFunction::new(0.25, 0.75, 0.75, 0.25)
        );
    }

    #[test]
    fn drag_scenario() {
        let mut editor = CurveEditor::default();
        editor.layout_changed(Size::new(100.0, 100.0));
        editor.on_drag_begin(ControlPoint::Start);
        editor.on_drag_move(ControlPoint::Start, PixelPoint::new(10.0, 10.0));
        editor.on_drag_end(ControlPoint::Start);

        assert_eq!(
            editor.model().start_control(),
            NormalizedPoint::new(0.1, 0.1)
        );
        assert_eq!(editor.timing_function().c1y, 1.0 - 0.1);
        assert_eq!(
            editor.timing_function().to_string(),
            format!("cubic-bezier(0.1, {}, 0.75, 0.25)", 1.0 - 0.1)
        );
    }
}
