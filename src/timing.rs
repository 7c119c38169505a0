//! Timing functions derived from the edited curve.
//!
//! The editor draws its curve in a coordinate system whose `y` axis grows downwards,
//! while timing functions are conventionally described with progress growing upwards.
//! [`TimingFunction::from_model`] performs that flip; [`TimingFunction::evaluate`] turns
//! the four numbers back into an actual easing function.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use crate::curve::BezierCurveModel;
use crate::error::ParseTimingFunctionError;
use crate::geometry::NormalizedPoint;
use crate::nbezier::CubicCurve;

/// Iterations of newton's method before falling back to bisection
const NEWTON_ITERATIONS: usize = 8;

/// Upper bound for bisection steps; 64 halvings exhaust an `f64`
const BISECTION_ITERATIONS: usize = 64;

/// Precision used when solving `x(t) = progress`
const EPSILON: f64 = 1e-7;

/// Unit cubic bezier timing function `cubic-bezier(c1x, c1y, c2x, c2y)`.
///
/// Start and end are implicitly `(0, 0)` and `(1, 1)`.
/// Components are not clamped; `c1y`/`c2y` outside `[0, 1]` overshoot.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingFunction {
    /// Horizontal component of the first control point
    pub c1x: f64,
    /// Vertical component of the first control point
    pub c1y: f64,
    /// Horizontal component of the second control point
    pub c2x: f64,
    /// Vertical component of the second control point
    pub c2y: f64,
}

impl TimingFunction {
    /// Constant speed
    pub const LINEAR: TimingFunction = TimingFunction::new(0.0, 0.0, 1.0, 1.0);
    /// Slow start
    pub const EASE_IN: TimingFunction = TimingFunction::new(0.42, 0.0, 1.0, 1.0);
    /// Slow end
    pub const EASE_OUT: TimingFunction = TimingFunction::new(0.0, 0.0, 0.58, 1.0);
    /// Slow start and end
    pub const EASE_IN_EASE_OUT: TimingFunction = TimingFunction::new(0.42, 0.0, 0.58, 1.0);
    /// The curve animation engines fall back to when nothing is specified
    pub const DEFAULT: TimingFunction = TimingFunction::new(0.25, 0.1, 0.25, 1.0);

    /// Construct a timing function from its four components
    pub const fn new(c1x: f64, c1y: f64, c2x: f64, c2y: f64) -> Self {
        TimingFunction { c1x, c1y, c2x, c2y }
    }

    /// Derive the timing function described by the model's current control points.
    ///
    /// Always recomputed from the model; there is nothing to go stale.
    pub fn from_model(model: &BezierCurveModel) -> Self {
        let start = model.start_control();
        let end = model.end_control();
        TimingFunction {
            c1x: start.x,
            c1y: 1.0 - start.y,
            c2x: end.x,
            c2y: 1.0 - end.y,
        }
    }

    /// Inverse of [`from_model`](TimingFunction::from_model):
    /// the editor's `(start_control, end_control)` drawing this timing function.
    pub fn to_model_controls(&self) -> (NormalizedPoint, NormalizedPoint) {
        (
            NormalizedPoint::new(self.c1x, 1.0 - self.c1y),
            NormalizedPoint::new(self.c2x, 1.0 - self.c2y),
        )
    }

    /// The four components in `c1x, c1y, c2x, c2y` order
    pub fn components(&self) -> [f64; 4] {
        [self.c1x, self.c1y, self.c2x, self.c2y]
    }

    /// The unit curve from `(0, 0)` to `(1, 1)` in timing function space.
    pub fn curve(&self) -> CubicCurve {
        CubicCurve::cubic(
            Vector2::new(0.0, 0.0),
            Vector2::new(self.c1x, self.c1y),
            Vector2::new(self.c2x, self.c2y),
            Vector2::new(1.0, 1.0),
        )
    }

    /// Map elapsed time to progress.
    ///
    /// `time` is clamped to `[0, 1]`, the result is not.
    /// Finds the curve parameter whose `x` equals `time` and returns its `y`.
    pub fn evaluate(&self, time: f64) -> f64 {
        let time = if time.is_nan() { 0.0 } else { time.clamp(0.0, 1.0) };

        let polynomial = self.curve().polynomial();
        let x = polynomial.coordinate(0);
        let y = polynomial.coordinate(1);
        let dx = x.derive();

        // Fast path: newton's method
        let mut t = time;
        let mut solved = false;
        for _ in 0..NEWTON_ITERATIONS {
            let error = x.evaluate_scalar(t) - time;
            if error.abs() < EPSILON {
                solved = true;
                break;
            }
            let slope = dx.evaluate_scalar(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        // Slow path: bisection
        if !solved || !(0.0..=1.0).contains(&t) {
            let (mut lo, mut hi) = (0.0, 1.0);
            t = time;
            for _ in 0..BISECTION_ITERATIONS {
                let x_t = x.evaluate_scalar(t);
                if (x_t - time).abs() < EPSILON {
                    break;
                }
                if time > x_t {
                    lo = t;
                } else {
                    hi = t;
                }
                t = lo + (hi - lo) / 2.0;
            }
        }

        y.evaluate_scalar(t)
    }
}

impl Default for TimingFunction {
    fn default() -> Self {
        TimingFunction::DEFAULT
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cubic-bezier({}, {}, {}, {})",
            self.c1x, self.c1y, self.c2x, self.c2y
        )
    }
}

impl FromStr for TimingFunction {
    type Err = ParseTimingFunctionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arguments = s
            .trim()
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| ParseTimingFunctionError::Syntax(s.to_owned()))?;

        let parts: Vec<&str> = arguments.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(ParseTimingFunctionError::Arity(parts.len()));
        }

        let mut values = [0.0; 4];
        for (index, (part, value)) in parts.iter().zip(values.iter_mut()).enumerate() {
            *value = part
                .parse::<f64>()
                .map_err(|source| ParseTimingFunctionError::Number { index, source })?;
            if !value.is_finite() {
                return Err(ParseTimingFunctionError::NotFinite(index));
            }
        }

        let [c1x, c1y, c2x, c2y] = values;
        Ok(TimingFunction::new(c1x, c1y, c2x, c2y))
    }
}
