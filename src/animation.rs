//! Descriptors of the animations timed by the edited curve.
//!
//! Nothing in here runs on its own. An animation is a static description
//! (what, from where to where, how long, which timing function) that the host's
//! animation engine plays back; [`PropertyAnimation::sample`] computes the value
//! such an engine would show after some elapsed time.

use std::time::Duration;

use crate::color::Rgba;
use crate::timing::TimingFunction;

/// Identifies an animated property.
///
/// Each property carries at most one animation at a time;
/// adding another one for the same key replaces the first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationKey {
    /// Position of the editor's playback marker along the curve
    Position,
    /// Scale of the animated sample shape
    Scale,
    /// Fill color of the animated sample shape
    FillColor,
}

/// Linear progress through the current cycle of an animation, in `[0, 1]`.
///
/// Looping animations restart at `0` after every full `duration`; the others
/// stay at `1` once finished. A zero duration is always finished.
pub fn cycle_progress(elapsed: Duration, duration: Duration, loop_forever: bool) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let cycles = elapsed.as_secs_f64() / duration.as_secs_f64();
    if loop_forever {
        cycles.fract()
    } else {
        cycles.min(1.0)
    }
}

/// Start and end value of a [`PropertyAnimation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnimatedValue {
    /// A single number such as a scale factor
    Scalar {
        /// Value at the start of a cycle
        from: f64,
        /// Value at the end of a cycle
        to: f64,
    },
    /// A color
    Color {
        /// Color at the start of a cycle
        from: Rgba,
        /// Color at the end of a cycle
        to: Rgba,
    },
}

/// Value of an animated property at some point in time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Sample {
    /// See [`AnimatedValue::Scalar`]
    Scalar(f64),
    /// See [`AnimatedValue::Color`]
    Color(Rgba),
}

/// Interpolation of a single property, timed by a [`TimingFunction`].
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyAnimation {
    key: AnimationKey,
    value: AnimatedValue,
    timing: TimingFunction,
    duration: Duration,
    loop_forever: bool,
}

impl PropertyAnimation {
    /// Describe a new animation
    pub fn new(
        key: AnimationKey,
        value: AnimatedValue,
        timing: TimingFunction,
        duration: Duration,
        loop_forever: bool,
    ) -> Self {
        PropertyAnimation {
            key,
            value,
            timing,
            duration,
            loop_forever,
        }
    }

    /// The animated property
    pub fn key(&self) -> AnimationKey {
        self.key
    }

    /// Start and end value
    pub fn value(&self) -> AnimatedValue {
        self.value
    }

    /// Timing function applied to each cycle
    pub fn timing(&self) -> TimingFunction {
        self.timing
    }

    /// Length of a single cycle
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether the animation restarts after each cycle
    pub fn loops_forever(&self) -> bool {
        self.loop_forever
    }

    /// Whether a non looping animation has run to its end
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        !self.loop_forever && elapsed >= self.duration
    }

    /// Eased progress after `elapsed`; may leave `[0, 1]` for overshooting curves.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        self.timing
            .evaluate(cycle_progress(elapsed, self.duration, self.loop_forever))
    }

    /// The property's value after `elapsed`
    pub fn sample(&self, elapsed: Duration) -> Sample {
        let progress = self.progress(elapsed);
        match self.value {
            AnimatedValue::Scalar { from, to } => Sample::Scalar(from + (to - from) * progress),
            AnimatedValue::Color { from, to } => Sample::Color(from.lerp(&to, progress)),
        }
    }
}
