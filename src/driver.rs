//! Sample animations restarted whenever the curve changes.
//!
//! [`AnimationDriver`] plays the role of the editor's host: it scales and recolors a
//! sample shape with the edited timing function, and keeps the editor's own marker
//! playback in step with those animations.

use std::time::Duration;

use log::debug;
use smallvec::SmallVec;

use crate::animation::{AnimatedValue, AnimationKey, PropertyAnimation, Sample};
use crate::color::Rgba;
use crate::config::EasingConfig;
use crate::editor::{CurveEditor, CurveEditorObserver};
use crate::error::ConfigError;
use crate::geometry::{PixelPoint, Size};

/// Everything the sample shows after some elapsed time.
///
/// Properties without a running animation are `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Scale of the sample shape
    pub scale: Option<f64>,
    /// Fill color of the sample shape
    pub fill_color: Option<Rgba>,
    /// Position of the editor's playback marker
    pub marker: Option<PixelPoint>,
}

/// Runs the scale and fill color animations and the editor's playback together.
///
/// Register it as the editor's observer: it stops everything when a gesture starts
/// and restarts everything with the new timing function when the gesture ends.
#[derive(Debug)]
pub struct AnimationDriver {
    config: EasingConfig,
    duration: Duration,
    animations: SmallVec<[PropertyAnimation; 2]>,
}

impl AnimationDriver {
    /// Create an idle driver, rejecting invalid configurations.
    pub fn new(config: EasingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let duration = config.animation_duration()?;
        Ok(AnimationDriver {
            config,
            duration,
            animations: SmallVec::new(),
        })
    }

    /// The driver's settings
    pub fn config(&self) -> &EasingConfig {
        &self.config
    }

    /// Whether any property animation is running
    pub fn is_playing(&self) -> bool {
        !self.animations.is_empty()
    }

    /// The running animation of a property.
    ///
    /// The marker's [`AnimationKey::Position`] animation belongs to the editor,
    /// see [`CurveEditor::playback`].
    pub fn animation(&self, key: AnimationKey) -> Option<&PropertyAnimation> {
        self.animations.iter().find(|animation| animation.key() == key)
    }

    /// (Re)start all animations with the editor's current timing function.
    pub fn play(&mut self, editor: &mut CurveEditor) {
        let timing = editor.timing_function();
        debug!("Playing sample animations with {}", timing);

        self.insert(PropertyAnimation::new(
            AnimationKey::Scale,
            AnimatedValue::Scalar {
                from: self.config.scale_from,
                to: self.config.scale_to,
            },
            timing,
            self.duration,
            true,
        ));
        self.insert(PropertyAnimation::new(
            AnimationKey::FillColor,
            AnimatedValue::Color {
                from: self.config.start_color,
                to: self.config.end_color,
            },
            timing,
            self.duration,
            true,
        ));
        editor.start_playback(self.duration, true);
    }

    /// Stop all animations including the editor's playback.
    pub fn stop(&mut self, editor: &mut CurveEditor) {
        if self.is_playing() {
            debug!("Stopping sample animations");
        }
        self.animations.clear();
        editor.stop_playback();
    }

    /// The editor's container was resized.
    ///
    /// Running animations describe the old geometry, so they are stopped
    /// before the editor is laid out again.
    pub fn layout_changed(&mut self, editor: &mut CurveEditor, bounds: Size) {
        self.stop(editor);
        editor.layout_changed(bounds);
    }

    /// Sample every running animation after `elapsed`.
    pub fn frame(&self, editor: &CurveEditor, elapsed: Duration) -> Frame {
        let mut frame = Frame {
            marker: editor
                .playback()
                .map(|playback| playback.marker_position(elapsed)),
            ..Frame::default()
        };
        for animation in &self.animations {
            match animation.sample(elapsed) {
                Sample::Scalar(scale) => frame.scale = Some(scale),
                Sample::Color(color) => frame.fill_color = Some(color),
            }
        }
        frame
    }

    fn insert(&mut self, animation: PropertyAnimation) {
        self.animations.retain(|running| running.key() != animation.key());
        self.animations.push(animation);
    }
}

impl CurveEditorObserver for AnimationDriver {
    fn curve_will_change(&mut self, editor: &mut CurveEditor) {
        self.stop(editor);
    }

    fn curve_did_change(&mut self, editor: &mut CurveEditor) {
        self.play(editor);
    }
}
