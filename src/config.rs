//! Appearance and timing settings of the editor and its sample animations.

use std::time::Duration;

use crate::color::Rgba;
use crate::error::ConfigError;

/// Settings shared by the curve editor and the animations it drives.
///
/// The defaults reproduce the easing playground's look and timing.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EasingConfig {
    /// Length of one animation cycle in seconds
    pub animation_duration: f64,
    /// Fill color at the start of each cycle
    pub start_color: Rgba,
    /// Fill color at the end of each cycle
    pub end_color: Rgba,
    /// Scale factor at the start of each cycle
    pub scale_from: f64,
    /// Scale factor at the end of each cycle
    pub scale_to: f64,
    /// Radius of the two draggable handles in pixels
    pub handle_radius: f64,
    /// Radius of the playback marker in pixels
    pub marker_radius: f64,
}

impl Default for EasingConfig {
    fn default() -> Self {
        EasingConfig {
            animation_duration: 2.0,
            start_color: Rgba::opaque(0.811_257_9, 0.401_807_2, 0.399_826_85),
            end_color: Rgba::opaque(0.721_568_64, 0.886_274_5, 0.592_156_9),
            scale_from: 0.5,
            scale_to: 1.0,
            handle_radius: 32.0,
            marker_radius: 16.0,
        }
    }
}

impl EasingConfig {
    /// Check every setting for values animations can't work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.animation_duration()?;
        for (name, value) in [("scale_from", self.scale_from), ("scale_to", self.scale_to)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        for (name, value) in [
            ("handle_radius", self.handle_radius),
            ("marker_radius", self.marker_radius),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeRadius { name, value });
            }
        }
        Ok(())
    }

    /// The animation duration as a [`Duration`]
    pub fn animation_duration(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.animation_duration)
            .map_err(|_| ConfigError::Duration(self.animation_duration))
    }
}
