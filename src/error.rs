//! Errors raised at the few fallible edges of the crate.
//!
//! Editing, layout and playback never fail; only parsing user supplied text
//! and validating configuration values can.

use std::num::ParseFloatError;
use thiserror::Error;

/// Failure to parse a [`TimingFunction`](crate::timing::TimingFunction) from its
/// `cubic-bezier(c1x, c1y, c2x, c2y)` notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimingFunctionError {
    /// The text doesn't start with `cubic-bezier(` or doesn't end with `)`
    #[error("expected `cubic-bezier(c1x, c1y, c2x, c2y)`, got `{0}`")]
    Syntax(String),

    /// The argument list doesn't hold exactly four values
    #[error("cubic-bezier takes 4 arguments, got {0}")]
    Arity(usize),

    /// One of the arguments isn't a number
    #[error("argument {index} of cubic-bezier is not a number")]
    Number {
        /// Zero based position of the offending argument
        index: usize,
        /// Error reported by the float parser
        #[source]
        source: ParseFloatError,
    },

    /// One of the arguments is `NaN` or infinite
    #[error("argument {0} of cubic-bezier is not finite")]
    NotFinite(usize),
}

/// Invalid value in an [`EasingConfig`](crate::config::EasingConfig).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Animations need a finite, non negative duration
    #[error("animation duration must be finite and non negative, got {0}")]
    Duration(f64),

    /// A numeric setting is `NaN` or infinite
    #[error("`{name}` must be finite, got {value}")]
    NotFinite {
        /// Name of the setting
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// A radius is negative
    #[error("`{name}` must not be negative, got {value}")]
    NegativeRadius {
        /// Name of the setting
        name: &'static str,
        /// Rejected value
        value: f64,
    },
}
