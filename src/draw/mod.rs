//! Defines and implements the helper method [`DrawPath::add_path`] on various drawing contexts.
//!
//! The editor only ever hands out [`CurvePath`]s; turning those into whatever a drawing
//! context wants is noisy and repetitive, so it lives here once.
use crate::path::CurvePath;

/// Draw the editor's paths on different "drawing contexts" with ease.
///
/// Use different crate features to implement different contexts:
/// - `draw-svg` to draw paths using svg path data
pub trait DrawPath {
    /// Add a path to the drawing context.
    ///
    /// What this actually means depends on the context.
    /// But generally this just prepares the path to be drawn instead of actually drawing it.
    fn add_path(&mut self, path: &CurvePath);
}

#[cfg(feature = "draw-svg")]
pub mod svg;
