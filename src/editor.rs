//! Interactive editing of the curve through two draggable handles.
//!
//! [`CurveEditor`] owns the [`BezierCurveModel`] and everything drawn on top of it:
//! a handle per control point, a connector from each fixed endpoint to its control
//! and the playback marker. Handles and connectors are never edited directly; drag
//! events update the model and the visuals are derived from it again afterwards.
//!
//! A drag gesture is reported to the registered [`CurveEditorObserver`] exactly twice:
//! once before its first change and once after its last.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use log::{debug, trace, warn};

use crate::animation::{cycle_progress, AnimationKey};
use crate::config::EasingConfig;
use crate::curve::{BezierCurveModel, ControlPoint};
use crate::geometry::{PixelPoint, Size};
use crate::nbezier::CubicCurve;
use crate::path::CurvePath;
use crate::timing::TimingFunction;

/// Receives the editor's change notifications.
///
/// Both callbacks run synchronously inside the editor call that triggered them
/// and get the editor itself, so they can query the new timing function or
/// start and stop playback.
pub trait CurveEditorObserver {
    /// A gesture is about to change the curve; nothing has been modified yet.
    fn curve_will_change(&mut self, editor: &mut CurveEditor);

    /// A gesture finished changing the curve.
    fn curve_did_change(&mut self, editor: &mut CurveEditor);
}

/// Draggable marker bound to one control point.
#[derive(Clone, Debug, PartialEq)]
pub struct Handle {
    control: ControlPoint,
    position: PixelPoint,
    radius: f64,
    dragging: bool,
}

impl Handle {
    fn new(control: ControlPoint, radius: f64) -> Self {
        Handle {
            control,
            position: PixelPoint::zeros(),
            radius,
            dragging: false,
        }
    }

    /// The control point this handle moves
    pub fn control(&self) -> ControlPoint {
        self.control
    }

    /// Center in pixel space
    pub fn position(&self) -> PixelPoint {
        self.position
    }

    /// Radius in pixels
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Whether a drag gesture is currently moving this handle
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether `point` lies on the handle
    pub fn contains(&self, point: &PixelPoint) -> bool {
        (point - self.position).norm() <= self.radius
    }
}

/// Line from one of the curve's fixed endpoints to its control point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Connector {
    from: PixelPoint,
    to: PixelPoint,
}

impl Connector {
    /// The fixed endpoint's pixel position
    pub fn from(&self) -> PixelPoint {
        self.from
    }

    /// The control point's pixel position
    pub fn to(&self) -> PixelPoint {
        self.to
    }

    /// The connector as a drawable path
    pub fn path(&self) -> CurvePath {
        CurvePath::line(self.from, self.to)
    }
}

/// Position animation of the playback marker along the curve.
///
/// Captured when playback starts: later edits don't alter a running playback,
/// the host restarts it once the gesture is done.
#[derive(Clone, Debug, PartialEq)]
pub struct Playback {
    points: [PixelPoint; 4],
    timing: TimingFunction,
    duration: Duration,
    loop_forever: bool,
}

impl Playback {
    /// Always [`AnimationKey::Position`]
    pub fn key(&self) -> AnimationKey {
        AnimationKey::Position
    }

    /// The path the marker travels along
    pub fn path(&self) -> CurvePath {
        let [start, control1, control2, end] = self.points;
        CurvePath::cubic(start, control1, control2, end)
    }

    /// Timing function applied to each cycle
    pub fn timing(&self) -> TimingFunction {
        self.timing
    }

    /// Length of a single cycle
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whether playback restarts after each cycle
    pub fn loops_forever(&self) -> bool {
        self.loop_forever
    }

    /// Where the marker is after `elapsed`.
    ///
    /// The eased progress is used as the curve's parameter, so the marker
    /// speeds up and slows down the same way the animated properties do.
    pub fn marker_position(&self, elapsed: Duration) -> PixelPoint {
        let [start, control1, control2, end] = self.points;
        let progress = cycle_progress(elapsed, self.duration, self.loop_forever);
        CubicCurve::cubic(start, control1, control2, end)
            .castlejau_eval(self.timing.evaluate(progress))
    }
}

/// Circle tracing the curve while playback runs.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    radius: f64,
    visible: bool,
}

impl Marker {
    /// Radius in pixels
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Hidden unless playback is running
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Editor for a cubic timing curve.
pub struct CurveEditor {
    model: BezierCurveModel,
    bounds: Size,
    handles: [Handle; 2],
    connectors: [Connector; 2],
    marker: Marker,
    playback: Option<Playback>,
    drag: Option<ControlPoint>,
    observer: Option<Weak<RefCell<dyn CurveEditorObserver>>>,
}

impl CurveEditor {
    /// Editor for the default ease-in-ease-out curve
    pub fn new(config: &EasingConfig) -> Self {
        CurveEditor::with_model(BezierCurveModel::default(), config)
    }

    /// Editor for an existing curve
    pub fn with_model(model: BezierCurveModel, config: &EasingConfig) -> Self {
        let bounds = model.size();
        let mut editor = CurveEditor {
            model,
            bounds,
            handles: [
                Handle::new(ControlPoint::Start, config.handle_radius),
                Handle::new(ControlPoint::End, config.handle_radius),
            ],
            connectors: Default::default(),
            marker: Marker {
                radius: config.marker_radius,
                visible: false,
            },
            playback: None,
            drag: None,
            observer: None,
        };
        editor.align_handles();
        editor
    }

    /// Register the observer receiving change notifications, replacing any previous one.
    ///
    /// Only a weak reference is kept; dropping the observer unregisters it.
    pub fn set_observer<O: CurveEditorObserver + 'static>(&mut self, observer: &Rc<RefCell<O>>) {
        let observer: Rc<RefCell<dyn CurveEditorObserver>> = observer.clone();
        self.observer = Some(Rc::downgrade(&observer));
    }

    /// Stop sending notifications
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// The edited curve
    pub fn model(&self) -> &BezierCurveModel {
        &self.model
    }

    /// Current container bounds
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Handle bound to a control point
    pub fn handle(&self, control: ControlPoint) -> &Handle {
        &self.handles[index(control)]
    }

    /// Connector ending in a control point
    pub fn connector(&self, control: ControlPoint) -> &Connector {
        &self.connectors[index(control)]
    }

    /// The playback marker
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// The running playback, if any
    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    /// The control point currently being dragged
    pub fn active_drag(&self) -> Option<ControlPoint> {
        self.drag
    }

    /// Timing function of the curve as it is right now
    pub fn timing_function(&self) -> TimingFunction {
        TimingFunction::from_model(&self.model)
    }

    /// The topmost handle under `point`.
    ///
    /// The end handle is drawn above the start handle and wins where both overlap.
    pub fn handle_at(&self, point: &PixelPoint) -> Option<ControlPoint> {
        self.handles
            .iter()
            .rev()
            .find(|handle| handle.contains(point))
            .map(Handle::control)
    }

    /// A drag gesture started on `control`'s handle.
    pub fn on_drag_begin(&mut self, control: ControlPoint) {
        match self.drag {
            Some(active) if active == control => return,
            Some(active) => {
                debug!("{:?} drag began while {:?} was active", control, active);
                self.finish_drag(active);
            }
            None => {}
        }

        debug!("Drag of {:?} handle began", control);
        self.drag = Some(control);
        self.handles[index(control)].dragging = true;
        self.notify(|observer, editor| observer.curve_will_change(editor));
    }

    /// The handle of `control` was dragged to `position` in the editor's pixel space.
    ///
    /// A move outside of a gesture starts one.
    pub fn on_drag_move(&mut self, control: ControlPoint, position: PixelPoint) {
        if self.drag != Some(control) {
            self.on_drag_begin(control);
        }

        let current = self.model.control(control);
        let normalized = self.bounds.normalize(&position, &current);
        if normalized != current {
            trace!("{:?} control moved to ({}, {})", control, normalized.x, normalized.y);
            self.model.set_control(control, normalized);
            self.align_handle(control);
        }
    }

    /// The drag gesture on `control`'s handle ended.
    pub fn on_drag_end(&mut self, control: ControlPoint) {
        match self.drag {
            Some(active) if active == control => self.finish_drag(control),
            Some(active) => debug!("Ignoring end of {:?} drag while {:?} is active", control, active),
            None => debug!("Ignoring end of {:?} drag without a gesture", control),
        }
    }

    /// Replace both control points with the ones drawing `timing`.
    ///
    /// Reported to the observer like a single gesture.
    pub fn set_timing_function(&mut self, timing: TimingFunction) {
        if let Some(active) = self.drag {
            self.finish_drag(active);
        }
        self.notify(|observer, editor| observer.curve_will_change(editor));
        let (start, end) = timing.to_model_controls();
        self.model.set_control(ControlPoint::Start, start);
        self.model.set_control(ControlPoint::End, end);
        self.align_handles();
        self.notify(|observer, editor| observer.curve_did_change(editor));
    }

    /// The editor's container changed its size.
    ///
    /// Handles and connectors are placed anew; the curve's points stay untouched.
    pub fn layout_changed(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.model.set_size(bounds);
        self.align_handles();
    }

    /// Show the marker and let it trace the curve, timed by the current timing function.
    ///
    /// Replaces any playback already running.
    pub fn start_playback(&mut self, duration: Duration, loop_forever: bool) {
        let size = self.bounds;
        let model = &self.model;
        let playback = Playback {
            points: [
                size.scale(&model.start_point()),
                size.scale(&model.start_control()),
                size.scale(&model.end_control()),
                size.scale(&model.end_point()),
            ],
            timing: self.timing_function(),
            duration,
            loop_forever,
        };
        debug!(
            "Starting playback over {:?} ({}) with {}",
            duration,
            if loop_forever { "looping" } else { "once" },
            playback.timing
        );
        self.playback = Some(playback);
        self.marker.visible = true;
    }

    /// Remove the marker's animation and hide it. Does nothing when idle.
    pub fn stop_playback(&mut self) {
        if self.playback.take().is_some() {
            debug!("Stopped playback");
        }
        self.marker.visible = false;
    }

    fn finish_drag(&mut self, control: ControlPoint) {
        debug!("Drag of {:?} handle ended", control);
        self.drag = None;
        self.handles[index(control)].dragging = false;
        self.notify(|observer, editor| observer.curve_did_change(editor));
    }

    fn align_handles(&mut self) {
        for control in ControlPoint::ALL {
            self.align_handle(control);
        }
    }

    fn align_handle(&mut self, control: ControlPoint) {
        let i = index(control);
        let position = self.bounds.scale(&self.model.control(control));
        self.handles[i].position = position;
        self.connectors[i] = Connector {
            from: self.bounds.scale(&self.model.anchor(control)),
            to: position,
        };
    }

    fn notify(&mut self, event: fn(&mut dyn CurveEditorObserver, &mut CurveEditor)) {
        let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        match observer.try_borrow_mut() {
            Ok(mut observer) => event(&mut *observer, self),
            Err(_) => warn!("Dropped a curve notification raised from within the observer"),
        };
    }
}

impl Default for CurveEditor {
    fn default() -> Self {
        CurveEditor::new(&EasingConfig::default())
    }
}

impl fmt::Debug for CurveEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveEditor")
            .field("model", &self.model)
            .field("bounds", &self.bounds)
            .field("handles", &self.handles)
            .field("connectors", &self.connectors)
            .field("marker", &self.marker)
            .field("playback", &self.playback)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}

fn index(control: ControlPoint) -> usize {
    match control {
        ControlPoint::Start => 0,
        ControlPoint::End => 1,
    }
}
