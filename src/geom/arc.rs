//! Elliptical arc segments.
//!
//! Every curved preset outline and every custom `arcTo` goes through this
//! module. Angles are degrees, clockwise-positive (y points down), 0 at
//! 3 o'clock, and parametric: a point sits at
//! `(cx + rx·cos θ, cy + ry·sin θ)`.
//!
//! # Fragments
//!
//! [`arc`] returns a standalone fragment that starts with a `MoveTo`. To
//! continue an open subpath with it, use
//! [`PathBuilder::append`](super::PathBuilder::append), which demotes that
//! leading move to a line.

use glam::{DVec2, dvec2};

use super::path::{Path, PathCommand};
use crate::defaults::EPSILON;

/// An arc request: ellipse, angle pair and wedge flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: DVec2,
    pub rx: f64,
    pub ry: f64,
    /// Start angle in degrees.
    pub start: f64,
    /// End angle in degrees.
    pub end: f64,
    /// Draw a line back to the center after the arc (pie wedges).
    pub close_to_center: bool,
}

impl ArcSpec {
    pub fn new(center: DVec2, rx: f64, ry: f64, start: f64, end: f64) -> Self {
        Self {
            center,
            rx,
            ry,
            start,
            end,
            close_to_center: false,
        }
    }

    /// Same arc, finished with a line to the center.
    pub fn wedge(self) -> Self {
        Self {
            close_to_center: true,
            ..self
        }
    }

    /// Clockwise sweep from `start` to `end`.
    pub fn sweep(&self) -> f64 {
        clockwise_sweep(self.start, self.end)
    }

    pub fn is_large(&self) -> bool {
        self.sweep() > 180.0
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.rx > 0.0 && self.ry > 0.0 && self.rx.is_finite() && self.ry.is_finite())
    }

    pub fn start_point(&self) -> DVec2 {
        ellipse_point(self.center, self.rx, self.ry, self.start)
    }

    pub fn end_point(&self) -> DVec2 {
        ellipse_point(self.center, self.rx, self.ry, self.start + self.sweep())
    }
}

/// `(sin, cos)` of an angle in degrees, exact on the axes.
pub fn sin_cos_deg(deg: f64) -> (f64, f64) {
    let quarter = deg / 90.0;
    if quarter.fract() == 0.0 {
        match quarter.rem_euclid(4.0) as u8 {
            0 => (0.0, 1.0),
            1 => (1.0, 0.0),
            2 => (0.0, -1.0),
            _ => (-1.0, 0.0),
        }
    } else {
        deg.to_radians().sin_cos()
    }
}

/// Point on an ellipse at parametric angle `deg`.
#[inline]
pub fn ellipse_point(center: DVec2, rx: f64, ry: f64, deg: f64) -> DVec2 {
    let (sin, cos) = sin_cos_deg(deg);
    center + dvec2(rx * cos, ry * sin)
}

/// Clockwise angular distance from `start` to `end`, in `[0, 360]`.
///
/// Angles that differ by a non-zero multiple of 360 are a full turn.
pub fn clockwise_sweep(start: f64, end: f64) -> f64 {
    let raw = end - start;
    if raw.abs() < EPSILON {
        return 0.0;
    }
    let sweep = raw.rem_euclid(360.0);
    if sweep < EPSILON || 360.0 - sweep < EPSILON {
        360.0
    } else {
        sweep
    }
}

/// Convert a DrawingML angle (the direction from the center to the point) to
/// the parametric angle of the same point on an `rx` x `ry` ellipse.
///
/// The result stays within 90 degrees of the input so that sweeps keep their
/// sign and full turns stay full turns.
pub fn visual_to_parametric(deg: f64, rx: f64, ry: f64) -> f64 {
    if rx <= 0.0 || ry <= 0.0 || (rx - ry).abs() < EPSILON || (deg / 90.0).fract() == 0.0 {
        return deg;
    }
    let (sin, cos) = sin_cos_deg(deg);
    let t = (rx * sin).atan2(ry * cos).to_degrees();
    t + 360.0 * ((deg - t) / 360.0).round()
}

/// Build a standalone arc fragment.
///
/// The fragment is `MoveTo(start)`, `ArcTo` sweeping clockwise, and
/// `LineTo(center)` when `close_to_center` is set. Non-positive radii
/// degrade to a zero-length line at the start point.
pub fn arc(spec: &ArcSpec) -> Path {
    let start = spec.start_point();
    let mut path = Path::new();
    path.push(PathCommand::MoveTo(start));
    if spec.is_degenerate() {
        path.push(PathCommand::LineTo(start));
    } else {
        path.push(PathCommand::ArcTo {
            center: spec.center,
            rx: spec.rx,
            ry: spec.ry,
            start: spec.start,
            end: spec.start + spec.sweep(),
        });
    }
    if spec.close_to_center {
        path.push(PathCommand::LineTo(spec.center));
    }
    path
}

/// The single command continuing a path along `spec`, honoring the sign of
/// `end - start` (negative runs counter-clockwise).
///
/// Used for relative `arcTo` segments whose start point is already the pen.
pub fn segment(spec: &ArcSpec) -> PathCommand {
    if spec.is_degenerate() {
        return PathCommand::LineTo(spec.start_point());
    }
    PathCommand::ArcTo {
        center: spec.center,
        rx: spec.rx,
        ry: spec.ry,
        start: spec.start,
        end: spec.end,
    }
}
