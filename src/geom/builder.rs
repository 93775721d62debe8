//! Stateful path builder used by every preset formula and by the custom
//! geometry assembler.
//!
//! # Key Concepts
//!
//! - **Local space**: coordinates handed to the builder may live in a
//!   private path space (`w="21600" h="21600"` style) that is stretched onto
//!   the target box per axis. [`PathBuilder::in_space`] sets that up; the
//!   default is the identity.
//!
//! - **Pen**: the current point in local space. Relative commands
//!   ([`PathBuilder::arc_to`], [`PathBuilder::quad_to`]) start from it.
//!
//! - **Welding**: [`PathBuilder::append`] adds a standalone fragment. When a
//!   subpath is already open, the fragment's leading `MoveTo` becomes a
//!   `LineTo` to the same point, so no spurious subpath break is introduced.
//!
//! # Example
//!
//! ```ignore
//! let mut p = PathBuilder::new();
//! p.move_to(0.0, r).arc_to(r, r, 180.0, 90.0).line_to(w, 0.0);
//! p.line_to(w, h).line_to(0.0, h).close();
//! let path = p.build();
//! ```

use glam::{DVec2, dvec2};

use super::arc::{self, ArcSpec, ellipse_point, visual_to_parametric};
use super::path::{Path, PathCommand};
use crate::log::trace;

#[derive(Debug)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
    /// Local -> target scale per axis
    scale: DVec2,
    /// Current point in local space
    pen: Option<DVec2>,
    /// Start of the current subpath in local space
    subpath_start: Option<DVec2>,
    /// True once a drawing command follows the last move
    open: bool,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            scale: DVec2::ONE,
            pen: None,
            subpath_start: None,
            open: false,
        }
    }

    /// Builder whose local `local_w` x `local_h` space maps onto a
    /// `target_w` x `target_h` box. A zero local extent maps 1:1.
    pub fn in_space(target_w: f64, target_h: f64, local_w: f64, local_h: f64) -> Self {
        let factor = |target: f64, local: f64| if local > 0.0 { target / local } else { 1.0 };
        Self {
            scale: dvec2(factor(target_w, local_w), factor(target_h, local_h)),
            ..Self::new()
        }
    }

    fn map(&self, p: DVec2) -> DVec2 {
        p * self.scale
    }

    /// Current point in local space.
    pub fn current_point(&self) -> Option<DVec2> {
        self.pen
    }

    /// True when a subpath has been started and not closed.
    pub fn has_open_subpath(&self) -> bool {
        self.open
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let p = dvec2(x, y);
        self.commands.push(PathCommand::MoveTo(self.map(p)));
        self.pen = Some(p);
        self.subpath_start = Some(p);
        self.open = false;
        self
    }

    /// Make sure a subpath exists before a drawing command.
    fn ensure_pen(&mut self) -> DVec2 {
        match self.pen {
            Some(p) => p,
            None => {
                trace!("drawing command without a current point, starting at origin");
                self.move_to(0.0, 0.0);
                DVec2::ZERO
            }
        }
    }

    fn mark_drawn(&mut self, pen: DVec2) {
        self.pen = Some(pen);
        self.open = true;
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.ensure_pen();
        let p = dvec2(x, y);
        self.commands.push(PathCommand::LineTo(self.map(p)));
        self.mark_drawn(p);
        self
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        self.ensure_pen();
        let to = dvec2(x, y);
        self.commands.push(PathCommand::CubicTo {
            c1: self.map(dvec2(x1, y1)),
            c2: self.map(dvec2(x2, y2)),
            to: self.map(to),
        });
        self.mark_drawn(to);
        self
    }

    /// Quadratic Bezier, elevated to the equivalent cubic.
    pub fn quad_to(&mut self, qx: f64, qy: f64, x: f64, y: f64) -> &mut Self {
        let from = self.ensure_pen();
        let q = dvec2(qx, qy);
        let to = dvec2(x, y);
        let c1 = from + (q - from) * (2.0 / 3.0);
        let c2 = to + (q - to) * (2.0 / 3.0);
        self.cubic_to(c1.x, c1.y, c2.x, c2.y, x, y)
    }

    /// DrawingML `arcTo`: continue from the pen along an ellipse with radii
    /// `wr` x `hr`, starting at angle `st` and sweeping `sw` degrees
    /// (negative sweeps run counter-clockwise).
    ///
    /// Angles are DrawingML angles (direction from the ellipse center), not
    /// parametric ones.
    pub fn arc_to(&mut self, wr: f64, hr: f64, st: f64, sw: f64) -> &mut Self {
        let pen = self.ensure_pen();
        if !(wr > 0.0 && hr > 0.0) {
            return self.line_to(pen.x, pen.y);
        }
        let t0 = visual_to_parametric(st, wr, hr);
        let t1 = visual_to_parametric(st + sw, wr, hr);
        let center = pen - (ellipse_point(DVec2::ZERO, wr, hr, t0));
        let spec = ArcSpec::new(
            self.map(center),
            wr * self.scale.x,
            hr * self.scale.y,
            t0,
            t1,
        );
        self.commands.push(arc::segment(&spec));
        self.mark_drawn(ellipse_point(center, wr, hr, t1));
        self
    }

    /// Absolute arc (parametric angles, clockwise sweep), welded onto the
    /// current subpath when one is open.
    pub fn arc(&mut self, spec: ArcSpec) -> &mut Self {
        let fragment = arc::arc(&spec).scaled(self.scale.x, self.scale.y);
        self.append(fragment)
    }

    /// Closed ellipse subpath starting at its leftmost point.
    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Self {
        self.move_to(cx - rx, cy);
        self.arc_to(rx, ry, 180.0, 360.0);
        self.close()
    }

    /// Closed polygon subpath.
    pub fn polygon(&mut self, points: &[(f64, f64)]) -> &mut Self {
        if self.polyline(points) {
            self.close();
        }
        self
    }

    /// Open polyline subpath. Returns false for an empty slice.
    pub fn polyline(&mut self, points: &[(f64, f64)]) -> bool {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return false;
        };
        self.move_to(x0, y0);
        for &(x, y) in rest {
            self.line_to(x, y);
        }
        true
    }

    /// Straight segment as its own subpath.
    pub fn segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.move_to(x1, y1).line_to(x2, y2)
    }

    pub fn close(&mut self) -> &mut Self {
        if self.pen.is_some() {
            self.commands.push(PathCommand::Close);
            self.pen = self.subpath_start;
            self.open = false;
        }
        self
    }

    /// Append a fragment expressed in target space.
    ///
    /// A leading `MoveTo` is demoted to `LineTo` when a subpath is open.
    pub fn append(&mut self, fragment: Path) -> &mut Self {
        let inverse = dvec2(1.0 / self.scale.x, 1.0 / self.scale.y);
        let mut commands = fragment.into_commands().into_iter().peekable();
        if self.open {
            if let Some(PathCommand::MoveTo(p)) = commands.peek().copied() {
                commands.next();
                self.commands.push(PathCommand::LineTo(p));
            }
        }
        for cmd in commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    self.subpath_start = Some(p * inverse);
                    self.pen = Some(p * inverse);
                    self.open = false;
                }
                PathCommand::Close => {
                    self.pen = self.subpath_start;
                    self.open = false;
                }
                other => {
                    self.pen = other.end_point().map(|p| p * inverse);
                    self.open = true;
                }
            }
            self.commands.push(cmd);
        }
        self
    }

    pub fn build(self) -> Path {
        Path::from_commands(self.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn pt(x: f64, y: f64) -> DVec2 {
        dvec2(x, y)
    }

    fn assert_point_eq(a: DVec2, b: DVec2) {
        assert!(
            (a - b).length() < EPSILON,
            "({}, {}) != ({}, {})",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }

    #[test]
    fn lines_and_close() {
        let mut p = PathBuilder::new();
        p.move_to(0.0, 0.0).line_to(10.0, 0.0).line_to(10.0, 10.0).close();
        assert_eq!(p.current_point(), Some(pt(0.0, 0.0)));
        assert!(!p.has_open_subpath());
        assert_eq!(p.build().to_path_string(), "M0,0 L10,0 L10,10 Z");
    }

    #[test]
    fn line_without_move_starts_at_origin() {
        let mut p = PathBuilder::new();
        p.line_to(5.0, 5.0);
        assert_eq!(p.build().to_path_string(), "M0,0 L5,5");
    }

    #[test]
    fn local_space_is_stretched() {
        let mut p = PathBuilder::in_space(200.0, 100.0, 2.0, 2.0);
        p.move_to(0.0, 0.0).line_to(2.0, 1.0);
        assert_eq!(p.build().to_path_string(), "M0,0 L200,50");
    }

    #[test]
    fn zero_local_extent_maps_one_to_one() {
        let mut p = PathBuilder::in_space(200.0, 100.0, 0.0, 0.0);
        p.move_to(3.0, 4.0);
        assert_eq!(p.build().to_path_string(), "M3,4");
    }

    // ==================== welding tests ====================

    #[test]
    fn append_demotes_leading_move_when_open() {
        let mut p = PathBuilder::new();
        p.move_to(0.0, 0.0).line_to(10.0, 0.0);
        p.arc(ArcSpec::new(pt(10.0, 10.0), 10.0, 10.0, 270.0, 360.0));
        let path = p.build();
        assert_eq!(path.commands()[2], PathCommand::LineTo(pt(10.0, 0.0)));
        assert_eq!(path.subpath_count(), 1);
    }

    #[test]
    fn append_keeps_leading_move_when_closed() {
        let mut p = PathBuilder::new();
        p.move_to(0.0, 0.0).line_to(10.0, 0.0).close();
        p.arc(ArcSpec::new(pt(10.0, 10.0), 10.0, 10.0, 270.0, 360.0));
        let path = p.build();
        assert!(matches!(path.commands()[3], PathCommand::MoveTo(_)));
        assert_eq!(path.subpath_count(), 2);
    }

    #[test]
    fn arc_updates_pen_in_local_space() {
        let mut p = PathBuilder::in_space(20.0, 20.0, 2.0, 2.0);
        p.move_to(0.0, 1.0);
        p.arc(ArcSpec::new(pt(1.0, 1.0), 1.0, 1.0, 180.0, 270.0));
        assert_point_eq(p.current_point().unwrap(), pt(1.0, 0.0));
        let path = p.build();
        assert_point_eq(path.end_point().unwrap(), pt(10.0, 0.0));
    }

    // ==================== arc_to tests ====================

    #[test]
    fn arc_to_rounds_a_corner() {
        let mut p = PathBuilder::new();
        p.move_to(0.0, 10.0).arc_to(10.0, 10.0, 180.0, 90.0);
        assert_point_eq(p.current_point().unwrap(), pt(10.0, 0.0));
        let path = p.build();
        assert_eq!(
            path.commands()[1],
            PathCommand::ArcTo {
                center: pt(10.0, 10.0),
                rx: 10.0,
                ry: 10.0,
                start: 180.0,
                end: 270.0
            }
        );
    }

    #[test]
    fn arc_to_negative_sweep_runs_counter_clockwise() {
        let mut p = PathBuilder::new();
        p.move_to(0.0, 5.0).arc_to(5.0, 5.0, 90.0, -90.0);
        assert_point_eq(p.current_point().unwrap(), pt(5.0, 0.0));
    }

    #[test]
    fn arc_to_on_ellipse_uses_visual_angles() {
        // 45 degrees on a 20x10 ellipse lands on the diagonal ray.
        let mut p = PathBuilder::new();
        p.move_to(40.0, 10.0).arc_to(20.0, 10.0, 0.0, 45.0);
        let end = p.current_point().unwrap();
        let rel = end - pt(20.0, 10.0);
        assert!((rel.x - rel.y).abs() < EPSILON);
    }

    #[test]
    fn arc_to_degenerate_radius_draws_zero_length_line() {
        let mut p = PathBuilder::new();
        p.move_to(1.0, 1.0).arc_to(0.0, 4.0, 0.0, 90.0);
        assert_eq!(p.build().commands()[1], PathCommand::LineTo(pt(1.0, 1.0)));
    }

    #[test]
    fn ellipse_is_closed_full_turn() {
        let mut p = PathBuilder::new();
        p.ellipse(50.0, 25.0, 50.0, 25.0);
        let path = p.build();
        assert!(path.is_closed());
        assert_eq!(
            path.to_path_string(),
            "M0,25 A50,25 0 0 1 100,25 A50,25 0 0 1 0,25 Z"
        );
    }

    #[test]
    fn quad_is_elevated_to_cubic() {
        let mut p = PathBuilder::new();
        p.move_to(0.0, 0.0).quad_to(3.0, 3.0, 6.0, 0.0);
        let path = p.build();
        let PathCommand::CubicTo { c1, c2, to } = path.commands()[1] else {
            panic!("expected cubic");
        };
        assert_point_eq(c1, pt(2.0, 2.0));
        assert_point_eq(c2, pt(4.0, 2.0));
        assert_point_eq(to, pt(6.0, 0.0));
    }
}
