//! Path model and SVG path-data serialization.
//!
//! A [`Path`] is a flat list of [`PathCommand`]s in the shape's own
//! coordinate space (origin top-left, y down). Arcs are kept symbolic
//! (center, radii, parametric start/end angles) until serialization so that
//! scaling and flipping stay exact.

use std::fmt;
use std::fmt::Write as _;

use glam::{DVec2, dvec2};

use super::arc::{ellipse_point, sin_cos_deg};
use crate::defaults::{EPSILON, PATH_PRECISION};

/// One drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    CubicTo {
        c1: DVec2,
        c2: DVec2,
        to: DVec2,
    },
    /// Elliptical arc from parametric angle `start` to `end` (degrees,
    /// clockwise-positive). `end > start` sweeps clockwise.
    ArcTo {
        center: DVec2,
        rx: f64,
        ry: f64,
        start: f64,
        end: f64,
    },
    Close,
}

impl PathCommand {
    /// Where the pen rests after this command. `None` for `Close`.
    pub fn end_point(&self) -> Option<DVec2> {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::CubicTo { to, .. } => Some(to),
            PathCommand::ArcTo {
                center,
                rx,
                ry,
                end,
                ..
            } => Some(ellipse_point(center, rx, ry, end)),
            PathCommand::Close => None,
        }
    }

    /// Apply an axis-aligned map `p * scale + offset`.
    ///
    /// Negative scale components mirror the command; arc angles are
    /// reflected so that the traversal direction follows the mirror.
    pub fn mapped(&self, scale: DVec2, offset: DVec2) -> PathCommand {
        let map = |p: DVec2| p * scale + offset;
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(map(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(map(p)),
            PathCommand::CubicTo { c1, c2, to } => PathCommand::CubicTo {
                c1: map(c1),
                c2: map(c2),
                to: map(to),
            },
            PathCommand::ArcTo {
                center,
                rx,
                ry,
                start,
                end,
            } => {
                let reflect = |a: f64| {
                    let a = if scale.x < 0.0 { 180.0 - a } else { a };
                    if scale.y < 0.0 { -a } else { a }
                };
                PathCommand::ArcTo {
                    center: map(center),
                    rx: rx * scale.x.abs(),
                    ry: ry * scale.y.abs(),
                    start: reflect(start),
                    end: reflect(end),
                }
            }
            PathCommand::Close => PathCommand::Close,
        }
    }

    /// Direction of travel at the start (`at_end == false`) or end of this
    /// command, not normalized. `from` is the pen before the command.
    fn tangent(&self, from: DVec2, at_end: bool) -> DVec2 {
        match *self {
            PathCommand::MoveTo(_) | PathCommand::Close => DVec2::ZERO,
            PathCommand::LineTo(p) => p - from,
            PathCommand::CubicTo { c1, c2, to } => {
                let candidates = if at_end {
                    [to - c2, to - c1, to - from]
                } else {
                    [c1 - from, c2 - from, to - from]
                };
                candidates
                    .into_iter()
                    .find(|d| d.length_squared() > EPSILON * EPSILON)
                    .unwrap_or(DVec2::ZERO)
            }
            PathCommand::ArcTo {
                rx, ry, start, end, ..
            } => {
                let (s, c) = sin_cos_deg(if at_end { end } else { start });
                let sense = if end >= start { 1.0 } else { -1.0 };
                dvec2(-rx * s, ry * c) * sense
            }
        }
    }

    fn is_finite(&self) -> bool {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::CubicTo { c1, c2, to } => c1.is_finite() && c2.is_finite() && to.is_finite(),
            PathCommand::ArcTo {
                center,
                rx,
                ry,
                start,
                end,
            } => center.is_finite() && rx.is_finite() && ry.is_finite() && start.is_finite() && end.is_finite(),
            PathCommand::Close => true,
        }
    }
}

/// An ordered sequence of path commands. Empty paths are valid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_commands(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PathCommand> {
        self.commands
    }

    pub fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    /// Concatenate another path verbatim (its moves stay moves).
    pub fn extend(&mut self, other: Path) {
        self.commands.extend(other.commands);
    }

    /// First point of the path.
    pub fn start_point(&self) -> Option<DVec2> {
        self.commands.iter().find_map(PathCommand::end_point)
    }

    /// Pen position after the last command.
    pub fn end_point(&self) -> Option<DVec2> {
        let mut pen = None;
        let mut subpath_start = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    subpath_start = Some(*p);
                    pen = Some(*p);
                }
                PathCommand::Close => pen = subpath_start,
                other => pen = other.end_point(),
            }
        }
        pen
    }

    /// Unit direction of travel leaving the first point.
    pub fn start_direction(&self) -> Option<DVec2> {
        let mut commands = self.commands.iter();
        let Some(PathCommand::MoveTo(from)) = commands.next() else {
            return None;
        };
        let first = commands.next()?;
        first.tangent(*from, false).try_normalize()
    }

    /// Unit direction of travel arriving at the last point.
    pub fn end_direction(&self) -> Option<DVec2> {
        let mut pen = DVec2::ZERO;
        let mut subpath_start = DVec2::ZERO;
        let mut last = None;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    pen = p;
                    subpath_start = p;
                    last = None;
                }
                PathCommand::Close => {
                    last = Some(subpath_start - pen);
                    pen = subpath_start;
                }
                ref other => {
                    last = Some(other.tangent(pen, true));
                    pen = other.end_point().unwrap_or(pen);
                }
            }
        }
        last?.try_normalize()
    }

    /// End points of every drawing command, in order.
    pub fn vertices(&self) -> Vec<DVec2> {
        self.commands.iter().filter_map(PathCommand::end_point).collect()
    }

    /// Number of subpaths (each `MoveTo` starts one).
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_)))
            .count()
    }

    /// True when at least one subpath ends without `Close`.
    pub fn has_open_subpath(&self) -> bool {
        let mut open = false;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(_) => {
                    if open {
                        return true;
                    }
                    open = false;
                }
                PathCommand::Close => open = false,
                _ => open = true,
            }
        }
        open
    }

    pub fn is_closed(&self) -> bool {
        !self.is_empty() && !self.has_open_subpath()
    }

    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(PathCommand::is_finite)
    }

    /// Scale every coordinate per axis (`sx`, `sy` > 0).
    pub fn scaled(&self, sx: f64, sy: f64) -> Path {
        self.mapped(dvec2(sx, sy), DVec2::ZERO)
    }

    /// Mirror inside a `w` x `h` box.
    pub fn flipped(&self, w: f64, h: f64, flip_h: bool, flip_v: bool) -> Path {
        if !flip_h && !flip_v {
            return self.clone();
        }
        let scale = dvec2(
            if flip_h { -1.0 } else { 1.0 },
            if flip_v { -1.0 } else { 1.0 },
        );
        let offset = dvec2(if flip_h { w } else { 0.0 }, if flip_v { h } else { 0.0 });
        self.mapped(scale, offset)
    }

    pub fn mapped(&self, scale: DVec2, offset: DVec2) -> Path {
        self.commands.iter().map(|c| c.mapped(scale, offset)).collect()
    }

    /// Swap the axes: `(x, y)` becomes `(y, x)`.
    ///
    /// Lets a formula written for the vertical variant of a shape produce
    /// the horizontal one.
    pub fn transposed(&self) -> Path {
        let swap = |p: DVec2| dvec2(p.y, p.x);
        self.commands
            .iter()
            .map(|cmd| match *cmd {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(swap(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(swap(p)),
                PathCommand::CubicTo { c1, c2, to } => PathCommand::CubicTo {
                    c1: swap(c1),
                    c2: swap(c2),
                    to: swap(to),
                },
                PathCommand::ArcTo {
                    center,
                    rx,
                    ry,
                    start,
                    end,
                } => PathCommand::ArcTo {
                    center: swap(center),
                    rx: ry,
                    ry: rx,
                    start: 90.0 - start,
                    end: 90.0 - end,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect()
    }

    /// Structural equality within `eps` on every number.
    pub fn approx_eq(&self, other: &Path, eps: f64) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let close = |a: f64, b: f64| (a - b).abs() <= eps * (1.0 + a.abs().max(b.abs()));
        let pt = |a: DVec2, b: DVec2| close(a.x, b.x) && close(a.y, b.y);
        self.commands.iter().zip(&other.commands).all(|pair| match pair {
            (PathCommand::MoveTo(a), PathCommand::MoveTo(b))
            | (PathCommand::LineTo(a), PathCommand::LineTo(b)) => pt(*a, *b),
            (
                PathCommand::CubicTo { c1, c2, to },
                PathCommand::CubicTo {
                    c1: d1,
                    c2: d2,
                    to: dt,
                },
            ) => pt(*c1, *d1) && pt(*c2, *d2) && pt(*to, *dt),
            (
                PathCommand::ArcTo {
                    center,
                    rx,
                    ry,
                    start,
                    end,
                },
                PathCommand::ArcTo {
                    center: c2,
                    rx: rx2,
                    ry: ry2,
                    start: s2,
                    end: e2,
                },
            ) => {
                pt(*center, *c2)
                    && close(*rx, *rx2)
                    && close(*ry, *ry2)
                    && close(*start, *s2)
                    && close(*end, *e2)
            }
            (PathCommand::Close, PathCommand::Close) => true,
            _ => false,
        })
    }

    /// Serialize as SVG path data, e.g. `M0,0 L100,0 L100,50 Z`.
    pub fn to_path_string(&self) -> String {
        let mut out = String::new();
        for cmd in &self.commands {
            let before = out.len();
            if before > 0 {
                out.push(' ');
            }
            write_command(&mut out, cmd);
            // A zero sweep writes nothing; drop the separator too.
            if out.len() == before + 1 {
                out.truncate(before);
            }
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_string())
    }
}

impl FromIterator<PathCommand> for Path {
    fn from_iter<I: IntoIterator<Item = PathCommand>>(iter: I) -> Self {
        Path {
            commands: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for Path {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

fn write_point(out: &mut String, p: DVec2) {
    let _ = write!(out, "{},{}", fmt_num(p.x), fmt_num(p.y));
}

fn write_command(out: &mut String, cmd: &PathCommand) {
    match *cmd {
        PathCommand::MoveTo(p) => {
            out.push('M');
            write_point(out, p);
        }
        PathCommand::LineTo(p) => {
            out.push('L');
            write_point(out, p);
        }
        PathCommand::CubicTo { c1, c2, to } => {
            out.push('C');
            write_point(out, c1);
            out.push(' ');
            write_point(out, c2);
            out.push(' ');
            write_point(out, to);
        }
        PathCommand::ArcTo {
            center,
            rx,
            ry,
            start,
            end,
        } => {
            let sweep = end - start;
            if sweep.abs() < EPSILON {
                return;
            }
            // SVG cannot draw a closed ellipse in one segment.
            if sweep.abs() >= 360.0 - EPSILON {
                let mid = start + sweep / 2.0;
                write_arc(out, center, rx, ry, sweep / 2.0, mid);
                out.push(' ');
                write_arc(out, center, rx, ry, sweep / 2.0, end);
            } else {
                write_arc(out, center, rx, ry, sweep, end);
            }
        }
        PathCommand::Close => out.push('Z'),
    }
}

fn write_arc(out: &mut String, center: DVec2, rx: f64, ry: f64, sweep: f64, end: f64) {
    // Half turns are ambiguous; keep them on the small-arc side.
    let large = u8::from(sweep.abs() > 180.0 + EPSILON);
    let clockwise = u8::from(sweep > 0.0);
    let _ = write!(
        out,
        "A{},{} 0 {} {} ",
        fmt_num(rx),
        fmt_num(ry),
        large,
        clockwise
    );
    write_point(out, ellipse_point(center, rx, ry, end));
}

/// Format a number with `PATH_PRECISION` significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, PATH_PRECISION)
}

/// Format a number with specified significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    // Trig residue such as 1.2e-15 prints as zero.
    if value.abs() < EPSILON || !value.is_finite() {
        return "0".to_string();
    }

    let abs_val = value.abs();
    let magnitude = abs_val.log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    s.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    fn pt(x: f64, y: f64) -> DVec2 {
        dvec2(x, y)
    }

    fn assert_point_eq(a: DVec2, b: DVec2) {
        assert!(
            (a - b).length() < EPS,
            "points differ: ({}, {}) vs ({}, {})",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }

    fn rect_path() -> Path {
        Path::from_commands(vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(100.0, 0.0)),
            PathCommand::LineTo(pt(100.0, 50.0)),
            PathCommand::LineTo(pt(0.0, 50.0)),
            PathCommand::Close,
        ])
    }

    // ==================== fmt_num tests ====================

    #[test]
    fn fmt_num_trims_trailing_zeros() {
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn fmt_num_rounds_to_significant_figures() {
        assert_eq!(fmt_num(1.0 / 3.0), "0.333333");
        assert_eq!(fmt_num(123.4567891), "123.457");
    }

    #[test]
    fn fmt_num_negative_zero() {
        assert_eq!(fmt_num(-1e-12), "0");
        assert_eq!(fmt_num(-2.5), "-2.5");
    }

    // ==================== serialization tests ====================

    #[test]
    fn rect_serializes() {
        assert_eq!(rect_path().to_path_string(), "M0,0 L100,0 L100,50 L0,50 Z");
    }

    #[test]
    fn quarter_arc_serializes_small_clockwise() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(10.0, 0.0)),
            PathCommand::ArcTo {
                center: pt(0.0, 0.0),
                rx: 10.0,
                ry: 10.0,
                start: 0.0,
                end: 90.0,
            },
        ]);
        assert_eq!(path.to_path_string(), "M10,0 A10,10 0 0 1 0,10");
    }

    #[test]
    fn counter_clockwise_arc_clears_sweep_flag() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(0.0, 10.0)),
            PathCommand::ArcTo {
                center: pt(0.0, 0.0),
                rx: 10.0,
                ry: 10.0,
                start: 90.0,
                end: -180.0,
            },
        ]);
        assert_eq!(path.to_path_string(), "M0,10 A10,10 0 1 0 -10,0");
    }

    #[test]
    fn full_turn_splits_into_two_halves() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(10.0, 0.0)),
            PathCommand::ArcTo {
                center: pt(0.0, 0.0),
                rx: 10.0,
                ry: 10.0,
                start: 0.0,
                end: 360.0,
            },
        ]);
        assert_eq!(
            path.to_path_string(),
            "M10,0 A10,10 0 0 1 -10,0 A10,10 0 0 1 10,0"
        );
    }

    #[test]
    fn zero_sweep_arc_writes_nothing() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(10.0, 0.0)),
            PathCommand::ArcTo {
                center: pt(0.0, 0.0),
                rx: 10.0,
                ry: 10.0,
                start: 0.0,
                end: 0.0,
            },
            PathCommand::Close,
        ]);
        assert_eq!(path.to_path_string(), "M10,0 Z");
    }

    // ==================== query tests ====================

    #[test]
    fn end_point_follows_close() {
        let path = rect_path();
        assert_point_eq(path.end_point().unwrap(), pt(0.0, 0.0));
        assert_point_eq(path.start_point().unwrap(), pt(0.0, 0.0));
    }

    #[test]
    fn open_and_closed_subpaths() {
        assert!(rect_path().is_closed());
        let line = Path::from_commands(vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(5.0, 5.0)),
        ]);
        assert!(line.has_open_subpath());
        let mut both = rect_path();
        both.extend(line);
        assert!(both.has_open_subpath());
        assert_eq!(both.subpath_count(), 2);
    }

    #[test]
    fn empty_path_is_not_closed() {
        assert!(!Path::new().is_closed());
        assert_eq!(Path::new().to_path_string(), "");
    }

    // ==================== transform tests ====================

    #[test]
    fn scaled_scales_arcs_and_keeps_angles() {
        let arc = PathCommand::ArcTo {
            center: pt(1.0, 2.0),
            rx: 3.0,
            ry: 4.0,
            start: 10.0,
            end: 80.0,
        };
        let scaled = arc.mapped(dvec2(2.0, 3.0), DVec2::ZERO);
        assert_eq!(
            scaled,
            PathCommand::ArcTo {
                center: pt(2.0, 6.0),
                rx: 6.0,
                ry: 12.0,
                start: 10.0,
                end: 80.0,
            }
        );
    }

    #[test]
    fn flip_keeps_arc_end_points_on_mirror() {
        let arc = PathCommand::ArcTo {
            center: pt(30.0, 20.0),
            rx: 10.0,
            ry: 5.0,
            start: 20.0,
            end: 110.0,
        };
        let before = arc.end_point().unwrap();
        let flipped = Path::from_commands(vec![arc]).flipped(100.0, 50.0, true, true);
        let after = flipped.commands()[0].end_point().unwrap();
        assert_point_eq(after, pt(100.0 - before.x, 50.0 - before.y));
    }

    #[test]
    fn flip_reverses_sweep_direction() {
        let path = Path::from_commands(vec![PathCommand::ArcTo {
            center: pt(0.0, 0.0),
            rx: 1.0,
            ry: 1.0,
            start: 0.0,
            end: 90.0,
        }]);
        let flipped = path.flipped(10.0, 10.0, true, false);
        let PathCommand::ArcTo { start, end, .. } = flipped.commands()[0] else {
            panic!("expected an arc");
        };
        assert!(end < start);
    }

    #[test]
    fn approx_eq_tolerates_rounding() {
        let a = rect_path();
        let b = a.mapped(dvec2(1.0 + 1e-13, 1.0), DVec2::ZERO);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&a.scaled(2.0, 2.0), 1e-9));
    }

    #[test]
    fn transpose_swaps_axes_and_keeps_arc_end_points() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(30.0, 10.0)),
            PathCommand::ArcTo {
                center: pt(10.0, 10.0),
                rx: 20.0,
                ry: 5.0,
                start: 0.0,
                end: 90.0,
            },
        ]);
        let swapped = path.transposed();
        assert_eq!(swapped.commands()[0], PathCommand::MoveTo(pt(10.0, 30.0)));
        assert_point_eq(swapped.end_point().unwrap(), pt(15.0, 10.0));
        assert!(swapped.transposed().approx_eq(&path, 1e-12));
    }

    #[test]
    fn directions_follow_lines() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 0.0)),
            PathCommand::LineTo(pt(10.0, 5.0)),
        ]);
        assert_point_eq(path.start_direction().unwrap(), pt(1.0, 0.0));
        assert_point_eq(path.end_direction().unwrap(), pt(0.0, 1.0));
        assert_eq!(Path::new().start_direction(), None);
        assert_eq!(Path::new().end_direction(), None);
    }

    #[test]
    fn directions_follow_arc_tangents() {
        // Quarter turn clockwise from 3 o'clock to 6 o'clock.
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(10.0, 0.0)),
            PathCommand::ArcTo {
                center: pt(0.0, 0.0),
                rx: 10.0,
                ry: 10.0,
                start: 0.0,
                end: 90.0,
            },
        ]);
        assert_point_eq(path.start_direction().unwrap(), pt(0.0, 1.0));
        assert_point_eq(path.end_direction().unwrap(), pt(-1.0, 0.0));
    }

    #[test]
    fn cubic_direction_skips_coincident_controls() {
        let path = Path::from_commands(vec![
            PathCommand::MoveTo(pt(0.0, 0.0)),
            PathCommand::CubicTo {
                c1: pt(0.0, 0.0),
                c2: pt(0.0, 10.0),
                to: pt(0.0, 10.0),
            },
        ]);
        assert_point_eq(path.start_direction().unwrap(), pt(0.0, 1.0));
        assert_point_eq(path.end_direction().unwrap(), pt(0.0, 1.0));
    }
}
