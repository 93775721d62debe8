//! Rectangles with rounded, snipped or square corners.
//!
//! All of them go through [`cornered_rect`], which walks the four corners
//! clockwise from the top-left and lets each corner decide how it turns.

use super::{Frame, Preset, pin};
use crate::geom::{Path, PathBuilder};

pub(super) const ROUND_RECT: Preset = preset!(round_rect, "adj" = 16667);
pub(super) const ROUND1_RECT: Preset = preset!(round1_rect, "adj" = 16667);
pub(super) const ROUND2_SAME_RECT: Preset = preset!(round2_same_rect, "adj1" = 16667, "adj2" = 0);
pub(super) const ROUND2_DIAG_RECT: Preset = preset!(round2_diag_rect, "adj1" = 16667, "adj2" = 0);
pub(super) const SNIP_ROUND_RECT: Preset = preset!(snip_round_rect, "adj1" = 16667, "adj2" = 16667);
pub(super) const SNIP1_RECT: Preset = preset!(snip1_rect, "adj" = 16667);
pub(super) const SNIP2_SAME_RECT: Preset = preset!(snip2_same_rect, "adj1" = 16667, "adj2" = 0);
pub(super) const SNIP2_DIAG_RECT: Preset = preset!(snip2_diag_rect, "adj1" = 0, "adj2" = 16667);
pub(super) const PLAQUE: Preset = preset!(plaque, "adj" = 16667);

/// How one corner of a rectangle turns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Corner {
    Square,
    /// Quarter ellipse of the given radius.
    Round(f64),
    /// Straight cut of the given leg length.
    Snip(f64),
}

impl Corner {
    fn size(self) -> f64 {
        match self {
            Corner::Square => 0.0,
            Corner::Round(d) | Corner::Snip(d) => d.max(0.0),
        }
    }
}

/// Outline a `w` x `h` rectangle; corners are top-left, top-right,
/// bottom-right, bottom-left.
pub(crate) fn cornered_rect(w: f64, h: f64, corners: [Corner; 4]) -> Path {
    let mut p = PathBuilder::new();
    let [tl, tr, br, bl] = corners;

    p.move_to(0.0, tl.size());
    turn(&mut p, tl, 180.0, tl.size(), 0.0);
    p.line_to(w - tr.size(), 0.0);
    turn(&mut p, tr, 270.0, w, tr.size());
    p.line_to(w, h - br.size());
    turn(&mut p, br, 0.0, w - br.size(), h);
    p.line_to(bl.size(), h);
    turn(&mut p, bl, 90.0, 0.0, h - bl.size());
    p.close();
    p.build()
}

/// Draw one corner from the pen to `(x, y)`. `start` is the DrawingML angle
/// at which a rounded corner's arc begins.
fn turn(p: &mut PathBuilder, corner: Corner, start: f64, x: f64, y: f64) {
    match corner {
        Corner::Round(d) if d > 0.0 => {
            p.arc_to(d, d, start, 90.0);
        }
        Corner::Snip(d) if d > 0.0 => {
            p.line_to(x, y);
        }
        _ => {}
    }
}

/// Two corner sizes from guides pinned to `[0, 50000]`.
fn pair(f: &Frame, g1: &str, g2: &str) -> (f64, f64) {
    (
        f.of_ss(pin(0.0, f.adj(g1), 50000.0)),
        f.of_ss(pin(0.0, f.adj(g2), 50000.0)),
    )
}

fn single(f: &Frame) -> f64 {
    f.of_ss(pin(0.0, f.adj("adj"), 50000.0))
}

fn round_rect(f: &Frame) -> Path {
    let r = Corner::Round(single(f));
    cornered_rect(f.w, f.h, [r; 4])
}

fn round1_rect(f: &Frame) -> Path {
    use Corner::Square;
    cornered_rect(f.w, f.h, [Square, Corner::Round(single(f)), Square, Square])
}

fn round2_same_rect(f: &Frame) -> Path {
    let (top, bottom) = pair(f, "adj1", "adj2");
    let (t, b) = (Corner::Round(top), Corner::Round(bottom));
    cornered_rect(f.w, f.h, [t, t, b, b])
}

fn round2_diag_rect(f: &Frame) -> Path {
    let (main, anti) = pair(f, "adj1", "adj2");
    let (m, a) = (Corner::Round(main), Corner::Round(anti));
    cornered_rect(f.w, f.h, [m, a, m, a])
}

fn snip_round_rect(f: &Frame) -> Path {
    use Corner::Square;
    let (round, snip) = pair(f, "adj1", "adj2");
    cornered_rect(
        f.w,
        f.h,
        [Corner::Round(round), Corner::Snip(snip), Square, Square],
    )
}

fn snip1_rect(f: &Frame) -> Path {
    use Corner::Square;
    cornered_rect(f.w, f.h, [Square, Corner::Snip(single(f)), Square, Square])
}

fn snip2_same_rect(f: &Frame) -> Path {
    let (top, bottom) = pair(f, "adj1", "adj2");
    let (t, b) = (Corner::Snip(top), Corner::Snip(bottom));
    cornered_rect(f.w, f.h, [t, t, b, b])
}

fn snip2_diag_rect(f: &Frame) -> Path {
    let (main, anti) = pair(f, "adj1", "adj2");
    let (m, a) = (Corner::Snip(main), Corner::Snip(anti));
    cornered_rect(f.w, f.h, [m, a, m, a])
}

/// Rectangle with concave (inward) rounded corners.
fn plaque(f: &Frame) -> Path {
    let x1 = single(f);
    let (x2, y2) = (f.w - x1, f.h - x1);
    let mut p = PathBuilder::new();
    p.move_to(0.0, x1)
        .arc_to(x1, x1, 90.0, -90.0)
        .line_to(x2, 0.0)
        .arc_to(x1, x1, 180.0, -90.0)
        .line_to(f.w, y2)
        .arc_to(x1, x1, 270.0, -90.0)
        .line_to(x1, f.h)
        .arc_to(x1, x1, 0.0, -90.0)
        .close();
    p.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::PathCommand;
    use crate::guides::RawGuide;
    use crate::presets::{ShapeKind, compute};
    use crate::types::ScaleFactor;

    fn build(kind: ShapeKind, w: f64, h: f64, raw: &[RawGuide]) -> Path {
        let guides = crate::guides::resolve(kind, raw, ScaleFactor::ONE);
        compute(kind, w, h, &guides)
    }

    #[test]
    fn square_corners_make_a_plain_rect() {
        let path = cornered_rect(10.0, 5.0, [Corner::Square; 4]);
        assert_eq!(path.to_path_string(), "M0,0 L10,0 L10,5 L0,5 Z");
    }

    #[test]
    fn mixed_corners_close_one_outline() {
        let path = cornered_rect(
            20.0,
            10.0,
            [Corner::Round(2.0), Corner::Snip(2.0), Corner::Square, Corner::Round(2.0)],
        );
        assert_eq!(path.subpath_count(), 1);
        assert!(path.is_closed());
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
        let arcs = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 2);
        let v = path.vertices();
        for (x, y) in [(18.0, 0.0), (20.0, 2.0), (20.0, 10.0), (2.0, 10.0)] {
            assert!(v.iter().any(|p| (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9), "{x},{y}");
        }
    }

    #[test]
    fn rounded_and_snipped_kinds_close() {
        for kind in [
            ShapeKind::RoundRect,
            ShapeKind::Round2DiagRect,
            ShapeKind::SnipRoundRect,
            ShapeKind::FlowChartAlternateProcess,
        ] {
            let path = build(kind, 90.0, 40.0, &[]);
            assert!(path.is_closed(), "{kind}");
            assert_eq!(path.commands().last(), Some(&PathCommand::Close), "{kind}");
        }
    }

    #[test]
    fn round_rect_default_radius() {
        let path = build(ShapeKind::RoundRect, 120.0, 60.0, &[]);
        insta::assert_snapshot!(path.to_path_string(), @"M0,10.0002 A10.0002,10.0002 0 0 1 10.0002,0 L110,0 A10.0002,10.0002 0 0 1 120,10.0002 L120,49.9998 A10.0002,10.0002 0 0 1 110,60 L10.0002,60 A10.0002,10.0002 0 0 1 0,49.9998 Z");
    }

    #[test]
    fn round_rect_radius_is_pinned_to_half_the_short_side() {
        let path = build(ShapeKind::RoundRect, 100.0, 40.0, &[RawGuide::val("adj", 90000)]);
        let v = path.vertices();
        assert!(v.iter().any(|p| p.x == 20.0 && p.y == 0.0));
        assert!(path.is_finite());
    }

    #[test]
    fn snip1_cuts_only_the_top_right() {
        let path = build(ShapeKind::Snip1Rect, 100.0, 100.0, &[RawGuide::val("adj", 20000)]);
        assert_eq!(
            path.to_path_string(),
            "M0,0 L80,0 L100,20 L100,100 L0,100 Z"
        );
    }

    #[test]
    fn snip2_diag_uses_second_guide_for_the_anti_diagonal() {
        let path = build(ShapeKind::Snip2DiagRect, 100.0, 100.0, &[]);
        assert_eq!(
            path.to_path_string(),
            "M0,0 L83.333,0 L100,16.667 L100,100 L16.667,100 L0,83.333 Z"
        );
    }

    #[test]
    fn plaque_corners_bend_inward() {
        let path = build(ShapeKind::Plaque, 60.0, 60.0, &[RawGuide::val("adj", 50000)]);
        // Radius 30: the four arcs meet the edge midpoints.
        let v = path.vertices();
        assert!(v.iter().any(|p| (p.x - 30.0).abs() < 1e-9 && p.y.abs() < 1e-9));
        assert!(path.is_closed());
    }
}
