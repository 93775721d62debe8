//! Brackets and braces. These are open strokes: they have no interior.

use super::{Frame, PCT, Preset, div, pin};
use crate::geom::{Path, PathBuilder};

pub(super) const LEFT_BRACKET: Preset = preset!(left_bracket, "adj" = 8333);
pub(super) const RIGHT_BRACKET: Preset = preset!(right_bracket, "adj" = 8333);
pub(super) const LEFT_BRACE: Preset = preset!(left_brace, "adj1" = 8333, "adj2" = 50000);
pub(super) const RIGHT_BRACE: Preset = preset!(right_brace, "adj1" = 8333, "adj2" = 50000);
pub(super) const BRACKET_PAIR: Preset = preset!(bracket_pair, "adj" = 16667);
pub(super) const BRACE_PAIR: Preset = preset!(brace_pair, "adj" = 8333);

/// Height of a bracket's curved ends.
fn bracket_end(f: &Frame) -> f64 {
    let a = pin(0.0, f.adj("adj"), f.max_adj(f.hd2()));
    f.of_ss(a)
}

fn left_bracket(f: &Frame) -> Path {
    let y1 = bracket_end(f);
    let mut p = PathBuilder::new();
    p.move_to(f.w, f.h)
        .arc_to(f.w, y1, 90.0, 90.0)
        .line_to(0.0, y1)
        .arc_to(f.w, y1, 180.0, 90.0);
    p.build()
}

fn right_bracket(f: &Frame) -> Path {
    let y1 = bracket_end(f);
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .arc_to(f.w, y1, 270.0, 90.0)
        .line_to(f.w, f.h - y1)
        .arc_to(f.w, y1, 0.0, 90.0);
    p.build()
}

/// Brace guides: end curve height and the position of the middle tip.
fn brace_parts(f: &Frame) -> (f64, f64) {
    let a2 = pin(0.0, f.adj("adj2"), PCT);
    let q3 = (PCT - a2).min(a2) / 2.0;
    let a1 = pin(0.0, f.adj("adj1"), div(q3 * f.h, f.ss()));
    (f.of_ss(a1), f.of_h(a2))
}

fn left_brace(f: &Frame) -> Path {
    let (y1, y3) = brace_parts(f);
    let (hc, wd2) = (f.hc(), f.wd2());
    let mut p = PathBuilder::new();
    p.move_to(f.w, f.h)
        .arc_to(wd2, y1, 90.0, 90.0)
        .line_to(hc, y3 + y1)
        .arc_to(wd2, y1, 0.0, -90.0)
        .arc_to(wd2, y1, 90.0, -90.0)
        .line_to(hc, y1)
        .arc_to(wd2, y1, 180.0, 90.0);
    p.build()
}

fn right_brace(f: &Frame) -> Path {
    let (y1, y3) = brace_parts(f);
    let (hc, wd2) = (f.hc(), f.wd2());
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .arc_to(wd2, y1, 270.0, 90.0)
        .line_to(hc, y3 - y1)
        .arc_to(wd2, y1, 180.0, -90.0)
        .arc_to(wd2, y1, 270.0, -90.0)
        .line_to(hc, f.h - y1)
        .arc_to(wd2, y1, 0.0, 90.0);
    p.build()
}

fn bracket_pair(f: &Frame) -> Path {
    let x1 = f.of_ss(pin(0.0, f.adj("adj"), 50000.0));
    let (x2, y2) = (f.w - x1, f.h - x1);
    let mut p = PathBuilder::new();
    p.move_to(x1, f.h)
        .arc_to(x1, x1, 90.0, 90.0)
        .line_to(0.0, x1)
        .arc_to(x1, x1, 180.0, 90.0);
    p.move_to(x2, 0.0)
        .arc_to(x1, x1, 270.0, 90.0)
        .line_to(f.w, y2)
        .arc_to(x1, x1, 0.0, 90.0);
    p.build()
}

fn brace_pair(f: &Frame) -> Path {
    let x1 = f.of_ss(pin(0.0, f.adj("adj"), 25000.0));
    let x2 = x1 * 2.0;
    let (x3, x4) = (f.w - x2, f.w - x1);
    let vc = f.vc();
    let (y2, y3, y4) = (vc - x1, vc + x1, f.h - x1);
    let mut p = PathBuilder::new();
    p.move_to(x2, f.h)
        .arc_to(x1, x1, 90.0, 90.0)
        .line_to(x1, y3)
        .arc_to(x1, x1, 0.0, -90.0)
        .arc_to(x1, x1, 90.0, -90.0)
        .line_to(x1, x1)
        .arc_to(x1, x1, 180.0, 90.0);
    p.move_to(x3, 0.0)
        .arc_to(x1, x1, 270.0, 90.0)
        .line_to(x4, y2)
        .arc_to(x1, x1, 180.0, -90.0)
        .arc_to(x1, x1, 270.0, -90.0)
        .line_to(x4, y4)
        .arc_to(x1, x1, 0.0, 90.0);
    p.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guides::RawGuide;
    use crate::presets::{ShapeKind, compute};
    use crate::types::ScaleFactor;

    fn build(kind: ShapeKind, w: f64, h: f64, raw: &[RawGuide]) -> Path {
        let guides = crate::guides::resolve(kind, raw, ScaleFactor::ONE);
        compute(kind, w, h, &guides)
    }

    fn near(p: glam::DVec2, x: f64, y: f64) -> bool {
        (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9
    }

    #[test]
    fn brackets_are_open() {
        for kind in [
            ShapeKind::LeftBracket,
            ShapeKind::RightBracket,
            ShapeKind::LeftBrace,
            ShapeKind::RightBrace,
            ShapeKind::BracketPair,
            ShapeKind::BracePair,
        ] {
            let path = build(kind, 40.0, 100.0, &[]);
            assert!(path.has_open_subpath(), "{kind}");
            assert!(kind.is_outline_only());
        }
    }

    #[test]
    fn left_bracket_runs_bottom_to_top() {
        let path = build(ShapeKind::LeftBracket, 20.0, 100.0, &[RawGuide::val("adj", 10000)]);
        insta::assert_snapshot!(path.to_path_string(), @"M20,100 A20,2 0 0 1 0,98 L0,2 A20,2 0 0 1 20,0");
    }

    #[test]
    fn brace_tip_follows_adj2() {
        let path = build(ShapeKind::LeftBrace, 20.0, 100.0, &[RawGuide::val("adj2", 30000)]);
        assert!(path.vertices().iter().any(|&p| near(p, 0.0, 30.0)));
        let path = build(ShapeKind::RightBrace, 20.0, 100.0, &[]);
        assert!(path.vertices().iter().any(|&p| near(p, 20.0, 50.0)));
    }

    #[test]
    fn pairs_have_two_strokes() {
        for kind in [ShapeKind::BracketPair, ShapeKind::BracePair] {
            let path = build(kind, 100.0, 60.0, &[]);
            assert_eq!(path.subpath_count(), 2, "{kind}");
        }
        let braces = build(ShapeKind::BracePair, 100.0, 60.0, &[]);
        assert!(braces.vertices().iter().any(|&p| near(p, 0.0, 30.0)));
        assert!(braces.vertices().iter().any(|&p| near(p, 100.0, 30.0)));
    }
}
