//! Block arrows and arrow callouts.
//!
//! Vertical arrows are their horizontal counterparts drawn on the transposed
//! frame and transposed back, so each construction is written once.

use super::{Frame, PCT, Preset, div, pin};
use crate::geom::{Path, PathBuilder};

pub(super) const RIGHT_ARROW: Preset = preset!(right_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const LEFT_ARROW: Preset = preset!(left_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const UP_ARROW: Preset = preset!(up_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const DOWN_ARROW: Preset = preset!(down_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const STRIPED_RIGHT_ARROW: Preset =
    preset!(striped_right_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const NOTCHED_RIGHT_ARROW: Preset =
    preset!(notched_right_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const LEFT_RIGHT_ARROW: Preset = preset!(left_right_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const UP_DOWN_ARROW: Preset = preset!(up_down_arrow, "adj1" = 50000, "adj2" = 50000);
pub(super) const QUAD_ARROW: Preset =
    preset!(quad_arrow, "adj1" = 22500, "adj2" = 22500, "adj3" = 22500);
pub(super) const LEFT_RIGHT_UP_ARROW: Preset =
    preset!(left_right_up_arrow, "adj1" = 25000, "adj2" = 25000, "adj3" = 25000);
pub(super) const LEFT_UP_ARROW: Preset =
    preset!(left_up_arrow, "adj1" = 25000, "adj2" = 25000, "adj3" = 25000);
pub(super) const BENT_UP_ARROW: Preset =
    preset!(bent_up_arrow, "adj1" = 25000, "adj2" = 25000, "adj3" = 25000);
pub(super) const BENT_ARROW: Preset = preset!(
    bent_arrow,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 43750
);
pub(super) const UTURN_ARROW: Preset = preset!(
    uturn_arrow,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 43750,
    "adj5" = 75000
);
pub(super) const RIGHT_ARROW_CALLOUT: Preset = preset!(
    right_arrow_callout,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 64977
);
pub(super) const LEFT_ARROW_CALLOUT: Preset = preset!(
    left_arrow_callout,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 64977
);
pub(super) const UP_ARROW_CALLOUT: Preset = preset!(
    up_arrow_callout,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 64977
);
pub(super) const DOWN_ARROW_CALLOUT: Preset = preset!(
    down_arrow_callout,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 64977
);
pub(super) const LEFT_RIGHT_ARROW_CALLOUT: Preset = preset!(
    left_right_arrow_callout,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 48123
);
pub(super) const UP_DOWN_ARROW_CALLOUT: Preset = preset!(
    up_down_arrow_callout,
    "adj1" = 25000,
    "adj2" = 25000,
    "adj3" = 25000,
    "adj4" = 48123
);
pub(super) const QUAD_ARROW_CALLOUT: Preset = preset!(
    quad_arrow_callout,
    "adj1" = 18515,
    "adj2" = 18515,
    "adj3" = 18515,
    "adj4" = 48123
);

fn closed(points: &[(f64, f64)]) -> Path {
    let mut p = PathBuilder::new();
    p.polygon(points);
    p.build()
}

/// Shaft half-width (from `adj1`, a share of `h`) and head length (from
/// `adj2`, a share of `ss` bounded by `head_max`).
fn shaft_and_head(f: &Frame, head_max: f64) -> (f64, f64) {
    let a1 = pin(0.0, f.adj("adj1"), PCT);
    let a2 = pin(0.0, f.adj("adj2"), f.max_adj(head_max));
    (f.h * a1 / 200000.0, f.of_ss(a2))
}

fn right_arrow(f: &Frame) -> Path {
    let (dy1, dx1) = shaft_and_head(f, f.w);
    let x1 = f.w - dx1;
    let (y1, y2) = (f.vc() - dy1, f.vc() + dy1);
    closed(&[
        (0.0, y1),
        (x1, y1),
        (x1, 0.0),
        (f.w, f.vc()),
        (x1, f.h),
        (x1, y2),
        (0.0, y2),
    ])
}

fn left_arrow(f: &Frame) -> Path {
    let (dy1, x2) = shaft_and_head(f, f.w);
    let (y1, y2) = (f.vc() - dy1, f.vc() + dy1);
    closed(&[
        (0.0, f.vc()),
        (x2, 0.0),
        (x2, y1),
        (f.w, y1),
        (f.w, y2),
        (x2, y2),
        (x2, f.h),
    ])
}

fn up_arrow(f: &Frame) -> Path {
    left_arrow(&f.transposed()).transposed()
}

fn down_arrow(f: &Frame) -> Path {
    right_arrow(&f.transposed()).transposed()
}

fn striped_right_arrow(f: &Frame) -> Path {
    let (dy1, dx5) = shaft_and_head(f, f.w * 0.84375);
    let x5 = f.w - dx5;
    let (y1, y2) = (f.vc() - dy1, f.vc() + dy1);
    let ss = f.ss();
    let (ssd32, ssd16, ssd8) = (ss / 32.0, ss / 16.0, ss / 8.0);
    let x4 = ss * 5.0 / 32.0;
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, y1), (ssd32, y1), (ssd32, y2), (0.0, y2)])
        .polygon(&[(ssd16, y1), (ssd8, y1), (ssd8, y2), (ssd16, y2)])
        .polygon(&[
            (x4, y1),
            (x5, y1),
            (x5, 0.0),
            (f.w, f.vc()),
            (x5, f.h),
            (x5, y2),
            (x4, y2),
        ]);
    p.build()
}

fn notched_right_arrow(f: &Frame) -> Path {
    let (dy1, dx2) = shaft_and_head(f, f.w);
    let x2 = f.w - dx2;
    let (y1, y2) = (f.vc() - dy1, f.vc() + dy1);
    let x1 = div(dy1 * dx2, f.hd2());
    closed(&[
        (0.0, y1),
        (x2, y1),
        (x2, 0.0),
        (f.w, f.vc()),
        (x2, f.h),
        (x2, y2),
        (0.0, y2),
        (x1, f.vc()),
    ])
}

fn left_right_arrow(f: &Frame) -> Path {
    let (dy, x2) = shaft_and_head(f, f.wd2());
    let x3 = f.w - x2;
    let (y1, y2) = (f.vc() - dy, f.vc() + dy);
    closed(&[
        (0.0, f.vc()),
        (x2, 0.0),
        (x2, y1),
        (x3, y1),
        (x3, 0.0),
        (f.w, f.vc()),
        (x3, f.h),
        (x3, y2),
        (x2, y2),
        (x2, f.h),
    ])
}

fn up_down_arrow(f: &Frame) -> Path {
    left_right_arrow(&f.transposed()).transposed()
}

/// Shaft, head and head-length guides shared by the multi-headed arrows:
/// `adj2` is the head half-width, `adj1` the shaft width (at most twice the
/// head), `adj3` the head length.
struct Heads {
    /// Head length.
    x1: f64,
    /// Head half-width.
    dx2: f64,
    /// Shaft half-width.
    dx3: f64,
}

impl Heads {
    fn new(f: &Frame, length_max: impl Fn(f64) -> f64) -> Self {
        let a2 = pin(0.0, f.adj("adj2"), 50000.0);
        let max1 = a2 * 2.0;
        let a1 = pin(0.0, f.adj("adj1"), max1);
        let a3 = pin(0.0, f.adj("adj3"), length_max(max1));
        Heads {
            x1: f.of_ss(a3),
            dx2: f.of_ss(a2),
            dx3: f.ss() * a1 / 200000.0,
        }
    }
}

fn quad_arrow(f: &Frame) -> Path {
    let Heads { x1, dx2, dx3 } = Heads::new(f, |max1| (PCT - max1) / 2.0);
    let (hc, vc) = (f.hc(), f.vc());
    let (x2, x5, x3, x4, x6) = (hc - dx2, hc + dx2, hc - dx3, hc + dx3, f.w - x1);
    let (y2, y5, y3, y4, y6) = (vc - dx2, vc + dx2, vc - dx3, vc + dx3, f.h - x1);
    closed(&[
        (0.0, vc),
        (x1, y2),
        (x1, y3),
        (x3, y3),
        (x3, x1),
        (x2, x1),
        (hc, 0.0),
        (x5, x1),
        (x4, x1),
        (x4, y3),
        (x6, y3),
        (x6, y2),
        (f.w, vc),
        (x6, y5),
        (x6, y4),
        (x4, y4),
        (x4, y6),
        (x5, y6),
        (hc, f.h),
        (x2, y6),
        (x3, y6),
        (x3, y4),
        (x1, y4),
        (x1, y5),
    ])
}

fn left_right_up_arrow(f: &Frame) -> Path {
    let Heads { x1, dx2, dx3 } = Heads::new(f, |max1| (PCT - max1) / 2.0);
    let hc = f.hc();
    let (x2, x5, x3, x4, x6) = (hc - dx2, hc + dx2, hc - dx3, hc + dx3, f.w - x1);
    let y2 = f.h - 2.0 * dx2;
    let y4 = f.h - dx2;
    let (y3, y5) = (y4 - dx3, y4 + dx3);
    closed(&[
        (0.0, y4),
        (x1, y2),
        (x1, y3),
        (x3, y3),
        (x3, x1),
        (x2, x1),
        (hc, 0.0),
        (x5, x1),
        (x4, x1),
        (x4, y3),
        (x6, y3),
        (x6, y2),
        (f.w, y4),
        (x6, f.h),
        (x6, y5),
        (x1, y5),
        (x1, f.h),
    ])
}

fn left_up_arrow(f: &Frame) -> Path {
    let Heads { x1, dx2, dx3 } = Heads::new(f, |max1| PCT - max1);
    let x2 = f.w - 2.0 * dx2;
    let y2 = f.h - 2.0 * dx2;
    let (x4, y4) = (f.w - dx2, f.h - dx2);
    let (x3, x5) = (x4 - dx3, x4 + dx3);
    let (y3, y5) = (y4 - dx3, y4 + dx3);
    closed(&[
        (0.0, y4),
        (x1, y2),
        (x1, y3),
        (x3, y3),
        (x3, x1),
        (x2, x1),
        (x4, 0.0),
        (f.w, x1),
        (x5, x1),
        (x5, y5),
        (x1, y5),
        (x1, f.h),
    ])
}

fn bent_up_arrow(f: &Frame) -> Path {
    let a1 = pin(0.0, f.adj("adj1"), 50000.0);
    let a2 = pin(0.0, f.adj("adj2"), 50000.0);
    let a3 = pin(0.0, f.adj("adj3"), 50000.0);
    let y1 = f.of_ss(a3);
    let x1 = f.w - f.ss() * a2 / 50000.0;
    let x3 = f.w - f.of_ss(a2);
    let dx2 = f.ss() * a1 / 200000.0;
    let (x2, x4) = (x3 - dx2, x3 + dx2);
    let y2 = f.h - f.of_ss(a1);
    closed(&[
        (0.0, y2),
        (x2, y2),
        (x2, y1),
        (x1, y1),
        (x3, 0.0),
        (f.w, y1),
        (x4, y1),
        (x4, f.h),
        (0.0, f.h),
    ])
}

fn bent_arrow(f: &Frame) -> Path {
    let a2 = pin(0.0, f.adj("adj2"), 50000.0);
    let a1 = pin(0.0, f.adj("adj1"), a2 * 2.0);
    let a3 = pin(0.0, f.adj("adj3"), 50000.0);
    let th = f.of_ss(a1);
    let aw2 = f.of_ss(a2);
    let dh2 = aw2 - th / 2.0;
    let ah = f.of_ss(a3);
    let bs = (f.w - ah).min(f.h - dh2);
    let a4 = pin(0.0, f.adj("adj4"), f.max_adj(bs));
    let bd = f.of_ss(a4);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x4 = f.w - ah;
    let y3 = dh2 + th;
    let y4 = y3 + dh2;
    let y5 = dh2 + bd;

    let mut p = PathBuilder::new();
    p.move_to(0.0, f.h)
        .line_to(0.0, y5)
        .arc_to(bd, bd, 180.0, 90.0)
        .line_to(x4, dh2)
        .line_to(x4, 0.0)
        .line_to(f.w, aw2)
        .line_to(x4, y4)
        .line_to(x4, y3)
        .line_to(x3, y3)
        .arc_to(bd2, bd2, 270.0, -90.0)
        .line_to(th, f.h)
        .close();
    p.build()
}

fn uturn_arrow(f: &Frame) -> Path {
    let ss = f.ss();
    let a2 = pin(0.0, f.adj("adj2"), 25000.0);
    let a1 = pin(0.0, f.adj("adj1"), a2 * 2.0);
    let q3 = PCT - div(a1 * ss, f.h);
    let a3 = pin(0.0, f.adj("adj3"), div(q3 * f.h, ss));
    let min5 = div((a3 + a1) * ss, f.h);
    let a5 = pin(min5, f.adj("adj5"), PCT);

    let th = f.of_ss(a1);
    let aw2 = f.of_ss(a2);
    let dh2 = aw2 - th / 2.0;
    let y5 = f.of_h(a5);
    let ah = f.of_ss(a3);
    let y4 = y5 - ah;
    let x9 = f.w - dh2;
    let bs = (x9 / 2.0).min(y4);
    let a4 = pin(0.0, f.adj("adj4"), f.max_adj(bs));
    let bd = f.of_ss(a4);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x8 = f.w - aw2;
    let x6 = x8 - aw2;
    let x7 = x6 + dh2;
    let x4 = x9 - bd;

    let mut p = PathBuilder::new();
    p.move_to(0.0, f.h)
        .line_to(0.0, bd)
        .arc_to(bd, bd, 180.0, 90.0)
        .line_to(x4, 0.0)
        .arc_to(bd, bd, 270.0, 90.0)
        .line_to(x9, y4)
        .line_to(f.w, y4)
        .line_to(x8, y5)
        .line_to(x6, y4)
        .line_to(x7, y4)
        .line_to(x7, x3)
        .arc_to(bd2, bd2, 0.0, -90.0)
        .line_to(x3, th)
        .arc_to(bd2, bd2, 270.0, -90.0)
        .line_to(th, f.h)
        .close();
    p.build()
}

/// Guides of the single-headed arrow callouts, for a head pointing along
/// `w`: shaft half-width, head half-width, head length and box length.
fn callout_parts(f: &Frame, heads: f64) -> (f64, f64, f64, f64) {
    let a2 = pin(0.0, f.adj("adj2"), f.max_adj(f.hd2()));
    let a1 = pin(0.0, f.adj("adj1"), a2 * 2.0);
    let a3 = pin(0.0, f.adj("adj3"), f.max_adj(f.w / heads));
    let a4 = pin(0.0, f.adj("adj4"), PCT - div(a3 * f.ss() * heads, f.w));
    (
        f.ss() * a1 / 200000.0,
        f.of_ss(a2),
        f.of_ss(a3),
        f.of_w(a4),
    )
}

fn right_arrow_callout(f: &Frame) -> Path {
    let (dy2, dy1, dx3, x2) = callout_parts(f, 1.0);
    let vc = f.vc();
    let x3 = f.w - dx3;
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    closed(&[
        (0.0, 0.0),
        (x2, 0.0),
        (x2, y2),
        (x3, y2),
        (x3, y1),
        (f.w, vc),
        (x3, y4),
        (x3, y3),
        (x2, y3),
        (x2, f.h),
        (0.0, f.h),
    ])
}

fn left_arrow_callout(f: &Frame) -> Path {
    let (dy2, dy1, x1, dx2) = callout_parts(f, 1.0);
    let vc = f.vc();
    let x2 = f.w - dx2;
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    closed(&[
        (0.0, vc),
        (x1, y1),
        (x1, y2),
        (x2, y2),
        (x2, 0.0),
        (f.w, 0.0),
        (f.w, f.h),
        (x2, f.h),
        (x2, y3),
        (x1, y3),
        (x1, y4),
    ])
}

fn up_arrow_callout(f: &Frame) -> Path {
    left_arrow_callout(&f.transposed()).transposed()
}

fn down_arrow_callout(f: &Frame) -> Path {
    right_arrow_callout(&f.transposed()).transposed()
}

fn left_right_arrow_callout(f: &Frame) -> Path {
    let (dy2, dy1, x1, box_w) = callout_parts(f, 2.0);
    let (hc, vc) = (f.hc(), f.vc());
    let x4 = f.w - x1;
    let (x2, x3) = (hc - box_w / 2.0, hc + box_w / 2.0);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    closed(&[
        (0.0, vc),
        (x1, y1),
        (x1, y2),
        (x2, y2),
        (x2, 0.0),
        (x3, 0.0),
        (x3, y2),
        (x4, y2),
        (x4, y1),
        (f.w, vc),
        (x4, y4),
        (x4, y3),
        (x3, y3),
        (x3, f.h),
        (x2, f.h),
        (x2, y3),
        (x1, y3),
        (x1, y4),
    ])
}

fn up_down_arrow_callout(f: &Frame) -> Path {
    left_right_arrow_callout(&f.transposed()).transposed()
}

fn quad_arrow_callout(f: &Frame) -> Path {
    let a2 = pin(0.0, f.adj("adj2"), 50000.0);
    let a1 = pin(0.0, f.adj("adj1"), a2 * 2.0);
    let a3 = pin(0.0, f.adj("adj3"), 50000.0 - a2);
    let a4 = pin(a1, f.adj("adj4"), PCT - a3 * 2.0);

    let (hc, vc) = (f.hc(), f.vc());
    let dx2 = f.of_ss(a2);
    let dx3 = f.ss() * a1 / 200000.0;
    let ah = f.of_ss(a3);
    let dx1 = f.w * a4 / 200000.0;
    let dy1 = f.h * a4 / 200000.0;

    let x8 = f.w - ah;
    let (x2, x7) = (hc - dx1, hc + dx1);
    let (x3, x6) = (hc - dx2, hc + dx2);
    let (x4, x5) = (hc - dx3, hc + dx3);
    let y8 = f.h - ah;
    let (y2, y7) = (vc - dy1, vc + dy1);
    let (y3, y6) = (vc - dx2, vc + dx2);
    let (y4, y5) = (vc - dx3, vc + dx3);
    closed(&[
        (0.0, vc),
        (ah, y3),
        (ah, y4),
        (x2, y4),
        (x2, y2),
        (x4, y2),
        (x4, ah),
        (x3, ah),
        (hc, 0.0),
        (x6, ah),
        (x5, ah),
        (x5, y2),
        (x7, y2),
        (x7, y4),
        (x8, y4),
        (x8, y3),
        (f.w, vc),
        (x8, y6),
        (x8, y5),
        (x7, y5),
        (x7, y7),
        (x5, y7),
        (x5, y8),
        (x6, y8),
        (hc, f.h),
        (x3, y8),
        (x4, y8),
        (x4, y7),
        (x2, y7),
        (x2, y5),
        (ah, y5),
        (ah, y6),
    ])
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

    #[test]
    fn right_arrow_defaults() {
        let path = build(ShapeKind::RightArrow, 100.0, 50.0, &[]);
        insta::assert_snapshot!(path.to_path_string(), @"M0,12.5 L75,12.5 L75,0 L100,25 L75,50 L75,37.5 L0,37.5 Z");
    }

    #[test]
    fn up_arrow_is_a_transposed_left_arrow() {
        let path = build(ShapeKind::UpArrow, 50.0, 100.0, &[]);
        insta::assert_snapshot!(path.to_path_string(), @"M25,0 L0,25 L12.5,25 L12.5,100 L37.5,100 L37.5,25 L50,25 Z");
    }

    #[test]
    fn head_length_is_pinned_to_the_box() {
        let path = build(ShapeKind::RightArrow, 100.0, 50.0, &[RawGuide::val("adj2", 900000)]);
        // The head may take the whole width but not more.
        assert!(path.vertices().iter().all(|p| p.x >= 0.0));
        assert_eq!(path.vertices()[1].x, 0.0);
    }

    #[test]
    fn left_right_arrow_has_two_heads() {
        let path = build(ShapeKind::LeftRightArrow, 100.0, 50.0, &[]);
        let v = path.vertices();
        assert_eq!(v.len(), 10);
        assert_eq!((v[0].x, v[0].y), (0.0, 25.0));
        assert_eq!((v[5].x, v[5].y), (100.0, 25.0));
    }

    #[test]
    fn striped_arrow_has_three_subpaths() {
        let path = build(ShapeKind::StripedRightArrow, 100.0, 50.0, &[]);
        assert_eq!(path.subpath_count(), 3);
        assert!(path.is_closed());
    }

    #[test]
    fn notch_depth_follows_the_head() {
        let path = build(ShapeKind::NotchedRightArrow, 100.0, 50.0, &[]);
        let notch = path.vertices()[7];
        // dy1 = 12.5, dx2 = 25, hd2 = 25
        assert_eq!((notch.x, notch.y), (12.5, 25.0));
    }

    #[test]
    fn quad_arrow_tips_touch_every_edge() {
        let path = build(ShapeKind::QuadArrow, 100.0, 100.0, &[]);
        let v = path.vertices();
        for tip in [(0.0, 50.0), (50.0, 0.0), (100.0, 50.0), (50.0, 100.0)] {
            assert!(v.iter().any(|p| (p.x, p.y) == tip), "missing {tip:?}");
        }
    }

    #[test]
    fn bent_and_uturn_arrows_round_their_bends() {
        for kind in [ShapeKind::BentArrow, ShapeKind::UturnArrow] {
            let path = build(kind, 100.0, 100.0, &[]);
            let arcs = path
                .commands()
                .iter()
                .filter(|c| matches!(c, crate::geom::PathCommand::ArcTo { .. }))
                .count();
            assert!(arcs >= 2, "{kind}");
            assert!(path.is_closed());
        }
    }

    #[test]
    fn arrow_callout_box_spans_adj4() {
        let path = build(ShapeKind::RightArrowCallout, 200.0, 100.0, &[]);
        // adj4 = 64977 of the width
        let x2 = path.vertices()[1].x;
        assert!((x2 - 129.954).abs() < 1e-9);
    }

    #[test]
    fn vertical_callouts_mirror_horizontal_ones() {
        let down = build(ShapeKind::DownArrowCallout, 50.0, 100.0, &[]);
        let right = build(ShapeKind::RightArrowCallout, 100.0, 50.0, &[]);
        assert!(down.approx_eq(&right.transposed(), 1e-12));
        let ud = build(ShapeKind::UpDownArrowCallout, 50.0, 100.0, &[]);
        let lr = build(ShapeKind::LeftRightArrowCallout, 100.0, 50.0, &[]);
        assert!(ud.approx_eq(&lr.transposed(), 1e-12));
    }
}
