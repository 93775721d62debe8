//! Math operators, corner tabs and chart glyphs.

use super::basic::rect;
use super::{Frame, PCT, Preset, at2, div, pin};
use crate::geom::arc::sin_cos_deg;
use crate::geom::{Path, PathBuilder};

pub(super) const MATH_PLUS: Preset = preset!(math_plus, "adj1" = 23520);
pub(super) const MATH_MINUS: Preset = preset!(math_minus, "adj1" = 23520);
pub(super) const MATH_MULTIPLY: Preset = preset!(math_multiply, "adj1" = 23520);
pub(super) const MATH_DIVIDE: Preset =
    preset!(math_divide, "adj1" = 23520, "adj2" = 5880, "adj3" = 11760);
pub(super) const MATH_EQUAL: Preset = preset!(math_equal, "adj1" = 23520, "adj2" = 11760);
pub(super) const MATH_NOT_EQUAL: Preset =
    preset!(math_not_equal, "adj1" = 23520, "adj2" = 6600000, "adj3" = 11760);
pub(super) const CORNER_TABS: Preset = preset!(corner_tabs);
pub(super) const SQUARE_TABS: Preset = preset!(square_tabs);
pub(super) const PLAQUE_TABS: Preset = preset!(plaque_tabs);
pub(super) const CHART_X: Preset = preset!(chart_x);
pub(super) const CHART_STAR: Preset = preset!(chart_star);
pub(super) const CHART_PLUS: Preset = preset!(chart_plus);

/// Operators span this share of the box.
const SPAN: f64 = 73490.0;

/// Half the operator span along `len`.
fn half_span(len: f64) -> f64 {
    len * SPAN / 200000.0
}

fn bar(p: &mut PathBuilder, x1: f64, y1: f64, x2: f64, y2: f64) {
    p.polygon(&[(x1, y1), (x2, y1), (x2, y2), (x1, y2)]);
}

fn math_plus(f: &Frame) -> Path {
    let a1 = pin(0.0, f.adj("adj1"), SPAN);
    let (hc, vc) = (f.hc(), f.vc());
    let (dx1, dy1) = (half_span(f.w), half_span(f.h));
    let dx2 = f.ss() * a1 / 200000.0;
    let (x1, x2, x3, x4) = (hc - dx1, hc - dx2, hc + dx2, hc + dx1);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dx2, vc + dx2, vc + dy1);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (x1, y2),
        (x2, y2),
        (x2, y1),
        (x3, y1),
        (x3, y2),
        (x4, y2),
        (x4, y3),
        (x3, y3),
        (x3, y4),
        (x2, y4),
        (x2, y3),
        (x1, y3),
    ]);
    p.build()
}

fn math_minus(f: &Frame) -> Path {
    let a1 = pin(0.0, f.adj("adj1"), PCT);
    let dy1 = f.h * a1 / 200000.0;
    let dx1 = half_span(f.w);
    let mut p = PathBuilder::new();
    bar(&mut p, f.hc() - dx1, f.vc() - dy1, f.hc() + dx1, f.vc() + dy1);
    p.build()
}

/// Two bars crossing along the box diagonals.
fn math_multiply(f: &Frame) -> Path {
    let a1 = pin(0.0, f.adj("adj1"), 51965.0);
    let th = f.of_ss(a1);
    let (sa, ca) = sin_cos_deg(at2(f.w, f.h));
    let dl = f.w.hypot(f.h);
    let lm = dl - dl * 51965.0 / PCT;
    let (xm, ym) = (ca * lm / 2.0, sa * lm / 2.0);
    let (dxam, dyam) = (sa * th / 2.0, ca * th / 2.0);
    let (xa, ya) = (xm - dxam, ym + dyam);
    let (xb, yb) = (xm + dxam, ym - dyam);
    let yc = div((f.hc() - xb) * f.h, f.w) + yb;
    let xd = f.w - xb;
    let xe = f.w - xa;
    let xfe = div((f.vc() - ya) * f.w, f.h);
    let xf = xe - xfe;
    let xl = xa + xfe;
    let (yg, yh, yi) = (f.h - ya, f.h - yb, f.h - yc);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (xa, ya),
        (xb, yb),
        (f.hc(), yc),
        (xd, yb),
        (xe, ya),
        (xf, f.vc()),
        (xe, yg),
        (xd, yh),
        (f.hc(), yi),
        (xb, yh),
        (xa, yg),
        (xl, f.vc()),
    ]);
    p.build()
}

fn math_divide(f: &Frame) -> Path {
    let a1 = pin(1000.0, f.adj("adj1"), 36745.0);
    let max3 = ((SPAN - a1) / 4.0).min(div(36745.0 * f.w, f.h));
    let a3 = pin(1000.0, f.adj("adj3"), max3);
    let a2 = pin(0.0, f.adj("adj2"), SPAN - 4.0 * a3 - a1);

    let dy1 = f.h * a1 / 200000.0;
    let yg = f.of_h(a2);
    let rad = f.of_h(a3);
    let dx1 = half_span(f.w);
    let (y3, y4) = (f.vc() - dy1, f.vc() + dy1);
    let y2 = y3 - (yg + rad);
    let y1 = y2 - rad;
    let y5 = f.h - y1;

    let mut p = PathBuilder::new();
    p.move_to(f.hc(), y1).arc_to(rad, rad, 270.0, 360.0).close();
    p.move_to(f.hc(), y5).arc_to(rad, rad, 90.0, 360.0).close();
    bar(&mut p, f.hc() - dx1, y3, f.hc() + dx1, y4);
    p.build()
}

/// Bar thickness and gap of the two-bar operators.
fn two_bars(f: &Frame, thick_max: f64, gap: &str) -> (f64, f64) {
    let a1 = pin(0.0, f.adj("adj1"), thick_max);
    let a_gap = pin(0.0, f.adj(gap), PCT - 2.0 * a1);
    (f.of_h(a1), f.h * a_gap / 200000.0)
}

fn math_equal(f: &Frame) -> Path {
    let (dy1, dy2) = two_bars(f, 36745.0, "adj2");
    let dx1 = half_span(f.w);
    let (x1, x2) = (f.hc() - dx1, f.hc() + dx1);
    let (y2, y3) = (f.vc() - dy2, f.vc() + dy2);
    let mut p = PathBuilder::new();
    bar(&mut p, x1, y2 - dy1, x2, y2);
    bar(&mut p, x1, y3, x2, y3 + dy1);
    p.build()
}

/// Equal sign crossed by a slanted bar; the three pieces overlap and fill
/// as one under the nonzero rule.
fn math_not_equal(f: &Frame) -> Path {
    let (dy1, dy2) = two_bars(f, 50000.0, "adj3");
    let cr_ang = pin(70.0, f.angle("adj2"), 110.0);
    let dx1 = half_span(f.w);
    let (x1, x8) = (f.hc() - dx1, f.hc() + dx1);
    let (y2, y3) = (f.vc() - dy2, f.vc() + dy2);

    // Horizontal lean of the slash between the center and the top edge.
    let (s, c) = sin_cos_deg(cr_ang - 90.0);
    let lean = f.hd2() * s / c;
    let len = lean.hypot(f.hd2());
    let half = div(len * dy1, f.hd2()) / 2.0;

    let mut p = PathBuilder::new();
    bar(&mut p, x1, y2 - dy1, x8, y2);
    bar(&mut p, x1, y3, x8, y3 + dy1);
    p.polygon(&[
        (f.hc() + lean - half, 0.0),
        (f.hc() + lean + half, 0.0),
        (f.hc() - lean + half, f.h),
        (f.hc() - lean - half, f.h),
    ]);
    p.build()
}

/// Tab size: a twentieth of the diagonal.
fn tab(f: &Frame) -> f64 {
    f.w.hypot(f.h) / 20.0
}

fn corner_tabs(f: &Frame) -> Path {
    let (dx, w, h) = (tab(f), f.w, f.h);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, 0.0), (dx, 0.0), (0.0, dx)])
        .polygon(&[(0.0, h - dx), (dx, h), (0.0, h)])
        .polygon(&[(w - dx, 0.0), (w, 0.0), (w, dx)])
        .polygon(&[(w, h - dx), (w, h), (w - dx, h)]);
    p.build()
}

fn square_tabs(f: &Frame) -> Path {
    let (dx, w, h) = (tab(f), f.w, f.h);
    let mut p = PathBuilder::new();
    bar(&mut p, 0.0, 0.0, dx, dx);
    bar(&mut p, 0.0, h - dx, dx, h);
    bar(&mut p, w - dx, 0.0, w, dx);
    bar(&mut p, w - dx, h - dx, w, h);
    p.build()
}

fn plaque_tabs(f: &Frame) -> Path {
    let (dx, w, h) = (tab(f), f.w, f.h);
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .line_to(dx, 0.0)
        .arc_to(dx, dx, 0.0, 90.0)
        .close();
    p.move_to(0.0, h - dx)
        .arc_to(dx, dx, 270.0, 90.0)
        .line_to(0.0, h)
        .close();
    p.move_to(w, dx)
        .arc_to(dx, dx, 90.0, 90.0)
        .line_to(w, 0.0)
        .close();
    p.move_to(w - dx, h)
        .arc_to(dx, dx, 180.0, 90.0)
        .line_to(w, h)
        .close();
    p.build()
}

fn chart_x(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.append(rect(f));
    p.segment(0.0, 0.0, f.w, f.h).segment(0.0, f.h, f.w, 0.0);
    p.build()
}

fn chart_star(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.append(chart_x(f));
    p.segment(f.hc(), 0.0, f.hc(), f.h);
    p.build()
}

fn chart_plus(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.append(rect(f));
    p.segment(f.hc(), 0.0, f.hc(), f.h)
        .segment(0.0, f.vc(), f.w, f.vc());
    p.build()
}
