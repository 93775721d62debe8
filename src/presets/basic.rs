//! Plain outlines: polygons, ellipses, pies and arcs, frames, and the
//! pictorial shapes (heart, sun, moon, smiley, lightning bolt, can, cube).

use super::{Frame, PCT, Preset, at2, div, pin, point_at, sweep_between};
use crate::geom::{Path, PathBuilder};

pub(super) const RECT: Preset = preset!(rect);
pub(super) const TRIANGLE: Preset = preset!(triangle, "adj" = 50000);
pub(super) const RT_TRIANGLE: Preset = preset!(rt_triangle);
pub(super) const DIAMOND: Preset = preset!(diamond);
pub(super) const PARALLELOGRAM: Preset = preset!(parallelogram, "adj" = 25000);
pub(super) const TRAPEZOID: Preset = preset!(trapezoid, "adj" = 25000);
pub(super) const NON_ISOSCELES_TRAPEZOID: Preset =
    preset!(non_isosceles_trapezoid, "adj1" = 25000, "adj2" = 25000);
pub(super) const PENTAGON: Preset = preset!(pentagon, "hf" = 105146, "vf" = 110557);
pub(super) const HEXAGON: Preset = preset!(hexagon, "adj" = 25000, "vf" = 115470);
pub(super) const HEPTAGON: Preset = preset!(heptagon, "hf" = 102572, "vf" = 105210);
pub(super) const OCTAGON: Preset = preset!(octagon, "adj" = 29289);
pub(super) const DECAGON: Preset = preset!(decagon, "vf" = 105146);
pub(super) const DODECAGON: Preset = preset!(dodecagon);
pub(super) const PLUS: Preset = preset!(plus, "adj" = 25000);
pub(super) const ELLIPSE: Preset = preset!(ellipse);
pub(super) const TEARDROP: Preset = preset!(teardrop, "adj" = 100000);
pub(super) const HOME_PLATE: Preset = preset!(home_plate, "adj" = 50000);
pub(super) const CHEVRON: Preset = preset!(chevron, "adj" = 50000);
pub(super) const PIE_WEDGE: Preset = preset!(pie_wedge);
pub(super) const PIE: Preset = preset!(pie, "adj1" = 0, "adj2" = 16200000);
pub(super) const BLOCK_ARC: Preset =
    preset!(block_arc, "adj1" = 10800000, "adj2" = 0, "adj3" = 25000);
pub(super) const DONUT: Preset = preset!(donut, "adj" = 25000);
pub(super) const NO_SMOKING: Preset = preset!(no_smoking, "adj" = 18750);
pub(super) const CHORD: Preset = preset!(chord, "adj1" = 2700000, "adj2" = 16200000);
pub(super) const ARC: Preset = preset!(arc, "adj1" = 16200000, "adj2" = 0);
pub(super) const FRAME: Preset = preset!(frame, "adj1" = 12500);
pub(super) const HALF_FRAME: Preset = preset!(half_frame, "adj1" = 33333, "adj2" = 33333);
pub(super) const CORNER: Preset = preset!(corner, "adj1" = 50000, "adj2" = 50000);
pub(super) const DIAG_STRIPE: Preset = preset!(diag_stripe, "adj" = 50000);
pub(super) const BEVEL: Preset = preset!(bevel, "adj" = 12500);
pub(super) const FOLDED_CORNER: Preset = preset!(folded_corner, "adj" = 16667);
pub(super) const CAN: Preset = preset!(can, "adj" = 25000);
pub(super) const CUBE: Preset = preset!(cube, "adj" = 25000);
pub(super) const SMILEY_FACE: Preset = preset!(smiley_face, "adj" = 4653);
pub(super) const HEART: Preset = preset!(heart);
pub(super) const LIGHTNING_BOLT: Preset = preset!(lightning_bolt);
pub(super) const SUN: Preset = preset!(sun, "adj" = 25000);
pub(super) const MOON: Preset = preset!(moon, "adj" = 50000);

/// Points given as fractions of a local square space.
const SPACE: f64 = 21600.0;

pub(crate) fn rect(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, 0.0), (f.w, 0.0), (f.w, f.h), (0.0, f.h)]);
    p.build()
}

fn triangle(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), PCT);
    let x2 = f.of_w(a);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, f.h), (x2, 0.0), (f.w, f.h)]);
    p.build()
}

fn rt_triangle(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, f.h), (0.0, 0.0), (f.w, f.h)]);
    p.build()
}

pub(crate) fn diamond(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, f.vc()),
        (f.hc(), 0.0),
        (f.w, f.vc()),
        (f.hc(), f.h),
    ]);
    p.build()
}

fn parallelogram(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), f.max_adj(f.w));
    let x2 = f.of_ss(a);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, f.h), (x2, 0.0), (f.w, 0.0), (f.w - x2, f.h)]);
    p.build()
}

fn trapezoid(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), f.max_adj(f.wd2()));
    let x2 = f.of_ss(a);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, f.h), (x2, 0.0), (f.w - x2, 0.0), (f.w, f.h)]);
    p.build()
}

fn non_isosceles_trapezoid(f: &Frame) -> Path {
    let max = f.max_adj(f.wd2());
    let x2 = f.of_ss(pin(0.0, f.adj("adj1"), max));
    let x3 = f.w - f.of_ss(pin(0.0, f.adj("adj2"), max));
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, f.h), (x2, 0.0), (x3, 0.0), (f.w, f.h)]);
    p.build()
}

/// `(cos, sin)` of a DrawingML angle given in degrees.
fn cs(deg: f64) -> (f64, f64) {
    let (s, c) = crate::geom::arc::sin_cos_deg(deg);
    (c, s)
}

fn pentagon(f: &Frame) -> Path {
    let swd2 = f.wd2() * f.adj("hf") / PCT;
    let shd2 = f.hd2() * f.adj("vf") / PCT;
    let svc = f.vc() * f.adj("vf") / PCT;
    let (c18, s18) = cs(18.0);
    let (c306, s306) = cs(306.0);
    let (dx1, dy1) = (swd2 * c18, shd2 * s18);
    let (dx2, dy2) = (swd2 * c306, shd2 * s306);
    let hc = f.hc();
    let (y1, y2) = (svc - dy1, svc - dy2);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (hc - dx1, y1),
        (hc, 0.0),
        (hc + dx1, y1),
        (hc + dx2, y2),
        (hc - dx2, y2),
    ]);
    p.build()
}

fn hexagon(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), f.max_adj(f.wd2()));
    let shd2 = f.hd2() * f.adj("vf") / PCT;
    let x1 = f.of_ss(a);
    let x2 = f.w - x1;
    let dy1 = shd2 * cs(60.0).1;
    let (y1, y2) = (f.vc() - dy1, f.vc() + dy1);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, f.vc()),
        (x1, y1),
        (x2, y1),
        (f.w, f.vc()),
        (x2, y2),
        (x1, y2),
    ]);
    p.build()
}

fn heptagon(f: &Frame) -> Path {
    let swd2 = f.wd2() * f.adj("hf") / PCT;
    let shd2 = f.hd2() * f.adj("vf") / PCT;
    let svc = f.vc() * f.adj("vf") / PCT;
    let dx1 = swd2 * 97493.0 / PCT;
    let dx2 = swd2 * 78183.0 / PCT;
    let dx3 = swd2 * 43388.0 / PCT;
    let y1 = svc - shd2 * 62349.0 / PCT;
    let y2 = svc + shd2 * 22252.0 / PCT;
    let y3 = svc + shd2 * 90097.0 / PCT;
    let hc = f.hc();
    let mut p = PathBuilder::new();
    p.polygon(&[
        (hc - dx1, y2),
        (hc - dx2, y1),
        (hc, 0.0),
        (hc + dx2, y1),
        (hc + dx1, y2),
        (hc + dx3, y3),
        (hc - dx3, y3),
    ]);
    p.build()
}

fn octagon(f: &Frame) -> Path {
    let x1 = f.of_ss(pin(0.0, f.adj("adj"), 50000.0));
    let (x2, y2) = (f.w - x1, f.h - x1);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, x1),
        (x1, 0.0),
        (x2, 0.0),
        (f.w, x1),
        (f.w, y2),
        (x2, f.h),
        (x1, f.h),
        (0.0, y2),
    ]);
    p.build()
}

fn decagon(f: &Frame) -> Path {
    let shd2 = f.hd2() * f.adj("vf") / PCT;
    let (c36, s36) = cs(36.0);
    let (c72, s72) = cs(72.0);
    let (hc, vc) = (f.hc(), f.vc());
    let (dx1, dx2) = (f.wd2() * c36, f.wd2() * c72);
    let (dy1, dy2) = (shd2 * s72, shd2 * s36);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, vc),
        (hc - dx1, vc - dy2),
        (hc - dx2, vc - dy1),
        (hc + dx2, vc - dy1),
        (hc + dx1, vc - dy2),
        (f.w, vc),
        (hc + dx1, vc + dy2),
        (hc + dx2, vc + dy1),
        (hc - dx2, vc + dy1),
        (hc - dx1, vc + dy2),
    ]);
    p.build()
}

fn dodecagon(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, SPACE, SPACE);
    let (a, b, c, d) = (2894.0, 7906.0, 13694.0, 18706.0);
    p.polygon(&[
        (0.0, b),
        (a, a),
        (b, 0.0),
        (c, 0.0),
        (d, a),
        (SPACE, b),
        (SPACE, c),
        (d, d),
        (c, SPACE),
        (b, SPACE),
        (a, d),
        (0.0, c),
    ]);
    p.build()
}

fn plus(f: &Frame) -> Path {
    let x1 = f.of_ss(pin(0.0, f.adj("adj"), 50000.0));
    let (x2, y2) = (f.w - x1, f.h - x1);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, x1),
        (x1, x1),
        (x1, 0.0),
        (x2, 0.0),
        (x2, x1),
        (f.w, x1),
        (f.w, y2),
        (x2, y2),
        (x2, f.h),
        (x1, f.h),
        (x1, y2),
        (0.0, y2),
    ]);
    p.build()
}

pub(crate) fn ellipse(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.ellipse(f.hc(), f.vc(), f.wd2(), f.hd2());
    p.build()
}

fn teardrop(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), 200000.0);
    let r2 = std::f64::consts::SQRT_2;
    let (wd2, hd2, hc, vc) = (f.wd2(), f.hd2(), f.hc(), f.vc());
    let sw = r2 * wd2 * a / PCT;
    let sh = r2 * hd2 * a / PCT;
    let (c45, s45) = cs(45.0);
    let x1 = hc + sw * c45;
    let y1 = vc - sh * s45;
    let x2 = (hc + x1) / 2.0;
    let y2 = (vc + y1) / 2.0;
    let mut p = PathBuilder::new();
    p.move_to(0.0, vc)
        .arc_to(wd2, hd2, 180.0, 90.0)
        .quad_to(x2, 0.0, x1, y1)
        .quad_to(f.w, y2, f.w, vc)
        .arc_to(wd2, hd2, 0.0, 90.0)
        .arc_to(wd2, hd2, 90.0, 90.0)
        .close();
    p.build()
}

fn home_plate(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), f.max_adj(f.w));
    let x1 = f.w - f.of_ss(a);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, 0.0),
        (x1, 0.0),
        (f.w, f.vc()),
        (x1, f.h),
        (0.0, f.h),
    ]);
    p.build()
}

fn chevron(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), f.max_adj(f.w));
    let x1 = f.of_ss(a);
    let x2 = f.w - x1;
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, 0.0),
        (x2, 0.0),
        (f.w, f.vc()),
        (x2, f.h),
        (0.0, f.h),
        (x1, f.vc()),
    ]);
    p.build()
}

fn pie_wedge(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.move_to(0.0, f.h)
        .arc_to(f.w, f.h, 180.0, 90.0)
        .line_to(f.w, f.h)
        .close();
    p.build()
}

/// Start angle and clockwise sweep from two angle guides.
fn angle_pair(f: &Frame, g1: &str, g2: &str) -> (f64, f64) {
    let st = pin(0.0, f.angle(g1), 359.99998);
    let en = pin(0.0, f.angle(g2), 359.99998);
    (st, sweep_between(st, en))
}

fn pie(f: &Frame) -> Path {
    let (st, sw) = angle_pair(f, "adj1", "adj2");
    let (hc, vc, wd2, hd2) = (f.hc(), f.vc(), f.wd2(), f.hd2());
    let (x1, y1) = point_at(hc, vc, wd2, hd2, st);
    let mut p = PathBuilder::new();
    p.move_to(x1, y1)
        .arc_to(wd2, hd2, st, sw)
        .line_to(hc, vc)
        .close();
    p.build()
}

fn chord(f: &Frame) -> Path {
    let (st, sw) = angle_pair(f, "adj1", "adj2");
    let (x1, y1) = point_at(f.hc(), f.vc(), f.wd2(), f.hd2(), st);
    let mut p = PathBuilder::new();
    p.move_to(x1, y1).arc_to(f.wd2(), f.hd2(), st, sw).close();
    p.build()
}

/// Open elliptical arc; the only basic shape without a closed outline.
fn arc(f: &Frame) -> Path {
    let (st, sw) = angle_pair(f, "adj1", "adj2");
    let (x1, y1) = point_at(f.hc(), f.vc(), f.wd2(), f.hd2(), st);
    let mut p = PathBuilder::new();
    p.move_to(x1, y1).arc_to(f.wd2(), f.hd2(), st, sw);
    p.build()
}

fn block_arc(f: &Frame) -> Path {
    let (st, sw) = angle_pair(f, "adj1", "adj2");
    let dr = f.of_ss(pin(0.0, f.adj("adj3"), 50000.0));
    let (hc, vc, wd2, hd2) = (f.hc(), f.vc(), f.wd2(), f.hd2());
    let (iwd2, ihd2) = (wd2 - dr, hd2 - dr);
    let en = st + sw;
    let (x1, y1) = point_at(hc, vc, wd2, hd2, st);
    let (x2, y2) = point_at(hc, vc, iwd2, ihd2, en);
    let mut p = PathBuilder::new();
    p.move_to(x1, y1)
        .arc_to(wd2, hd2, st, sw)
        .line_to(x2, y2)
        .arc_to(iwd2, ihd2, en, -sw)
        .close();
    p.build()
}

fn donut(f: &Frame) -> Path {
    let dr = f.of_ss(pin(0.0, f.adj("adj"), 50000.0));
    let (vc, wd2, hd2) = (f.vc(), f.wd2(), f.hd2());
    let mut p = PathBuilder::new();
    p.move_to(0.0, vc).arc_to(wd2, hd2, 180.0, 360.0).close();
    p.move_to(dr, vc)
        .arc_to(wd2 - dr, hd2 - dr, 180.0, -360.0)
        .close();
    p.build()
}

fn no_smoking(f: &Frame) -> Path {
    let dr = f.of_ss(pin(0.0, f.adj("adj"), 50000.0));
    let (hc, vc, wd2, hd2) = (f.hc(), f.vc(), f.wd2(), f.hd2());
    let (iwd2, ihd2) = (wd2 - dr, hd2 - dr);

    // Polar radius of the inner ellipse along the diagonal.
    let ang = at2(f.w, f.h);
    let (ca, sa) = cs(ang);
    let m = (ihd2 * ca).hypot(iwd2 * sa);
    let n = div(iwd2 * ihd2, m);
    let dang = at2(n, dr / 2.0);
    let sw = -180.0 + 2.0 * dang;
    let st1 = ang - dang;
    let st2 = st1 - 180.0;

    let (x1, y1) = point_at(hc, vc, iwd2, ihd2, st1);
    let (x2, y2) = point_at(hc, vc, iwd2, ihd2, st2);

    let mut p = PathBuilder::new();
    p.move_to(0.0, vc).arc_to(wd2, hd2, 180.0, 360.0).close();
    p.move_to(x1, y1).arc_to(iwd2, ihd2, st1, sw).close();
    p.move_to(x2, y2).arc_to(iwd2, ihd2, st2, sw).close();
    p.build()
}

fn frame(f: &Frame) -> Path {
    let x1 = f.of_ss(pin(0.0, f.adj("adj1"), 50000.0));
    let (x4, y4) = (f.w - x1, f.h - x1);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, 0.0), (f.w, 0.0), (f.w, f.h), (0.0, f.h)]);
    p.polygon(&[(x1, x1), (x1, y4), (x4, y4), (x4, x1)]);
    p.build()
}

fn half_frame(f: &Frame) -> Path {
    let a2 = pin(0.0, f.adj("adj2"), f.max_adj(f.w));
    let x1 = f.of_ss(a2);
    let g1 = div(f.h * x1, f.w);
    let a1 = pin(0.0, f.adj("adj1"), f.max_adj(f.h - g1));
    let y1 = f.of_ss(a1);
    let x2 = f.w - div(y1 * f.w, f.h);
    let y2 = f.h - div(x1 * f.h, f.w);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, 0.0),
        (f.w, 0.0),
        (x2, y1),
        (x1, y1),
        (x1, y2),
        (0.0, f.h),
    ]);
    p.build()
}

fn corner(f: &Frame) -> Path {
    let a1 = pin(0.0, f.adj("adj1"), f.max_adj(f.h));
    let a2 = pin(0.0, f.adj("adj2"), f.max_adj(f.w));
    let x1 = f.of_ss(a2);
    let y1 = f.h - f.of_ss(a1);
    let mut p = PathBuilder::new();
    p.polygon(&[
        (0.0, 0.0),
        (x1, 0.0),
        (x1, y1),
        (f.w, y1),
        (f.w, f.h),
        (0.0, f.h),
    ]);
    p.build()
}

fn diag_stripe(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), PCT);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, f.of_h(a)), (f.of_w(a), 0.0), (f.w, 0.0), (0.0, f.h)]);
    p.build()
}

fn bevel(f: &Frame) -> Path {
    let x1 = f.of_ss(pin(0.0, f.adj("adj"), 50000.0));
    let (x2, y2) = (f.w - x1, f.h - x1);
    let (w, h) = (f.w, f.h);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)]);
    p.polygon(&[(x1, x1), (x2, x1), (x2, y2), (x1, y2)]);
    p.segment(0.0, 0.0, x1, x1);
    p.segment(0.0, h, x1, y2);
    p.segment(w, 0.0, x2, x1);
    p.segment(w, h, x2, y2);
    p.build()
}

fn folded_corner(f: &Frame) -> Path {
    let dy2 = f.of_ss(pin(0.0, f.adj("adj"), 50000.0));
    let dy1 = dy2 / 5.0;
    let x1 = f.w - dy2;
    let x2 = x1 + dy1;
    let y2 = f.h - dy2;
    let y1 = y2 + dy1;
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, 0.0), (f.w, 0.0), (f.w, y2), (x1, f.h), (0.0, f.h)]);
    p.polygon(&[(x1, f.h), (x2, y1), (f.w, y2)]);
    p.build()
}

fn can(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), f.max_adj(f.h) / 2.0);
    let y1 = f.of_ss(a) / 2.0;
    let y3 = f.h - y1;
    let wd2 = f.wd2();
    let mut p = PathBuilder::new();
    p.move_to(0.0, y1)
        .arc_to(wd2, y1, 180.0, -180.0)
        .line_to(f.w, y3)
        .arc_to(wd2, y1, 0.0, 180.0)
        .close();
    p.move_to(0.0, y1)
        .arc_to(wd2, y1, 180.0, 180.0)
        .arc_to(wd2, y1, 0.0, 180.0)
        .close();
    p.build()
}

fn cube(f: &Frame) -> Path {
    let y1 = f.of_ss(pin(0.0, f.adj("adj"), PCT));
    let y4 = f.h - y1;
    let x4 = f.w - y1;
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, y1), (x4, y1), (x4, f.h), (0.0, f.h)]);
    p.polygon(&[(0.0, y1), (y1, 0.0), (f.w, 0.0), (x4, y1)]);
    p.polygon(&[(x4, f.h), (x4, y1), (f.w, 0.0), (f.w, y4)]);
    p.build()
}

fn smiley_face(f: &Frame) -> Path {
    let a = pin(-4653.0, f.adj("adj"), 4653.0);
    let (w, h) = (f.w, f.h);
    let x1 = w * 4969.0 / 21699.0;
    let x2 = w * 6215.0 / SPACE;
    let x3 = w * 13135.0 / SPACE;
    let x4 = w * 16640.0 / SPACE;
    let y1 = h * 7570.0 / SPACE;
    let y3 = h * 16515.0 / SPACE;
    let dy2 = f.of_h(a);
    let y2 = y3 - dy2;
    let y4 = y3 + dy2;
    let y5 = y4 + h * a / 50000.0;
    let wr = w * 1125.0 / SPACE;
    let hr = h * 1125.0 / SPACE;

    let mut p = PathBuilder::new();
    p.ellipse(f.hc(), f.vc(), f.wd2(), f.hd2());
    p.ellipse(x2, y1, wr, hr);
    p.ellipse(x3, y1, wr, hr);
    p.move_to(x1, y2).quad_to(f.hc(), y5, x4, y2);
    p.build()
}

fn heart(f: &Frame) -> Path {
    let (hc, h) = (f.hc(), f.h);
    let dx1 = f.w * 49.0 / 48.0;
    let dx2 = f.w * 10.0 / 48.0;
    let hd4 = h / 4.0;
    let y1 = -h / 3.0;
    let mut p = PathBuilder::new();
    p.move_to(hc, hd4)
        .cubic_to(hc + dx2, y1, hc + dx1, hd4, hc, h)
        .cubic_to(hc - dx1, hd4, hc - dx2, y1, hc, hd4)
        .close();
    p.build()
}

fn lightning_bolt(f: &Frame) -> Path {
    let mut p = PathBuilder::in_space(f.w, f.h, SPACE, SPACE);
    p.polygon(&[
        (8472.0, 0.0),
        (12860.0, 6080.0),
        (11050.0, 6797.0),
        (16577.0, 12007.0),
        (14767.0, 12877.0),
        (21600.0, 21600.0),
        (10012.0, 14915.0),
        (12222.0, 13987.0),
        (5022.0, 9705.0),
        (7602.0, 8382.0),
        (0.0, 3890.0),
    ]);
    p.build()
}

fn sun(f: &Frame) -> Path {
    let a = pin(12500.0, f.adj("adj"), 46875.0);
    let g0 = 50000.0 - a;
    let g1 = g0 * 30274.0 / 32768.0;
    let g2 = g0 * 12540.0 / 32768.0;
    let g5 = 50000.0 - g1;
    let g6 = 50000.0 - g2;
    let g10 = g5 * 3.0 / 4.0;
    let g11 = g6 * 3.0 / 4.0;
    let g12 = g10 + 3662.0;
    let g13 = g11 + 3662.0;
    let g14 = g11 + 12500.0;
    let g15 = PCT - g10;
    let g16 = PCT - g12;
    let g17 = PCT - g13;
    let g18 = PCT - g14;

    let x = |g: f64| f.of_w(g);
    let y = |g: f64| f.of_h(g);
    let (w, h, hc, vc) = (f.w, f.h, f.hc(), f.vc());
    let ox1 = w * 18436.0 / SPACE;
    let oy1 = h * 3163.0 / SPACE;
    let ox2 = w * 3163.0 / SPACE;
    let oy2 = h * 18436.0 / SPACE;

    let mut p = PathBuilder::new();
    p.polygon(&[(w, vc), (x(g15), y(g18)), (x(g15), y(g14))]);
    p.polygon(&[(ox1, oy1), (x(g16), y(g17)), (x(g13), y(g12))]);
    p.polygon(&[(hc, 0.0), (x(g18), y(g10)), (x(g14), y(g10))]);
    p.polygon(&[(ox2, oy1), (x(g17), y(g12)), (x(g12), y(g17))]);
    p.polygon(&[(0.0, vc), (x(g10), y(g14)), (x(g10), y(g18))]);
    p.polygon(&[(ox2, oy2), (x(g12), y(g13)), (x(g17), y(g16))]);
    p.polygon(&[(hc, h), (x(g14), y(g15)), (x(g18), y(g15))]);
    p.polygon(&[(ox1, oy2), (x(g13), y(g16)), (x(g16), y(g13))]);
    p.ellipse(hc, vc, x(g0), y(g0));
    p.build()
}

fn moon(f: &Frame) -> Path {
    let a = pin(0.0, f.adj("adj"), 87500.0);
    let inner = f.w - f.of_w(a);
    let hd2 = f.hd2();
    let mut p = PathBuilder::new();
    p.move_to(f.w, f.h)
        .arc_to(f.w, hd2, 90.0, 180.0)
        .arc_to(inner, hd2, 270.0, -180.0)
        .close();
    p.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guides::RawGuide;
    use crate::presets::{ShapeKind, compute};
    use crate::types::ScaleFactor;
    use glam::dvec2;

    fn build(kind: ShapeKind, w: f64, h: f64, raw: &[RawGuide]) -> Path {
        let guides = crate::guides::resolve(kind, raw, ScaleFactor::ONE);
        compute(kind, w, h, &guides)
    }

    fn near(a: glam::DVec2, x: f64, y: f64) -> bool {
        (a - dvec2(x, y)).length() < 1e-9
    }

    #[test]
    fn rect_snapshot() {
        let path = build(ShapeKind::Rect, 100.0, 50.0, &[]);
        insta::assert_snapshot!(path.to_path_string(), @"M0,0 L100,0 L100,50 L0,50 Z");
    }

    #[test]
    fn chevron_snapshot() {
        let path = build(ShapeKind::Chevron, 200.0, 100.0, &[RawGuide::val("adj", 50000)]);
        insta::assert_snapshot!(path.to_path_string(), @"M0,0 L150,0 L200,50 L150,100 L0,100 L50,50 Z");
    }

    #[test]
    fn diamond_and_triangle_snapshots() {
        let diamond = build(ShapeKind::Diamond, 80.0, 40.0, &[]);
        insta::assert_snapshot!(diamond.to_path_string(), @"M0,20 L40,0 L80,20 L40,40 Z");
        let triangle = build(ShapeKind::Triangle, 80.0, 40.0, &[]);
        insta::assert_snapshot!(triangle.to_path_string(), @"M0,40 L40,0 L80,40 Z");
    }

    #[test]
    fn chevron_guide_is_pinned_to_width() {
        // A tall chevron cannot push its point past the right edge.
        let path = build(ShapeKind::Chevron, 50.0, 200.0, &[RawGuide::val("adj", 400000)]);
        assert!(path.vertices().iter().all(|p| p.x >= 0.0 && p.x <= 50.0));
    }

    #[test]
    fn triangle_apex_follows_guide() {
        let path = build(ShapeKind::Triangle, 100.0, 100.0, &[RawGuide::val("adj", 0)]);
        assert!(near(path.vertices()[1], 0.0, 0.0));
    }

    #[test]
    fn ellipse_is_two_half_arcs() {
        let path = build(ShapeKind::Ellipse, 100.0, 50.0, &[]);
        assert_eq!(
            path.to_path_string(),
            "M0,25 A50,25 0 0 1 100,25 A50,25 0 0 1 0,25 Z"
        );
    }

    #[test]
    fn pie_default_is_three_quarters() {
        let path = build(ShapeKind::Pie, 100.0, 100.0, &[]);
        let v = path.vertices();
        assert!(near(v[0], 100.0, 50.0));
        assert!(near(v[1], 50.0, 0.0));
        assert!(near(v[2], 50.0, 50.0));
        assert!(path.is_closed());
    }

    #[test]
    fn equal_pie_angles_draw_a_full_turn() {
        let raw = [RawGuide::val("adj1", 0), RawGuide::val("adj2", 0)];
        let path = build(ShapeKind::Pie, 100.0, 100.0, &raw);
        let crate::geom::PathCommand::ArcTo { start, end, .. } = path.commands()[1] else {
            panic!("expected an arc");
        };
        assert_eq!(end - start, 360.0);
    }

    #[test]
    fn arc_is_open() {
        let path = build(ShapeKind::Arc, 100.0, 100.0, &[]);
        assert!(path.has_open_subpath());
        assert!(near(path.start_point().unwrap(), 50.0, 0.0));
        assert!(near(path.end_point().unwrap(), 100.0, 50.0));
    }

    #[test]
    fn block_arc_inner_edge_runs_back() {
        let path = build(ShapeKind::BlockArc, 100.0, 100.0, &[]);
        let v = path.vertices();
        // Outer half from 180 to 0, then inner radius 25 from 0 back to 180.
        assert!(near(v[0], 0.0, 50.0));
        assert!(near(v[1], 100.0, 50.0));
        assert!(near(v[2], 75.0, 50.0));
        assert!(near(v[3], 25.0, 50.0));
    }

    #[test]
    fn donut_has_two_rings() {
        let path = build(ShapeKind::Donut, 100.0, 100.0, &[]);
        assert_eq!(path.subpath_count(), 2);
        assert!(path.is_closed());
    }

    #[test]
    fn no_smoking_bar_stays_inside() {
        let path = build(ShapeKind::NoSmoking, 100.0, 80.0, &[]);
        assert_eq!(path.subpath_count(), 3);
        for p in path.vertices() {
            assert!(p.x >= -1e-9 && p.x <= 100.0 + 1e-9 && p.y >= -1e-9 && p.y <= 80.0 + 1e-9);
        }
    }

    #[test]
    fn octagon_cuts_corners() {
        let path = build(ShapeKind::Octagon, 100.0, 100.0, &[RawGuide::val("adj", 25000)]);
        assert_eq!(path.vertices().len(), 8);
        assert!(near(path.vertices()[0], 0.0, 25.0));
    }

    #[test]
    fn regular_polygons_touch_the_top_edge() {
        for kind in [ShapeKind::Pentagon, ShapeKind::Heptagon] {
            let path = build(kind, 100.0, 100.0, &[]);
            assert!(path.vertices().iter().any(|p| near(*p, 50.0, 0.0)), "{kind}");
        }
    }

    #[test]
    fn moon_inner_edge_tracks_guide() {
        let path = build(ShapeKind::Moon, 100.0, 100.0, &[RawGuide::val("adj", 50000)]);
        assert!(near(path.vertices()[1], 100.0, 0.0));
        assert!(near(path.vertices()[2], 100.0, 100.0));
    }

    #[test]
    fn lightning_bolt_maps_local_space() {
        let path = build(ShapeKind::LightningBolt, 216.0, 108.0, &[]);
        assert!(near(path.vertices()[0], 84.72, 0.0));
        assert!(near(path.vertices()[5], 216.0, 108.0));
    }
}
