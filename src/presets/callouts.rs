//! Callouts: speech-bubble wedges, clouds, and boxes with leader lines.
//!
//! Wedge and leader tips are placed where their guides say, inside the box
//! or not.

use super::{Frame, Preset, at2, div};
use crate::geom::arc::sin_cos_deg;
use crate::geom::{Path, PathBuilder};

pub(super) const WEDGE_RECT_CALLOUT: Preset =
    preset!(wedge_rect_callout, "adj1" = -20833, "adj2" = 62500);
pub(super) const WEDGE_ROUND_RECT_CALLOUT: Preset = preset!(
    wedge_round_rect_callout,
    "adj1" = -20833,
    "adj2" = 62500,
    "adj3" = 16667
);
pub(super) const WEDGE_ELLIPSE_CALLOUT: Preset =
    preset!(wedge_ellipse_callout, "adj1" = -20833, "adj2" = 62500);
pub(super) const CLOUD: Preset = preset!(cloud);
pub(super) const CLOUD_CALLOUT: Preset = preset!(cloud_callout, "adj1" = -20833, "adj2" = 62500);
pub(super) const CALLOUT1: Preset = preset!(
    callout1,
    "adj1" = 18750,
    "adj2" = -8333,
    "adj3" = 112500,
    "adj4" = -38333
);
pub(super) const CALLOUT2: Preset = preset!(
    callout2,
    "adj1" = 18750,
    "adj2" = -8333,
    "adj3" = 18750,
    "adj4" = -16667,
    "adj5" = 112500,
    "adj6" = -46667
);
pub(super) const CALLOUT3: Preset = preset!(
    callout3,
    "adj1" = 18750,
    "adj2" = -8333,
    "adj3" = 18750,
    "adj4" = -16667,
    "adj5" = 100000,
    "adj6" = -16667,
    "adj7" = 112963,
    "adj8" = -8333
);
pub(super) const ACCENT_CALLOUT1: Preset = preset!(
    accent_callout1,
    "adj1" = 18750,
    "adj2" = -8333,
    "adj3" = 112500,
    "adj4" = -38333
);
pub(super) const ACCENT_CALLOUT2: Preset = preset!(
    accent_callout2,
    "adj1" = 18750,
    "adj2" = -8333,
    "adj3" = 18750,
    "adj4" = -16667,
    "adj5" = 112500,
    "adj6" = -46667
);
pub(super) const ACCENT_CALLOUT3: Preset = preset!(
    accent_callout3,
    "adj1" = 18750,
    "adj2" = -8333,
    "adj3" = 18750,
    "adj4" = -16667,
    "adj5" = 100000,
    "adj6" = -16667,
    "adj7" = 112963,
    "adj8" = -8333
);

/// DrawingML `?: x y z`.
fn when_pos(x: f64, y: f64, z: f64) -> f64 {
    if x > 0.0 { y } else { z }
}

/// Where a wedge callout leaves each side of its box and bends toward the tip.
struct Wedge {
    /// Wedge base along the top and bottom edges.
    x1: f64,
    x2: f64,
    /// Wedge base along the left and right edges.
    y1: f64,
    y2: f64,
    /// Where each side bends toward: the tip on the chosen side, the base
    /// point everywhere else.
    left: (f64, f64),
    top: (f64, f64),
    right: (f64, f64),
    bottom: (f64, f64),
}

impl Wedge {
    fn new(f: &Frame) -> Self {
        let dx_pos = f.of_w(f.adj("adj1"));
        let dy_pos = f.of_h(f.adj("adj2"));
        let x = f.hc() + dx_pos;
        let y = f.vc() + dy_pos;
        // Compare the tip offset in a square-normalized box.
        let dz = div(dx_pos * f.h, f.w).abs() - dy_pos.abs();

        let x1 = f.w * when_pos(dx_pos, 7.0, 2.0) / 12.0;
        let x2 = f.w * when_pos(dx_pos, 10.0, 5.0) / 12.0;
        let y1 = f.h * when_pos(dy_pos, 7.0, 2.0) / 12.0;
        let y2 = f.h * when_pos(dy_pos, 10.0, 5.0) / 12.0;

        let left = (
            when_pos(dz, when_pos(dx_pos, 0.0, x), 0.0),
            when_pos(dz, when_pos(dx_pos, y1, y), y1),
        );
        let top = (
            when_pos(dz, x1, when_pos(dy_pos, x1, x)),
            when_pos(dz, 0.0, when_pos(dy_pos, 0.0, y)),
        );
        let right = (
            when_pos(dz, when_pos(dx_pos, x, f.w), f.w),
            when_pos(dz, when_pos(dx_pos, y, y1), y1),
        );
        let bottom = (
            when_pos(dz, x1, when_pos(dy_pos, x, x1)),
            when_pos(dz, f.h, when_pos(dy_pos, y, f.h)),
        );
        Wedge {
            x1,
            x2,
            y1,
            y2,
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box outline with the wedge spliced into one side; corners are rounded
    /// with radius `u` when it is positive.
    fn outline(&self, w: f64, h: f64, u: f64) -> Path {
        let round = u > 0.0;
        let mut p = PathBuilder::new();

        p.move_to(0.0, if round { u } else { 0.0 });
        if round {
            p.arc_to(u, u, 180.0, 90.0);
        }
        p.line_to(self.x1, 0.0)
            .line_to(self.top.0, self.top.1)
            .line_to(self.x2, 0.0);

        if round {
            p.line_to(w - u, 0.0).arc_to(u, u, 270.0, 90.0);
        } else {
            p.line_to(w, 0.0);
        }
        p.line_to(w, self.y1)
            .line_to(self.right.0, self.right.1)
            .line_to(w, self.y2);

        if round {
            p.line_to(w, h - u).arc_to(u, u, 0.0, 90.0);
        } else {
            p.line_to(w, h);
        }
        p.line_to(self.x2, h)
            .line_to(self.bottom.0, self.bottom.1)
            .line_to(self.x1, h);

        if round {
            p.line_to(u, h).arc_to(u, u, 90.0, 90.0);
        } else {
            p.line_to(0.0, h);
        }
        p.line_to(0.0, self.y2)
            .line_to(self.left.0, self.left.1)
            .line_to(0.0, self.y1)
            .close();
        p.build()
    }
}

fn wedge_rect_callout(f: &Frame) -> Path {
    Wedge::new(f).outline(f.w, f.h, 0.0)
}

fn wedge_round_rect_callout(f: &Frame) -> Path {
    let u = f.of_ss(f.adj("adj3"));
    Wedge::new(f).outline(f.w, f.h, u)
}

fn wedge_ellipse_callout(f: &Frame) -> Path {
    let dx_pos = f.of_w(f.adj("adj1"));
    let dy_pos = f.of_h(f.adj("adj2"));
    let (hc, vc, wd2, hd2) = (f.hc(), f.vc(), f.wd2(), f.hd2());
    let pang = at2(dx_pos * f.h, dy_pos * f.w);

    let on_ellipse = |deg: f64| {
        let (s, c) = sin_cos_deg(deg);
        (wd2 * c, hd2 * s)
    };
    let (dx1, dy1) = on_ellipse(pang + 11.0);
    let (dx2, dy2) = on_ellipse(pang - 11.0);
    let st = at2(dx1, dy1);
    let sw1 = at2(dx2, dy2) - st;
    let sw = if sw1 > 0.0 { sw1 } else { sw1 + 360.0 };

    let mut p = PathBuilder::new();
    p.move_to(hc + dx1, vc + dy1)
        .line_to(hc + dx_pos, vc + dy_pos)
        .line_to(hc + dx2, vc + dy2)
        .arc_to(wd2, hd2, st, sw)
        .close();
    p.build()
}

/// Cloud outline as `(wR, hR, stAng, swAng)` arcs in a 43200 square.
const CLOUD_ARCS: [(f64, f64, f64, f64); 11] = [
    (6753.0, 9190.0, -11429249.0, 7426832.0),
    (5333.0, 7267.0, -8646143.0, 5396714.0),
    (4365.0, 5945.0, -8748475.0, 5983381.0),
    (4857.0, 6595.0, -7859164.0, 7034504.0),
    (5333.0, 7273.0, -4722533.0, 6541615.0),
    (6775.0, 9220.0, -2776035.0, 7816140.0),
    (5785.0, 7867.0, 37501.0, 6842000.0),
    (6752.0, 9215.0, 1347096.0, 6910353.0),
    (7720.0, 10543.0, 3974558.0, 4542661.0),
    (4360.0, 5918.0, -16496525.0, 8804134.0),
    (4345.0, 5945.0, -14809710.0, 9151131.0),
];

const CLOUD_SPACE: f64 = 43200.0;

fn cloud(f: &Frame) -> Path {
    let deg = crate::defaults::ANGLE_UNITS_PER_DEGREE;
    let mut p = PathBuilder::in_space(f.w, f.h, CLOUD_SPACE, CLOUD_SPACE);
    p.move_to(3900.0, 14370.0);
    for (wr, hr, st, sw) in CLOUD_ARCS {
        p.arc_to(wr, hr, st / deg, sw / deg);
    }
    p.close();
    p.build()
}

/// Cloud plus three thought bubbles shrinking toward the tip.
fn cloud_callout(f: &Frame) -> Path {
    let dx_pos = f.of_w(f.adj("adj1"));
    let dy_pos = f.of_h(f.adj("adj2"));
    let (x_pos, y_pos) = (f.hc() + dx_pos, f.vc() + dy_pos);

    // Where the line from the center to the tip leaves the ellipse.
    let (s, c) = sin_cos_deg(at2(dx_pos, dy_pos));
    let (ht, wt) = (f.hd2() * c, f.wd2() * s);
    let (s, c) = sin_cos_deg(at2(ht, wt));
    let g6 = f.hc() + f.wd2() * c - x_pos;
    let g7 = f.vc() + f.hd2() * s - y_pos;
    let g8 = g6.hypot(g7);

    let unit = f.ss() / 21600.0;
    let step = (g8 - 6600.0 * unit) / 3.0;
    let (small, medium, large) = (600.0 * unit, 1200.0 * unit, 1800.0 * unit);
    let along = |d: f64| (x_pos + div(d * g6, g8), y_pos + div(d * g7, g8));
    let mid = along(step + large);
    let far = along(4800.0 * unit + step * 2.0);

    let mut path = cloud(f);
    let mut p = PathBuilder::new();
    for (cx, cy, r) in [(x_pos, y_pos, small), (mid.0, mid.1, medium), (far.0, far.1, large)] {
        p.ellipse(cx, cy, r, r);
    }
    path.extend(p.build());
    path
}

/// Leader polyline through `(adj[2k+1], adj[2k])` points, as shares of
/// `w` and `h`.
fn leader(f: &Frame, points: usize) -> Vec<(f64, f64)> {
    const NAMES: [&str; 8] = [
        "adj1", "adj2", "adj3", "adj4", "adj5", "adj6", "adj7", "adj8",
    ];
    NAMES[..points * 2]
        .chunks(2)
        .map(|pair| (f.of_w(f.adj(pair[1])), f.of_h(f.adj(pair[0]))))
        .collect()
}

fn boxed_callout(f: &Frame, points: usize, accent: bool) -> Path {
    let line = leader(f, points);
    let mut p = PathBuilder::new();
    p.polygon(&[(0.0, 0.0), (f.w, 0.0), (f.w, f.h), (0.0, f.h)]);
    if accent {
        let x1 = line[0].0;
        p.segment(x1, 0.0, x1, f.h);
    }
    p.polyline(&line);
    p.build()
}

fn callout1(f: &Frame) -> Path {
    boxed_callout(f, 2, false)
}

fn callout2(f: &Frame) -> Path {
    boxed_callout(f, 3, false)
}

fn callout3(f: &Frame) -> Path {
    boxed_callout(f, 4, false)
}

fn accent_callout1(f: &Frame) -> Path {
    boxed_callout(f, 2, true)
}

fn accent_callout2(f: &Frame) -> Path {
    boxed_callout(f, 3, true)
}

fn accent_callout3(f: &Frame) -> Path {
    boxed_callout(f, 4, true)
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

    fn has_point(path: &Path, x: f64, y: f64) -> bool {
        path.vertices()
            .iter()
            .any(|p| (p.x - x).abs() < 1e-9 && (p.y - y).abs() < 1e-9)
    }

    #[test]
    fn wedge_tip_follows_guides_outside_the_box() {
        let path = build(ShapeKind::WedgeRectCallout, 120.0, 60.0, &[]);
        // hc - 20.833% of w, vc + 62.5% of h
        assert!(has_point(&path, 60.0 - 24.9996, 30.0 + 37.5));
        assert!(path.is_closed());
    }

    #[test]
    fn wedge_picks_the_dominant_side() {
        let below = build(ShapeKind::WedgeRectCallout, 100.0, 100.0, &[]);
        insta::assert_snapshot!(below.to_path_string(), @"M0,0 L16.6667,0 L16.6667,0 L41.6667,0 L100,0 L100,58.3333 L100,58.3333 L100,83.3333 L100,100 L41.6667,100 L29.167,112.5 L16.6667,100 L0,100 L0,83.3333 L0,58.3333 L0,58.3333 Z");

        let right = build(
            ShapeKind::WedgeRectCallout,
            100.0,
            100.0,
            &[RawGuide::val("adj1", 80000), RawGuide::val("adj2", 0)],
        );
        assert!(has_point(&right, 130.0, 50.0));
    }

    #[test]
    fn round_wedge_rounds_all_corners() {
        let path = build(ShapeKind::WedgeRoundRectCallout, 100.0, 100.0, &[]);
        let arcs = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count();
        assert_eq!(arcs, 4);
    }

    #[test]
    fn wedge_ellipse_reaches_the_tip() {
        let path = build(ShapeKind::WedgeEllipseCallout, 100.0, 100.0, &[]);
        assert!(has_point(&path, 50.0 - 20.833, 112.5));
        assert!(path.is_closed());
    }

    #[test]
    fn cloud_is_one_closed_lobed_outline() {
        let path = build(ShapeKind::Cloud, 432.0, 432.0, &[]);
        assert_eq!(path.subpath_count(), 1);
        assert!(path.is_closed());
        let start = path.start_point().unwrap();
        assert!((start.x - 39.0).abs() < 1e-9 && (start.y - 143.7).abs() < 1e-9);
    }

    #[test]
    fn cloud_callout_adds_three_bubbles() {
        let path = build(ShapeKind::CloudCallout, 200.0, 100.0, &[]);
        assert_eq!(path.subpath_count(), 4);
        assert!(path.is_finite());
    }

    #[test]
    fn callout_leaders_are_open_polylines() {
        let path = build(ShapeKind::Callout1, 100.0, 100.0, &[]);
        assert_eq!(path.subpath_count(), 2);
        assert!(path.has_open_subpath());
        assert!(has_point(&path, -8.333, 18.75));
        assert!(has_point(&path, -38.333, 112.5));

        let three = build(ShapeKind::BorderCallout3, 100.0, 100.0, &[]);
        assert_eq!(three.vertices().len(), 4 + 4);
    }

    #[test]
    fn accent_callouts_add_a_bar() {
        let path = build(ShapeKind::AccentCallout2, 100.0, 100.0, &[]);
        assert_eq!(path.subpath_count(), 3);
        assert!(has_point(&path, -8.333, 0.0));
        assert!(has_point(&path, -8.333, 100.0));
    }
}
