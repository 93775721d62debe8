//! Lines and connectors. All of these are open paths from the top-left to
//! the bottom-right corner (the inverted line runs bottom-left to top-right).

use super::{Frame, Preset};
use crate::geom::{Path, PathBuilder};

pub(super) const LINE: Preset = preset!(line);
pub(super) const LINE_INV: Preset = preset!(line_inv);
pub(super) const BENT_CONNECTOR2: Preset = preset!(bent_connector2);
pub(super) const BENT_CONNECTOR3: Preset = preset!(bent_connector3, "adj1" = 50000);
pub(super) const BENT_CONNECTOR4: Preset = preset!(bent_connector4, "adj1" = 50000, "adj2" = 50000);
pub(super) const BENT_CONNECTOR5: Preset =
    preset!(bent_connector5, "adj1" = 50000, "adj2" = 50000, "adj3" = 50000);
pub(super) const CURVED_CONNECTOR2: Preset = preset!(curved_connector2);
pub(super) const CURVED_CONNECTOR3: Preset = preset!(curved_connector3, "adj1" = 50000);
pub(super) const CURVED_CONNECTOR4: Preset =
    preset!(curved_connector4, "adj1" = 50000, "adj2" = 50000);
pub(super) const CURVED_CONNECTOR5: Preset =
    preset!(curved_connector5, "adj1" = 50000, "adj2" = 50000, "adj3" = 50000);

fn open(points: &[(f64, f64)]) -> Path {
    let mut p = PathBuilder::new();
    p.polyline(points);
    p.build()
}

fn line(f: &Frame) -> Path {
    open(&[(0.0, 0.0), (f.w, f.h)])
}

fn line_inv(f: &Frame) -> Path {
    open(&[(0.0, f.h), (f.w, 0.0)])
}

fn bent_connector2(f: &Frame) -> Path {
    open(&[(0.0, 0.0), (f.w, 0.0), (f.w, f.h)])
}

// Connector guides are not pinned: elbows may sit outside the box.

fn bent_connector3(f: &Frame) -> Path {
    let x1 = f.of_w(f.adj("adj1"));
    open(&[(0.0, 0.0), (x1, 0.0), (x1, f.h), (f.w, f.h)])
}

fn bent_connector4(f: &Frame) -> Path {
    let x1 = f.of_w(f.adj("adj1"));
    let y2 = f.of_h(f.adj("adj2"));
    open(&[(0.0, 0.0), (x1, 0.0), (x1, y2), (f.w, y2), (f.w, f.h)])
}

fn bent_connector5(f: &Frame) -> Path {
    let x1 = f.of_w(f.adj("adj1"));
    let y2 = f.of_h(f.adj("adj2"));
    let x3 = f.of_w(f.adj("adj3"));
    open(&[
        (0.0, 0.0),
        (x1, 0.0),
        (x1, y2),
        (x3, y2),
        (x3, f.h),
        (f.w, f.h),
    ])
}

fn curved_connector2(f: &Frame) -> Path {
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .cubic_to(f.wd2(), 0.0, f.w, f.hd2(), f.w, f.h);
    p.build()
}

fn curved_connector3(f: &Frame) -> Path {
    let x2 = f.of_w(f.adj("adj1"));
    let x1 = x2 / 2.0;
    let x3 = (f.w + x2) / 2.0;
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .cubic_to(x1, 0.0, x2, f.h / 4.0, x2, f.vc())
        .cubic_to(x2, f.h * 3.0 / 4.0, x3, f.h, f.w, f.h);
    p.build()
}

fn curved_connector4(f: &Frame) -> Path {
    let x2 = f.of_w(f.adj("adj1"));
    let x1 = x2 / 2.0;
    let x3 = (f.w + x2) / 2.0;
    let x4 = (x2 + x3) / 2.0;
    let x5 = (x3 + f.w) / 2.0;
    let y4 = f.of_h(f.adj("adj2"));
    let y1 = y4 / 2.0;
    let y2 = y1 / 2.0;
    let y3 = (y1 + y4) / 2.0;
    let y5 = (f.h + y4) / 2.0;
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .cubic_to(x1, 0.0, x2, y2, x2, y1)
        .cubic_to(x2, y3, x4, y4, x3, y4)
        .cubic_to(x5, y4, f.w, y5, f.w, f.h);
    p.build()
}

fn curved_connector5(f: &Frame) -> Path {
    let x3 = f.of_w(f.adj("adj1"));
    let x6 = f.of_w(f.adj("adj3"));
    let x1 = (x3 + x6) / 2.0;
    let x2 = x3 / 2.0;
    let x4 = (x3 + x1) / 2.0;
    let x5 = (x6 + x1) / 2.0;
    let x7 = (x6 + f.w) / 2.0;
    let y4 = f.of_h(f.adj("adj2"));
    let y1 = y4 / 2.0;
    let y2 = y1 / 2.0;
    let y3 = (y1 + y4) / 2.0;
    let y5 = (f.h + y4) / 2.0;
    let y6 = (y5 + y4) / 2.0;
    let y7 = (y5 + f.h) / 2.0;
    let mut p = PathBuilder::new();
    p.move_to(0.0, 0.0)
        .cubic_to(x2, 0.0, x3, y2, x3, y1)
        .cubic_to(x3, y3, x4, y4, x1, y4)
        .cubic_to(x5, y4, x6, y6, x6, y5)
        .cubic_to(x6, y7, x7, f.h, f.w, f.h);
    p.build()
}
